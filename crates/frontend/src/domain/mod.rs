pub mod a025_order_record;
