pub mod order_category;

pub use order_category::OrderCategory;
