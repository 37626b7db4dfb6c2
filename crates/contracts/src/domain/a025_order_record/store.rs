use super::aggregate::OrderRecord;
use crate::enums::OrderCategory;
use once_cell::sync::Lazy;

static SAMPLE_ORDERS: Lazy<Vec<OrderRecord>> = Lazy::new(|| {
    vec![
        OrderRecord::new("001", "整数001", OrderCategory::Aaaa, "10887388928"),
        OrderRecord::new("002", "整数002", OrderCategory::Bbbb, "10887388928"),
        OrderRecord::new("003", "整数003", OrderCategory::Cccc, "10887388928"),
        OrderRecord::new("004", "整数004", OrderCategory::Dddd, "10887388928"),
    ]
});

/// Встроенный набор заказов в исходном порядке
pub fn sample_orders() -> &'static [OrderRecord] {
    &SAMPLE_ORDERS
}

/// Допустимые типы для фильтра
pub fn category_options() -> [OrderCategory; 4] {
    OrderCategory::all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_orders_shape() {
        let orders = sample_orders();
        assert_eq!(orders.len(), 4);
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["001", "002", "003", "004"]);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let ids: HashSet<&str> = sample_orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), sample_orders().len());
    }

    #[test]
    fn test_every_option_has_a_sample_row() {
        for category in category_options() {
            assert!(sample_orders().iter().any(|o| o.category == category));
        }
    }
}
