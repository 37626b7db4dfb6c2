//! Фильтр списка заказов.
//!
//! Запись попадает в результат, если проходит оба теста:
//! - текстовый: название или код типа содержит строку поиска без учёта регистра;
//! - по типам: множество выбранных типов пусто или содержит тип записи.
//!
//! Строка поиска не обрезается: пробелы значимы. Порядок входа сохраняется.

use super::aggregate::OrderRecord;
use crate::enums::OrderCategory;
use std::collections::BTreeSet;

/// Отфильтровать записи; вход не изменяется.
pub fn filter_orders(
    records: &[OrderRecord],
    search_text: &str,
    selected: &BTreeSet<OrderCategory>,
) -> Vec<OrderRecord> {
    let needle = search_text.to_lowercase();

    records
        .iter()
        .filter(|record| record.matches_search(&needle) && record.matches_categories(selected))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_order_record::store::sample_orders;
    use proptest::prelude::*;

    fn ids(records: &[OrderRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn is_subsequence(sub: &[OrderRecord], full: &[OrderRecord]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|item| rest.any(|candidate| candidate == item))
    }

    #[test]
    fn test_empty_filter_returns_all_rows_in_order() {
        let result = filter_orders(sample_orders(), "", &BTreeSet::new());
        assert_eq!(result, sample_orders().to_vec());
    }

    #[test]
    fn test_search_by_category_code() {
        let result = filter_orders(sample_orders(), "BBBB", &BTreeSet::new());
        assert_eq!(ids(&result), vec!["002"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let result = filter_orders(sample_orders(), "cCcC", &BTreeSet::new());
        assert_eq!(ids(&result), vec!["003"]);
    }

    #[test]
    fn test_search_by_name_substring() {
        let result = filter_orders(sample_orders(), "整数00", &BTreeSet::new());
        assert_eq!(result.len(), 4);

        let result = filter_orders(sample_orders(), "004", &BTreeSet::new());
        assert_eq!(ids(&result), vec!["004"]);
    }

    #[test]
    fn test_category_selection_keeps_original_order() {
        let selected = BTreeSet::from([OrderCategory::Cccc, OrderCategory::Aaaa]);
        let result = filter_orders(sample_orders(), "", &selected);
        assert_eq!(ids(&result), vec!["001", "003"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let result = filter_orders(sample_orders(), "zzz", &BTreeSet::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let result = filter_orders(sample_orders(), " BBBB", &BTreeSet::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_text_and_categories_are_combined() {
        let selected = BTreeSet::from([OrderCategory::Aaaa]);
        assert!(filter_orders(sample_orders(), "BBBB", &selected).is_empty());
        assert_eq!(
            ids(&filter_orders(sample_orders(), "001", &selected)),
            vec!["001"]
        );
    }

    #[test]
    fn test_input_is_untouched() {
        let records = sample_orders().to_vec();
        let before = records.clone();
        let _ = filter_orders(&records, "AAAA", &BTreeSet::from([OrderCategory::Aaaa]));
        assert_eq!(records, before);
    }

    fn category_strategy() -> impl Strategy<Value = OrderCategory> {
        proptest::sample::select(OrderCategory::all().to_vec())
    }

    fn record_strategy() -> impl Strategy<Value = OrderRecord> {
        ("[0-9]{3}", "[a-dA-D0-9 ]{0,8}", category_strategy(), "[0-9]{0,11}").prop_map(
            |(id, name, category, contact)| OrderRecord::new(id, name, category, contact),
        )
    }

    fn records_strategy() -> impl Strategy<Value = Vec<OrderRecord>> {
        proptest::collection::vec(record_strategy(), 0..16)
    }

    fn selection_strategy() -> impl Strategy<Value = BTreeSet<OrderCategory>> {
        proptest::collection::vec(any::<bool>(), 4).prop_map(|mask| {
            OrderCategory::all()
                .into_iter()
                .zip(mask)
                .filter_map(|(category, keep)| keep.then_some(category))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn identity_without_filters(records in records_strategy()) {
            prop_assert_eq!(filter_orders(&records, "", &BTreeSet::new()), records);
        }

        #[test]
        fn text_filter_is_sound_and_complete(
            records in records_strategy(),
            search in "[a-dA-D0-9 ]{0,3}",
        ) {
            let needle = search.to_lowercase();
            let result = filter_orders(&records, &search, &BTreeSet::new());
            let expected: Vec<OrderRecord> = records
                .iter()
                .filter(|r| {
                    r.name.to_lowercase().contains(&needle)
                        || r.category.code().to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn category_filter_only_narrows(
            records in records_strategy(),
            search in "[a-dA-D0-9 ]{0,3}",
            selected in selection_strategy(),
        ) {
            let narrowed = filter_orders(&records, &search, &selected);
            let unrestricted = filter_orders(&records, &search, &BTreeSet::new());
            prop_assert!(is_subsequence(&narrowed, &unrestricted));
            for record in &narrowed {
                prop_assert!(selected.is_empty() || selected.contains(&record.category));
            }
        }

        #[test]
        fn filter_is_idempotent(
            records in records_strategy(),
            search in "[a-dA-D0-9 ]{0,3}",
            selected in selection_strategy(),
        ) {
            let once = filter_orders(&records, &search, &selected);
            let twice = filter_orders(&once, &search, &selected);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_preserves_input_order(
            records in records_strategy(),
            search in "[a-dA-D0-9 ]{0,3}",
            selected in selection_strategy(),
        ) {
            let result = filter_orders(&records, &search, &selected);
            prop_assert!(is_subsequence(&result, &records));
        }
    }
}
