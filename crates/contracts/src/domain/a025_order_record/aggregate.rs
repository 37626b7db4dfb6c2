use crate::enums::OrderCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Запись заказа (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Уникальный идентификатор
    pub id: String,
    /// Отображаемое название
    pub name: String,
    /// Тип заказа
    #[serde(rename = "type")]
    pub category: OrderCategory,
    /// Контакт (свободный текст)
    pub contact: String,
}

impl OrderRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: OrderCategory,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            contact: contact.into(),
        }
    }

    /// Текстовый тест: название или код типа содержит `folded_needle`.
    ///
    /// `folded_needle` уже в нижнем регистре: приведение делается один раз
    /// на весь проход фильтра.
    pub fn matches_search(&self, folded_needle: &str) -> bool {
        self.name.to_lowercase().contains(folded_needle)
            || self.category.code().to_lowercase().contains(folded_needle)
    }

    /// Тест по типам: пустое множество — без ограничения
    pub fn matches_categories(&self, selected: &BTreeSet<OrderCategory>) -> bool {
        selected.is_empty() || selected.contains(&self.category)
    }
}
