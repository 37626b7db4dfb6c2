use super::aggregate::OrderRecord;
use super::filter::filter_orders;
use super::menu::{MenuEvent, MenuState};
use crate::enums::OrderCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Вкладки экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderTab {
    #[default]
    Statistics,
    List,
}

impl OrderTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderTab::Statistics => "statistics",
            OrderTab::List => "list",
        }
    }
}

/// Состояние экрана «Управление заказами».
///
/// Владелец — контроллер представления; видимые строки всегда выводятся
/// заново из этого состояния через [`OrderFilterState::visible_orders`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderFilterState {
    pub search_text: String,
    pub selected_categories: BTreeSet<OrderCategory>,
    pub menu: MenuState,
    pub active_tab: OrderTab,
}

impl OrderFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменить строку поиска как есть (без обрезки пробелов)
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: OrderCategory, checked: bool) {
        if checked {
            self.selected_categories.insert(category);
        } else {
            self.selected_categories.remove(&category);
        }
    }

    pub fn is_category_selected(&self, category: OrderCategory) -> bool {
        self.selected_categories.contains(&category)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn apply_menu_event(&mut self, event: MenuEvent) {
        self.menu = self.menu.apply(event);
    }

    pub fn select_tab(&mut self, tab: OrderTab) {
        self.active_tab = tab;
    }

    /// Количество активных фильтров (для бейджа)
    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!self.search_text.is_empty());
        self.selected_categories.len() + search
    }

    /// Видимые записи для текущего состояния
    pub fn visible_orders(&self, records: &[OrderRecord]) -> Vec<OrderRecord> {
        filter_orders(records, &self.search_text, &self.selected_categories)
    }
}
