//! ViewModel экрана «Управление заказами»
//!
//! Владеет единственным `RwSignal<OrderFilterState>`; каждое событие UI
//! проходит через один из методов ниже. Видимые строки — производный сигнал,
//! пересчитываются из состояния при каждом чтении.

use contracts::domain::a025_order_record::{
    sample_orders, MenuEvent, OrderFilterState, OrderRecord, OrderTab,
};
use contracts::enums::OrderCategory;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OrderManagementVm {
    pub state: RwSignal<OrderFilterState>,
}

impl OrderManagementVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(OrderFilterState::new()),
        }
    }

    pub fn search_text(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_text.clone()))
    }

    pub fn category_selected(&self, category: OrderCategory) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_category_selected(category)))
    }

    /// Выбранные типы в порядке справочника (для чипов)
    pub fn selected_categories(&self) -> Signal<Vec<OrderCategory>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selected_categories.iter().copied().collect()))
    }

    pub fn menu_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_menu_open()))
    }

    pub fn active_tab(&self) -> Signal<OrderTab> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active_tab))
    }

    pub fn active_filter_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active_filter_count()))
    }

    pub fn visible_orders(&self) -> Signal<Vec<OrderRecord>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.visible_orders(sample_orders())))
    }

    pub fn set_search_text(&self, text: String) {
        log::debug!("a025: search text -> {:?}", text);
        self.state.update(|s| s.set_search_text(text));
    }

    pub fn set_category(&self, category: OrderCategory, checked: bool) {
        log::debug!("a025: category {} -> {}", category, checked);
        self.state.update(|s| s.set_category(category, checked));
    }

    /// Событие меню фильтра; переход считает `MenuState::apply`
    pub fn menu_event(&self, event: MenuEvent) {
        let before = self.state.with_untracked(|s| s.menu);
        if before.apply(event) == before {
            return;
        }
        log::debug!("a025: category filter menu {:?} on {:?}", before, event);
        self.state.update(|s| s.apply_menu_event(event));
    }

    pub fn select_tab(&self, tab: OrderTab) {
        log::debug!("a025: tab -> {}", tab.as_str());
        self.state.update(|s| s.select_tab(tab));
    }
}

impl Default for OrderManagementVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Подпись «показано N из M»
pub fn shown_count_label(shown: usize, total: usize) -> String {
    format!("{} / {}", shown, total)
}
