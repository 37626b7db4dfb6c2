use crate::domain::a025_order_record::ui::management::OrderManagement;
use contracts::shared::config::ScreenConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: ScreenConfig) -> impl IntoView {
    // Подписи экрана читаются компонентами из контекста
    provide_context(config);

    view! {
        <OrderManagement />
    }
}
