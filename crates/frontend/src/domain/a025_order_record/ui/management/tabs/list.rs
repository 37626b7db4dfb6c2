use contracts::shared::config::ScreenConfig;
use leptos::prelude::*;

/// Вкладка «список» — пока только заглушка
#[component]
pub fn ListTab() -> impl IntoView {
    let config = use_context::<ScreenConfig>().expect("ScreenConfig context not found");

    view! {
        <div class="order-management__pane">
            <div class="order-management__placeholder">
                {config.screen.list_placeholder.clone()}
            </div>
        </div>
    }
}
