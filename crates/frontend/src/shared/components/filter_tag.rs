use crate::shared::icons::icon;
use leptos::prelude::*;

/// Чип активного фильтра с кнопкой удаления
#[component]
pub fn FilterTag(
    /// Подпись
    #[prop(into)]
    label: String,

    /// Нажатие на крестик
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                type="button"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
