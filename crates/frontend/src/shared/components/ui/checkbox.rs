use leptos::prelude::*;

/// Чекбокс с подписью
#[component]
pub fn Checkbox(
    /// Текст подписи
    #[prop(into)]
    label: Signal<String>,
    /// Отмечен ли
    #[prop(into)]
    checked: Signal<bool>,
    /// Обработчик изменения, получает новое значение
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID элемента input (связывает подпись)
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
