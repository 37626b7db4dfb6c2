use crate::shared::icons::icon;
use leptos::prelude::*;

/// Текстовое поле с необязательной иконкой слева
#[component]
pub fn Input(
    /// Значение поля
    #[prop(into)]
    value: Signal<String>,
    /// Обработчик ввода — на каждое нажатие клавиши
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Текст-подсказка
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Имя иконки из `shared::icons`
    #[prop(optional)]
    leading_icon: Option<&'static str>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_class = if leading_icon.is_some() {
        "form__input form__input--with-icon"
    } else {
        "form__input"
    };

    view! {
        <div class="form__group form__group--inline">
            {leading_icon.map(|name| view! {
                <span class="form__input-icon">{icon(name)}</span>
            })}
            <input
                class=input_class
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
