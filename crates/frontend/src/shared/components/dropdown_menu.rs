//! Всплывающее меню, привязанное к кнопке-триггеру.
//!
//! Компонент не хранит флаг открытия: вызывающий передаёт `open` и получает
//! каждое событие через `on_event`, а переход считает `MenuState::apply`.
//! Поэтому состояние фильтров живёт снаружи и переживает открытие/закрытие.
//!
//! ```text
//! триггер ──клик──▶ MenuEvent::TriggerActivated
//! подложка ─клик──▶ MenuEvent::OutsideInteraction
//! Escape ─────────▶ MenuEvent::Escape   (только пока открыто)
//! ```

use contracts::domain::a025_order_record::MenuEvent;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn DropdownMenu<T>(
    /// Показано ли меню
    #[prop(into)]
    open: Signal<bool>,
    /// События меню для автомата состояний
    on_event: Callback<MenuEvent>,
    /// Содержимое кнопки-триггера
    trigger: T,
    /// Подпись кнопки для скринридеров
    #[prop(optional, into)]
    trigger_label: MaybeProp<String>,
    /// Дополнительные CSS-классы содержимого
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Содержимое меню
    children: ChildrenFn,
) -> impl IntoView
where
    T: Fn() -> AnyView + 'static + Send,
{
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" && open.get_untracked() {
            on_event.run(MenuEvent::Escape);
        }
    });
    on_cleanup(move || handle.remove());

    let toggle = move |event: ev::MouseEvent| {
        event.stop_propagation();
        on_event.run(MenuEvent::TriggerActivated);
    };

    let content_class = move || {
        format!(
            "dropdown-menu__content {}",
            class.get().unwrap_or_default()
        )
    };

    view! {
        <span class="dropdown-menu">
            <button
                type="button"
                class="dropdown-menu__trigger"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                aria-label=move || trigger_label.get().unwrap_or_default()
                on:click=toggle
            >
                {trigger()}
            </button>
            <Show when=move || open.get()>
                <div
                    class="dropdown-menu__backdrop"
                    on:click=move |_| on_event.run(MenuEvent::OutsideInteraction)
                ></div>
                <div class=content_class role="menu">
                    {children()}
                </div>
            </Show>
        </span>
    }
}
