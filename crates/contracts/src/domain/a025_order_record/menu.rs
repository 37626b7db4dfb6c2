use serde::{Deserialize, Serialize};

/// Состояние всплывающего меню фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Событие, влияющее на меню
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Нажатие на кнопку-триггер
    TriggerActivated,
    /// Клик вне содержимого меню
    OutsideInteraction,
    /// Клавиша Escape
    Escape,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Переход автомата. Нет терминального состояния.
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::TriggerActivated) => MenuState::Open,
            (MenuState::Open, MenuEvent::TriggerActivated)
            | (MenuState::Open, MenuEvent::OutsideInteraction)
            | (MenuState::Open, MenuEvent::Escape) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }
}
