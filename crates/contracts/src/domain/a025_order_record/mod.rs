//! a025 — заказы экрана «Управление заказами»
//!
//! Неизменяемые записи, встроенный набор данных, фильтр и состояние экрана.
//! Всё здесь чистое: без DOM, без сигналов, тестируется на нативной платформе.

pub mod aggregate;
pub mod filter;
pub mod menu;
pub mod state;
pub mod store;

pub use aggregate::OrderRecord;
pub use filter::filter_orders;
pub use menu::{MenuEvent, MenuState};
pub use state::{OrderFilterState, OrderTab};
pub use store::{category_options, sample_orders};
