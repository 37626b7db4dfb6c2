pub mod checkbox;
pub mod input;

pub use checkbox::Checkbox;
pub use input::Input;
