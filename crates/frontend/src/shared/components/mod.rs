pub mod dropdown_menu;
pub mod filter_tag;
pub mod ui;

pub use dropdown_menu::DropdownMenu;
pub use filter_tag::FilterTag;
