mod page;
mod tabs;
pub mod view_model;

pub use page::OrderManagement;
pub use view_model::OrderManagementVm;
