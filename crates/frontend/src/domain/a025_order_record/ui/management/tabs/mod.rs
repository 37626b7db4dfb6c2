mod list;
mod statistics;

pub use list::ListTab;
pub use statistics::StatisticsTab;
