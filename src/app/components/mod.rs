pub mod common;
pub mod history_table;

pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use history_table::HistoryTable;
