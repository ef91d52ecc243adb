// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod identity;
pub mod layout;
pub mod search;
pub mod view_state;

pub use identity::Identity;
pub use layout::{HistoryContent, HistoryLayout, HistoryRow};
pub use search::SearchRecord;
pub use view_state::{LoadOutcome, ViewState};
