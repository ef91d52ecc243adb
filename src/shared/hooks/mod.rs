// Custom Dioxus hooks
pub mod use_mount_scope;
pub mod use_search_history;

pub use use_mount_scope::{use_mount_scope, MountScope};
pub use use_search_history::{use_search_history, use_search_history_with};
