// Shared services
pub mod api_service;
pub mod search_history;

pub use api_service::{normalize_payload, ApiService, HttpClient, PlatformHttpClient};
#[cfg(target_arch = "wasm32")]
pub use api_service::ReqwasmClient;
#[cfg(not(target_arch = "wasm32"))]
pub use api_service::ReqwestClient;
pub use search_history::SearchHistoryLoader;
