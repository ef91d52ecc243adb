pub mod errors;
pub mod logging;
pub mod services;
pub mod storage;
pub mod token;

// Dioxus hooks (web + desktop)
pub mod hooks;
