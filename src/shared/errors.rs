use thiserror::Error;

/// The only failure text the screen ever shows
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load search history";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TokenError {
    #[error("Token has no payload segment")]
    MissingPayload,

    #[error("Token payload is not valid base64url: {0}")]
    InvalidEncoding(String),

    #[error("Token claims are invalid: {0}")]
    InvalidClaims(String),

    #[error("Token payload has no user id")]
    MissingUserId,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Persistent storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read error: {0}")]
    ReadError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("Response body is not valid JSON: {0}")]
    Body(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    #[error("Decode error: {0}")]
    Decode(#[from] TokenError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

impl HistoryError {
    /// Every variant collapses to the same text on screen
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
