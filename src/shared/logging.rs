//! Structured logging for the past searches screen
//!
//! One function per logged event, each tagged with the phase of the load
//! sequence it belongs to. These traces are developer-facing only; the
//! screen itself shows a single fixed message on failure.

use crate::shared::errors::HistoryError;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CredentialRead,
    TokenDecode,
    HistoryFetch,
    PayloadNormalize,
    ViewLifecycle,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CredentialRead => "credential_read",
            LogOperation::TokenDecode => "token_decode",
            LogOperation::HistoryFetch => "history_fetch",
            LogOperation::PayloadNormalize => "payload_normalize",
            LogOperation::ViewLifecycle => "view_lifecycle",
        }
    }
}

/// Log that no credential is stored (not an error)
pub fn log_no_credential(key: &str) {
    tracing::info!(
        operation = LogOperation::CredentialRead.as_str(),
        key = key,
        "No credential stored, skipping history fetch"
    );
}

/// Log a decoded identity
pub fn log_identity_decoded(user_id: &str) {
    tracing::debug!(
        operation = LogOperation::TokenDecode.as_str(),
        user_id = user_id,
        "Credential decoded"
    );
}

/// Log the outbound request
pub fn log_fetch_start(url: &str) {
    tracing::debug!(
        operation = LogOperation::HistoryFetch.as_str(),
        url = url,
        "Requesting past searches"
    );
}

/// Log a successful fetch
pub fn log_fetch_success(record_count: usize) {
    tracing::info!(
        operation = LogOperation::HistoryFetch.as_str(),
        record_count = record_count,
        "Past searches loaded"
    );
}

/// Log a payload that had to be normalized to an empty list
pub fn log_payload_normalized(reason: &str) {
    tracing::warn!(
        operation = LogOperation::PayloadNormalize.as_str(),
        reason = reason,
        "Unexpected history payload, showing empty list"
    );
}

/// Log a failed load, keeping the concrete cause the user never sees
pub fn log_load_error(error: &HistoryError) {
    let operation = match error {
        HistoryError::Decode(_) => LogOperation::TokenDecode,
        HistoryError::Storage(_) => LogOperation::CredentialRead,
        HistoryError::Fetch(_) => LogOperation::HistoryFetch,
    };
    tracing::error!(
        operation = operation.as_str(),
        error = %error,
        "Failed to load search history"
    );
}

/// Log a result dropped because the view was torn down first
pub fn log_result_discarded() {
    tracing::debug!(
        operation = LogOperation::ViewLifecycle.as_str(),
        "View unmounted before load settled, result discarded"
    );
}
