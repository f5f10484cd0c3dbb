//! Fatal error kinds for the purge pipeline
//!
//! These travel inside `anyhow::Error` and can be recovered with
//! `downcast_ref::<PurgeError>()`.

/// Conditions that abort a run before any batch work begins
#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    #[error("Invalid sender address: {0:?}")]
    InvalidSender(String),

    #[error("Access token rejected (HTTP {status}): {message}\nResponse body: {body}")]
    InvalidCredential {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Message search failed (HTTP {status}): {message}\nResponse body: {body}")]
    SearchFailed {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Malformed API response: {context}")]
    MalformedResponse { context: String },

    #[error("Pagination limit exceeded: more than {max_pages} pages of search results")]
    PaginationLimitExceeded { max_pages: usize },
}
