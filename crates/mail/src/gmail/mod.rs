//! Gmail API integration
//!
//! This module provides:
//! - Wire types for the four endpoints the purge uses
//! - The [`MailApi`] trait, the seam between the pipeline and HTTP
//! - [`GmailClient`], the blocking `ureq` implementation

mod client;
mod response;

pub use client::GmailClient;
pub use response::{ApiResponse, is_permission_denied};

use anyhow::Result;

use crate::models::MessageId;

/// Label IDs used by Gmail for the trash operation
pub mod labels {
    pub const INBOX: &str = "INBOX";
    pub const TRASH: &str = "TRASH";
}

/// Mailbox operations needed by the purge pipeline
///
/// Every method returns the raw status and body of a completed HTTP
/// exchange. `Err` is reserved for transport failures (connect errors,
/// timeouts) where no status was received.
pub trait MailApi {
    /// Fetch the authenticated user's profile
    fn get_profile(&self) -> Result<ApiResponse>;

    /// Fetch one page of message references matching `query`
    fn list_messages(
        &self,
        query: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<ApiResponse>;

    /// Permanently delete the given messages
    fn batch_delete(&self, ids: &[MessageId]) -> Result<ApiResponse>;

    /// Add and remove labels on the given messages
    fn batch_modify(
        &self,
        ids: &[MessageId],
        add_label_ids: &[&str],
        remove_label_ids: &[&str],
    ) -> Result<ApiResponse>;
}

/// Gmail API request and response types
pub mod api {
    use serde::{Deserialize, Serialize};

    use crate::models::MessageId;

    /// Response from listing messages
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ListMessagesResponse {
        pub messages: Option<Vec<MessageRef>>,
        pub next_page_token: Option<String>,
        pub result_size_estimate: Option<u32>,
    }

    /// Reference to a message (just ID and thread ID)
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MessageRef {
        pub id: String,
        #[serde(default)]
        pub thread_id: Option<String>,
    }

    /// Response from the profile endpoint
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProfileResponse {
        pub email_address: String,
        pub messages_total: Option<u64>,
        pub threads_total: Option<u64>,
        pub history_id: Option<String>,
    }

    /// Body of `messages/batchDelete`
    #[derive(Debug, Serialize)]
    pub struct BatchDeleteRequest<'a> {
        pub ids: &'a [MessageId],
    }

    /// Body of `messages/batchModify`
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BatchModifyRequest<'a> {
        pub ids: &'a [MessageId],
        pub add_label_ids: &'a [&'a str],
        pub remove_label_ids: &'a [&'a str],
    }

    /// Google's JSON error envelope
    #[derive(Debug, Deserialize)]
    pub struct ApiErrorResponse {
        pub error: ApiError,
    }

    #[derive(Debug, Deserialize)]
    pub struct ApiError {
        pub code: Option<u16>,
        pub message: Option<String>,
        pub status: Option<String>,
        #[serde(default)]
        pub errors: Vec<ApiErrorDetail>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ApiErrorDetail {
        pub reason: Option<String>,
        pub message: Option<String>,
        pub domain: Option<String>,
    }
}
