//! Scripted in-memory API for unit tests

use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::gmail::{ApiResponse, MailApi};
use crate::models::MessageId;

/// A recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Profile,
    List { query: String, page_token: Option<String> },
    Delete { ids: Vec<String> },
    Modify { ids: Vec<String>, add: Vec<String>, remove: Vec<String> },
}

/// Scripted response: `Err` simulates a transport failure
pub(crate) type Scripted = std::result::Result<ApiResponse, String>;

/// Replays queued responses per endpoint and records every call
///
/// Empty queues fall back to success (`200` profile, `204` mutations);
/// an unscripted search page is a transport error.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    pub profile: RefCell<VecDeque<Scripted>>,
    pub pages: RefCell<VecDeque<Scripted>>,
    pub deletes: RefCell<VecDeque<Scripted>>,
    pub modifies: RefCell<VecDeque<Scripted>>,
    pub calls: RefCell<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, ids: &[&str], next_page_token: Option<&str>) -> Self {
        self.pages
            .borrow_mut()
            .push_back(Ok(page_response(ids, next_page_token)));
        self
    }

    pub fn with_delete(self, response: Scripted) -> Self {
        self.deletes.borrow_mut().push_back(response);
        self
    }

    pub fn with_modify(self, response: Scripted) -> Self {
        self.modifies.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next(
        queue: &RefCell<VecDeque<Scripted>>,
        default: Option<ApiResponse>,
    ) -> Result<ApiResponse> {
        match queue.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow!(message)),
            None => default.ok_or_else(|| anyhow!("no scripted response")),
        }
    }
}

impl MailApi for ScriptedApi {
    fn get_profile(&self) -> Result<ApiResponse> {
        self.calls.borrow_mut().push(Call::Profile);
        Self::next(
            &self.profile,
            Some(ApiResponse::new(200, r#"{"emailAddress":"me@example.com"}"#)),
        )
    }

    fn list_messages(
        &self,
        query: &str,
        _page_size: usize,
        page_token: Option<&str>,
    ) -> Result<ApiResponse> {
        self.calls.borrow_mut().push(Call::List {
            query: query.to_string(),
            page_token: page_token.map(str::to_string),
        });
        Self::next(&self.pages, None)
    }

    fn batch_delete(&self, ids: &[MessageId]) -> Result<ApiResponse> {
        self.calls.borrow_mut().push(Call::Delete {
            ids: ids.iter().map(|id| id.as_str().to_string()).collect(),
        });
        Self::next(&self.deletes, Some(ApiResponse::new(204, "")))
    }

    fn batch_modify(
        &self,
        ids: &[MessageId],
        add_label_ids: &[&str],
        remove_label_ids: &[&str],
    ) -> Result<ApiResponse> {
        self.calls.borrow_mut().push(Call::Modify {
            ids: ids.iter().map(|id| id.as_str().to_string()).collect(),
            add: add_label_ids.iter().map(|s| s.to_string()).collect(),
            remove: remove_label_ids.iter().map(|s| s.to_string()).collect(),
        });
        Self::next(&self.modifies, Some(ApiResponse::new(204, "")))
    }
}

/// JSON body of one search page
pub(crate) fn page_response(ids: &[&str], next_page_token: Option<&str>) -> ApiResponse {
    let messages: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({ "id": id, "threadId": format!("t-{}", id) }))
        .collect();
    let mut body = serde_json::json!({ "resultSizeEstimate": ids.len() });
    if !messages.is_empty() {
        body["messages"] = serde_json::Value::Array(messages);
    }
    if let Some(token) = next_page_token {
        body["nextPageToken"] = serde_json::Value::String(token.to_string());
    }
    ApiResponse::new(200, body.to_string())
}

/// `n` sequential message ids: "m0", "m1", ...
pub(crate) fn message_ids(n: usize) -> Vec<MessageId> {
    (0..n).map(|i| MessageId::new(format!("m{}", i))).collect()
}

/// A 403 with Google's insufficient-scope envelope
pub(crate) fn scope_denied() -> ApiResponse {
    ApiResponse::new(
        403,
        r#"{"error":{"code":403,"message":"Request had insufficient authentication scopes.","errors":[{"message":"Insufficient Permission","domain":"global","reason":"insufficientPermissions"}],"status":"PERMISSION_DENIED"}}"#,
    )
}
