//! Sender filter used to build the search query

use crate::error::PurgeError;

/// The single sender address whose messages are purged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderFilter(String);

impl SenderFilter {
    /// Create a filter from a raw address
    ///
    /// Surrounding whitespace is trimmed. An empty address, or one with
    /// inner whitespace, would widen the search beyond a single sender and
    /// is rejected.
    pub fn new(sender: &str) -> Result<Self, PurgeError> {
        let sender = sender.trim();
        if sender.is_empty() || sender.chars().any(char::is_whitespace) {
            return Err(PurgeError::InvalidSender(sender.to_string()));
        }
        Ok(Self(sender.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Search query selecting every message from this sender
    pub fn query(&self) -> String {
        format!("from:{}", self.0)
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
