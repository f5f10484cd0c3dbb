//! Message identifier model

use serde::{Deserialize, Serialize};

/// Unique identifier for a message (Gmail message ID)
///
/// Opaque to the client; only ever echoed back to the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_string() {
        let ids = vec![MessageId::new("18c1"), MessageId::new("18c2")];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"["18c1","18c2"]"#);
    }
}
