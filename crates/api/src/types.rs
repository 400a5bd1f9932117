//! Typed Slack Web API response payloads.
//!
//! Only the fields the bot reads are modeled; everything else in the
//! platform envelopes is ignored on deserialization.

use serde::Deserialize;

/// Cursor container returned by paginated list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    /// Empty string means the final page.
    #[serde(default)]
    pub next_cursor: String,
}

/// A conversation as returned by `users.conversations`.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
}

/// Topic/purpose wrapper used by `conversations.info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationNote {
    #[serde(default)]
    pub value: String,
}

/// Full channel record from `conversations.info` with member counts.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub topic: ConversationNote,
    #[serde(default)]
    pub purpose: ConversationNote,
    #[serde(default)]
    pub num_members: u64,
}

#[derive(Debug, Deserialize)]
pub struct ConversationsListResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub channels: Vec<Conversation>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct MembersResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationInfoResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub channel: Option<ConversationDetail>,
}

/// Minimal envelope for calls where only `ok`/`error` matter.
#[derive(Debug, Deserialize)]
pub struct Ack {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn conversation_detail_tolerates_missing_optionals() {
        let json = r#"{"id": "G123", "name": "ops"}"#;
        let detail: ConversationDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, "G123");
        assert_eq!(detail.topic.value, "");
        assert_eq!(detail.num_members, 0);
    }

    #[test]
    fn list_response_without_metadata() {
        let json = r#"{"ok": true, "channels": [{"id": "G1", "name": "a"}]}"#;
        let resp: ConversationsListResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.channels.len(), 1);
        assert!(resp.response_metadata.is_none());
    }

    #[test]
    fn error_envelope() {
        let json = r#"{"ok": false, "error": "invalid_auth"}"#;
        let ack: Ack = serde_json::from_str(json).unwrap();
        assert!(!ack.ok);
        assert_eq!(ack.error.as_deref(), Some("invalid_auth"));
    }
}
