//! Small Block Kit building blocks shared by the view builders.

use serde_json::{Value, json};

/// A `section` block with mrkdwn text.
pub fn section(text: impl Into<String>) -> Value {
    json!({
        "type": "section",
        "text": { "type": "mrkdwn", "text": text.into() }
    })
}

/// A `divider` block.
pub fn divider() -> Value {
    json!({ "type": "divider" })
}

/// A `context` block with a single mrkdwn element.
pub fn context(text: impl Into<String>) -> Value {
    json!({
        "type": "context",
        "elements": [ { "type": "mrkdwn", "text": text.into() } ]
    })
}

/// A `plain_text` text object.
pub fn plain_text(text: impl Into<String>) -> Value {
    json!({ "type": "plain_text", "text": text.into(), "emoji": true })
}
