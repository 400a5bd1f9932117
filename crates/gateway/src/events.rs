//! Inbound payload shapes.
//!
//! Only the fields the handlers read are modeled; the platform payloads are
//! otherwise ignored. Unknown event and interaction types decode to `Other`
//! and are acknowledged without work.

use serde::Deserialize;

use concierge_blocks::modal::{CHANNEL_ACTION_ID, CHANNEL_BLOCK_ID};

/// Top-level body of a `POST /slack/events` delivery.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventsPayload {
    UrlVerification { challenge: String },
    EventCallback { event: Event },
    #[serde(other)]
    Other,
}

/// The inner event of an `event_callback` delivery.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    AppMention(MentionEvent),
    AppHomeOpened(HomeOpenedEvent),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct MentionEvent {
    #[serde(default)]
    pub text: String,
    pub channel: String,
    pub user: String,
    /// Timestamp of the triggering message, used as the reaction target.
    #[serde(default)]
    pub event_ts: String,
}

#[derive(Debug, Deserialize)]
pub struct HomeOpenedEvent {
    pub user: String,
    #[serde(default)]
    pub tab: String,
}

/// An interactivity delivery (the decoded `payload` form field).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    Shortcut {
        trigger_id: String,
    },
    ViewSubmission {
        user: UserRef,
        view: SubmittedView,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct UserRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmittedView {
    #[serde(default)]
    pub callback_id: String,
    pub state: ViewStateValues,
}

#[derive(Debug, Deserialize)]
pub struct ViewStateValues {
    #[serde(default)]
    pub values: serde_json::Value,
}

/// The channel picked in the join modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedChannel {
    pub id: String,
    pub name: String,
}

impl SubmittedView {
    /// Pull the selected option out of the submitted state values.
    ///
    /// The platform enforces the required select before invoking the
    /// handler; `None` here means the payload came from some other modal.
    pub fn selected_channel(&self) -> Option<SelectedChannel> {
        let option = self
            .state
            .values
            .get(CHANNEL_BLOCK_ID)?
            .get(CHANNEL_ACTION_ID)?
            .get("selected_option")?;
        Some(SelectedChannel {
            id: option.get("value")?.as_str()?.to_string(),
            name: option.get("text")?.get("text")?.as_str()?.to_string(),
        })
    }
}
