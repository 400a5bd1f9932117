//! Join-request decision flow.
//!
//! Runs after the view submission has been acknowledged. Membership in the
//! master channel is the allow-list: members get invited, everyone else is
//! turned down, and the requester is told the outcome either way.

use tracing::{error, info};

use concierge_api::ConversationApi;

use crate::events::SelectedChannel;

/// Outcome of a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Invited,
    Rejected,
    InviteError,
    SystemError,
}

impl Outcome {
    /// User-facing notification text for this outcome.
    pub fn message(self, channel_name: &str) -> String {
        match self {
            Outcome::Invited => {
                format!("Your request to join *{channel_name}* was accepted — welcome aboard!")
            },
            Outcome::Rejected => format!(
                "You are not a member of the master channel, so your request to join \
                 *{channel_name}* was rejected."
            ),
            Outcome::InviteError => {
                format!("An invite error occurred; you could not be invited to *{channel_name}*.")
            },
            Outcome::SystemError => {
                format!("A system error occurred; you could not be invited to *{channel_name}*.")
            },
        }
    }
}

/// Decide a join request by testing the requester against the master
/// channel's membership, inviting on success.
///
/// A failed membership fetch is a system error, not an empty allow-list; a
/// rejected requester never triggers an invite call.
pub async fn decide(
    api: &dyn ConversationApi,
    master_channel: &str,
    requester: &str,
    channel: &SelectedChannel,
) -> Outcome {
    let members = match api.member_ids(master_channel).await {
        Ok(members) => members,
        Err(e) => {
            error!(error = %e, "membership fetch failed");
            return Outcome::SystemError;
        },
    };

    if !members.iter().any(|m| m == requester) {
        return Outcome::Rejected;
    }

    match api.invite_user(&channel.id, requester).await {
        Ok(()) => Outcome::Invited,
        Err(e) => {
            error!(channel = %channel.id, error = %e, "invite failed");
            Outcome::InviteError
        },
    }
}

/// Run the full post-ack flow: decide, then DM the requester the outcome.
pub async fn process_submission(
    api: &dyn ConversationApi,
    master_channel: &str,
    requester: &str,
    channel: &SelectedChannel,
) {
    let outcome = decide(api, master_channel, requester, channel).await;
    info!(requester, channel = %channel.id, ?outcome, "join request decided");

    if let Err(e) = api.notify(requester, &outcome.message(&channel.name)).await {
        error!(requester, error = %e, "outcome notification failed");
    }
}
