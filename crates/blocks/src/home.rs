//! App Home view.

use {
    concierge_api::types::ConversationDetail,
    serde_json::{Value, json},
};

use crate::kit::{context, divider, section};

const INTRO: &str = "Welcome to the private channel concierge :wave:\n\
    Members of the master channel can join any private channel this app has \
    been added to. Two ways in:\n\
    1. type `/join-channel`\n\
    2. use the *Join a private channel* shortcut\n\n\
    If a channel no longer needs the app, mention it with \
    `@concierge leave this channel` and it will leave.";

const FOOTER: &str = "Managed by the concierge app";

/// Build the home tab view from the private channels the bot can see.
///
/// An empty listing renders the static copy with no per-channel sections.
pub fn home_view(channels: &[ConversationDetail]) -> Value {
    let mut blocks = vec![
        section(INTRO),
        divider(),
        section("Channel info (auto-refreshed)"),
    ];
    for channel in channels {
        blocks.push(section(format!(
            "*{}*\nTopic: {}\nPurpose: {}\nMembers: {}",
            channel.name, channel.topic.value, channel.purpose.value, channel.num_members
        )));
    }
    blocks.push(context(FOOTER));

    json!({ "type": "home", "blocks": blocks })
}
