//! Join-request modal.

use {
    concierge_api::ChannelOption,
    serde_json::{Value, json},
};

use crate::kit::{divider, plain_text, section};

/// Callback id routed back to the submission handler.
pub const JOIN_CALLBACK_ID: &str = "join-request";

/// Block id of the channel select input.
pub const CHANNEL_BLOCK_ID: &str = "channel_select";

/// Action id of the channel select element.
pub const CHANNEL_ACTION_ID: &str = "channel";

/// Label shown when no private channels are available.
pub const NO_CHANNELS_LABEL: &str = "NO CHANNEL DATA";

/// Sentinel option value paired with [`NO_CHANNELS_LABEL`].
pub const NO_CHANNELS_VALUE: &str = "dummy";

fn option(label: &str, value: &str) -> Value {
    json!({ "text": plain_text(label), "value": value })
}

/// Build the join-request modal from the available channel options.
///
/// Zero options renders exactly one placeholder option so the select is
/// never empty (Slack rejects an empty options array).
pub fn join_modal(channels: &[ChannelOption]) -> Value {
    let options: Vec<Value> = if channels.is_empty() {
        vec![option(NO_CHANNELS_LABEL, NO_CHANNELS_VALUE)]
    } else {
        channels
            .iter()
            .map(|c| option(&format!("#{}", c.name), &c.id))
            .collect()
    };

    json!({
        "type": "modal",
        "callback_id": JOIN_CALLBACK_ID,
        "title": plain_text("Join a private channel"),
        "submit": plain_text("Request to join"),
        "close": plain_text("Cancel"),
        "blocks": [
            section(
                "Pick the private channel you want to join. Members of the \
                 master channel are invited right away. To get a channel onto \
                 this list, add the concierge app to it."
            ),
            divider(),
            {
                "type": "input",
                "block_id": CHANNEL_BLOCK_ID,
                "element": {
                    "type": "static_select",
                    "action_id": CHANNEL_ACTION_ID,
                    "placeholder": plain_text("Select a channel"),
                    "options": options
                },
                "label": plain_text("Channel")
            }
        ]
    })
}
