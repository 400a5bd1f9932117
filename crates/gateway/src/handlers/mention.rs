//! `app_mention` handling.

use {anyhow::Result, tracing::debug};

use crate::{context::AppContext, events::MentionEvent};

/// Mention text that asks the bot to leave the channel.
pub const LEAVE_PHRASE: &str = "leave this channel";

/// Reaction added to acknowledge a leave request.
const LEAVE_REACTION: &str = "wave";

/// Greet on mention; leave the channel when asked to.
pub async fn handle_mention(ctx: &AppContext, event: &MentionEvent) -> Result<()> {
    if event.text.contains(LEAVE_PHRASE) {
        debug!(channel = %event.channel, "leave requested via mention");
        ctx.api
            .add_reaction(&event.channel, &event.event_ts, LEAVE_REACTION)
            .await?;
        ctx.api.leave(&event.channel).await?;
        return Ok(());
    }

    ctx.api
        .post_message(&event.channel, &format!(":wave: <@{}> Hi!", event.user))
        .await?;
    Ok(())
}
