//! App Home rendering.

use {
    anyhow::Result,
    tracing::{debug, warn},
};

use concierge_blocks::home::home_view;

use crate::{context::AppContext, events::HomeOpenedEvent};

/// Publish the home tab: list private channels, fetch each one's info,
/// render the view.
///
/// Listing and per-channel info failures degrade to fewer sections rather
/// than an unpublished view.
pub async fn handle_home_opened(ctx: &AppContext, event: &HomeOpenedEvent) -> Result<()> {
    if event.tab != "home" {
        debug!(tab = %event.tab, "ignoring non-home tab");
        return Ok(());
    }

    let ids = match ctx.api.list_private_channel_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            warn!(error = %e, "private channel listing failed");
            Vec::new()
        },
    };

    let mut details = Vec::with_capacity(ids.len());
    for id in &ids {
        match ctx.api.conversation_info(id).await {
            Ok(detail) => details.push(detail),
            Err(e) => warn!(channel = %id, error = %e, "conversations.info failed"),
        }
    }

    ctx.api.publish_view(&event.user, home_view(&details)).await?;
    Ok(())
}
