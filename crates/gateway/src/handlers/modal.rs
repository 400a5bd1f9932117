//! Opening the join-request modal (shortcut and slash command).

use {anyhow::Result, tracing::warn};

use concierge_blocks::modal::join_modal;

use crate::context::AppContext;

/// List the private channels and open the join modal for `trigger_id`.
///
/// A failed listing still opens the modal; the builder renders the
/// placeholder option for an empty list.
pub async fn open_join_modal(ctx: &AppContext, trigger_id: &str) -> Result<()> {
    let options = match ctx.api.list_private_channel_options().await {
        Ok(options) => options,
        Err(e) => {
            warn!(error = %e, "private channel listing failed");
            Vec::new()
        },
    };

    ctx.api.open_view(trigger_id, join_modal(&options)).await?;
    Ok(())
}
