use std::sync::Arc;

use {concierge_api::SlackClient, concierge_config::BotConfig};

/// Shared application context handed to every handler.
///
/// Built once at startup; there are no ambient singletons.
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<SlackClient>,
    pub config: Arc<BotConfig>,
}

impl AppContext {
    pub fn new(config: BotConfig) -> Self {
        let api = Arc::new(SlackClient::new(config.bot_token.clone()));
        Self {
            api,
            config: Arc::new(config),
        }
    }
}
