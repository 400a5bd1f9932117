//! Slack Web API client for concierge.
//!
//! Wraps the handful of Web API methods the bot needs behind a reqwest
//! client. Cursor-paginated endpoints are walked by a single generic
//! collector; the per-endpoint listings are thin parameterizations of it.

pub mod client;
pub mod error;
pub mod listing;
pub mod pagination;
pub mod types;

pub use {
    client::SlackClient,
    error::{ApiError, ApiResult},
    listing::{ChannelOption, ConversationApi},
};
