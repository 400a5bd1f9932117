//! HTTP gateway for the Slack Events API.
//!
//! Verifies request signatures over the raw body, routes the platform's
//! event/interactivity/command deliveries to handlers, and exposes a
//! liveness endpoint. Handlers acknowledge deliveries immediately and do
//! their API work on spawned tasks.

pub mod context;
pub mod events;
pub mod handlers;
pub mod router;
pub mod signature;

pub use {context::AppContext, router::router};
