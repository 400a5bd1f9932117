//! Block Kit payload builders.
//!
//! Pure functions producing the JSON view structures the bot publishes.
//! No I/O happens here; the gateway crate submits the results.

pub mod home;
pub mod kit;
pub mod modal;
