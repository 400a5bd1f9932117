//! Event handlers.
//!
//! Each handler takes the capabilities it needs explicitly; failures are
//! logged by the dispatcher and never propagate back to the platform.

pub mod home;
pub mod mention;
pub mod modal;
pub mod submission;
