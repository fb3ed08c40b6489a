//! Bastion Observability
//!
//! Console and file logging built on `tracing`. Every crate in the workspace
//! logs through the `tracing` macros; this crate only decides where those
//! events go.

pub mod logging;

pub use logging::{default_filter, init_logging};
