//! # Bastion Core
//!
//! Core types shared by the Bastion API crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use bastion_core::AppError;
//!
//! // Reject a request that failed bearer authentication
//! let error = AppError::unauthorized();
//!
//! // Reject a request whose path could not be parsed
//! let error = AppError::unprocessable(anyhow::anyhow!("item_id must be an integer"));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse, INVALID_CREDENTIALS};
