//! # Bastion Config
//!
//! Configuration types for the Bastion API.
//!
//! Every structure is loaded from environment variables once at startup and
//! treated as read-only afterwards:
//!
//! - [`jwt`]: Bearer token verification settings (secret, audience, issuers)
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address
//! - [`logging`]: Log level, format and optional log directory
//!
//! # Example
//!
//! ```ignore
//! use bastion_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod cors;
pub mod error;
pub mod jwt;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use logging::{LogConfig, LogFormat};
pub use server::ServerConfig;
