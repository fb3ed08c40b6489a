//! # Bastion Auth
//!
//! Bearer token handling for the Bastion API.
//!
//! - [`claims`]: Decoded token payload ([`Claims`]) with typed `aud`/`iss`
//! - [`verifier`]: HS256 verification against the configured audience and issuers
//! - [`issuer`]: Token minting in the shape the mobile client produces
//!
//! # Example
//!
//! ```ignore
//! use bastion_auth::{TokenOptions, TokenVerifier, issue_token};
//! use bastion_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let verifier = TokenVerifier::new(&config);
//!
//! let token = issue_token(&config, &TokenOptions::default())?;
//! let claims = verifier.verify(&token)?;
//! assert_eq!(claims.iss.as_deref(), Some("mobile"));
//! ```

pub mod claims;
pub mod issuer;
pub mod verifier;

// Re-export commonly used types at crate root
pub use claims::{Audience, Claims};
pub use issuer::{TokenOptions, issue_token};
pub use verifier::{AuthError, TokenVerifier};
