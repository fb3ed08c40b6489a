//! Request extractors for cross-cutting concerns.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] hands the token to the shared `TokenVerifier`
//! 3. On success the handler receives the verified claims
//! 4. On any failure the request ends with 401 before the handler runs
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn whoami(AuthUser(claims): AuthUser) -> Json<Claims> {
//!     Json(claims)
//! }
//! ```

pub mod auth;
