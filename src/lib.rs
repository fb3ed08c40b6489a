//! # Bastion API
//!
//! A small REST API built with Rust and Axum whose endpoints are guarded by
//! HS256 bearer tokens minted by the mobile client.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser extractor (bearer token → verified claims)
//! ├── modules/          # Feature modules
//! │   ├── greeting/    # GET /
//! │   └── items/       # GET /items/{item_id}
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Per-request logging middleware
//! ├── router.rs         # Main application router (CORS, docs, fallback)
//! └── state.rs          # Shared application state
//! ```
//!
//! Token verification itself lives in the `bastion-auth` crate; this crate
//! only wires it into the HTTP layer.
//!
//! ## Authentication
//!
//! Every endpoint except the API documentation requires
//! `Authorization: Bearer <token>`. A token is accepted when it is signed
//! with `JWT_SECRET_KEY` using HS256, its `aud` claim is `api` and its `iss`
//! claim is in the issuer allow-list (`mobile`). Any failure yields:
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! WWW-Authenticate: Bearer
//!
//! {"detail": "Invalid authentication credentials"}
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET_KEY=your-shared-secret
//! cargo run --bin bastion
//!
//! # In another shell
//! TOKEN=$(cargo run -q --bin bastion-cli -- mint-token)
//! curl -H "Authorization: Bearer $TOKEN" "http://127.0.0.1:8000/items/42?q=test"
//! ```
//!
//! ## Modules
//!
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging middleware
//! - [`middleware`]: Authentication extractor
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use bastion_auth;
pub use bastion_config;
pub use bastion_core;
