use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::read_root;

pub fn init_greeting_router() -> Router<AppState> {
    Router::new().route("/", get(read_root))
}
