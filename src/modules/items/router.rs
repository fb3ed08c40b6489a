use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::read_item;

pub fn init_items_router() -> Router<AppState> {
    Router::new().route("/{item_id}", get(read_item))
}
