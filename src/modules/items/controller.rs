use anyhow::anyhow;
use axum::{
    Json,
    extract::{
        Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
};
use tracing::{debug, instrument};

use bastion_core::{AppError, ErrorResponse};

use crate::middleware::auth::AuthUser;
use crate::modules::items::model::{ItemQuery, ItemResponse};

/// Look up an item by id
///
/// Authentication is checked first; a malformed `item_id` is only reported
/// to authenticated callers.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Item identifier"),
        ItemQuery
    ),
    responses(
        (status = 200, description = "Item echoed back with the caller's claims", body = ItemResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 422, description = "item_id is not an integer", body = ErrorResponse)
    ),
    tag = "Items",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn read_item(
    auth_user: AuthUser,
    item_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let Path(item_id) =
        item_id.map_err(|rejection| AppError::unprocessable(anyhow!(rejection.body_text())))?;
    let Query(pairs) =
        query.map_err(|rejection| AppError::unprocessable(anyhow!(rejection.body_text())))?;
    let ItemQuery { q } = ItemQuery::from_pairs(pairs);

    debug!(item_id, sub = auth_user.subject(), "Item lookup");

    Ok(Json(ItemResponse {
        item_id,
        query: q,
        user: auth_user.0,
    }))
}
