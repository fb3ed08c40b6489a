use axum::Json;
use tracing::{debug, instrument};

use bastion_core::ErrorResponse;

use crate::middleware::auth::AuthUser;
use crate::modules::greeting::model::{GreetingResponse, WELCOME_MESSAGE};

/// Greet the authenticated caller
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting with the caller's claims", body = GreetingResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    tag = "Greeting",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn read_root(auth_user: AuthUser) -> Json<GreetingResponse> {
    debug!(sub = auth_user.subject(), "Greeting authenticated caller");

    Json(GreetingResponse {
        message: WELCOME_MESSAGE.to_string(),
        user: auth_user.0,
    })
}
