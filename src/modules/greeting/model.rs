use serde::Serialize;
use utoipa::ToSchema;

use bastion_auth::Claims;

pub const WELCOME_MESSAGE: &str = "Welcome to the Bastion API!";

#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
    /// Claims of the verified bearer token, exactly as signed
    #[schema(value_type = Object)]
    pub user: Claims,
}
