use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use bastion_core::ErrorResponse;

use crate::modules::greeting::model::GreetingResponse;
use crate::modules::items::model::ItemResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::greeting::controller::read_root,
        crate::modules::items::controller::read_item,
    ),
    components(schemas(GreetingResponse, ItemResponse, ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Greeting", description = "Authenticated greeting"),
        (name = "Items", description = "Demo item lookup")
    ),
    info(
        title = "Bastion API",
        version = "0.1.0",
        description = "Demo endpoints guarded by HS256 bearer tokens issued to the mobile app.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
