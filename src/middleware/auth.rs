use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::debug;

use bastion_auth::Claims;
use bastion_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides its claims.
///
/// Place it before any other extractor so authentication is decided before
/// the request's path or query is looked at.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The token's `sub` claim, if it carries one
    pub fn subject(&self) -> Option<&str> {
        self.0.subject()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|rejection| {
                debug!(error = %rejection, "Missing or invalid authorization header");
                AppError::unauthorized()
            })?;

        let claims = state
            .verifier
            .verify(bearer.token())
            .map_err(|_| AppError::unauthorized())?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode, header};
    use bastion_auth::{TokenOptions, issue_token};
    use bastion_config::{CorsConfig, JwtConfig};

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            audience: "api".to_string(),
            issuers: vec!["mobile".to_string()],
            leeway_seconds: 0,
            token_ttl_seconds: 3600,
        }
    }

    fn test_state() -> AppState {
        AppState::new(
            &get_test_jwt_config(),
            CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
        )
    }

    async fn extract(authorization: Option<&str>) -> Result<AuthUser, AppError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        AuthUser::from_request_parts(&mut parts, &test_state()).await
    }

    #[tokio::test]
    async fn test_valid_token_yields_claims() {
        let options = TokenOptions {
            subject: Some("device-1".to_string()),
            ..Default::default()
        };
        let token = issue_token(&get_test_jwt_config(), &options).unwrap();

        let auth_user = extract(Some(&format!("Bearer {}", token))).await.unwrap();

        assert_eq!(auth_user.subject(), Some("device-1"));
        assert_eq!(auth_user.0.iss.as_deref(), Some("mobile"));
    }

    #[tokio::test]
    async fn test_scheme_is_case_insensitive() {
        let token = issue_token(&get_test_jwt_config(), &TokenOptions::default()).unwrap();

        let result = extract(Some(&format!("bearer {}", token))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_header() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert!(err.bearer_challenge);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme() {
        let err = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_token() {
        let err = extract(Some("Bearer not-a-jwt")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
