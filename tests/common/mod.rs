use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use bastion::router::init_router;
use bastion::state::AppState;
use bastion_auth::{TokenOptions, issue_token};
use bastion_config::{CorsConfig, JwtConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        audience: "api".to_string(),
        issuers: vec!["mobile".to_string()],
        leeway_seconds: 0,
        token_ttl_seconds: 7200,
    }
}

pub fn setup_test_app() -> Router {
    let state = AppState::new(
        &test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    );
    init_router(state)
}

/// Token in the shape the mobile client produces.
#[allow(dead_code)]
pub fn mobile_token() -> String {
    issue_token(&test_jwt_config(), &TokenOptions::default()).unwrap()
}

#[allow(dead_code)]
pub fn token_with(options: TokenOptions) -> String {
    issue_token(&test_jwt_config(), &options).unwrap()
}

#[allow(dead_code)]
pub fn token_signed_with(secret: &str) -> String {
    let config = JwtConfig {
        secret: secret.to_string(),
        ..test_jwt_config()
    };
    issue_token(&config, &TokenOptions::default()).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Sends `GET uri` with an optional raw `Authorization` header value.
pub async fn get(app: Router, uri: &str, authorization: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

#[allow(dead_code)]
pub async fn get_with_token(app: Router, uri: &str, token: &str) -> TestResponse {
    get(app, uri, Some(&format!("Bearer {}", token))).await
}

/// Asserts the single authentication failure shape.
#[allow(dead_code)]
pub fn assert_unauthorized(response: &TestResponse) {
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    assert_eq!(
        response.body,
        serde_json::json!({ "detail": "Invalid authentication credentials" })
    );
}
