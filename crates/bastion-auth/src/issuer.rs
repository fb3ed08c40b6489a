//! Token minting for development tooling and tests.
//!
//! The mobile client signs its own tokens with the shared secret. The tokens
//! produced here have the same shape:
//!
//! ```text
//! { "aud": "api", "iss": "mobile", "exp": now + ttl, "iat": now, "nbf": now, "typ": "JWT" }
//! ```

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Map, Value};

use bastion_config::JwtConfig;

/// Overrides applied on top of the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct TokenOptions {
    pub subject: Option<String>,
    /// Defaults to `JwtConfig::token_ttl_seconds`. Negative values produce
    /// an already expired token.
    pub ttl_seconds: Option<i64>,
    /// Defaults to the first configured issuer.
    pub issuer: Option<String>,
    /// Defaults to the configured audience.
    pub audience: Option<String>,
    /// Additional claims. Registered claims set above take precedence.
    pub extra: Map<String, Value>,
}

/// Signs a new HS256 token with the configured secret.
pub fn issue_token(
    jwt_config: &JwtConfig,
    options: &TokenOptions,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let ttl = options.ttl_seconds.unwrap_or(jwt_config.token_ttl_seconds);

    let mut claims = options.extra.clone();
    claims.insert(
        "aud".to_string(),
        Value::from(
            options
                .audience
                .clone()
                .unwrap_or_else(|| jwt_config.audience.clone()),
        ),
    );
    if let Some(iss) = options
        .issuer
        .clone()
        .or_else(|| jwt_config.issuers.first().cloned())
    {
        claims.insert("iss".to_string(), Value::from(iss));
    }
    if let Some(sub) = &options.subject {
        claims.insert("sub".to_string(), Value::from(sub.clone()));
    }
    claims.insert("exp".to_string(), Value::from(now + ttl));
    claims.insert("iat".to_string(), Value::from(now));
    claims.insert("nbf".to_string(), Value::from(now));
    claims.insert("typ".to_string(), Value::from("JWT"));

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
}
