//! Decoded bearer token payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `aud` claim, which JWT allows to be a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Audience::Single(aud) => aud == audience,
            Audience::Multiple(auds) => auds.iter().any(|aud| aud == audience),
        }
    }
}

/// Claims carried by a bearer token.
///
/// `aud` and `iss` are typed because verification depends on them. Every
/// other claim (`exp`, `iat`, `nbf`, `typ`, custom keys) is kept verbatim in
/// `extra`, so serializing a `Claims` reproduces the payload it was decoded
/// from.
///
/// Numbers go through `serde_json::Number`: integers outside the `i64`/`u64`
/// range are read as `f64` and come back in float notation
/// (`123456789012345678901234567890` becomes `1.2345678901234568e29`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn subject(&self) -> Option<&str> {
        self.extra.get("sub").and_then(Value::as_str)
    }

    /// Expiry as a Unix timestamp, when present and numeric.
    pub fn expires_at(&self) -> Option<i64> {
        self.extra.get("exp").and_then(Value::as_i64)
    }
}
