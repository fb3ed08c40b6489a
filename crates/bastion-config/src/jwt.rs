use std::env;
use std::fmt;

use crate::error::ConfigError;

/// Settings for verifying (and, for development tooling, issuing) HS256
/// bearer tokens.
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret. Never printed.
    pub secret: String,
    /// Value the `aud` claim must carry.
    pub audience: String,
    /// Accepted values for the `iss` claim.
    pub issuers: Vec<String>,
    /// Clock skew tolerated when checking `exp` and `nbf`.
    pub leeway_seconds: u64,
    /// Lifetime of tokens minted by the development tooling.
    pub token_ttl_seconds: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("audience", &self.audience)
            .field("issuers", &self.issuers)
            .field("leeway_seconds", &self.leeway_seconds)
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET_KEY"))?;

        let audience = lookup("JWT_AUDIENCE")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "api".to_string());
        if audience.is_empty() {
            return Err(ConfigError::Invalid("JWT_AUDIENCE"));
        }

        let issuers: Vec<String> = lookup("JWT_ISSUERS")
            .unwrap_or_else(|| "mobile".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if issuers.is_empty() {
            return Err(ConfigError::Invalid("JWT_ISSUERS"));
        }

        let leeway_seconds = match lookup("JWT_LEEWAY_SECONDS") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_LEEWAY_SECONDS"))?,
            None => 0,
        };

        let token_ttl_seconds = match lookup("JWT_TOKEN_TTL_SECONDS") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_TOKEN_TTL_SECONDS"))?,
            None => 2 * 60 * 60, // 2 hours
        };

        Ok(Self {
            secret,
            audience,
            issuers,
            leeway_seconds,
            token_ttl_seconds,
        })
    }
}
