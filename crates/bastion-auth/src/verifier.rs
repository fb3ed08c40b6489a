//! Bearer token verification.
//!
//! Tokens are HS256 JWTs signed with the shared secret from
//! [`JwtConfig`]. A token is accepted only when:
//!
//! - the signature matches and the header names HS256
//! - `aud` is present and equals (or, for a list, contains) the configured audience
//! - `iss` is present and is one of the configured issuers
//! - `exp` and `nbf`, when present, are JSON numbers and hold within the
//!   configured leeway
//!
//! Before verifying, the payload is decoded without any checks and logged at
//! `debug`, so rejected tokens can still be inspected.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use serde_json::Value;
use tracing::{debug, warn};

use bastion_config::JwtConfig;

use crate::claims::Claims;

/// Why a token was rejected. Never shown to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidSignature,
    Expired,
    Immature,
    InvalidAudience,
    InvalidIssuer,
    MissingClaim(String),
    InvalidAlgorithm,
    Malformed(String),
}

impl AuthError {
    /// Stable label used as a structured log field.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "expired",
            AuthError::Immature => "immature",
            AuthError::InvalidAudience => "invalid_audience",
            AuthError::InvalidIssuer => "invalid_issuer",
            AuthError::MissingClaim(_) => "missing_claim",
            AuthError::InvalidAlgorithm => "invalid_algorithm",
            AuthError::Malformed(_) => "malformed",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidSignature => write!(f, "signature verification failed"),
            AuthError::Expired => write!(f, "token has expired"),
            AuthError::Immature => write!(f, "token is not valid yet"),
            AuthError::InvalidAudience => write!(f, "invalid 'aud' claim"),
            AuthError::InvalidIssuer => write!(f, "invalid 'iss' claim"),
            AuthError::MissingClaim(claim) => write!(f, "missing required claim '{}'", claim),
            AuthError::InvalidAlgorithm => write!(f, "token algorithm is not HS256"),
            AuthError::Malformed(detail) => write!(f, "malformed token: {}", detail),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::ImmatureSignature => AuthError::Immature,
            ErrorKind::InvalidAudience => AuthError::InvalidAudience,
            ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
            ErrorKind::MissingRequiredClaim(claim) => AuthError::MissingClaim(claim.clone()),
            ErrorKind::InvalidAlgorithm | ErrorKind::MissingAlgorithm => {
                AuthError::InvalidAlgorithm
            }
            _ => AuthError::Malformed(e.to_string()),
        }
    }
}

/// Verifies HS256 bearer tokens against a fixed secret, audience and issuer
/// allow-list. Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    peek_validation: Validation,
    leeway_seconds: u64,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[jwt_config.audience.as_str()]);
        validation.set_issuer(jwt_config.issuers.as_slice());
        validation.set_required_spec_claims(&["aud", "iss"]);
        // jsonwebtoken skips `exp`/`nbf` values it cannot read as u64;
        // both are checked in `check_time_claims` instead.
        validation.validate_exp = false;
        validation.validate_nbf = false;

        let mut peek_validation = Validation::new(Algorithm::HS256);
        peek_validation.insecure_disable_signature_validation();
        peek_validation.validate_exp = false;
        peek_validation.validate_nbf = false;
        peek_validation.validate_aud = false;
        peek_validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            validation,
            peek_validation,
            leeway_seconds: jwt_config.leeway_seconds,
        }
    }

    /// Decodes the payload without checking the signature or any claim.
    ///
    /// The result is for diagnostics only and must never be trusted.
    pub fn peek(&self, token: &str) -> Result<Value, AuthError> {
        decode::<Value>(token, &self.decoding_key, &self.peek_validation)
            .map(|data| data.claims)
            .map_err(AuthError::from)
    }

    /// Verifies the token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        match self.peek(token) {
            Ok(payload) => debug!(payload = %payload, "Unverified token payload"),
            Err(err) => debug!(error = %err, "Could not decode unverified token"),
        }

        let result = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(AuthError::from)
            .and_then(|data| {
                check_time_claims(&data.claims, Utc::now().timestamp(), self.leeway_seconds)?;
                Ok(data.claims)
            });

        match result {
            Ok(claims) => {
                debug!(
                    iss = claims.iss.as_deref().unwrap_or_default(),
                    sub = claims.subject().unwrap_or_default(),
                    "Token verified"
                );
                Ok(claims)
            }
            Err(err) => {
                warn!(reason = err.reason(), error = %err, "Token verification failed");
                Err(err)
            }
        }
    }
}

/// Rejects tokens whose `exp` has passed or whose `nbf` has not been
/// reached, allowing `leeway_seconds` of clock skew. Both claims are
/// optional but must be JSON numbers when present.
fn check_time_claims(claims: &Claims, now: i64, leeway_seconds: u64) -> Result<(), AuthError> {
    let leeway = leeway_seconds as f64;
    let now = now as f64;

    if let Some(exp) = numeric_claim(claims, "exp")? {
        if exp < now - leeway {
            return Err(AuthError::Expired);
        }
    }

    if let Some(nbf) = numeric_claim(claims, "nbf")? {
        if nbf > now + leeway {
            return Err(AuthError::Immature);
        }
    }

    Ok(())
}

fn numeric_claim(claims: &Claims, name: &str) -> Result<Option<f64>, AuthError> {
    match claims.extra.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| AuthError::Malformed(format!("'{}' claim must be a number", name))),
    }
}
