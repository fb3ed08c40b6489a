//! # Bastion CLI
//!
//! Helpers behind the `bastion-cli` binary, which mints and inspects bearer
//! tokens with the same settings the server uses.
//!
//! ```bash
//! bastion-cli mint-token --sub device-42 --claim scopes='["items:read"]'
//! bastion-cli verify-token eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...
//! ```

use serde_json::{Map, Value};

/// Parses `key=value` pairs into a claim map.
///
/// Values that parse as JSON keep their type (`count=3`, `admin=true`,
/// `scopes=["a","b"]`); anything else is stored as a string.
pub fn parse_claims(pairs: &[String]) -> Result<Map<String, Value>, String> {
    let mut claims = Map::new();

    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", pair))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(format!("empty claim name in '{}'", pair));
        }

        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        claims.insert(key.to_string(), value);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_claims_keeps_json_types() {
        let claims =
            parse_claims(&args(&["count=3", "admin=true", r#"scopes=["a","b"]"#])).unwrap();

        assert_eq!(claims["count"], json!(3));
        assert_eq!(claims["admin"], json!(true));
        assert_eq!(claims["scopes"], json!(["a", "b"]));
    }

    #[test]
    fn test_parse_claims_falls_back_to_string() {
        let claims = parse_claims(&args(&["device=pixel-8", "note=a=b"])).unwrap();

        assert_eq!(claims["device"], json!("pixel-8"));
        assert_eq!(claims["note"], json!("a=b"));
    }

    #[test]
    fn test_parse_claims_rejects_missing_separator() {
        assert!(parse_claims(&args(&["device"])).is_err());
    }

    #[test]
    fn test_parse_claims_rejects_empty_key() {
        assert!(parse_claims(&args(&["=value"])).is_err());
    }
}
