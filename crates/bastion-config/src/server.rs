use std::env;

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match port {
            Some(p) => p.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8000,
        };

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_custom_host_and_port() {
        let config =
            ServerConfig::from_values(Some("0.0.0.0".to_string()), Some("3000".to_string()))
                .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerConfig::from_values(None, Some("not-a-port".to_string()));
        assert_eq!(result.unwrap_err(), ConfigError::Invalid("PORT"));
    }
}
