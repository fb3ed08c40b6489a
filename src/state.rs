use std::sync::Arc;

use bastion_auth::TokenVerifier;
use bastion_config::{ConfigError, CorsConfig, JwtConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            verifier: Arc::new(TokenVerifier::new(jwt_config)),
            cors_config,
        }
    }
}

/// Loads configuration from the environment. A missing `JWT_SECRET_KEY`
/// aborts startup.
pub fn init_app_state() -> Result<AppState, ConfigError> {
    let jwt_config = JwtConfig::from_env()?;

    Ok(AppState::new(&jwt_config, CorsConfig::from_env()))
}
