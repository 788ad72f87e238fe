use sqlx::PgPool;

use crate::config::{ApiConfig, Environment};

#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
    /// Shared secret for verifying provider-issued identity tokens.
    pub jwt_secret: String,
    pub environment: Environment,
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            jwt_secret: config.auth_jwt_secret.clone(),
            environment: config.environment.clone(),
        }
    }
}
