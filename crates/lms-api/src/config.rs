use std::env;

/// Deployment environment, switches logging format and cookie-free niceties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }

    fn from_env() -> Self {
        match env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub database_url: String,
    /// Shared secret the external auth provider signs identity tokens with.
    pub auth_jwt_secret: String,
    /// Comma-separated list of origins allowed by CORS.
    pub allowed_origins: Vec<String>,
    pub environment: Environment,
    pub port: u16,
    pub max_db_connections: u32,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            auth_jwt_secret: env::var("AUTH_JWT_SECRET")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            environment: Environment::from_env(),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            max_db_connections: env::var("MAX_DB_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),
        })
    }
}
