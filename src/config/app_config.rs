use std::env;

/// Configuración de la aplicación
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    /// Vigencia del token de sesión en segundos (7 días por defecto)
    pub jwt_expiration: i64,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "La variable JWT_SECRET no está definida. Configúrala siempre en producción."
            );
            "secret".to_string()
        });

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidExpiration)?;

        Ok(Self {
            server_port,
            database_url,
            jwt_secret,
            jwt_expiration,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid expiration time")]
    InvalidExpiration,
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,
}
