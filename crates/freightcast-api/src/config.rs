use freightcast_core::config::LayeredConfig;
use freightcast_core::error::Result;
use std::env;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub engine: LayeredConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `FREIGHTCAST_CONFIG` names an optional TOML file applied beneath the
    /// environment.
    pub fn from_env() -> Result<Self> {
        let port = env::var("FREIGHTCAST_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);

        let cors_origin = env::var("FREIGHTCAST_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let mut engine = LayeredConfig::with_defaults();
        if let Ok(path) = env::var("FREIGHTCAST_CONFIG") {
            engine = engine.load_from_file(path)?;
        }
        let engine = engine.load_from_env();

        Ok(Self {
            port,
            cors_origin,
            engine,
        })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
