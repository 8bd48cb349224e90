use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub billing: BillingConfig,
    pub insight: InsightConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Shared static write secret. This is a personal dashboard, not a real
/// auth system: every mutating request must carry the same code.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub secret_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    pub cost_per_kwh: f64,
}

/// External text-generation endpoint (Ollama-style API). When `base_url`
/// is unset the insight handler falls back to a static message.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightConfig {
    pub base_url: Option<String>,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let secret_code = env::var("SECRET_CODE")
            .expect("SECRET_CODE must be set");

        let cost_per_kwh = env::var("COST_PER_KWH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.15);

        let insight_base_url = env::var("INSIGHT_BASE_URL").ok();

        let insight_model = env::var("INSIGHT_MODEL")
            .unwrap_or_else(|_| "llama3".to_string());

        Ok(Config {
            database: DatabaseConfig {
                url: database_url,
                max_connections: Some(max_connections),
            },
            server: ServerConfig { host, port },
            auth: AuthConfig { secret_code },
            billing: BillingConfig { cost_per_kwh },
            insight: InsightConfig {
                base_url: insight_base_url,
                model: insight_model,
            },
        })
    }
}
