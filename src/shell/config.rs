// Application configuration.
//
// Loaded once at startup from an optional `.env` file and the process
// environment, then passed by value to whatever needs it.

use crate::modules::assignments::service::enrichment::ListEnrichmentPolicy;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceMode {
    #[default]
    Synchronous,
    EventDriven,
}

impl FromStr for ServiceMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "synchronous" | "sync" => Ok(Self::Synchronous),
            "event-driven" | "event_driven" | "async" => Ok(Self::EventDriven),
            other => Err(format!("unknown service mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabbitMqConfig {
    pub management_url: String,
    pub username: String,
    pub password: String,
    pub vhost: String,
    pub assignment_exchange: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub http_server_port: u16,
    pub database_url: Option<String>,
    pub tag_service_url: String,
    pub rabbitmq: RabbitMqConfig,
    pub service_mode: ServiceMode,
    pub list_enrichment: ListEnrichmentPolicy,
    pub outbound_timeout: Duration,
}

impl AppConfig {
    /// Reads `.env` (path from `ENV_CONFIG`, default `./.env`) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file = std::env::var("ENV_CONFIG").unwrap_or_else(|_| "./.env".to_string());
        if let Err(err) = dotenvy::from_path(&env_file) {
            tracing::warn!(path = %env_file, error = %err, "can't load env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            env: value("ENV", "dev"),
            http_server_port: parse("HTTP_SERVER_PORT", &value("HTTP_SERVER_PORT", "3001"))?,
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            tag_service_url: value("TAG_SERVICE_URL", "http://localhost:5002"),
            rabbitmq: RabbitMqConfig {
                management_url: value("RABBITMQ_MANAGEMENT_URL", "http://localhost:15672"),
                username: value("RABBITMQ_USERNAME", "guest"),
                password: value("RABBITMQ_PASSWORD", "guest"),
                vhost: value("RABBITMQ_VHOST", "/"),
                assignment_exchange: value("RABBITMQ_ASSIGNMENT_EXCHANGE", "assignment"),
            },
            service_mode: parse(
                "ASSIGNMENT_SERVICE_MODE",
                &value("ASSIGNMENT_SERVICE_MODE", "synchronous"),
            )?,
            list_enrichment: parse(
                "LIST_ENRICHMENT_FAILURE",
                &value("LIST_ENRICHMENT_FAILURE", "drop"),
            )?,
            outbound_timeout: Duration::from_millis(parse(
                "OUTBOUND_TIMEOUT_MS",
                &value("OUTBOUND_TIMEOUT_MS", "5000"),
            )?),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.env == "dev"
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
    })
}
