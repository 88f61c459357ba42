use std::time::Duration;

use super::Environment;

/// Runtime settings, read from the environment with defaults suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub pagination: PaginationSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct PaginationSettings {
    pub default_page_size: usize,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub min_duration: Duration,
    pub max_duration: Duration,
    pub queue_capacity: usize,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let environment = std::env::var("APP_ENV")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local);

        Self {
            environment,
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0".to_string()),
                port: env_or("SERVER_PORT", 3000),
            },
            pagination: PaginationSettings {
                default_page_size: env_or("PAGE_SIZE_DEFAULT", 10),
            },
            generation: GenerationSettings {
                min_duration: Duration::from_millis(env_or("GENERATION_MIN_MS", 10_000)),
                max_duration: Duration::from_millis(env_or("GENERATION_MAX_MS", 15_000)),
                queue_capacity: env_or("GENERATION_QUEUE_CAPACITY", 64),
            },
            logging: LoggingSettings {
                json_format: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
