use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub questions_per_page: i64,
    pub seed_demo_data: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let questions_per_page = match env_map.get("QUESTIONS_PER_PAGE") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| {
                    ConfigError::InvalidValue(
                        "QUESTIONS_PER_PAGE".to_string(),
                        "must be a positive integer".to_string(),
                    )
                })?,
            None => DEFAULT_QUESTIONS_PER_PAGE,
        };

        let seed_demo_data = match env_map
            .get("SEED_DEMO_DATA")
            .map(|s| s.to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue(
                    "SEED_DEMO_DATA".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        Ok(Config {
            port,
            database_path,
            questions_per_page,
            seed_demo_data,
        })
    }
}
