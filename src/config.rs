//! Process settings from the environment (and `.env`, when present).

use crate::error::ConfigError;

const DEFAULT_DATABASE_FILE: &str = "library.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// sqlx SQLite URL. `DATABASE_URL` wins over `DATABASE_FILE`.
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is fine; real deployments set variables directly.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => {
                let file = get("DATABASE_FILE").unwrap_or_else(|| DEFAULT_DATABASE_FILE.into());
                format!("sqlite://{}", file)
            }
        };

        Ok(Settings {
            database_url,
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            body_limit_bytes: parse_or(
                "BODY_LIMIT_BYTES",
                get("BODY_LIMIT_BYTES"),
                DEFAULT_BODY_LIMIT_BYTES,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: format!("sqlite://{}", DEFAULT_DATABASE_FILE),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        }
    }
}
