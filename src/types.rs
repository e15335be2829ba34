use crate::utils::database::{self, DatabaseConnection, Seed, SeedError};
use async_trait::async_trait;
use std::{env, fmt};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Development => "development",
        })
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: DatabaseConnection,
}

#[derive(Clone, Debug, Default)]
pub struct DatabaseConfig {
    pub seed_file: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT number: {0}")]
    InvalidPort(String),
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            app: AppConfig {
                host: DEFAULT_HOST.to_string(),
                environment: AppEnvironment::Development,
                port: DEFAULT_PORT,
                url: format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let url = lookup("URL").unwrap_or_else(|| format!("http://{}:{}", host, port));
        let environment = lookup("APP_ENV").unwrap_or_default();
        let seed_file = lookup("SEED_FILE").filter(|path| !path.is_empty());

        Ok(Self {
            database: DatabaseConfig { seed_file },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, SeedError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, SeedError> {
        let db_conn = database::connect();

        if let Some(path) = self.database.seed_file {
            database::seed(&db_conn, Seed::from_file(&path).await?).await?;
        }

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
        })
    }
}
