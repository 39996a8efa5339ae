use app_error::AppError;
use app_log::LogLevel;
use dotenv::dotenv;
use log::*;
use serde::{Deserialize, Serialize};
use std::{env, fs, io::Read};

pub const DEFAULT_SESSION_HOURS: i64 = 24;
pub const DEFAULT_HASH_COST: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_bind: String, // 0.0.0.0:3000
    #[serde(default)]
    pub log_level: LogLevel, // Off, Error, Warn, Info, Debug, Trace
    #[serde(default)]
    pub database_url: String, // sqlite://churn.db
    #[serde(default = "default_db_connection")]
    pub db_connection: u32,
    #[serde(default)]
    pub jwt_access_key: String,
    #[serde(default = "default_session_hours")]
    pub jwt_access_session_hours: i64,
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

fn default_db_connection() -> u32 {
    5
}

fn default_session_hours() -> i64 {
    DEFAULT_SESSION_HOURS
}

fn default_hash_cost() -> u32 {
    DEFAULT_HASH_COST
}

impl AppConfig {
    /// Reads the JSON file named by `APP_CONFIG`, then lets `JWT_SECRET` and
    /// `DATABASE_URL` override the file. There is no built-in signing secret:
    /// a config without one is an error and services refuse to start.
    pub fn load() -> Result<Self, AppError> {
        dotenv().ok();
        let config_file_path = env::var("APP_CONFIG").map_err(|e| {
            debug!("{}", &e);
            AppError::internal("Cannot locate config file; please set APP_CONFIG env variable!")
        })?;
        let config_file = fs::File::open(&config_file_path).map_err(|e| {
            debug!("{}", &e);
            AppError::internal(format!("Cannot read config file {config_file_path}!"))
        })?;
        Self::from_reader(config_file)?
            .with_overrides(env::var("JWT_SECRET").ok(), env::var("DATABASE_URL").ok())
            .validated()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        serde_json::from_reader(reader).map_err(|e| {
            debug!("{}", &e);
            AppError::internal(format!("Cannot parse config json! {e}"))
        })
    }

    pub fn with_overrides(
        mut self,
        jwt_secret: Option<String>,
        database_url: Option<String>,
    ) -> Self {
        if let Some(secret) = jwt_secret.filter(|s| !s.is_empty()) {
            self.jwt_access_key = secret;
        }
        if let Some(url) = database_url.filter(|s| !s.is_empty()) {
            self.database_url = url;
        }
        self
    }

    pub fn validated(self) -> Result<Self, AppError> {
        if self.jwt_access_key.trim().is_empty() {
            return Err(AppError::internal(
                "jwt_access_key is missing; set it in the config file or JWT_SECRET",
            ));
        }
        if self.database_url.trim().is_empty() {
            return Err(AppError::internal(
                "database_url is missing; set it in the config file or DATABASE_URL",
            ));
        }
        if self.jwt_access_session_hours <= 0 {
            return Err(AppError::internal("jwt_access_session_hours must be positive"));
        }
        if self.db_connection == 0 {
            return Err(AppError::internal("db_connection must be at least 1"));
        }
        if !(4..=31).contains(&self.hash_cost) {
            return Err(AppError::internal("hash_cost must be between 4 and 31"));
        }
        Ok(self)
    }
}
