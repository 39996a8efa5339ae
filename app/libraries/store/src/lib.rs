//! SQLite-backed persistence for customers and users.
//!
//! A [`Store`] is built once at startup and handed to request handlers
//! through the shared application state. Cloning it only clones the pool
//! handle.

mod customer;
mod user;

use app_error::AppError;
use app_schema::{auth::users::User, customer::Customer};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::*;

pub const CUSTOMER_CONFLICT_MESSAGE: &str = "Customer already exists";
pub const EMAIL_CONFLICT_MESSAGE: &str = "Email already exists";

#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if needed) the database file behind `database_url`.
    /// A memory URL is pinned to one long-lived connection, since each SQLite
    /// memory connection is its own database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = if is_memory_url(database_url) {
            if max_connections > 1 {
                warn!(
                    "{} is in memory, ignoring db_connection = {}",
                    database_url, max_connections
                );
            }
            pinned_pool(options).await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };
        info!("Connected to {}", database_url);
        Ok(Self { pool })
    }

    /// Private in-memory database, already migrated.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let store = Self {
            pool: pinned_pool(options).await?,
        };
        store.migrate().await?;
        Ok(store)
    }

    /// Creates the tables if they are missing. Safe to run on every start.
    pub async fn migrate(&self) -> Result<(), AppError> {
        for statement in [User::create_table(), Customer::create_table()] {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Schema is up to date");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

async fn pinned_pool(options: SqliteConnectOptions) -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}
