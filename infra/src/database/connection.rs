//! MySQL pool shared by the user and blog repositories

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use scribe_shared::config::DatabaseConfig;

use crate::InfrastructureError;

const MYSQL_SCHEMES: &[&str] = &["mysql://", "mariadb://"];

/// Cloneable handle to the Scribe database
///
/// Built once at startup when `DATABASE_BACKEND=mysql`; the health endpoint
/// receives it as app data and reports `"disabled"` when it is absent.
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Open the pool and wait for the first connection
    ///
    /// Statements are logged at debug, and anything slower than
    /// `slow_query_threshold` milliseconds at warn. A URL without a MySQL
    /// scheme is a `Config` error; an unreachable server is a `Database` error.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        if !MYSQL_SCHEMES.iter().any(|scheme| config.url.starts_with(scheme)) {
            return Err(InfrastructureError::Config(
                "DATABASE_URL must start with mysql://".to_string(),
            ));
        }

        tracing::info!(
            max_connections = config.max_connections,
            connect_timeout_secs = config.connect_timeout,
            "Connecting to blog database"
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Blog database unreachable");
                InfrastructureError::Database(e)
            })?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip `SELECT 1`
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Database health check failed");
                InfrastructureError::Database(e)
            })?;

        Ok(value == 1)
    }

    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Drain the pool once the HTTP server has stopped
    pub async fn close(&self) {
        tracing::info!(stats = %self.get_statistics(), "Closing blog database pool");
        self.pool.close().await;
    }
}

/// Point-in-time pool occupancy, logged at startup and shutdown
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
