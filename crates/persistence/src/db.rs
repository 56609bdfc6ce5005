//! Postgres connectivity for the event store.

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::{Duration, Instant};

/// Event-store connection settings, deserialized straight from the
/// service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    20
}
fn default_min_connections() -> u32 {
    5
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_idle_timeout() -> u64 {
    600
}

impl DatabaseConfig {
    /// Opens the connection pool described by these settings.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .connect(&self.url)
            .await
    }
}

/// Round-trips a trivial query against the event store.
///
/// Returns the observed latency when the store answers, `None` when it
/// does not; health probes report exactly that distinction.
pub async fn ping(pool: &PgPool) -> Option<Duration> {
    let start = Instant::now();
    sqlx::query("SELECT 1").execute(pool).await.ok()?;
    Some(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_apply_when_only_url_is_given() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{"url": "postgres://localhost/airsafe"}"#).unwrap();

        assert_eq!(config.url, "postgres://localhost/airsafe");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 5);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.idle_timeout_secs, 600);
    }

    #[test]
    fn test_config_overrides_win_over_defaults() {
        let config: DatabaseConfig = serde_json::from_str(
            r#"{"url": "postgres://db/airsafe", "max_connections": 4, "idle_timeout_secs": 30}"#,
        )
        .unwrap();

        assert_eq!(config.max_connections, 4);
        assert_eq!(config.idle_timeout_secs, 30);
        assert_eq!(config.min_connections, 5);
    }
}
