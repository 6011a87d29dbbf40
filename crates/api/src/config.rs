use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for background jobs to stop (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Trash purge sweep schedule.
    pub purge: PurgeConfig,
}

/// Schedule for the background trash purge sweep.
#[derive(Debug, Clone)]
pub struct PurgeConfig {
    /// Seconds between sweeps (default: one day).
    pub interval_secs: u64,
    /// Maximum rows deleted per transaction (default: `100`).
    pub batch_size: i64,
}

const DEFAULT_PURGE_INTERVAL_SECS: u64 = 86_400;
const DEFAULT_PURGE_BATCH_SIZE: i64 = 100;

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_PURGE_INTERVAL_SECS,
            batch_size: DEFAULT_PURGE_BATCH_SIZE,
        }
    }
}

impl PurgeConfig {
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `TRASH_PURGE_INTERVAL_SECS` | `86400` |
    /// | `TRASH_PURGE_BATCH_SIZE`    | `100`   |
    pub fn from_env() -> Self {
        let interval_secs: u64 = std::env::var("TRASH_PURGE_INTERVAL_SECS")
            .unwrap_or_else(|_| DEFAULT_PURGE_INTERVAL_SECS.to_string())
            .parse()
            .expect("TRASH_PURGE_INTERVAL_SECS must be a valid u64");
        assert!(interval_secs > 0, "TRASH_PURGE_INTERVAL_SECS must be positive");

        let batch_size: i64 = std::env::var("TRASH_PURGE_BATCH_SIZE")
            .unwrap_or_else(|_| DEFAULT_PURGE_BATCH_SIZE.to_string())
            .parse()
            .expect("TRASH_PURGE_BATCH_SIZE must be a valid i64");
        assert!(batch_size > 0, "TRASH_PURGE_BATCH_SIZE must be positive");

        Self {
            interval_secs,
            batch_size,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`PurgeConfig::from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
            purge: PurgeConfig::from_env(),
        }
    }
}
