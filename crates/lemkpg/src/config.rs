//! Connection descriptor and executor configuration.

use crate::error::{LemkPgError, LemkPgResult};
use crate::value::Quoting;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const ENV_DB_NAME: &str = "LEMKPG_DB_NAME";
pub const ENV_DB_USER: &str = "LEMKPG_DB_USER";
pub const ENV_DB_PASSWORD: &str = "LEMKPG_DB_PASSWORD";
pub const ENV_DB_HOST: &str = "LEMKPG_DB_HOST";

/// The four strings identifying a target database.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionDescriptor {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
}

impl ConnectionDescriptor {
    pub fn new(
        db_name: impl Into<String>,
        db_user: impl Into<String>,
        db_password: impl Into<String>,
        db_host: impl Into<String>,
    ) -> Self {
        Self {
            name: db_name.into(),
            user: db_user.into(),
            password: db_password.into(),
            host: db_host.into(),
        }
    }

    /// Read the descriptor from `LEMKPG_DB_NAME`, `LEMKPG_DB_USER`,
    /// `LEMKPG_DB_PASSWORD` and `LEMKPG_DB_HOST`.
    pub fn from_env() -> LemkPgResult<Self> {
        fn var(key: &str) -> LemkPgResult<String> {
            std::env::var(key).map_err(|_| LemkPgError::config(format!("{key} is not set")))
        }
        Ok(Self::new(
            var(ENV_DB_NAME)?,
            var(ENV_DB_USER)?,
            var(ENV_DB_PASSWORD)?,
            var(ENV_DB_HOST)?,
        ))
    }

    /// `dbname=... user=... password=... host=...`
    pub fn dsn(&self) -> String {
        format!(
            "dbname={} user={} password={} host={}",
            self.name, self.user, self.password, self.host
        )
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .finish()
    }
}

/// How the executor obtains a connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolMode {
    /// Build a single-connection pool around every statement and close it after.
    #[default]
    PerCall,
    /// Keep one pool for the lifetime of the API object.
    Shared,
}

/// Executor settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    pub pool_mode: PoolMode,
    /// Pool size used in [`PoolMode::Shared`].
    pub max_pool_size: usize,
    /// Reads that produce no result description return no rows instead of
    /// failing with [`LemkPgError::NoResultSet`].
    pub swallow_undescribed_results: bool,
    /// Quoting applied to condition and update literals.
    pub quoting: Quoting,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub log_max_sql_length: Option<usize>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            pool_mode: PoolMode::PerCall,
            max_pool_size: 16,
            swallow_undescribed_results: true,
            quoting: Quoting::Verbatim,
            log_max_sql_length: Some(200),
        }
    }
}

impl ExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep one pool of `max_size` connections per API object.
    pub fn shared_pool(mut self, max_size: usize) -> Self {
        self.pool_mode = PoolMode::Shared;
        self.max_pool_size = max_size;
        self
    }

    /// Open and close a pool around every statement.
    pub fn per_call_pool(mut self) -> Self {
        self.pool_mode = PoolMode::PerCall;
        self
    }

    /// Surface [`LemkPgError::NoResultSet`] from reads instead of returning no rows.
    pub fn strict_results(mut self) -> Self {
        self.swallow_undescribed_results = false;
        self
    }

    pub fn quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// Double embedded single quotes in condition and update literals.
    pub fn escape_literals(self) -> Self {
        self.quoting(Quoting::Escaped)
    }

    pub fn log_max_sql_length(mut self, len: usize) -> Self {
        self.log_max_sql_length = Some(len);
        self
    }

    pub fn no_log_truncate(mut self) -> Self {
        self.log_max_sql_length = None;
        self
    }
}

/// Everything an API object needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LemkPgConfig {
    pub database: ConnectionDescriptor,
    #[serde(default)]
    pub executor: ExecutorConfig,
}

impl LemkPgConfig {
    pub fn new(database: ConnectionDescriptor) -> Self {
        Self {
            database,
            executor: ExecutorConfig::default(),
        }
    }

    pub fn executor(mut self, executor: ExecutorConfig) -> Self {
        self.executor = executor;
        self
    }

    /// Descriptor from the environment, default executor settings.
    pub fn from_env() -> LemkPgResult<Self> {
        Ok(Self::new(ConnectionDescriptor::from_env()?))
    }

    pub fn from_toml_str(raw: &str) -> LemkPgResult<Self> {
        toml::from_str(raw).map_err(|e| LemkPgError::config(format!("failed to parse config: {e}")))
    }

    pub fn load(path: impl AsRef<Path>) -> LemkPgResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LemkPgError::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ConnectionDescriptor {
        ConnectionDescriptor::new("demo_db", "postgres", "pass", "127.0.0.1")
    }

    #[test]
    fn dsn_is_key_value_form() {
        assert_eq!(
            demo().dsn(),
            "dbname=demo_db user=postgres password=pass host=127.0.0.1"
        );
    }

    #[test]
    fn debug_redacts_password() {
        let dbg = format!("{:?}", demo());
        assert!(!dbg.contains("pass\""));
        assert!(dbg.contains("***"));
        assert!(dbg.contains("demo_db"));
    }

    #[test]
    fn executor_defaults() {
        let config = ExecutorConfig::default();
        assert_eq!(config.pool_mode, PoolMode::PerCall);
        assert!(config.swallow_undescribed_results);
        assert_eq!(config.quoting, Quoting::Verbatim);
        assert_eq!(config.log_max_sql_length, Some(200));
    }

    #[test]
    fn executor_builder() {
        let config = ExecutorConfig::new()
            .shared_pool(4)
            .strict_results()
            .escape_literals()
            .no_log_truncate();
        assert_eq!(config.pool_mode, PoolMode::Shared);
        assert_eq!(config.max_pool_size, 4);
        assert!(!config.swallow_undescribed_results);
        assert_eq!(config.quoting, Quoting::Escaped);
        assert_eq!(config.log_max_sql_length, None);
    }

    #[test]
    fn parses_toml() {
        let config = LemkPgConfig::from_toml_str(
            r#"
            [database]
            name = "demo_db"
            user = "postgres"
            password = "pass"
            host = "127.0.0.1"

            [executor]
            pool_mode = "shared"
            max_pool_size = 8
            quoting = "escaped"
            "#,
        )
        .unwrap();
        assert_eq!(config.database, demo());
        assert_eq!(config.executor.pool_mode, PoolMode::Shared);
        assert_eq!(config.executor.max_pool_size, 8);
        assert_eq!(config.executor.quoting, Quoting::Escaped);
        assert!(config.executor.swallow_undescribed_results);
    }

    #[test]
    fn executor_section_is_optional() {
        let config = LemkPgConfig::from_toml_str(
            r#"
            [database]
            name = "demo_db"
            user = "postgres"
            password = "pass"
            host = "127.0.0.1"
            "#,
        )
        .unwrap();
        assert_eq!(config.executor, ExecutorConfig::default());
    }

    #[test]
    fn missing_database_field_is_config_error() {
        let err = LemkPgConfig::from_toml_str("[database]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, LemkPgError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = LemkPgConfig::load("/nonexistent/lemkpg.toml").unwrap_err();
        assert!(matches!(err, LemkPgError::Config(_)));
    }
}
