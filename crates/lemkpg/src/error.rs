//! Error types for lemkpg

use thiserror::Error;

/// Result type alias for lemkpg operations
pub type LemkPgResult<T> = Result<T, LemkPgError>;

/// Error types raised while assembling or executing statements
#[derive(Debug, Error)]
pub enum LemkPgError {
    /// The condition list is malformed (shape or joiner placement)
    #[error("Invalid condition list: {0}")]
    InvalidConditionList(String),

    /// The join kind is not one of the supported JOIN forms
    #[error("{0}")]
    InvalidJoinKind(String),

    /// Statement execution error, passed through from the driver
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// The connection string could not be turned into a driver config
    #[error("Connection error: {0}")]
    Connection(String),

    /// Pool build or checkout error
    #[error("Pool error: {0}")]
    Pool(String),

    /// A read statement produced no result description
    #[error("Statement produced no result set")]
    NoResultSet,

    /// The blocking adapter could not drive the operation
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

impl LemkPgError {
    /// Create an invalid condition list error
    pub fn invalid_conditions(message: impl Into<String>) -> Self {
        Self::InvalidConditionList(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this error was raised before any I/O took place
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidConditionList(_) | Self::InvalidJoinKind(_)
        )
    }

    /// Check if this error came from the database driver
    pub fn is_driver(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// SQLSTATE code reported by the server, if this is a server-side error
    pub fn sql_state(&self) -> Option<&str> {
        match self {
            Self::Query(err) => err.as_db_error().map(|db| db.code().code()),
            _ => None,
        }
    }
}

impl From<deadpool_postgres::PoolError> for LemkPgError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
