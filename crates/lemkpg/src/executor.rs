//! Runs one statement per call.

use crate::client::GenericClient;
use crate::config::{ConnectionDescriptor, ExecutorConfig, PoolMode};
use crate::error::{LemkPgError, LemkPgResult};
use crate::pool::create_pool;
use deadpool_postgres::Pool;
use std::fmt;
use tokio_postgres::Row;

/// Executes assembled statements against the configured database.
///
/// In [`PoolMode::PerCall`] every statement builds a single-connection pool,
/// checks one connection out, runs and then closes the pool. In
/// [`PoolMode::Shared`] one pool lives as long as the executor.
#[derive(Clone)]
pub struct Executor {
    dsn: String,
    config: ExecutorConfig,
    shared: Option<Pool>,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("config", &self.config)
            .field("shared_pool", &self.shared.is_some())
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(descriptor: &ConnectionDescriptor, config: ExecutorConfig) -> LemkPgResult<Self> {
        let dsn = descriptor.dsn();
        let shared = match config.pool_mode {
            PoolMode::Shared => Some(create_pool(&dsn, config.max_pool_size)?),
            PoolMode::PerCall => None,
        };
        Ok(Self {
            dsn,
            config,
            shared,
        })
    }

    /// Executor that always opens a pool per statement, whatever `config.pool_mode` says.
    pub fn per_call(descriptor: &ConnectionDescriptor, mut config: ExecutorConfig) -> Self {
        config.pool_mode = PoolMode::PerCall;
        Self {
            dsn: descriptor.dsn(),
            config,
            shared: None,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run a read statement and return at most its first row.
    pub async fn run_query(&self, sql: &str) -> LemkPgResult<Vec<Row>> {
        self.log_statement("query", sql);
        let checkout = self.checkout().await?;
        first_row(&checkout.client, sql, self.config.swallow_undescribed_results).await
    }

    /// Run a write/DDL statement; `true` once it completes.
    pub async fn run_statement(&self, sql: &str) -> LemkPgResult<bool> {
        self.log_statement("execute", sql);
        let checkout = self.checkout().await?;
        complete(&checkout.client, sql).await
    }

    async fn checkout(&self) -> LemkPgResult<Checkout> {
        match &self.shared {
            Some(pool) => Ok(Checkout {
                client: pool.get().await?,
                transient: None,
            }),
            None => {
                let pool = create_pool(&self.dsn, 1)?;
                let client = pool.get().await?;
                Ok(Checkout {
                    client,
                    transient: Some(pool),
                })
            }
        }
    }

    fn log_statement(&self, kind: &'static str, sql: &str) {
        let shown = match self.config.log_max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        };
        tracing::debug!(
            target: "lemkpg.sql",
            kind,
            pool_mode = ?self.config.pool_mode,
            sql = %shown,
        );
    }
}

/// A checked-out connection; a transient pool is closed when this drops.
struct Checkout {
    client: deadpool_postgres::Client,
    transient: Option<Pool>,
}

impl Drop for Checkout {
    fn drop(&mut self) {
        if let Some(pool) = self.transient.take() {
            pool.close();
        }
    }
}

/// Keep the first row of a read.
///
/// Zero rows yields an empty vector. A statement without a result
/// description yields an empty vector when `swallow_undescribed` is set and
/// [`LemkPgError::NoResultSet`] otherwise. Every other error propagates.
pub async fn first_row<C>(client: &C, sql: &str, swallow_undescribed: bool) -> LemkPgResult<Vec<Row>>
where
    C: GenericClient,
{
    match client.query(sql).await {
        Ok(rows) => Ok(rows.into_iter().take(1).collect()),
        Err(LemkPgError::NoResultSet) if swallow_undescribed => {
            tracing::debug!(target: "lemkpg.sql", "statement described no result set, returning no rows");
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}

/// Run a write/DDL statement to completion.
pub async fn complete<C>(client: &C, sql: &str) -> LemkPgResult<bool>
where
    C: GenericClient,
{
    let affected = client.execute(sql).await?;
    tracing::trace!(target: "lemkpg.sql", affected, "statement completed");
    Ok(true)
}

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Answers every statement with a canned outcome and records what it saw.
    struct Canned {
        query: fn() -> LemkPgResult<Vec<Row>>,
        execute: fn() -> LemkPgResult<u64>,
        seen: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(query: fn() -> LemkPgResult<Vec<Row>>, execute: fn() -> LemkPgResult<u64>) -> Self {
            Self {
                query,
                execute,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl GenericClient for Canned {
        async fn query(&self, sql: &str) -> LemkPgResult<Vec<Row>> {
            self.seen.lock().unwrap().push(sql.to_string());
            (self.query)()
        }

        async fn execute(&self, sql: &str) -> LemkPgResult<u64> {
            self.seen.lock().unwrap().push(sql.to_string());
            (self.execute)()
        }
    }

    fn no_result_set() -> LemkPgResult<Vec<Row>> {
        Err(LemkPgError::NoResultSet)
    }

    fn no_rows() -> LemkPgResult<Vec<Row>> {
        Ok(Vec::new())
    }

    fn pool_down() -> LemkPgResult<Vec<Row>> {
        Err(LemkPgError::Pool("connection refused".to_string()))
    }

    fn three_affected() -> LemkPgResult<u64> {
        Ok(3)
    }

    fn execute_fails() -> LemkPgResult<u64> {
        Err(LemkPgError::Pool("connection refused".to_string()))
    }

    #[tokio::test]
    async fn undescribed_result_is_swallowed() {
        let client = Canned::new(no_result_set, three_affected);
        let rows = first_row(&client, "UPDATE t SET a = '1'", true).await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(*client.seen.lock().unwrap(), vec!["UPDATE t SET a = '1'"]);
    }

    #[tokio::test]
    async fn undescribed_result_surfaces_when_strict() {
        let client = Canned::new(no_result_set, three_affected);
        let err = first_row(&client, "UPDATE t SET a = '1'", false).await.unwrap_err();
        assert!(matches!(err, LemkPgError::NoResultSet));
    }

    #[tokio::test]
    async fn zero_rows_is_empty() {
        let client = Canned::new(no_rows, three_affected);
        let rows = first_row(&client, "SELECT * FROM t", false).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn other_read_errors_propagate() {
        let client = Canned::new(pool_down, three_affected);
        let err = first_row(&client, "SELECT * FROM t", true).await.unwrap_err();
        assert!(matches!(err, LemkPgError::Pool(_)));
    }

    #[tokio::test]
    async fn statements_report_success() {
        let client = Canned::new(no_rows, three_affected);
        assert!(complete(&client, "DELETE FROM t").await.unwrap());
    }

    #[tokio::test]
    async fn statement_errors_propagate() {
        let client = Canned::new(no_rows, execute_fails);
        assert!(complete(&client, "DELETE FROM t").await.is_err());
    }

    #[test]
    fn shared_mode_builds_pool_up_front() {
        let descriptor = ConnectionDescriptor::new("demo_db", "postgres", "pass", "127.0.0.1");
        let executor = Executor::new(&descriptor, ExecutorConfig::new().shared_pool(4)).unwrap();
        let pool = executor.shared.as_ref().expect("shared pool");
        assert_eq!(pool.status().max_size, 4);

        let executor = Executor::new(&descriptor, ExecutorConfig::new()).unwrap();
        assert!(executor.shared.is_none());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
        assert_eq!(truncate_sql_bytes("SELECT 1", 6), "SELECT");
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }
}
