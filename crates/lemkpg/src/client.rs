//! Client trait the executor runs statements through.

use crate::error::{LemkPgError, LemkPgResult};
use tokio_postgres::Row;
use tokio_postgres::error::SqlState;

/// The two round trips the executor needs from a connection.
///
/// Implemented for `tokio_postgres::Client` and pooled
/// `deadpool_postgres::Client`s. Statements carry their literals inline, so
/// no parameters are ever bound.
pub trait GenericClient: Send + Sync {
    /// Run a statement and return its rows.
    ///
    /// A statement that describes no columns (DDL, plain DML) still runs, then
    /// [`LemkPgError::NoResultSet`] is returned. Multi-statement SQL cannot be
    /// prepared; it runs as a batch and also yields `NoResultSet`.
    fn query(&self, sql: &str) -> impl std::future::Future<Output = LemkPgResult<Vec<Row>>> + Send;

    /// Run a statement and return the number of affected rows.
    fn execute(&self, sql: &str) -> impl std::future::Future<Output = LemkPgResult<u64>> + Send;
}

impl GenericClient for tokio_postgres::Client {
    async fn query(&self, sql: &str) -> LemkPgResult<Vec<Row>> {
        let stmt = match self.prepare(sql).await {
            Ok(stmt) => stmt,
            Err(err) if is_multi_statement(&err) => {
                self.batch_execute(sql).await?;
                return Err(LemkPgError::NoResultSet);
            }
            Err(err) => return Err(err.into()),
        };
        if stmt.columns().is_empty() {
            tokio_postgres::Client::execute(self, &stmt, &[]).await?;
            return Err(LemkPgError::NoResultSet);
        }
        Ok(tokio_postgres::Client::query(self, &stmt, &[]).await?)
    }

    async fn execute(&self, sql: &str) -> LemkPgResult<u64> {
        Ok(tokio_postgres::Client::execute(self, sql, &[]).await?)
    }
}

/// The server refuses to prepare more than one command at a time.
fn is_multi_statement(err: &tokio_postgres::Error) -> bool {
    err.as_db_error().is_some_and(|db| {
        *db.code() == SqlState::SYNTAX_ERROR && db.message().contains("multiple commands")
    })
}

impl GenericClient for deadpool_postgres::Client {
    async fn query(&self, sql: &str) -> LemkPgResult<Vec<Row>> {
        let client: &tokio_postgres::Client = self;
        GenericClient::query(client, sql).await
    }

    async fn execute(&self, sql: &str) -> LemkPgResult<u64> {
        let client: &tokio_postgres::Client = self;
        GenericClient::execute(client, sql).await
    }
}
