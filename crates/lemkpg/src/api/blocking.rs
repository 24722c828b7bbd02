use super::LemkPgAsyncApi;
use crate::builder::{Aggregate, OrderBy, StatementBuilder};
use crate::condition::Condition;
use crate::config::{ConnectionDescriptor, LemkPgConfig, PoolMode};
use crate::error::{LemkPgError, LemkPgResult};
use crate::executor::Executor;
use crate::join::{JoinKind, On};
use crate::value::{FieldMap, SqlValue};
use std::future::Future;
use tokio_postgres::Row;

/// Blocking counterpart of [`LemkPgAsyncApi`].
///
/// Each call starts a current-thread tokio runtime, drives the async
/// operation to completion and drops the runtime again. Connections cannot
/// outlive the runtime that spawned them, so this adapter always opens a
/// pool per call.
///
/// Must not be called from inside an async runtime; doing so returns
/// [`LemkPgError::Runtime`].
#[derive(Debug, Clone)]
pub struct LemkPgApi {
    inner: LemkPgAsyncApi,
}

impl LemkPgApi {
    pub fn new(
        db_name: impl Into<String>,
        db_user: impl Into<String>,
        db_password: impl Into<String>,
        db_host: impl Into<String>,
    ) -> Self {
        Self {
            inner: LemkPgAsyncApi::new(db_name, db_user, db_password, db_host),
        }
    }

    /// Build from a full configuration. A shared pool mode is downgraded to per-call.
    pub fn from_config(config: LemkPgConfig) -> Self {
        if config.executor.pool_mode == PoolMode::Shared {
            tracing::warn!(
                target: "lemkpg",
                "shared pool is not supported by the blocking API, using a pool per call"
            );
        }
        let executor = Executor::per_call(&config.database, config.executor);
        Self {
            inner: LemkPgAsyncApi::from_parts(config.database, executor),
        }
    }

    pub fn descriptor(&self) -> &ConnectionDescriptor {
        self.inner.descriptor()
    }

    pub fn dsn(&self) -> String {
        self.inner.dsn()
    }

    pub fn builder(&self) -> &StatementBuilder {
        self.inner.builder()
    }

    pub fn executor(&self) -> &Executor {
        self.inner.executor()
    }

    /// The async API this adapter drives.
    pub fn as_async(&self) -> &LemkPgAsyncApi {
        &self.inner
    }

    fn run<T>(&self, operation: impl Future<Output = LemkPgResult<T>>) -> LemkPgResult<T> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(LemkPgError::Runtime(
                "blocking call made from inside an async runtime, use LemkPgAsyncApi instead"
                    .to_string(),
            ));
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LemkPgError::Runtime(e.to_string()))?;
        runtime.block_on(operation)
    }

    pub fn create_table(
        &self,
        table_name: &str,
        fields: &FieldMap,
        primary_key: bool,
    ) -> LemkPgResult<bool> {
        self.run(self.inner.create_table(table_name, fields, primary_key))
    }

    pub fn insert(
        &self,
        table_name: &str,
        values: &[SqlValue],
        columns: Option<&[&str]>,
    ) -> LemkPgResult<bool> {
        self.run(self.inner.insert(table_name, values, columns))
    }

    pub fn get_all(&self, table_name: &str, order_by: Option<&OrderBy>) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.get_all(table_name, order_by))
    }

    pub fn get(
        &self,
        table_name: &str,
        fields: &[&str],
        conditions: &[Condition],
        distinct: bool,
        order_by: Option<&OrderBy>,
    ) -> LemkPgResult<Vec<Row>> {
        self.run(
            self.inner
                .get(table_name, fields, conditions, distinct, order_by),
        )
    }

    pub fn update(
        &self,
        table_name: &str,
        fields: &FieldMap,
        conditions: &[Condition],
    ) -> LemkPgResult<bool> {
        self.run(self.inner.update(table_name, fields, conditions))
    }

    pub fn alter_table(
        &self,
        table_name: &str,
        column_name: &str,
        action: &str,
        column_type: Option<&str>,
    ) -> LemkPgResult<bool> {
        self.run(
            self.inner
                .alter_table(table_name, column_name, action, column_type),
        )
    }

    pub fn raw_query(&self, query: &str) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.raw_query(query))
    }

    pub fn get_with_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        join_type: &str,
        fields: &[&str],
        on_condition: &On,
        where_conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.get_with_join(
            table_name,
            join_table_name,
            join_type,
            fields,
            on_condition,
            where_conditions,
        ))
    }

    pub fn get_with_join_kind(
        &self,
        table_name: &str,
        join_table_name: &str,
        join_kind: JoinKind,
        fields: &[&str],
        on_condition: &On,
        where_conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.get_with_join_kind(
            table_name,
            join_table_name,
            join_kind,
            fields,
            on_condition,
            where_conditions,
        ))
    }

    pub fn inner_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.inner_join(
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        ))
    }

    pub fn left_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.left_join(
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        ))
    }

    pub fn right_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.right_join(
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        ))
    }

    pub fn full_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.full_join(
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        ))
    }

    pub fn delete_table(&self, table_name: &str) -> LemkPgResult<bool> {
        self.run(self.inner.delete_table(table_name))
    }

    pub fn clear_table(&self, table_name: &str) -> LemkPgResult<bool> {
        self.run(self.inner.clear_table(table_name))
    }

    pub fn delete_records(&self, table_name: &str, conditions: &[Condition]) -> LemkPgResult<bool> {
        self.run(self.inner.delete_records(table_name, conditions))
    }

    pub fn aggregate(
        &self,
        func: Aggregate,
        table_name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.run(self.inner.aggregate(func, table_name, column, conditions))
    }

    pub fn count(&self, table_name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Count, table_name, column, conditions)
    }

    pub fn avg(&self, table_name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Avg, table_name, column, conditions)
    }

    pub fn sum(&self, table_name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Sum, table_name, column, conditions)
    }

    pub fn min(&self, table_name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Min, table_name, column, conditions)
    }

    pub fn max(&self, table_name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Max, table_name, column, conditions)
    }
}
