use crate::builder::{Aggregate, OrderBy, StatementBuilder};
use crate::condition::Condition;
use crate::config::{ConnectionDescriptor, ExecutorConfig, LemkPgConfig};
use crate::error::LemkPgResult;
use crate::executor::Executor;
use crate::join::{JoinKind, On};
use crate::value::{FieldMap, SqlValue};
use tokio_postgres::Row;

/// Quick access to PostgreSQL from async code.
///
/// Every method assembles one statement, runs it, and returns either the
/// first produced row (reads) or `true` (writes/DDL). Validation errors are
/// returned before any connection is opened.
///
/// ```ignore
/// let db = LemkPgAsyncApi::new("demo_db", "postgres", "pass", "127.0.0.1");
/// db.create_table("demo", &FieldMap::from([("id", "integer"), ("symbol", "text")]), false).await?;
/// let rows = db.get("demo", &["symbol"], &[Condition::new("id", "=", "1")], false, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LemkPgAsyncApi {
    descriptor: ConnectionDescriptor,
    builder: StatementBuilder,
    executor: Executor,
}

impl LemkPgAsyncApi {
    /// Per-call pool, verbatim literals.
    pub fn new(
        db_name: impl Into<String>,
        db_user: impl Into<String>,
        db_password: impl Into<String>,
        db_host: impl Into<String>,
    ) -> Self {
        let descriptor = ConnectionDescriptor::new(db_name, db_user, db_password, db_host);
        let executor = Executor::per_call(&descriptor, ExecutorConfig::default());
        Self {
            descriptor,
            builder: StatementBuilder::new(),
            executor,
        }
    }

    /// Build from a full configuration; a shared pool is created here (without connecting).
    pub fn from_config(config: LemkPgConfig) -> LemkPgResult<Self> {
        let executor = Executor::new(&config.database, config.executor.clone())?;
        Ok(Self::from_parts(config.database, executor))
    }

    pub(crate) fn from_parts(descriptor: ConnectionDescriptor, executor: Executor) -> Self {
        Self {
            builder: StatementBuilder::with_quoting(executor.config().quoting),
            descriptor,
            executor,
        }
    }

    pub fn descriptor(&self) -> &ConnectionDescriptor {
        &self.descriptor
    }

    /// The connection string handed to the driver.
    pub fn dsn(&self) -> String {
        self.descriptor.dsn()
    }

    pub fn builder(&self) -> &StatementBuilder {
        &self.builder
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub async fn create_table(
        &self,
        table_name: &str,
        fields: &FieldMap,
        primary_key: bool,
    ) -> LemkPgResult<bool> {
        let sql = self.builder.create_table(table_name, fields, primary_key);
        self.executor.run_statement(&sql).await
    }

    pub async fn insert(
        &self,
        table_name: &str,
        values: &[SqlValue],
        columns: Option<&[&str]>,
    ) -> LemkPgResult<bool> {
        let sql = self.builder.insert(table_name, values, columns);
        self.executor.run_statement(&sql).await
    }

    pub async fn get_all(
        &self,
        table_name: &str,
        order_by: Option<&OrderBy>,
    ) -> LemkPgResult<Vec<Row>> {
        let sql = self.builder.select_all(table_name, order_by);
        self.executor.run_query(&sql).await
    }

    pub async fn get(
        &self,
        table_name: &str,
        fields: &[&str],
        conditions: &[Condition],
        distinct: bool,
        order_by: Option<&OrderBy>,
    ) -> LemkPgResult<Vec<Row>> {
        let sql = self
            .builder
            .select(table_name, fields, conditions, distinct, order_by)?;
        self.executor.run_query(&sql).await
    }

    pub async fn update(
        &self,
        table_name: &str,
        fields: &FieldMap,
        conditions: &[Condition],
    ) -> LemkPgResult<bool> {
        let sql = self.builder.update(table_name, fields, conditions)?;
        self.executor.run_statement(&sql).await
    }

    pub async fn alter_table(
        &self,
        table_name: &str,
        column_name: &str,
        action: &str,
        column_type: Option<&str>,
    ) -> LemkPgResult<bool> {
        let sql = self
            .builder
            .alter_table(table_name, column_name, action, column_type);
        self.executor.run_statement(&sql).await
    }

    /// Run any SQL as given. Statements without a result set still run and
    /// return no rows; several `;`-separated statements run as one batch.
    pub async fn raw_query(&self, query: &str) -> LemkPgResult<Vec<Row>> {
        let sql = self.builder.raw(query);
        self.executor.run_query(&sql).await
    }

    /// Join with the kind given as a string (see [`JOINS_LIST`](crate::JOINS_LIST)).
    pub async fn get_with_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        join_type: &str,
        fields: &[&str],
        on_condition: &On,
        where_conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        let sql = self.builder.select_with_join_str(
            table_name,
            join_table_name,
            join_type,
            fields,
            on_condition,
            where_conditions,
        )?;
        self.executor.run_query(&sql).await
    }

    pub async fn get_with_join_kind(
        &self,
        table_name: &str,
        join_table_name: &str,
        join_kind: JoinKind,
        fields: &[&str],
        on_condition: &On,
        where_conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        let sql = self.builder.select_with_join(
            table_name,
            join_table_name,
            join_kind,
            fields,
            on_condition,
            where_conditions,
        )?;
        self.executor.run_query(&sql).await
    }

    #[allow(clippy::too_many_arguments)]
    async fn fixed_join(
        &self,
        kind: JoinKind,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        let sql = self.builder.join_with_defaults(
            kind,
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        )?;
        self.executor.run_query(&sql).await
    }

    pub async fn inner_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.fixed_join(
            JoinKind::Inner,
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        )
        .await
    }

    pub async fn left_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.fixed_join(
            JoinKind::Left,
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        )
        .await
    }

    pub async fn right_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.fixed_join(
            JoinKind::Right,
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        )
        .await
    }

    pub async fn full_join(
        &self,
        table_name: &str,
        join_table_name: &str,
        on_condition: &On,
        where_conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<Vec<Row>> {
        self.fixed_join(
            JoinKind::FullOuter,
            table_name,
            join_table_name,
            on_condition,
            where_conditions,
            fields,
            all,
        )
        .await
    }

    /// `DROP TABLE IF EXISTS`.
    pub async fn delete_table(&self, table_name: &str) -> LemkPgResult<bool> {
        let sql = self.builder.drop_table(table_name);
        self.executor.run_statement(&sql).await
    }

    /// `TRUNCATE TABLE`.
    pub async fn clear_table(&self, table_name: &str) -> LemkPgResult<bool> {
        let sql = self.builder.truncate_table(table_name);
        self.executor.run_statement(&sql).await
    }

    pub async fn delete_records(
        &self,
        table_name: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<bool> {
        let sql = self.builder.delete(table_name, conditions)?;
        self.executor.run_statement(&sql).await
    }

    pub async fn aggregate(
        &self,
        func: Aggregate,
        table_name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        let sql = self
            .builder
            .aggregate(func, table_name, column, conditions)?;
        self.executor.run_query(&sql).await
    }

    pub async fn count(
        &self,
        table_name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Count, table_name, column, conditions)
            .await
    }

    pub async fn avg(
        &self,
        table_name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Avg, table_name, column, conditions)
            .await
    }

    pub async fn sum(
        &self,
        table_name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Sum, table_name, column, conditions)
            .await
    }

    pub async fn min(
        &self,
        table_name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Min, table_name, column, conditions)
            .await
    }

    pub async fn max(
        &self,
        table_name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<Vec<Row>> {
        self.aggregate(Aggregate::Max, table_name, column, conditions)
            .await
    }
}
