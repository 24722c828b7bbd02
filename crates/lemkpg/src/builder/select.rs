use super::{Aggregate, OrderBy, StatementBuilder, push_list};
use crate::condition::{Condition, where_clause};
use crate::error::LemkPgResult;
use crate::join::{JoinKind, On};

impl StatementBuilder {
    /// `SELECT * FROM <name>[ ORDER BY <col> <dir>]`.
    pub fn select_all(&self, name: &str, order_by: Option<&OrderBy>) -> String {
        let mut sql = format!("SELECT * FROM {name}");
        if let Some(order) = order_by {
            order.write_sql(&mut sql);
        }
        sql
    }

    /// `SELECT [DISTINCT ]<fields> FROM <name>[ WHERE ...][ ORDER BY <col> <dir>]`.
    pub fn select(
        &self,
        name: &str,
        fields: &[&str],
        conditions: &[Condition],
        distinct: bool,
        order_by: Option<&OrderBy>,
    ) -> LemkPgResult<String> {
        let mut sql = String::from("SELECT ");
        if distinct {
            sql.push_str("DISTINCT ");
        }
        push_list(&mut sql, fields);
        sql.push_str(" FROM ");
        sql.push_str(name);
        sql.push_str(&where_clause(conditions, self.quoting)?);
        if let Some(order) = order_by {
            order.write_sql(&mut sql);
        }
        Ok(sql)
    }

    /// `SELECT <fields> FROM <name> <KIND> <join_table> ON <l> <op> <r>[ WHERE ...]`.
    pub fn select_with_join(
        &self,
        name: &str,
        join_table: &str,
        kind: JoinKind,
        fields: &[&str],
        on: &On,
        conditions: &[Condition],
    ) -> LemkPgResult<String> {
        let mut sql = String::from("SELECT ");
        push_list(&mut sql, fields);
        sql.push_str(" FROM ");
        sql.push_str(name);
        sql.push(' ');
        sql.push_str(kind.as_sql());
        sql.push(' ');
        sql.push_str(join_table);
        on.write_sql(&mut sql);
        sql.push_str(&where_clause(conditions, self.quoting)?);
        Ok(sql)
    }

    /// Same as [`select_with_join`](Self::select_with_join) with the kind given
    /// as a string; it must be one of [`JOINS_LIST`](crate::join::JOINS_LIST).
    pub fn select_with_join_str(
        &self,
        name: &str,
        join_table: &str,
        kind: &str,
        fields: &[&str],
        on: &On,
        conditions: &[Condition],
    ) -> LemkPgResult<String> {
        let kind: JoinKind = kind.parse()?;
        self.select_with_join(name, join_table, kind, fields, on, conditions)
    }

    /// Join with a fixed kind where the projection defaults to `*` when
    /// `fields` is unset (or empty) and `all` is true.
    #[allow(clippy::too_many_arguments)]
    pub fn join_with_defaults(
        &self,
        kind: JoinKind,
        name: &str,
        join_table: &str,
        on: &On,
        conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<String> {
        let fields: &[&str] = match fields {
            Some(f) if !f.is_empty() => f,
            _ if all => &["*"],
            _ => &[],
        };
        self.select_with_join(name, join_table, kind, fields, on, conditions)
    }

    pub fn inner_join(
        &self,
        name: &str,
        join_table: &str,
        on: &On,
        conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<String> {
        self.join_with_defaults(JoinKind::Inner, name, join_table, on, conditions, fields, all)
    }

    pub fn left_join(
        &self,
        name: &str,
        join_table: &str,
        on: &On,
        conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<String> {
        self.join_with_defaults(JoinKind::Left, name, join_table, on, conditions, fields, all)
    }

    pub fn right_join(
        &self,
        name: &str,
        join_table: &str,
        on: &On,
        conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<String> {
        self.join_with_defaults(JoinKind::Right, name, join_table, on, conditions, fields, all)
    }

    pub fn full_join(
        &self,
        name: &str,
        join_table: &str,
        on: &On,
        conditions: &[Condition],
        fields: Option<&[&str]>,
        all: bool,
    ) -> LemkPgResult<String> {
        self.join_with_defaults(JoinKind::FullOuter, name, join_table, on, conditions, fields, all)
    }

    /// `SELECT <AGG>(<column>) FROM <name>[ WHERE ...]`.
    pub fn aggregate(
        &self,
        func: Aggregate,
        name: &str,
        column: &str,
        conditions: &[Condition],
    ) -> LemkPgResult<String> {
        Ok(format!(
            "SELECT {func}({column}) FROM {name}{}",
            where_clause(conditions, self.quoting)?
        ))
    }

    pub fn count(&self, name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<String> {
        self.aggregate(Aggregate::Count, name, column, conditions)
    }

    pub fn avg(&self, name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<String> {
        self.aggregate(Aggregate::Avg, name, column, conditions)
    }

    pub fn sum(&self, name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<String> {
        self.aggregate(Aggregate::Sum, name, column, conditions)
    }

    pub fn min(&self, name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<String> {
        self.aggregate(Aggregate::Min, name, column, conditions)
    }

    pub fn max(&self, name: &str, column: &str, conditions: &[Condition]) -> LemkPgResult<String> {
        self.aggregate(Aggregate::Max, name, column, conditions)
    }
}
