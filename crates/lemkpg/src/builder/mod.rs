//! Statement assembly.
//!
//! Every method on [`StatementBuilder`] is a pure function from its
//! parameters to one complete SQL string. Identifiers (tables, columns,
//! types, actions) are interpolated verbatim and never validated; malformed
//! names surface as database errors when the statement runs.
//!
//! ```ignore
//! use lemkpg::{Condition, StatementBuilder};
//!
//! let b = StatementBuilder::new();
//! let sql = b.select("t", &["a", "b"], &[Condition::new("x", "=", "1")], true, None)?;
//! assert_eq!(sql, "SELECT DISTINCT a, b FROM t WHERE x = '1'");
//! ```

mod delete;
mod insert;
mod select;
mod table;
mod update;


use crate::value::Quoting;
use serde::Deserialize;
use std::fmt;

/// Assembles SQL statements; the only setting is how literals are quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder {
    quoting: Quoting,
}

impl StatementBuilder {
    /// Builder that writes literals verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoting(quoting: Quoting) -> Self {
        Self { quoting }
    }

    pub fn quoting(&self) -> Quoting {
        self.quoting
    }

    /// Passthrough, no assembly.
    pub fn raw(&self, query: &str) -> String {
        query.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// `ORDER BY <column> <direction>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    fn write_sql(&self, out: &mut String) {
        out.push_str(" ORDER BY ");
        out.push_str(&self.column);
        out.push(' ');
        out.push_str(self.direction.as_sql());
    }
}

/// Aggregate functions available to the single-value readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Avg,
    Sum,
    Min,
    Max,
}

impl Aggregate {
    pub fn as_sql(self) -> &'static str {
        match self {
            Aggregate::Count => "COUNT",
            Aggregate::Avg => "AVG",
            Aggregate::Sum => "SUM",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

fn push_list<S: AsRef<str>>(out: &mut String, items: &[S]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item.as_ref());
    }
}
