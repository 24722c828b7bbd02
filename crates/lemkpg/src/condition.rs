//! WHERE-clause conditions.
//!
//! A [`Condition`] is a `(column, operator, literal, joiner)` tuple. The first
//! condition of a list has no joiner; every later one is prefixed with its
//! joiner (`AND` / `OR`). Column, operator and joiner are written verbatim,
//! the literal is single-quoted.
//!
//! ```ignore
//! use lemkpg::{Condition, build_conditions};
//!
//! let conds = [
//!     Condition::new("date", "=", "2006-01-05"),
//!     Condition::or("symbol", "=", "A"),
//! ];
//! assert_eq!(
//!     build_conditions(&conds)?.join(" "),
//!     "date = '2006-01-05' OR symbol = 'A'"
//! );
//! ```

use crate::error::{LemkPgError, LemkPgResult};
use crate::value::Quoting;
use serde_json::Value;

pub const AND: &str = "AND";
pub const OR: &str = "OR";

/// A single comparison clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub operator: String,
    pub literal: String,
    pub joiner: Option<String>,
}

impl Condition {
    /// Leading condition (no joiner).
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            literal: literal.into(),
            joiner: None,
        }
    }

    /// Condition joined to the previous one with an arbitrary joiner.
    pub fn joined(
        joiner: impl Into<String>,
        column: impl Into<String>,
        operator: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self {
            joiner: Some(joiner.into()),
            ..Self::new(column, operator, literal)
        }
    }

    /// Condition joined with `AND`.
    pub fn and(
        column: impl Into<String>,
        operator: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self::joined(AND, column, operator, literal)
    }

    /// Condition joined with `OR`.
    pub fn or(
        column: impl Into<String>,
        operator: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self::joined(OR, column, operator, literal)
    }

    fn write_sql(&self, out: &mut String, quoting: Quoting) {
        if let Some(joiner) = &self.joiner {
            out.push_str(joiner);
            out.push(' ');
        }
        out.push_str(&self.column);
        out.push(' ');
        out.push_str(&self.operator);
        out.push(' ');
        quoting.write_quoted(out, &self.literal);
    }
}

impl<'a> From<(&'a str, &'a str, &'a str, Option<&'a str>)> for Condition {
    fn from((column, operator, literal, joiner): (&'a str, &'a str, &'a str, Option<&'a str>)) -> Self {
        Self {
            column: column.to_string(),
            operator: operator.to_string(),
            literal: literal.to_string(),
            joiner: joiner.map(str::to_string),
        }
    }
}

fn check_joiners(conditions: &[Condition]) -> LemkPgResult<()> {
    for (i, cond) in conditions.iter().enumerate() {
        match (i, &cond.joiner) {
            (0, Some(joiner)) => {
                return Err(LemkPgError::invalid_conditions(format!(
                    "first condition on '{}' must not have a joiner, got '{joiner}'",
                    cond.column
                )));
            }
            (i, None) if i > 0 => {
                return Err(LemkPgError::invalid_conditions(format!(
                    "condition {i} on '{}' needs a joiner (e.g. AND / OR)",
                    cond.column
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Render each condition as a fragment, literals written verbatim.
pub fn build_conditions(conditions: &[Condition]) -> LemkPgResult<Vec<String>> {
    build_conditions_with(conditions, Quoting::Verbatim)
}

/// Render each condition as a fragment using the given literal quoting.
pub fn build_conditions_with(
    conditions: &[Condition],
    quoting: Quoting,
) -> LemkPgResult<Vec<String>> {
    check_joiners(conditions)?;
    Ok(conditions
        .iter()
        .map(|cond| {
            let mut s = String::new();
            cond.write_sql(&mut s, quoting);
            s
        })
        .collect())
}

/// ` WHERE <fragments>` or an empty string when there are no conditions.
pub fn where_clause(conditions: &[Condition], quoting: Quoting) -> LemkPgResult<String> {
    if conditions.is_empty() {
        return Ok(String::new());
    }
    let fragments = build_conditions_with(conditions, quoting)?;
    Ok(format!(" WHERE {}", fragments.join(" ")))
}

/// Parse a condition list from loosely typed JSON.
///
/// Expects an array of `[column, operator, literal, joiner]` arrays where
/// `joiner` is a string or `null`. Numeric and boolean literals are
/// stringified.
pub fn conditions_from_json(value: &Value) -> LemkPgResult<Vec<Condition>> {
    let Value::Array(items) = value else {
        return Err(LemkPgError::invalid_conditions(
            "condition list should be an array",
        ));
    };

    let conditions: Vec<Condition> = items
        .iter()
        .enumerate()
        .map(|(i, item)| condition_from_json(i, item))
        .collect::<LemkPgResult<_>>()?;
    check_joiners(&conditions)?;
    Ok(conditions)
}

fn condition_from_json(index: usize, item: &Value) -> LemkPgResult<Condition> {
    let shape_err = || {
        LemkPgError::invalid_conditions(format!(
            "condition {index} should be a [column, operator, value, joiner] array"
        ))
    };

    let Some([column, operator, literal, joiner]) = item.as_array().map(Vec::as_slice) else {
        return Err(shape_err());
    };

    let (Some(column), Some(operator)) = (column.as_str(), operator.as_str()) else {
        return Err(shape_err());
    };
    let literal = match literal {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return Err(shape_err()),
    };
    let joiner = match joiner {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        _ => return Err(shape_err()),
    };

    Ok(Condition {
        column: column.to_string(),
        operator: operator.to_string(),
        literal,
        joiner,
    })
}
