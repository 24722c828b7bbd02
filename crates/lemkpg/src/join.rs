//! Supported JOIN forms and the `ON` triple.

use crate::error::LemkPgError;
use std::fmt;
use std::str::FromStr;

/// Every join kind accepted by the join assemblers, in display order.
pub const JOINS_LIST: [&str; 4] = ["INNER JOIN", "LEFT JOIN", "RIGHT JOIN", "FULL OUTER JOIN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    FullOuter,
}

impl JoinKind {
    pub const ALL: [JoinKind; 4] = [
        JoinKind::Inner,
        JoinKind::Left,
        JoinKind::Right,
        JoinKind::FullOuter,
    ];

    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::FullOuter => "FULL OUTER JOIN",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for JoinKind {
    type Err = LemkPgError;

    /// Exact match against [`JOINS_LIST`]; spelling and case must agree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JoinKind::ALL
            .into_iter()
            .find(|kind| kind.as_sql() == s)
            .ok_or_else(|| {
                LemkPgError::InvalidJoinKind(format!(
                    "Incorrect JOIN type. Please use one of the valid JOIN types: {}",
                    JOINS_LIST.join(", ")
                ))
            })
    }
}

/// `ON <left> <operator> <right>`, every part written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct On {
    pub left: String,
    pub operator: String,
    pub right: String,
}

impl On {
    pub fn new(
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator: operator.into(),
            right: right.into(),
        }
    }

    /// `left = right`
    pub fn eq(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(left, "=", right)
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        out.push_str(" ON ");
        out.push_str(&self.left);
        out.push(' ');
        out.push_str(&self.operator);
        out.push(' ');
        out.push_str(&self.right);
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for On {
    fn from((left, operator, right): (&'a str, &'a str, &'a str)) -> Self {
        Self::new(left, operator, right)
    }
}
