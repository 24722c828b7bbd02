//! Literal values and ordered column mappings.

use serde::Deserialize;
use std::fmt;

/// How string literals are written between single quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quoting {
    /// Interpolate the literal as-is. Callers are responsible for avoiding injection.
    #[default]
    Verbatim,
    /// Double embedded single quotes, producing a standard SQL string literal.
    Escaped,
}

impl Quoting {
    /// Write `'literal'` into `out` according to this quoting style.
    pub fn write_quoted(self, out: &mut String, literal: &str) {
        out.push('\'');
        match self {
            Quoting::Verbatim => out.push_str(literal),
            Quoting::Escaped => push_escaped(out, literal),
        }
        out.push('\'');
    }
}

fn push_escaped(out: &mut String, literal: &str) {
    for ch in literal.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
}

/// A value written into an `INSERT ... VALUES (...)` list.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    /// Append the SQL literal form of this value.
    ///
    /// Text is always quoted with embedded `'` doubled, regardless of [`Quoting`].
    pub fn write_sql(&self, out: &mut String) {
        match self {
            SqlValue::Null => out.push_str("NULL"),
            SqlValue::Bool(true) => out.push_str("TRUE"),
            SqlValue::Bool(false) => out.push_str("FALSE"),
            SqlValue::Int(v) => out.push_str(&v.to_string()),
            SqlValue::Float(v) if v.is_nan() => out.push_str("'NaN'"),
            SqlValue::Float(v) if v.is_infinite() => {
                out.push_str(if v.is_sign_positive() { "'Infinity'" } else { "'-Infinity'" })
            }
            SqlValue::Float(v) => out.push_str(&v.to_string()),
            SqlValue::Text(s) => Quoting::Escaped.write_quoted(out, s),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.write_sql(&mut s);
        f.write_str(&s)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SqlValue {
                fn from(v: $t) -> Self {
                    SqlValue::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for SqlValue {
    /// Keeps the shortest decimal form of the `f32`, so `0.1f32` stays `0.1`.
    fn from(v: f32) -> Self {
        let widened = v.to_string().parse().unwrap_or(f64::from(v));
        SqlValue::Float(widened)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

/// Ordered column -> string mapping.
///
/// Used both for table definitions (column -> type) and for updates
/// (column -> new literal). Iteration follows insertion order; inserting an
/// existing column replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column entry (consuming version, for chaining).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Insert or replace a column entry.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_keeps_quotes() {
        let mut s = String::new();
        Quoting::Verbatim.write_quoted(&mut s, "it's");
        assert_eq!(s, "'it's'");
    }

    #[test]
    fn escaped_doubles_quotes() {
        let mut s = String::new();
        Quoting::Escaped.write_quoted(&mut s, "it's");
        assert_eq!(s, "'it''s'");
    }

    #[test]
    fn values_render_as_literals() {
        assert_eq!(SqlValue::from(1).to_string(), "1");
        assert_eq!(SqlValue::from(1.5).to_string(), "1.5");
        assert_eq!(SqlValue::from("a").to_string(), "'a'");
        assert_eq!(SqlValue::from(true).to_string(), "TRUE");
        assert_eq!(SqlValue::from(None::<i32>).to_string(), "NULL");
        assert_eq!(SqlValue::from("O'Neil").to_string(), "'O''Neil'");
    }

    #[test]
    fn non_finite_floats_are_quoted() {
        assert_eq!(SqlValue::from(f64::NAN).to_string(), "'NaN'");
        assert_eq!(SqlValue::from(f64::INFINITY).to_string(), "'Infinity'");
        assert_eq!(SqlValue::from(f64::NEG_INFINITY).to_string(), "'-Infinity'");
        assert_eq!(SqlValue::from(f32::NAN).to_string(), "'NaN'");
        assert_eq!(SqlValue::from(f32::NEG_INFINITY).to_string(), "'-Infinity'");
    }

    #[test]
    fn f32_keeps_its_shortest_form() {
        assert_eq!(SqlValue::from(0.1f32).to_string(), "0.1");
        assert_eq!(SqlValue::from(2.5f32).to_string(), "2.5");
        assert_eq!(SqlValue::from(-3.75f32), SqlValue::Float(-3.75));
    }

    #[test]
    fn field_map_keeps_insertion_order() {
        let map = FieldMap::from([("date", "text"), ("id", "integer"), ("symbol", "text")]);
        let cols: Vec<&str> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, vec!["date", "id", "symbol"]);
    }

    #[test]
    fn field_map_replaces_in_place() {
        let mut map = FieldMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
        assert_eq!(map.get("a"), Some("3"));
    }
}
