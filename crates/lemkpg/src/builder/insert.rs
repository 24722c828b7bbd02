use super::{StatementBuilder, push_list};
use crate::value::SqlValue;

impl StatementBuilder {
    /// `INSERT INTO <name> [(<col>, ...)] VALUES (<v>, ...)`.
    ///
    /// The column list slot is always surrounded by spaces, so omitting it
    /// leaves two spaces between the table name and `VALUES`.
    pub fn insert(&self, name: &str, values: &[SqlValue], columns: Option<&[&str]>) -> String {
        let mut sql = format!("INSERT INTO {name} ");
        if let Some(columns) = columns.filter(|c| !c.is_empty()) {
            sql.push('(');
            push_list(&mut sql, columns);
            sql.push(')');
        }
        sql.push_str(" VALUES (");
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            value.write_sql(&mut sql);
        }
        sql.push(')');
        sql
    }
}
