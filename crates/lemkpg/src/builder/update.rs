use super::StatementBuilder;
use crate::condition::{Condition, where_clause};
use crate::error::LemkPgResult;
use crate::value::FieldMap;

impl StatementBuilder {
    /// `UPDATE <name> SET <col> = '<value>', ...[ WHERE ...]`.
    pub fn update(
        &self,
        name: &str,
        fields: &FieldMap,
        conditions: &[Condition],
    ) -> LemkPgResult<String> {
        let mut sql = format!("UPDATE {name} SET ");
        for (i, (column, value)) in fields.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(column);
            sql.push_str(" = ");
            self.quoting.write_quoted(&mut sql, value);
        }
        sql.push_str(&where_clause(conditions, self.quoting)?);
        Ok(sql)
    }
}
