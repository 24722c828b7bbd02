use super::StatementBuilder;
use crate::condition::{Condition, where_clause};
use crate::error::LemkPgResult;

impl StatementBuilder {
    /// `DELETE FROM <name>[ WHERE ...]`. No conditions deletes every row.
    pub fn delete(&self, name: &str, conditions: &[Condition]) -> LemkPgResult<String> {
        Ok(format!(
            "DELETE FROM {name}{}",
            where_clause(conditions, self.quoting)?
        ))
    }
}
