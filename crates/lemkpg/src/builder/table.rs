use super::StatementBuilder;
use crate::value::FieldMap;

const AUTOINCREMENT_PK: &str = "id SERIAL PRIMARY KEY";

impl StatementBuilder {
    /// `CREATE TABLE IF NOT EXISTS <name> (<col> <type>, ...)`.
    ///
    /// With `with_autoincrement_pk` the column list starts with
    /// `id SERIAL PRIMARY KEY`.
    pub fn create_table(&self, name: &str, fields: &FieldMap, with_autoincrement_pk: bool) -> String {
        let mut columns: Vec<String> = Vec::with_capacity(fields.len() + 1);
        if with_autoincrement_pk {
            columns.push(AUTOINCREMENT_PK.to_string());
        }
        columns.extend(fields.iter().map(|(col, ty)| format!("{col} {ty}")));
        format!("CREATE TABLE IF NOT EXISTS {name} ({})", columns.join(", "))
    }

    /// `ALTER TABLE <name> <action> <column>[ TYPE <new_type>]`.
    pub fn alter_table(
        &self,
        name: &str,
        column: &str,
        action: &str,
        new_type: Option<&str>,
    ) -> String {
        let mut sql = format!("ALTER TABLE {name} {action} {column}");
        if let Some(ty) = new_type.filter(|ty| !ty.is_empty()) {
            sql.push_str(" TYPE ");
            sql.push_str(ty);
        }
        sql
    }

    pub fn drop_table(&self, name: &str) -> String {
        format!("DROP TABLE IF EXISTS {name}")
    }

    pub fn truncate_table(&self, name: &str) -> String {
        format!("TRUNCATE TABLE {name}")
    }
}
