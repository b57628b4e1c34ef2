//! INSERT statement builder.

use crate::ident;
use crate::stmt::Statement;
use crate::value::Value;

/// INSERT statement builder.
///
/// The column list and the values list stay in call order; no join or
/// predicate applies to an insert.
#[derive(Debug, Clone)]
pub struct InsertStmt {
    table: String,
    columns: Vec<String>,
    values: Vec<Value>,
}

impl InsertStmt {
    /// Create an INSERT builder targeting `schema.table`.
    pub fn new(schema: &str, table: &str) -> Self {
        Self {
            table: ident::qualify(schema, table),
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append a column/value pair.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.columns.push(column.to_string());
        self.values.push(value.into());
        self
    }

    /// Serialize to SQL text plus ordered parameters.
    pub fn build(&self) -> Statement {
        let sql = if self.columns.is_empty() {
            format!("insert into {} default values;", self.table)
        } else {
            format!(
                "insert into {} ({}) values ({});",
                self.table,
                self.columns.join(","),
                vec!["?"; self.columns.len()].join(",")
            )
        };
        let params = self.values.clone();

        tracing::debug!(sql = %sql, params = params.len(), "built insert statement");
        Statement { sql, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_two_columns() {
        let stmt = InsertStmt::new("billing", "accounts")
            .set("id", 1)
            .set("balance", 0)
            .build();
        assert_eq!(
            stmt.sql,
            "insert into billing.accounts (id,balance) values (?,?);"
        );
        assert_eq!(stmt.params, vec![Value::Int(1), Value::Int(0)]);
    }

    #[test]
    fn column_and_value_lists_match() {
        let stmt = InsertStmt::new("billing", "accounts")
            .set("id", 1)
            .set("name", "alice")
            .set("active", true)
            .build();
        assert_eq!(stmt.sql.matches('?').count(), 3);
        assert_eq!(stmt.params.len(), 3);
    }

    #[test]
    fn empty_insert_uses_default_values() {
        let stmt = InsertStmt::new("billing", "accounts").build();
        assert_eq!(stmt.sql, "insert into billing.accounts default values;");
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn null_value_binds_as_parameter() {
        let stmt = InsertStmt::new("billing", "accounts")
            .set("id", 1)
            .set("closed_on", None::<chrono::NaiveDate>)
            .build();
        assert_eq!(
            stmt.sql,
            "insert into billing.accounts (id,closed_on) values (?,?);"
        );
        assert_eq!(stmt.params, vec![Value::Int(1), Value::Null]);
    }
}
