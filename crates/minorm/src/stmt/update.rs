//! UPDATE statement builder.

use crate::ident;
use crate::stmt::{Predicate, Statement};
use crate::value::Value;

/// UPDATE statement builder.
///
/// Column/value pairs accumulate in call order; duplicate column names are not
/// deduplicated, every call emits its own placeholder. Join text accumulates
/// verbatim; the predicate is last-call-wins.
#[derive(Debug, Clone)]
pub struct UpdateStmt {
    table: String,
    sets: Vec<(String, Value)>,
    joins: String,
    predicate: Option<Predicate>,
}

impl UpdateStmt {
    /// Create an UPDATE builder targeting `schema.table`.
    pub fn new(schema: &str, table: &str) -> Self {
        Self {
            table: ident::qualify(schema, table),
            sets: Vec::new(),
            joins: String::new(),
            predicate: None,
        }
    }

    /// Append a column/value pair to the SET list.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.sets.push((column.to_string(), value.into()));
        self
    }

    /// Append raw join-clause text verbatim.
    pub fn join(mut self, clause: &str) -> Self {
        self.joins.push_str(clause);
        self
    }

    /// Set the WHERE predicate. A later call replaces the earlier one.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Serialize to SQL text plus ordered parameters.
    ///
    /// Parameter order: SET values in call order, then predicate parameters.
    pub fn build(&self) -> Statement {
        let mut params: Vec<Value> = self.sets.iter().map(|(_, v)| v.clone()).collect();

        let set_list = self
            .sets
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!("update {} set {}", self.table, set_list);
        // With an empty SET list, drop the dangling space after `set`.
        while sql.ends_with(' ') {
            sql.pop();
        }

        if !self.joins.is_empty() {
            sql.push(' ');
            sql.push_str(&self.joins);
        }
        if let Some(predicate) = &self.predicate {
            sql.push_str(" where ");
            sql.push_str(predicate.text());
            params.extend(predicate.params().iter().cloned());
        }
        sql.push(';');

        tracing::debug!(sql = %sql, params = params.len(), "built update statement");
        Statement { sql, params }
    }
}
