//! DELETE statement builder.

use crate::ident;
use crate::stmt::{Predicate, Statement};
use crate::value::Value;

/// DELETE statement builder. Carries no column values; only the predicate
/// contributes parameters.
#[derive(Debug, Clone)]
pub struct DeleteStmt {
    table: String,
    joins: String,
    predicate: Option<Predicate>,
}

impl DeleteStmt {
    /// Create a DELETE builder targeting `schema.table`.
    pub fn new(schema: &str, table: &str) -> Self {
        Self {
            table: ident::qualify(schema, table),
            joins: String::new(),
            predicate: None,
        }
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
    pub fn build(&self) -> Statement {
        let mut sql = format!("delete from {}", self.table);
        let mut params: Vec<Value> = Vec::new();

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

        tracing::debug!(sql = %sql, params = params.len(), "built delete statement");
        Statement { sql, params }
    }
}
