//! SELECT statement builder.

use crate::ident;
use crate::stmt::{Predicate, Statement};
use crate::value::Value;

/// SELECT statement builder.
///
/// Projects `*` until columns are named. Join text accumulates verbatim, the
/// predicate is last-call-wins, ordering and limit are optional tail clauses.
#[derive(Debug, Clone)]
pub struct SelectStmt {
    table: String,
    columns: Vec<String>,
    joins: String,
    predicate: Option<Predicate>,
    order_by: Option<String>,
    limit: Option<u64>,
}

impl SelectStmt {
    /// Create a SELECT builder targeting `schema.table`.
    pub fn new(schema: &str, table: &str) -> Self {
        Self {
            table: ident::qualify(schema, table),
            columns: Vec::new(),
            joins: String::new(),
            predicate: None,
            order_by: None,
            limit: None,
        }
    }

    /// Add a projected column. Without any, the statement projects `*`.
    pub fn column(mut self, column: &str) -> Self {
        self.columns.push(column.to_string());
        self
    }

    /// Add several projected columns.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns.extend(columns.iter().map(|c| c.to_string()));
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

    /// Set the ORDER BY clause text. A later call replaces the earlier one.
    pub fn order_by(mut self, clause: &str) -> Self {
        self.order_by = Some(clause.to_string());
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Serialize to SQL text plus ordered parameters.
    pub fn build(&self) -> Statement {
        let projection = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("select {} from {}", projection, self.table);
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
        if let Some(order) = &self.order_by {
            sql.push_str(" order by ");
            sql.push_str(order);
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" limit {limit}"));
        }
        sql.push(';');

        tracing::debug!(sql = %sql, params = params.len(), "built select statement");
        Statement { sql, params }
    }
}
