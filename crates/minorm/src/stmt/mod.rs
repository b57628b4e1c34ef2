//! SQL statement builders.
//!
//! One builder type per operation kind, so a single builder can never hold an
//! update target and an insert target at the same time. All builder methods
//! take and return `self` for chaining; [`UpdateStmt::build`] and friends
//! serialize to a [`Statement`] without consuming the builder, so building is
//! repeatable and yields identical output each time.
//!
//! # Usage
//!
//! ```
//! use minorm::{Predicate, UpdateStmt, Value};
//!
//! let stmt = UpdateStmt::new("billing", "accounts")
//!     .set("balance", 100)
//!     .set("status", "active")
//!     .filter(Predicate::new("id = ?").bind(7))
//!     .build();
//!
//! assert_eq!(
//!     stmt.sql,
//!     "update billing.accounts set balance = ?, status = ? where id = ?;"
//! );
//! assert_eq!(stmt.params, vec![Value::Int(100), Value::Text("active".into()), Value::Int(7)]);
//! ```

mod delete;
mod insert;
mod predicate;
mod select;
mod update;

pub use delete::DeleteStmt;
pub use insert::InsertStmt;
pub use predicate::Predicate;
pub use select::SelectStmt;
pub use update::UpdateStmt;

use crate::value::Value;

/// A serialized SQL statement plus its ordered parameter list.
///
/// Parameter order matches `?` placeholders in `sql` left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    /// A statement with no bound parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
