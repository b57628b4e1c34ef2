//! # minorm
//!
//! A model-definition-first SQL statement generator for H2 and PostgreSQL.
//!
//! ## Features
//!
//! - **Statement builders**: UPDATE / INSERT / DELETE as chainable builders,
//!   serialized to SQL text plus an ordered parameter list for prepared
//!   statements
//! - **Static metadata**: tables and columns declared in code ([`TableMeta`]),
//!   collected in a [`SchemaRegistry`] at startup
//! - **Dialect strategies**: one [`Dialect`] implementation per database
//!   (Postgres, H2) covering column types, primary-key types, and quoting
//! - **Schema DDL**: `create schema`, `create table if not exists`, and
//!   foreign-key `alter table` statements from the registry
//! - **No execution layer**: the crate produces text and values; binding and
//!   running statements is the caller's concern
//!
//! ## Usage
//!
//! ```
//! use minorm::{Column, ColumnType, Postgres, Predicate, SqlContext, Table};
//!
//! let mut ctx = SqlContext::new("billing", Postgres);
//! ctx.register_table(
//!     Table::new("accounts", Column::new("id", ColumnType::BigInt))
//!         .with_column(Column::new("balance", ColumnType::Decimal)),
//! );
//!
//! // DML
//! let stmt = ctx
//!     .update("accounts")
//!     .set("balance", 100)
//!     .filter(Predicate::eq("id", 7))
//!     .build();
//! assert_eq!(stmt.sql, "update billing.accounts set balance = ? where id = ?;");
//!
//! // DDL
//! let bootstrap = ctx.ddl().create_all().unwrap();
//! assert!(bootstrap[0].sql.starts_with("create schema if not exists billing"));
//! ```

pub mod config;
pub mod context;
pub mod ddl;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod schema;
pub mod stmt;
pub mod value;

pub use config::{DialectKind, OrmConfig};
pub use context::SqlContext;
pub use ddl::SchemaBuilder;
pub use dialect::{Dialect, ENUM_LENGTH, H2, MAX_VARCHAR_LENGTH, Postgres};
pub use error::{OrmError, OrmResult};
pub use schema::{Column, ColumnType, SchemaRegistry, Table, TableMeta, TemporalKind};
pub use stmt::{DeleteStmt, InsertStmt, Predicate, SelectStmt, Statement, UpdateStmt};
pub use value::Value;
