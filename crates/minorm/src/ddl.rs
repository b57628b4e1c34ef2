//! Schema DDL emission.
//!
//! Emits `create schema`, `create table if not exists`, and
//! `alter table .. add foreign key` statements for the registered tables.
//! Statements are emitted unconditionally; there is no diffing against an
//! existing database.

use crate::dialect::Dialect;
use crate::error::OrmResult;
use crate::ident;
use crate::schema::{SchemaRegistry, Table};
use crate::stmt::Statement;

/// DDL generator scoped to one schema, dialect, and registry.
///
/// Obtained from [`SqlContext::ddl`](crate::SqlContext::ddl).
pub struct SchemaBuilder<'a> {
    schema: &'a str,
    owner: &'a str,
    dialect: &'a dyn Dialect,
    registry: &'a SchemaRegistry,
}

impl<'a> SchemaBuilder<'a> {
    pub(crate) fn new(
        schema: &'a str,
        owner: &'a str,
        dialect: &'a dyn Dialect,
        registry: &'a SchemaRegistry,
    ) -> Self {
        Self {
            schema,
            owner,
            dialect,
            registry,
        }
    }

    /// `create schema if not exists <schema> authorization <owner>;`
    pub fn create_schema(&self) -> Statement {
        let sql = format!(
            "create schema if not exists {} authorization {};",
            self.dialect.quote_ident(self.schema),
            self.dialect.quote_ident(self.owner)
        );
        tracing::debug!(sql = %sql, dialect = self.dialect.name(), "built create schema statement");
        Statement::new(sql)
    }

    /// CREATE TABLE for one table: primary column first, then data columns,
    /// with no trailing separator before the closing parenthesis.
    pub fn create_table(&self, table: &Table) -> OrmResult<Statement> {
        let mut sql = format!(
            "create table if not exists {}(",
            ident::qualify(self.schema, table.name())
        );

        let primary = table.primary();
        sql.push_str(primary.name());
        sql.push(' ');
        sql.push_str(&self.dialect.primary_key_type(primary)?);

        for column in table.columns() {
            sql.push_str(", ");
            sql.push_str(column.name());
            sql.push(' ');
            sql.push_str(&self.dialect.column_type(column)?);
        }
        sql.push_str(");");

        tracing::debug!(sql = %sql, dialect = self.dialect.name(), "built create table statement");
        Ok(Statement::new(sql))
    }

    /// One ALTER TABLE statement per foreign-key column.
    ///
    /// Each references the target table's primary column; targets are resolved
    /// through the registry, so an unregistered target is a
    /// [`TableNotFound`](crate::OrmError::TableNotFound) error. Tables without
    /// foreign keys produce an empty list.
    pub fn alter_table_foreign_keys(&self, table: &Table) -> OrmResult<Vec<Statement>> {
        let mut statements = Vec::new();
        for column in table.all_columns() {
            let Some(target) = column.foreign_key() else {
                continue;
            };
            let target_table = self.registry.table(target)?;
            let sql = format!(
                "alter table {} add foreign key ({}) references {}({});",
                ident::qualify(self.schema, table.name()),
                column.name(),
                ident::qualify(self.schema, target_table.name()),
                target_table.primary().name()
            );
            tracing::debug!(sql = %sql, "built add foreign key statement");
            statements.push(Statement::new(sql));
        }
        Ok(statements)
    }

    /// Full bootstrap script: schema statement, every CREATE TABLE, then every
    /// ALTER TABLE, in registration order.
    pub fn create_all(&self) -> OrmResult<Vec<Statement>> {
        let mut statements = vec![self.create_schema()];
        for table in self.registry.tables() {
            statements.push(self.create_table(table)?);
        }
        for table in self.registry.tables() {
            statements.extend(self.alter_table_foreign_keys(table)?);
        }
        Ok(statements)
    }
}
