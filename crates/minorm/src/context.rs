//! Statement construction entry points, scoped to one schema.

use crate::config::OrmConfig;
use crate::ddl::SchemaBuilder;
use crate::dialect::Dialect;
use crate::error::OrmResult;
use crate::schema::{SchemaRegistry, Table, TableMeta};
use crate::stmt::{DeleteStmt, InsertStmt, SelectStmt, UpdateStmt};

/// Active schema name, owner, dialect, and table registry in one place.
///
/// Every statement builder handed out by a context targets the context's
/// schema. The context itself holds no connection and performs no I/O.
///
/// # Example
/// ```
/// use minorm::{Postgres, Predicate, SqlContext};
///
/// let ctx = SqlContext::new("billing", Postgres);
/// let stmt = ctx
///     .update("accounts")
///     .set("status", "frozen")
///     .filter(Predicate::eq("id", 7))
///     .build();
/// assert_eq!(stmt.sql, "update billing.accounts set status = ? where id = ?;");
/// ```
pub struct SqlContext {
    schema: String,
    owner: String,
    dialect: Box<dyn Dialect>,
    registry: SchemaRegistry,
}

impl SqlContext {
    /// Create a context for a schema. The owner defaults to the schema name;
    /// override it with [`with_owner`](Self::with_owner).
    pub fn new(schema: impl Into<String>, dialect: impl Dialect + 'static) -> Self {
        let schema = schema.into();
        Self {
            owner: schema.clone(),
            schema,
            dialect: Box::new(dialect),
            registry: SchemaRegistry::new(),
        }
    }

    /// Create a context from a loaded configuration.
    pub fn from_config(config: &OrmConfig) -> Self {
        Self {
            schema: config.schema.clone(),
            owner: config.owner().to_string(),
            dialect: config.dialect.dialect(),
            registry: SchemaRegistry::new(),
        }
    }

    /// Set the schema owner used by `create schema .. authorization`.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Replace the table registry wholesale.
    pub fn with_registry(mut self, registry: SchemaRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register a model type's table.
    pub fn register<T: TableMeta>(&mut self) {
        self.registry.register::<T>();
    }

    /// Register a table description.
    pub fn register_table(&mut self, table: Table) {
        self.registry.register_table(table);
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    // ==================== statement builders ====================

    /// Start a SELECT against a raw table name.
    pub fn select(&self, table: &str) -> SelectStmt {
        SelectStmt::new(&self.schema, table)
    }

    /// Start a SELECT against a registered model's table.
    pub fn select_model<T: TableMeta>(&self) -> OrmResult<SelectStmt> {
        let table = self.registry.table_of::<T>()?;
        Ok(SelectStmt::new(&self.schema, table.name()))
    }

    /// Start an UPDATE against a raw table name.
    pub fn update(&self, table: &str) -> UpdateStmt {
        UpdateStmt::new(&self.schema, table)
    }

    /// Start an UPDATE against a registered model's table.
    ///
    /// Fails with [`TableNotFound`](crate::OrmError::TableNotFound) when the
    /// model was never registered.
    pub fn update_model<T: TableMeta>(&self) -> OrmResult<UpdateStmt> {
        let table = self.registry.table_of::<T>()?;
        Ok(UpdateStmt::new(&self.schema, table.name()))
    }

    /// Start an INSERT against a raw table name.
    pub fn insert_into(&self, table: &str) -> InsertStmt {
        InsertStmt::new(&self.schema, table)
    }

    /// Start a DELETE against a raw table name.
    pub fn delete_from(&self, table: &str) -> DeleteStmt {
        DeleteStmt::new(&self.schema, table)
    }

    /// Start a DELETE against a registered model's table.
    pub fn delete_from_model<T: TableMeta>(&self) -> OrmResult<DeleteStmt> {
        let table = self.registry.table_of::<T>()?;
        Ok(DeleteStmt::new(&self.schema, table.name()))
    }

    /// DDL generator for this context's schema, dialect, and registry.
    pub fn ddl(&self) -> SchemaBuilder<'_> {
        SchemaBuilder::new(&self.schema, &self.owner, self.dialect.as_ref(), &self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Postgres;
    use crate::schema::{Column, ColumnType};

    struct Account;

    impl TableMeta for Account {
        fn table_name() -> &'static str {
            "accounts"
        }

        fn table() -> Table {
            Table::new("accounts", Column::new("id", ColumnType::BigInt))
                .with_column(Column::new("balance", ColumnType::Decimal))
        }
    }

    #[test]
    fn builders_are_schema_qualified() {
        let ctx = SqlContext::new("billing", Postgres);
        assert_eq!(
            ctx.insert_into("accounts").set("id", 1).build().sql,
            "insert into billing.accounts (id) values (?);"
        );
        assert_eq!(
            ctx.delete_from("accounts").build().sql,
            "delete from billing.accounts;"
        );
    }

    #[test]
    fn model_builders_require_registration() {
        let mut ctx = SqlContext::new("billing", Postgres);
        assert!(ctx.update_model::<Account>().unwrap_err().is_not_found());
        assert!(ctx.delete_from_model::<Account>().unwrap_err().is_not_found());

        ctx.register::<Account>();
        let stmt = ctx.update_model::<Account>().unwrap().set("balance", 0).build();
        assert_eq!(stmt.sql, "update billing.accounts set balance = ?;");
        let stmt = ctx.delete_from_model::<Account>().unwrap().build();
        assert_eq!(stmt.sql, "delete from billing.accounts;");
    }

    #[test]
    fn owner_defaults_to_schema() {
        let ctx = SqlContext::new("billing", Postgres);
        assert_eq!(ctx.owner(), "billing");
        let ctx = SqlContext::new("billing", Postgres).with_owner("app_owner");
        assert_eq!(ctx.owner(), "app_owner");
    }
}
