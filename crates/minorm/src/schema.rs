//! Table and column metadata.
//!
//! Schema descriptions are declared statically (usually through [`TableMeta`])
//! and collected in a [`SchemaRegistry`] at startup. The statement builders and
//! the DDL emitter only ever read them.

use crate::error::{OrmError, OrmResult};
use std::collections::HashMap;

/// Granularity of a [`ColumnType::Temporal`] column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Date,
    Timestamp,
}

/// Semantic column type, independent of any one dialect's SQL keyword for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// Character data; the declared length decides between inline and lob storage.
    Text,
    Date,
    DateTime,
    Decimal,
    Double,
    Integer,
    Boolean,
    /// Stored as a short character column.
    Enum,
    BigInt,
    SmallInt,
    Byte,
    /// Calendar column whose granularity comes from the column's temporal flag.
    Temporal,
    /// Database-specific type named by the metadata; the built-in dialects
    /// reject it during type mapping.
    Custom(String),
}

/// An immutable column description.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    ty: ColumnType,
    length: u32,
    nullable: bool,
    temporal: Option<TemporalKind>,
    references: Option<String>,
}

impl Column {
    /// Create a column description. Columns are nullable by default.
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            length: 0,
            nullable: true,
            temporal: None,
            references: None,
        }
    }

    /// Set the declared length (relevant to text, enum, and string key columns).
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Mark the column as not nullable.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Set the temporal granularity for a [`ColumnType::Temporal`] column.
    pub fn with_temporal(mut self, kind: TemporalKind) -> Self {
        self.temporal = Some(kind);
        self
    }

    /// Declare a foreign key to another table. The target is stored by name and
    /// resolved through the registry when DDL is emitted.
    pub fn references(mut self, table: impl Into<String>) -> Self {
        self.references = Some(table.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> &ColumnType {
        &self.ty
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn temporal_kind(&self) -> Option<TemporalKind> {
        self.temporal
    }

    /// Foreign-key target table name, if any.
    pub fn foreign_key(&self) -> Option<&str> {
        self.references.as_deref()
    }
}

/// A table description: one designated primary column plus ordered data columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    primary: Column,
    columns: Vec<Column>,
}

impl Table {
    /// Create a table description. The primary column is forced non-nullable.
    pub fn new(name: impl Into<String>, primary: Column) -> Self {
        Self {
            name: name.into(),
            primary: Column {
                nullable: false,
                ..primary
            },
            columns: Vec::new(),
        }
    }

    /// Append a data column.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary(&self) -> &Column {
        &self.primary
    }

    /// Data columns, excluding the primary column.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All columns, primary first.
    pub fn all_columns(&self) -> impl Iterator<Item = &Column> {
        std::iter::once(&self.primary).chain(self.columns.iter())
    }
}

/// Statically declared table description for a model type.
///
/// The Rust-side replacement for annotation scanning: each persistent type
/// declares its own schema and the application registers it at startup.
pub trait TableMeta {
    /// The database table name.
    fn table_name() -> &'static str;

    /// Full table description.
    fn table() -> Table;
}

/// Registry of table descriptions, preserving registration order.
///
/// Registration order is also DDL emission order, so output stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: Vec<Table>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model type's table.
    pub fn register<T: TableMeta>(&mut self) {
        self.register_table(T::table());
    }

    /// Register a table description. Re-registering a name replaces the entry
    /// but keeps its original position.
    pub fn register_table(&mut self, table: Table) {
        if let Some(&i) = self.index.get(table.name()) {
            self.tables[i] = table;
        } else {
            self.index.insert(table.name().to_string(), self.tables.len());
            self.tables.push(table);
        }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> OrmResult<&Table> {
        self.index
            .get(name)
            .map(|&i| &self.tables[i])
            .ok_or_else(|| OrmError::table_not_found(name))
    }

    /// Look up a model type's table.
    pub fn table_of<T: TableMeta>(&self) -> OrmResult<&Table> {
        self.table(T::table_name())
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered tables in registration order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
