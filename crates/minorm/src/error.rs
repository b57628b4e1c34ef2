//! Error types for minorm

use thiserror::Error;

/// Result type alias for minorm operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for statement and schema generation
#[derive(Debug, Error)]
pub enum OrmError {
    /// A column's semantic type has no mapping in the active dialect
    #[error("Unsupported column type for '{column}'")]
    UnsupportedColumnType { column: String },

    /// Table lookup miss in the schema registry
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Invalid identifier or metadata
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl OrmError {
    /// Create an unsupported-column-type error for a specific column
    pub fn unsupported_column(column: impl Into<String>) -> Self {
        Self::UnsupportedColumnType {
            column: column.into(),
        }
    }

    /// Create a table-not-found error
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound(table.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a table-not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound(_))
    }

    /// Check if this is an unsupported-column-type error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedColumnType { .. })
    }
}
