//! SQL dialect strategies.
//!
//! A [`Dialect`] maps semantic column types to the concrete column-type SQL of
//! one database. The statement builders are dialect-independent (both targets
//! use `?` placeholders), so the dialect only shows up in DDL: column types,
//! primary-key types, and identifier quoting.

use crate::error::{OrmError, OrmResult};
use crate::ident;
use crate::schema::{Column, ColumnType, TemporalKind};
use std::borrow::Cow;

/// Longest text column stored as `varchar`; anything longer becomes `text`.
pub const MAX_VARCHAR_LENGTH: u32 = 516;

/// Storage length for enum columns.
pub const ENUM_LENGTH: u32 = 16;

/// Capability set one database dialect must provide.
pub trait Dialect {
    /// Dialect name, for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Column-type SQL fragment for a data column.
    ///
    /// Fails with [`OrmError::UnsupportedColumnType`] when the column's type has
    /// no mapping in this dialect.
    fn column_type(&self, column: &Column) -> OrmResult<String>;

    /// Column-type SQL fragment for the table's primary column, including the
    /// `primary key` clause.
    fn primary_key_type(&self, column: &Column) -> OrmResult<String>;

    /// Render an identifier, quoting when the name is not a bare identifier.
    fn quote_ident<'a>(&self, name: &'a str) -> Cow<'a, str> {
        ident::quote_ident(name)
    }
}

/// Column-type rows shared by both dialects.
fn common_column_type(column: &Column) -> OrmResult<String> {
    Ok(match column.column_type() {
        ColumnType::Text => {
            // Only text columns carry the nullability suffix.
            let suffix = if column.is_nullable() { "" } else { " not null" };
            if column.length() > MAX_VARCHAR_LENGTH {
                format!("text{suffix}")
            } else {
                format!("varchar({}){suffix}", column.length())
            }
        }
        ColumnType::Date => "date".to_string(),
        ColumnType::DateTime => "timestamp".to_string(),
        ColumnType::Decimal | ColumnType::Double => "decimal".to_string(),
        ColumnType::Integer => "integer".to_string(),
        ColumnType::Boolean => "boolean".to_string(),
        ColumnType::Enum => format!("varchar({ENUM_LENGTH})"),
        ColumnType::BigInt => "bigint".to_string(),
        ColumnType::SmallInt => "smallint".to_string(),
        ColumnType::Byte => "binary".to_string(),
        ColumnType::Temporal => match column.temporal_kind() {
            Some(TemporalKind::Timestamp) => "timestamp".to_string(),
            Some(TemporalKind::Date) | None => "date".to_string(),
        },
        ColumnType::Custom(_) => return Err(OrmError::unsupported_column(column.name())),
    })
}

/// PostgreSQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn column_type(&self, column: &Column) -> OrmResult<String> {
        common_column_type(column)
    }

    fn primary_key_type(&self, column: &Column) -> OrmResult<String> {
        Ok(match column.column_type() {
            ColumnType::Text => format!("varchar({}) primary key", column.length()),
            ColumnType::Integer => "serial primary key".to_string(),
            ColumnType::Custom(_) => return Err(OrmError::unsupported_column(column.name())),
            _ => "bigserial primary key".to_string(),
        })
    }
}

/// H2 dialect.
///
/// Differs from Postgres only in primary-key and enum syntax: H2 has no
/// serial types, and enum columns use `varchar_ignorecase`.
#[derive(Debug, Clone, Copy, Default)]
pub struct H2;

impl Dialect for H2 {
    fn name(&self) -> &'static str {
        "h2"
    }

    fn column_type(&self, column: &Column) -> OrmResult<String> {
        match column.column_type() {
            ColumnType::Enum => Ok(format!("varchar_ignorecase({ENUM_LENGTH})")),
            _ => common_column_type(column),
        }
    }

    fn primary_key_type(&self, column: &Column) -> OrmResult<String> {
        Ok(match column.column_type() {
            ColumnType::Text => format!("varchar({}) primary key", column.length()),
            ColumnType::Integer => "int auto_increment primary key".to_string(),
            ColumnType::Custom(_) => return Err(OrmError::unsupported_column(column.name())),
            _ => "bigint auto_increment primary key".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_col(length: u32, nullable: bool) -> Column {
        let col = Column::new("notes", ColumnType::Text).with_length(length);
        if nullable { col } else { col.not_null() }
    }

    #[test]
    fn text_length_threshold() {
        assert_eq!(Postgres.column_type(&text_col(600, true)).unwrap(), "text");
        assert_eq!(
            Postgres.column_type(&text_col(200, false)).unwrap(),
            "varchar(200) not null"
        );
        assert_eq!(
            Postgres.column_type(&text_col(516, true)).unwrap(),
            "varchar(516)"
        );
        assert_eq!(
            Postgres.column_type(&text_col(517, false)).unwrap(),
            "text not null"
        );
    }

    #[test]
    fn scalar_types() {
        let cases = [
            (ColumnType::Date, "date"),
            (ColumnType::DateTime, "timestamp"),
            (ColumnType::Decimal, "decimal"),
            (ColumnType::Double, "decimal"),
            (ColumnType::Integer, "integer"),
            (ColumnType::Boolean, "boolean"),
            (ColumnType::BigInt, "bigint"),
            (ColumnType::SmallInt, "smallint"),
            (ColumnType::Byte, "binary"),
        ];
        for (ty, expected) in cases {
            let col = Column::new("c", ty);
            assert_eq!(Postgres.column_type(&col).unwrap(), expected);
            assert_eq!(H2.column_type(&col).unwrap(), expected);
        }
    }

    #[test]
    fn temporal_granularity() {
        let plain = Column::new("created", ColumnType::Temporal);
        assert_eq!(Postgres.column_type(&plain).unwrap(), "date");

        let stamped = Column::new("created", ColumnType::Temporal).with_temporal(TemporalKind::Timestamp);
        assert_eq!(Postgres.column_type(&stamped).unwrap(), "timestamp");

        let dated = Column::new("created", ColumnType::Temporal).with_temporal(TemporalKind::Date);
        assert_eq!(Postgres.column_type(&dated).unwrap(), "date");
    }

    #[test]
    fn enum_syntax_diverges() {
        let col = Column::new("status", ColumnType::Enum);
        assert_eq!(Postgres.column_type(&col).unwrap(), "varchar(16)");
        assert_eq!(H2.column_type(&col).unwrap(), "varchar_ignorecase(16)");
    }

    #[test]
    fn custom_type_is_rejected_with_column_name() {
        let col = Column::new("location", ColumnType::Custom("geography".to_string()));
        let err = Postgres.column_type(&col).unwrap_err();
        assert!(err.is_unsupported_type());
        assert!(err.to_string().contains("location"));
        assert!(H2.column_type(&col).is_err());
    }

    #[test]
    fn primary_key_types() {
        let string_pk = Column::new("code", ColumnType::Text).with_length(32);
        assert_eq!(
            Postgres.primary_key_type(&string_pk).unwrap(),
            "varchar(32) primary key"
        );
        assert_eq!(
            H2.primary_key_type(&string_pk).unwrap(),
            "varchar(32) primary key"
        );

        let int_pk = Column::new("id", ColumnType::Integer);
        assert_eq!(Postgres.primary_key_type(&int_pk).unwrap(), "serial primary key");
        assert_eq!(
            H2.primary_key_type(&int_pk).unwrap(),
            "int auto_increment primary key"
        );

        let long_pk = Column::new("id", ColumnType::BigInt);
        assert_eq!(
            Postgres.primary_key_type(&long_pk).unwrap(),
            "bigserial primary key"
        );
        assert_eq!(
            H2.primary_key_type(&long_pk).unwrap(),
            "bigint auto_increment primary key"
        );
    }

    #[test]
    fn quote_ident_default() {
        assert_eq!(Postgres.quote_ident("accounts"), "accounts");
        assert_eq!(Postgres.quote_ident("my table"), r#""my table""#);
    }
}
