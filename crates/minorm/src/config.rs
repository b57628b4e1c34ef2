//! TOML configuration for the active schema and dialect.
//!
//! ```toml
//! schema = "billing"
//! owner = "app_owner"
//! dialect = "postgres"
//! ```
//!
//! String fields support `${VAR}` environment expansion, so deployments can
//! keep one file per environment family rather than per instance.

use crate::dialect::{Dialect, H2, Postgres};
use crate::error::{OrmError, OrmResult};
use crate::ident;
use serde::Deserialize;
use std::path::Path;

/// Which dialect renders column types and DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectKind {
    #[default]
    Postgres,
    H2,
}

impl DialectKind {
    /// Instantiate the dialect strategy.
    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Postgres => Box::new(Postgres),
            Self::H2 => Box::new(H2),
        }
    }
}

/// Loaded configuration: schema name, owner role, dialect.
#[derive(Debug, Clone, Deserialize)]
pub struct OrmConfig {
    /// Active schema name; must be a bare identifier.
    pub schema: String,
    /// Owner role for `create schema .. authorization`; defaults to the schema name.
    pub owner: Option<String>,
    #[serde(default)]
    pub dialect: DialectKind,
}

impl OrmConfig {
    /// Parse, expand `${VAR}` references, and validate.
    pub fn from_toml_str(raw: &str) -> OrmResult<Self> {
        let mut config: OrmConfig = toml::from_str(raw)
            .map_err(|e| OrmError::config(format!("failed to parse config: {e}")))?;
        config.expand_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> OrmResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            OrmError::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Owner role, falling back to the schema name.
    pub fn owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(&self.schema)
    }

    fn expand_env(&mut self) -> OrmResult<()> {
        self.schema = expand_env_vars(&self.schema)?;
        if let Some(owner) = self.owner.as_mut() {
            *owner = expand_env_vars(owner)?;
        }
        Ok(())
    }

    fn validate(&self) -> OrmResult<()> {
        if !ident::is_bare_ident(&self.schema) {
            return Err(OrmError::config(format!(
                "schema must be a bare identifier, got {:?}",
                self.schema
            )));
        }
        if let Some(owner) = &self.owner {
            if owner.trim().is_empty() {
                return Err(OrmError::config("owner must not be empty"));
            }
        }
        Ok(())
    }
}

/// Expand `${VAR}` references against the process environment.
fn expand_env_vars(input: &str) -> OrmResult<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'

            let mut key = String::new();
            let mut closed = false;
            while let Some(&ch) = chars.peek() {
                chars.next();
                if ch == '}' {
                    closed = true;
                    break;
                }
                key.push(ch);
            }

            if !closed {
                return Err(OrmError::config(format!(
                    "unterminated env var reference: ${{{key}"
                )));
            }
            if key.is_empty() {
                return Err(OrmError::config("invalid env var reference: ${}"));
            }

            let value = std::env::var(&key).map_err(|_| {
                OrmError::config(format!("missing env var for config expansion: {key}"))
            })?;
            out.push_str(&value);
            continue;
        }

        out.push(c);
    }

    Ok(out)
}
