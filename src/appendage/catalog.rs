//! Opaque catalog resources.
//!
//! Shape and texture catalogs live in the host; this crate only carries
//! their identifiers through copy/mirror/serialize operations and never
//! interprets them.

use serde_json::{Value, json};

use crate::errors::{AppendageError, Result};

/// Identifier of an appendage shape/model in the host's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppendageType {
    id: String,
}

impl AppendageType {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "id": self.id })
    }

    pub fn from_json(doc: &Value) -> Result<Self> {
        let id = doc.get("id").and_then(Value::as_str).ok_or_else(|| {
            AppendageError::MalformedDocument(
                "appendage type document needs a string \"id\" field".to_string(),
            )
        })?;
        Ok(Self::new(id))
    }
}

/// Identifier of a texture resource in the host's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppendageTexture {
    path: String,
}

impl AppendageTexture {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "path": self.path })
    }

    pub fn from_json(doc: &Value) -> Result<Self> {
        let path = doc.get("path").and_then(Value::as_str).ok_or_else(|| {
            AppendageError::MalformedDocument(
                "appendage texture document needs a string \"path\" field".to_string(),
            )
        })?;
        Ok(Self::new(path))
    }
}
