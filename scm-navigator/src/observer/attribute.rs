//! Attribute metadata accepted by observers.

use super::ObserverError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Kind of value an attribute key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// A JSON string.
    String,

    /// A JSON boolean.
    Bool,

    /// A JSON number.
    Number,
}

impl AttributeKind {
    /// Returns the kind as a string for error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "boolean",
            Self::Number => "number",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Bool => value.is_boolean(),
            Self::Number => value.is_number(),
        }
    }
}

/// Set of recognized attribute keys.
///
/// An empty schema accepts any key and value.
#[derive(Debug, Clone, Default)]
pub(crate) struct AttributeSchema {
    kinds: BTreeMap<String, AttributeKind>,
}

impl AttributeSchema {
    pub(crate) fn declare(&mut self, key: impl Into<String>, kind: AttributeKind) {
        self.kinds.insert(key.into(), kind);
    }

    pub(crate) fn check(&self, key: &str, value: &Value) -> Result<(), ObserverError> {
        if self.kinds.is_empty() {
            return Ok(());
        }

        match self.kinds.get(key) {
            None => Err(ObserverError::UnknownAttribute {
                key: key.to_string(),
            }),
            Some(kind) if !kind.accepts(value) => Err(ObserverError::AttributeType {
                key: key.to_string(),
                expected: kind.as_str(),
            }),
            Some(_) => Ok(()),
        }
    }
}
