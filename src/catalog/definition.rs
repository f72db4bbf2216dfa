use crate::config::{ConnectionConfig, TransformerConfig};
use crate::kind::ValueType;
use serde::{Deserialize, Serialize};

/// Where a transformer definition came from.
///
/// Keeping this as a sum type (rather than an optional id field) means
/// callers cannot accidentally address a system-provided entry for update
/// or deletion: there is simply no identifier to do it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Built-in kind provided by the backend; not independently persisted.
    System,
    /// User-authored definition persisted with its own identifier.
    Custom { id: String },
}

/// A transformer definition as presented in the merged catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformerDefinition {
    pub origin: Origin,
    pub name: String,
    pub description: String,
    pub value_type: ValueType,
    pub source: String,
    pub config: TransformerConfig,
}

impl TransformerDefinition {
    /// The persisted identifier, present only for custom-origin definitions.
    pub fn id(&self) -> Option<&str> {
        match &self.origin {
            Origin::Custom { id } => Some(id),
            Origin::System => None,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self.origin, Origin::System)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.origin, Origin::Custom { .. })
    }
}

/// A system transformer record as handed over by the backend catalog call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemTransformer {
    /// The kind identifier; the backend names this field `value`.
    #[serde(rename = "value")]
    pub source: String,
    #[serde(default)]
    pub data_type: ValueType,
    #[serde(default)]
    pub config: TransformerConfig,
}

/// A persisted custom transformer record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTransformerRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data_type: ValueType,
    pub source: String,
    #[serde(default)]
    pub config: TransformerConfig,
}

impl From<CustomTransformerRecord> for TransformerDefinition {
    fn from(record: CustomTransformerRecord) -> Self {
        TransformerDefinition {
            origin: Origin::Custom { id: record.id },
            name: record.name,
            description: record.description,
            value_type: record.data_type,
            source: record.source,
            config: record.config,
        }
    }
}

/// A persisted connection record. Connections are custom-only: there is no
/// system catalog to merge with, so the record is the definition.
///
/// Whether a given connection kind may be used as a transfer source or only
/// as a destination is enforced by the execution backend; this layer accepts
/// and round-trips either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "connectionConfig")]
    pub config: ConnectionConfig,
}
