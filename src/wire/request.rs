use crate::catalog::{CustomTransformerRecord, SystemTransformer};
use crate::config::{ConnectionConfig, TransformerConfig};
use crate::error::ValidationError;
use crate::kind::ValueType;
use serde::{Deserialize, Serialize};

/// Create request for a custom transformer definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransformerRequest {
    pub account_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub source: String,
    #[serde(rename = "transformerConfig")]
    pub config: TransformerConfig,
}

/// Full-replace update request for a custom transformer definition. Every
/// editable field is resubmitted; the backend has no partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransformerRequest {
    pub transformer_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "transformerConfig")]
    pub config: TransformerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTransformerRequest {
    pub transformer_id: String,
}

/// Optimistic pre-check that a custom definition name is free for the
/// account. The server remains the authoritative check at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsNameAvailableRequest {
    pub account_id: String,
    pub transformer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsNameAvailableResponse {
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSystemTransformersResponse {
    #[serde(default)]
    pub transformers: Vec<SystemTransformer>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomTransformersResponse {
    #[serde(default)]
    pub transformers: Vec<CustomTransformerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransformerResponse {
    pub transformer: Option<CustomTransformerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransformerResponse {
    pub transformer: Option<CustomTransformerRecord>,
}

/// Create request for a connection definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionRequest {
    pub account_id: String,
    pub name: String,
    #[serde(rename = "connectionConfig")]
    pub config: ConnectionConfig,
}

impl CreateConnectionRequest {
    /// Builds the request after checking the name and the config's required
    /// fields.
    pub fn new(
        account_id: impl Into<String>,
        name: impl Into<String>,
        config: ConnectionConfig,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        config.validate()?;
        Ok(Self {
            account_id: account_id.into(),
            name,
            config,
        })
    }
}

/// Full-replace update request for a connection definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConnectionRequest {
    pub id: String,
    pub name: String,
    #[serde(rename = "connectionConfig")]
    pub config: ConnectionConfig,
}

impl UpdateConnectionRequest {
    /// Builds the request after checking the name and the config's required
    /// fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        config: ConnectionConfig,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        config.validate()?;
        Ok(Self {
            id: id.into(),
            name,
            config,
        })
    }
}

/// Client-side advisory check that `name` does not collide with an already
/// taken name. The comparison is exact; the server applies the same rule
/// authoritatively on submission.
pub fn check_name<'a>(
    name: &str,
    taken: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }
    if taken.into_iter().any(|existing| existing == name) {
        return Err(ValidationError::NameUnavailable {
            name: name.to_string(),
        });
    }
    Ok(())
}
