use super::contract::{EditorContract, resolve_editor};
use crate::catalog::TransformerDefinition;
use crate::config::TransformerConfig;
use crate::error::{SessionError, ValidationError};
use crate::kind::{ValueType, transformer_metadata};
use crate::wire::{CreateTransformerRequest, UpdateTransformerRequest, decode, encode};

enum SessionTarget {
    Create,
    Update { id: String },
}

/// An in-progress edit of a single transformer definition.
///
/// The session owns the one ordering guarantee that matters here: switching
/// the selected kind fully resets the edited config before any further field
/// edit is possible, so a stale-shape value can never reach the encoder.
pub struct EditSession {
    target: SessionTarget,
    name: String,
    description: String,
    source: String,
    value_type: ValueType,
    config: TransformerConfig,
}

impl EditSession {
    /// Starts a blank "create new" session. No kind is selected yet; the
    /// config holds the Passthrough default until one is.
    pub fn create() -> Self {
        Self {
            target: SessionTarget::Create,
            name: String::new(),
            description: String::new(),
            source: String::new(),
            value_type: ValueType::Passthrough,
            config: TransformerConfig::default(),
        }
    }

    /// Opens an existing definition for editing.
    ///
    /// System-origin definitions are rejected: they carry no persisted
    /// identifier and cannot be updated through this layer. To derive a new
    /// custom transformer from one, start a [`create`](Self::create) session
    /// and [`clone_from`](Self::clone_from) it instead.
    pub fn edit(definition: &TransformerDefinition) -> Result<Self, ValidationError> {
        let Some(id) = definition.id() else {
            return Err(ValidationError::SystemDefinitionImmutable);
        };
        let (source, config) = decode(definition.config.clone());
        Ok(Self {
            target: SessionTarget::Update { id: id.to_string() },
            name: definition.name.clone(),
            description: definition.description.clone(),
            source: source.to_string(),
            value_type: definition.value_type,
            config,
        })
    }

    /// Selects a kind, discarding any previously edited config and
    /// re-initializing it to the new kind's editor contract default.
    ///
    /// The discard is unconditional: the two kinds' value shapes are
    /// generally incompatible, and carrying part of the old shape over would
    /// later trip the encoder's case/value invariant.
    pub fn select_source(&mut self, source: &str) {
        self.source = source.to_string();
        self.value_type = transformer_metadata(Some(source)).value_type;
        self.config = resolve_editor(source).default_config();
    }

    /// Selects a catalog entry as the starting point, adopting its source
    /// and config. Same reset semantics as [`select_source`](Self::select_source):
    /// nothing of the previous edit survives.
    pub fn clone_from(&mut self, base: &TransformerDefinition) {
        let (source, config) = decode(base.config.clone());
        self.source = source.to_string();
        self.value_type = base.value_type;
        self.config = config;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Mutable access for field edits. The shape is fixed by the selected
    /// kind; only per-field values should change through this.
    pub fn config_mut(&mut self) -> &mut TransformerConfig {
        &mut self.config
    }

    /// The editor contract for the currently selected kind.
    pub fn contract(&self) -> &'static EditorContract {
        resolve_editor(&self.source)
    }

    /// Validates the session: a selected kind, name presence, plus the
    /// selected kind's field rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source.is_empty() {
            return Err(ValidationError::MissingField { field: "source" });
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        self.contract().validate(&self.config)
    }

    /// Builds the create request for submission.
    pub fn create_request(&self, account_id: &str) -> Result<CreateTransformerRequest, SessionError> {
        self.validate()?;
        let config = encode(&self.source, self.config.clone())?;
        Ok(CreateTransformerRequest {
            account_id: account_id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            value_type: self.value_type,
            source: self.source.clone(),
            config,
        })
    }

    /// Builds the full-replace update request for submission. Every editable
    /// field is resubmitted; there are no partial patch semantics.
    pub fn update_request(&self) -> Result<UpdateTransformerRequest, SessionError> {
        let SessionTarget::Update { id } = &self.target else {
            return Err(ValidationError::MissingField { field: "id" }.into());
        };
        self.validate()?;
        let config = encode(&self.source, self.config.clone())?;
        Ok(UpdateTransformerRequest {
            transformer_id: id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            config,
        })
    }
}
