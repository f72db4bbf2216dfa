use thiserror::Error;

/// Errors raised by the submission encoder's defensive invariant check.
///
/// These indicate a programming error (the editor dispatch handed a value to
/// the encoder under the wrong kind), not bad user input. They should be
/// surfaced loudly and must never reach the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error(
        "Config case '{found_case}' does not belong to kind '{kind}' (expected '{expected_case}')"
    )]
    Mismatch {
        kind: String,
        expected_case: String,
        found_case: String,
    },
}

/// Field-level validation failures reported before a definition is submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The name '{name}' is already in use for this account")]
    NameUnavailable { name: String },

    #[error("Field '{field}' must be between {min} and {max}, but was {found}")]
    FieldOutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        found: i64,
    },

    #[error("Required field '{field}' is missing or empty")]
    MissingField { field: &'static str },

    #[error("System-provided definitions cannot be updated or deleted")]
    SystemDefinitionImmutable,
}

/// Errors produced while turning an edit session into a backend request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
