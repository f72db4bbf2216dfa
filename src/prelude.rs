//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! the henkan crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use henkan::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load the two catalogs (already fetched by the surrounding layer)
//! let system_json = std::fs::read_to_string("path/to/system.json")?;
//! let custom_json = std::fs::read_to_string("path/to/custom.json")?;
//!
//! let system: Vec<SystemTransformer> = serde_json::from_str(&system_json)?;
//! let custom: Vec<CustomTransformerRecord> = serde_json::from_str(&custom_json)?;
//!
//! let catalog = merge_transformers(
//!     &system,
//!     custom.into_iter().map(Into::into).collect(),
//! );
//!
//! for definition in &catalog {
//!     println!("{} ({})", definition.name, definition.source);
//! }
//! # Ok(())
//! # }
//! ```

// Catalog model and merge
pub use crate::catalog::{
    ConnectionDefinition, CustomTransformerRecord, Origin, SystemTransformer,
    TransformerDefinition, catalog_sources, merge_transformers,
};

// Config variants
pub use crate::config::{ConnectionConfig, TransformerConfig};

// Kind metadata registry
pub use crate::kind::{
    ConnectionKindMetadata, KindMetadata, ValueType, connection_metadata, transformer_metadata,
};

// Editor dispatch
pub use crate::editor::{EditSession, EditorContract, FieldKind, FieldSpec, resolve_editor};

// Submission encoding
pub use crate::wire::{decode, encode};

// Error types
pub use crate::error::{EncodeError, SessionError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
