//! # Henkan - Transformer and Connection Configuration Core
//!
//! **Henkan** is the configuration and catalog core for a data-anonymization
//! platform. It models heterogeneous "transformer" definitions (rules that
//! anonymize or synthesize a data value, e.g. email, phone number, random
//! integer) and "connection" definitions (e.g. an AWS S3 sink) that are
//! stored and executed by a separate backend.
//!
//! The crate covers the configuration model only: every kind has its own
//! typed parameter shape, all kinds share one `{case, value}` tagged-union
//! wire format, system-provided and user-defined catalogs merge into a
//! single addressable collection, and an editing contract is resolved per
//! kind with correct defaults and validation rules. Nothing here executes a
//! transformer or moves data, and nothing performs I/O: all operations are
//! synchronous, pure transformations over immutable inputs, safe to call
//! concurrently without coordination.
//!
//! ## Core Workflow
//!
//! 1.  **Merge**: hand the backend's system catalog and the account's custom
//!     definitions to [`catalog::merge_transformers`]; system entries are
//!     enriched with registry metadata so both populations present a
//!     uniform interface.
//! 2.  **Edit**: open an [`editor::EditSession`], select a kind (which
//!     resolves its [`editor::EditorContract`] and resets the config to the
//!     kind's default), and edit fields.
//! 3.  **Submit**: the session validates and encodes the edited config back
//!     into the wire shape and builds the create or update request for the
//!     surrounding layer to send.
//!
//! ## Quick Start
//!
//! ```rust
//! use henkan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // The surrounding layer has already fetched both catalogs.
//!     let system: Vec<SystemTransformer> = serde_json::from_str(
//!         r#"[
//!             {"value": "email", "dataType": "string",
//!              "config": {"case": "emailConfig", "value": {}}},
//!             {"value": "uuid", "dataType": "uuid",
//!              "config": {"case": "uuidConfig", "value": {}}}
//!         ]"#,
//!     )?;
//!
//!     let catalog = merge_transformers(&system, vec![]);
//!     assert_eq!(catalog.len(), 2);
//!     assert_eq!(catalog[0].name, "Email");
//!
//!     // Start a new custom transformer from the email kind.
//!     let mut session = EditSession::create();
//!     session.clone_from(&catalog[0]);
//!     session.set_name("Obfuscated Email");
//!
//!     if let TransformerConfig::Email(cfg) = session.config_mut() {
//!         cfg.preserve_domain = true;
//!     }
//!
//!     let request = session.create_request("account-1")?;
//!     assert_eq!(request.source, "email");
//!
//!     // `request` now serializes to the JSON body the backend expects.
//!     println!("{}", serde_json::to_string_pretty(&request)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod kind;
pub mod prelude;
pub mod wire;
