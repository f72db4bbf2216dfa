//! Tests for the kind metadata registry and its fallback policy.
mod common;
use henkan::kind::{connection_sources, transformer_sources};
use henkan::prelude::*;

#[test]
fn test_known_kind_metadata() {
    let meta = transformer_metadata(Some("email"));
    assert_eq!(meta.name, "Email");
    assert_eq!(meta.value_type, ValueType::String);
    assert!(meta.description.contains("email"));

    let meta = transformer_metadata(Some("random_int"));
    assert_eq!(meta.name, "Random Integer");
    assert_eq!(meta.value_type, ValueType::Int64);
}

#[test]
fn test_unknown_kind_falls_back_to_passthrough() {
    let meta = transformer_metadata(Some("quantum_entangle"));
    assert_eq!(meta, KindMetadata::PASSTHROUGH);
    assert_eq!(meta.name, "Passthrough");
    assert_eq!(meta.description, "Passthrough");
    assert_eq!(meta.value_type, ValueType::Passthrough);
}

#[test]
fn test_absent_kind_falls_back_to_passthrough() {
    assert_eq!(transformer_metadata(None), KindMetadata::PASSTHROUGH);
}

#[test]
fn test_every_builtin_kind_has_metadata() {
    for source in transformer_sources() {
        let meta = transformer_metadata(Some(source));
        assert!(!meta.name.is_empty(), "no name for '{}'", source);
        assert!(!meta.description.is_empty(), "no description for '{}'", source);
        // Only the genuine passthrough kind may carry the fallback name.
        if *source != "passthrough" {
            assert_ne!(meta, KindMetadata::PASSTHROUGH, "'{}' hit the fallback", source);
        }
    }
}

#[test]
fn test_value_type_wire_names() {
    assert_eq!(serde_json::to_string(&ValueType::Int64).unwrap(), "\"int64\"");
    assert_eq!(serde_json::to_string(&ValueType::Passthrough).unwrap(), "\"passthrough\"");
    let parsed: ValueType = serde_json::from_str("\"uuid\"").unwrap();
    assert_eq!(parsed, ValueType::Uuid);
    assert_eq!(ValueType::Time.to_string(), "time");
}

#[test]
fn test_connection_metadata() {
    let s3 = connection_metadata(Some("aws_s3"));
    assert_eq!(s3.name, "AWS S3");
    assert!(s3.destination_only);

    let pg = connection_metadata(Some("postgres"));
    assert!(!pg.destination_only);

    assert_eq!(connection_metadata(Some("oracle")), ConnectionKindMetadata::UNKNOWN);
    assert_eq!(connection_metadata(None), ConnectionKindMetadata::UNKNOWN);
    assert_eq!(connection_sources().len(), 3);
}
