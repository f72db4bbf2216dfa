//! Tests for the catalog merge engine and definition records.
mod common;
use common::*;
use henkan::prelude::*;

#[test]
fn test_merge_length_and_order() {
    let system = system_transformers(&["email", "uuid", "gender"]);
    let custom = vec![
        custom_definition("t-1", "Scrubbed Email", "email"),
        custom_definition("t-2", "Short Gender", "gender"),
    ];

    let merged = merge_transformers(&system, custom);
    assert_eq!(merged.len(), 5);

    // Custom entries first, in their given order.
    assert_eq!(merged[0].name, "Scrubbed Email");
    assert_eq!(merged[1].name, "Short Gender");
    assert!(merged[0].is_custom());
    assert!(merged[1].is_custom());

    // System entries appended afterward, in their given order.
    assert_eq!(merged[2].source, "email");
    assert_eq!(merged[3].source, "uuid");
    assert_eq!(merged[4].source, "gender");
    assert!(merged[2..].iter().all(|d| d.is_system()));
}

#[test]
fn test_merge_synthesizes_metadata_for_system_entries() {
    let system = system_transformers(&["random_float"]);
    let merged = merge_transformers(&system, vec![]);

    let entry = &merged[0];
    assert_eq!(entry.name, "Random Float");
    assert_eq!(entry.value_type, ValueType::Float);
    assert_eq!(entry.id(), None);
    assert!(entry.description.contains("float"));
}

#[test]
fn test_merge_scenario_shipping_zip() {
    let system = system_transformers(&["email", "uuid"]);
    let custom = vec![custom_definition("t-9", "Shipping Zip", "zipcode")];

    let merged = merge_transformers(&system, custom);
    assert_eq!(merged.len(), 3);

    assert_eq!(merged[0].name, "Shipping Zip");
    assert!(merged[0].is_custom());
    assert_eq!(merged[1].name, "Email");
    assert!(merged[1].is_system());
    assert_eq!(merged[2].name, "UUID");
    assert!(merged[2].is_system());
}

#[test]
fn test_merge_does_not_dedup_by_source() {
    // A custom transformer cloned from a system one legitimately shares its
    // source; both must survive the merge.
    let system = system_transformers(&["email"]);
    let custom = vec![custom_definition("t-1", "Scrubbed Email", "email")];

    let merged = merge_transformers(&system, custom);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].source, "email");
    assert_eq!(merged[1].source, "email");
}

#[test]
fn test_merge_unknown_system_kind_gets_fallback_metadata() {
    // A newer backend may hand over kinds this build does not know; they
    // still surface in the catalog as inert passthrough entries.
    let system = vec![SystemTransformer {
        source: "hologram".to_string(),
        data_type: ValueType::Passthrough,
        config: TransformerConfig::default(),
    }];

    let merged = merge_transformers(&system, vec![]);
    assert_eq!(merged[0].name, "Passthrough");
    assert_eq!(merged[0].source, "hologram");
}

#[test]
fn test_catalog_sources_are_unique_in_first_appearance_order() {
    let system = system_transformers(&["email", "uuid"]);
    let custom = vec![custom_definition("t-1", "Scrubbed Email", "email")];
    let merged = merge_transformers(&system, custom);

    assert_eq!(catalog_sources(&merged), vec!["email", "uuid"]);
}

#[test]
fn test_custom_record_json_roundtrip_into_definition() {
    let json = r#"{
        "id": "8a2f",
        "name": "Shipping Zip",
        "description": "Zip for shipping labels",
        "dataType": "string",
        "source": "zipcode",
        "config": {"case": "zipcodeConfig", "value": {}}
    }"#;

    let record: CustomTransformerRecord = serde_json::from_str(json).unwrap();
    let definition: TransformerDefinition = record.into();

    assert_eq!(definition.id(), Some("8a2f"));
    assert_eq!(definition.origin, Origin::Custom { id: "8a2f".to_string() });
    assert_eq!(definition.source, "zipcode");
    assert_eq!(definition.value_type, ValueType::String);
}

#[test]
fn test_connection_definition_roundtrip() {
    let json = r#"{
        "id": "c-77",
        "name": "prod exports",
        "connectionConfig": {
            "case": "pgConfig",
            "value": {"host": "db.internal", "port": 5433, "name": "prod", "user": "app", "pass": "hunter2"}
        }
    }"#;

    let definition: ConnectionDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(definition.name, "prod exports");
    match &definition.config {
        ConnectionConfig::Postgres(pg) => {
            assert_eq!(pg.host, "db.internal");
            assert_eq!(pg.port, 5433);
        }
        other => panic!("expected postgres config, got {:?}", other),
    }

    let back = serde_json::to_value(&definition).unwrap();
    let reparsed: ConnectionDefinition = serde_json::from_value(back).unwrap();
    assert_eq!(reparsed, definition);
}
