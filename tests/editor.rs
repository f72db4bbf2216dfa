//! Tests for editor dispatch, the edit session reset policy, and the
//! submission encoder's invariant checks.
mod common;
use common::*;
use henkan::config::RandomIntConfig;
use henkan::kind::transformer_sources;
use henkan::prelude::*;
use henkan::wire::check_name;

#[test]
fn test_resolve_known_contracts() {
    let gender = resolve_editor("gender");
    assert_eq!(gender.source, "gender");
    assert_eq!(gender.fields.len(), 1);
    assert_eq!(gender.fields[0].name, "abbreviate");
    assert_eq!(gender.fields[0].kind, FieldKind::Toggle);

    let random_string = resolve_editor("random_string");
    let length_field = random_string
        .fields
        .iter()
        .find(|f| f.name == "strLength")
        .unwrap();
    assert_eq!(length_field.kind, FieldKind::Integer { min: 1, max: 100 });
}

#[test]
fn test_unknown_kind_resolves_placeholder() {
    let contract = resolve_editor("quantum_entangle");
    assert!(contract.is_placeholder());
    assert!(contract.fields.is_empty());
    assert_eq!(contract.default_config(), TransformerConfig::default());
    // The placeholder accepts the inert config it hands out.
    assert!(contract.validate(&contract.default_config()).is_ok());
}

#[test]
fn test_every_contract_default_validates() {
    for source in transformer_sources() {
        let contract = resolve_editor(source);
        assert_eq!(contract.source, *source);
        assert!(
            contract.validate(&contract.default_config()).is_ok(),
            "default config of '{}' failed its own validation",
            source
        );
    }
}

#[test]
fn test_integer_field_validation() {
    let contract = resolve_editor("random_int");

    let too_short = TransformerConfig::RandomInt(RandomIntConfig {
        preserve_length: false,
        int_length: 0,
    });
    match contract.validate(&too_short) {
        Err(ValidationError::FieldOutOfRange { field, min, max, found }) => {
            assert_eq!(field, "intLength");
            assert_eq!((min, max, found), (1, 18, 0));
        }
        other => panic!("expected out-of-range error, got {:?}", other),
    }

    let too_long = TransformerConfig::RandomInt(RandomIntConfig {
        preserve_length: false,
        int_length: 19,
    });
    assert!(contract.validate(&too_long).is_err());

    let fine = TransformerConfig::RandomInt(RandomIntConfig {
        preserve_length: true,
        int_length: 12,
    });
    assert!(contract.validate(&fine).is_ok());
}

#[test]
fn test_encode_decode_roundtrip_for_every_kind() {
    for source in transformer_sources() {
        let value = resolve_editor(source).default_config();
        let encoded = encode(source, value.clone()).unwrap();

        let json = serde_json::to_string(&encoded).unwrap();
        let stored: TransformerConfig = serde_json::from_str(&json).unwrap();

        let (decoded_source, decoded_value) = decode(stored);
        assert_eq!(decoded_source, *source);
        assert_eq!(decoded_value, value);
    }
}

#[test]
fn test_encode_rejects_mismatched_shape() {
    let gender_value = TransformerConfig::default_for("gender");
    match encode("email", gender_value) {
        Err(EncodeError::Mismatch {
            kind,
            expected_case,
            found_case,
        }) => {
            assert_eq!(kind, "email");
            assert_eq!(expected_case, "emailConfig");
            assert_eq!(found_case, "genderConfig");
        }
        Ok(_) => panic!("mismatched shape must never be accepted"),
    }
}

#[test]
fn test_kind_switch_resets_edited_value() {
    let mut session = EditSession::create();
    session.select_source("random_int");

    if let TransformerConfig::RandomInt(c) = session.config_mut() {
        c.int_length = 15;
        c.preserve_length = true;
    }

    // Switching kinds discards the previous edit entirely.
    session.select_source("gender");
    assert_eq!(*session.config(), resolve_editor("gender").default_config());

    // Switching back does not resurrect the old edits either.
    session.select_source("random_int");
    assert_eq!(
        *session.config(),
        resolve_editor("random_int").default_config()
    );
}

#[test]
fn test_create_request_from_session() {
    let system = system_transformers(&["email"]);
    let catalog = merge_transformers(&system, vec![]);

    let mut session = EditSession::create();
    session.clone_from(&catalog[0]);
    session.set_name("Scrubbed Email");
    session.set_description("Anonymizes customer emails");

    let request = session.create_request("acc-42").unwrap();
    assert_eq!(request.account_id, "acc-42");
    assert_eq!(request.source, "email");
    assert_eq!(request.value_type, ValueType::String);
    assert_eq!(request.config.case(), "emailConfig");

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["type"], "string");
    assert_eq!(json["transformerConfig"]["case"], "emailConfig");
}

#[test]
fn test_create_request_requires_name() {
    let mut session = EditSession::create();
    session.select_source("uuid");

    match session.create_request("acc-42") {
        Err(SessionError::Validation(ValidationError::MissingField { field })) => {
            assert_eq!(field, "name");
        }
        other => panic!("expected missing name error, got {:?}", other.map(|r| r.name)),
    }
}

#[test]
fn test_create_request_requires_selected_kind() {
    let mut session = EditSession::create();
    session.set_name("No Kind Yet");

    match session.create_request("acc-42") {
        Err(SessionError::Validation(ValidationError::MissingField { field })) => {
            assert_eq!(field, "source");
        }
        other => panic!("expected missing source error, got {:?}", other.map(|r| r.name)),
    }
}

#[test]
fn test_update_request_for_custom_definition() {
    let definition = custom_definition("t-7", "Shipping Zip", "zipcode");
    let mut session = EditSession::edit(&definition).unwrap();
    session.set_name("Billing Zip");

    let request = session.update_request().unwrap();
    assert_eq!(request.transformer_id, "t-7");
    assert_eq!(request.name, "Billing Zip");
    assert_eq!(request.config.case(), "zipcodeConfig");
}

#[test]
fn test_system_definition_cannot_be_edited() {
    let system = system_transformers(&["email"]);
    let catalog = merge_transformers(&system, vec![]);

    match EditSession::edit(&catalog[0]) {
        Err(ValidationError::SystemDefinitionImmutable) => {}
        other => panic!("expected immutable error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_update_request_without_target_is_rejected() {
    let mut session = EditSession::create();
    session.select_source("uuid");
    session.set_name("Fresh UUID");

    match session.update_request() {
        Err(SessionError::Validation(ValidationError::MissingField { field })) => {
            assert_eq!(field, "id");
        }
        other => panic!("expected missing id error, got {:?}", other.map(|r| r.name)),
    }
}

#[test]
fn test_name_availability_check() {
    let taken = ["Scrubbed Email", "Shipping Zip"];

    assert!(check_name("Billing Zip", taken).is_ok());

    match check_name("Shipping Zip", taken) {
        Err(ValidationError::NameUnavailable { name }) => assert_eq!(name, "Shipping Zip"),
        other => panic!("expected unavailable error, got {:?}", other),
    }

    assert_eq!(
        check_name("   ", taken),
        Err(ValidationError::MissingField { field: "name" })
    );
}
