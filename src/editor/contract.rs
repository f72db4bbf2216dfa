use crate::config::TransformerConfig;
use crate::error::ValidationError;
use ahash::AHashMap;
use std::sync::LazyLock;

/// The input widget a field renders as, plus its client-side constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean switch.
    Toggle,
    /// Bounded integer input.
    Integer { min: i64, max: i64 },
    /// Free-form text input.
    Text,
}

/// One editable parameter of a transformer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field inside the config payload.
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
}

/// The editing contract for one transformer kind: its field set, validation
/// rules, and the default value used by "create new" flows.
#[derive(Debug)]
pub struct EditorContract {
    pub source: &'static str,
    pub fields: &'static [FieldSpec],
    validate: fn(&TransformerConfig) -> Result<(), ValidationError>,
}

impl EditorContract {
    /// The default configuration this contract starts an edit from.
    pub fn default_config(&self) -> TransformerConfig {
        TransformerConfig::default_for(self.source)
    }

    /// Checks an edited configuration against this kind's rules.
    pub fn validate(&self, config: &TransformerConfig) -> Result<(), ValidationError> {
        (self.validate)(config)
    }

    /// True for the fallback contract resolved for an unrecognized kind; it
    /// renders an explanatory placeholder and accepts no input.
    pub fn is_placeholder(&self) -> bool {
        self.source.is_empty()
    }
}

/// Resolves the editor contract for a transformer kind.
///
/// Total: an unrecognized kind resolves to the placeholder contract rather
/// than failing, mirroring the metadata registry's fallback policy.
pub fn resolve_editor(source: &str) -> &'static EditorContract {
    REGISTRY.get(source).copied().unwrap_or(&PLACEHOLDER)
}

static REGISTRY: LazyLock<AHashMap<&'static str, &'static EditorContract>> =
    LazyLock::new(|| CONTRACTS.iter().map(|c| (c.source, c)).collect());

static PLACEHOLDER: EditorContract = EditorContract {
    source: "",
    fields: &[],
    validate: accept,
};

fn accept(_: &TransformerConfig) -> Result<(), ValidationError> {
    Ok(())
}

fn check_range(
    field: &'static str,
    found: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if found < min || found > max {
        return Err(ValidationError::FieldOutOfRange {
            field,
            min,
            max,
            found,
        });
    }
    Ok(())
}

fn validate_random_string(config: &TransformerConfig) -> Result<(), ValidationError> {
    if let TransformerConfig::RandomString(c) = config {
        check_range("strLength", c.str_length, 1, 100)?;
    }
    Ok(())
}

fn validate_random_int(config: &TransformerConfig) -> Result<(), ValidationError> {
    if let TransformerConfig::RandomInt(c) = config {
        check_range("intLength", c.int_length, 1, 18)?;
    }
    Ok(())
}

fn validate_random_float(config: &TransformerConfig) -> Result<(), ValidationError> {
    if let TransformerConfig::RandomFloat(c) = config {
        check_range("digitsBeforeDecimal", c.digits_before_decimal, 1, 18)?;
        check_range("digitsAfterDecimal", c.digits_after_decimal, 1, 18)?;
    }
    Ok(())
}

const PRESERVE_LENGTH: FieldSpec = FieldSpec {
    name: "preserveLength",
    label: "Preserve Length",
    description: "Generates an output value with the same length as the input value.",
    kind: FieldKind::Toggle,
};

/// The closed set of editor contracts, one per supported transformer kind.
/// Field labels and descriptions match what the edit sheet renders.
static CONTRACTS: &[EditorContract] = &[
    EditorContract {
        source: "email",
        fields: &[
            FieldSpec {
                name: "preserveDomain",
                label: "Preserve Domain",
                description: "Keeps the domain of the input email and anonymizes only the local part.",
                kind: FieldKind::Toggle,
            },
            PRESERVE_LENGTH,
        ],
        validate: accept,
    },
    EditorContract {
        source: "phone_number",
        fields: &[
            PRESERVE_LENGTH,
            FieldSpec {
                name: "e164Format",
                label: "E164 Format",
                description: "Formats the output phone number to the E164 standard, for example +14155552671.",
                kind: FieldKind::Toggle,
            },
            FieldSpec {
                name: "includeHyphens",
                label: "Include Hyphens",
                description: "Includes hyphens in the output phone number: XXX-XXX-XXXX.",
                kind: FieldKind::Toggle,
            },
        ],
        validate: accept,
    },
    EditorContract {
        source: "int_phone_number",
        fields: &[PRESERVE_LENGTH],
        validate: accept,
    },
    EditorContract {
        source: "first_name",
        fields: &[PRESERVE_LENGTH],
        validate: accept,
    },
    EditorContract {
        source: "last_name",
        fields: &[PRESERVE_LENGTH],
        validate: accept,
    },
    EditorContract {
        source: "full_name",
        fields: &[PRESERVE_LENGTH],
        validate: accept,
    },
    EditorContract {
        source: "uuid",
        fields: &[FieldSpec {
            name: "includeHyphens",
            label: "Include Hyphens",
            description: "Includes hyphens in the generated UUID.",
            kind: FieldKind::Toggle,
        }],
        validate: accept,
    },
    EditorContract {
        source: "passthrough",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "null",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "random_string",
        fields: &[
            PRESERVE_LENGTH,
            FieldSpec {
                name: "strLength",
                label: "String Length",
                description: "Length of the generated string. Ignored when Preserve Length is set.",
                kind: FieldKind::Integer { min: 1, max: 100 },
            },
        ],
        validate: validate_random_string,
    },
    EditorContract {
        source: "random_bool",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "random_int",
        fields: &[
            PRESERVE_LENGTH,
            FieldSpec {
                name: "intLength",
                label: "Integer Length",
                description: "Number of digits in the generated integer. Ignored when Preserve Length is set.",
                kind: FieldKind::Integer { min: 1, max: 18 },
            },
        ],
        validate: validate_random_int,
    },
    EditorContract {
        source: "random_float",
        fields: &[
            PRESERVE_LENGTH,
            FieldSpec {
                name: "digitsBeforeDecimal",
                label: "Digits Before Decimal",
                description: "Number of digits before the decimal point.",
                kind: FieldKind::Integer { min: 1, max: 18 },
            },
            FieldSpec {
                name: "digitsAfterDecimal",
                label: "Digits After Decimal",
                description: "Number of digits after the decimal point.",
                kind: FieldKind::Integer { min: 1, max: 18 },
            },
        ],
        validate: validate_random_float,
    },
    EditorContract {
        source: "gender",
        fields: &[FieldSpec {
            name: "abbreviate",
            label: "Abbreviate",
            description: "Abbreviate the gender to a single character. For example, female would be returned as f.",
            kind: FieldKind::Toggle,
        }],
        validate: accept,
    },
    EditorContract {
        source: "utc_timestamp",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "unix_timestamp",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "street_address",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "city",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "zipcode",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "state",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "full_address",
        fields: &[],
        validate: accept,
    },
    EditorContract {
        source: "credit_card",
        fields: &[FieldSpec {
            name: "validLuhn",
            label: "Valid Luhn",
            description: "Generate a credit card number that passes the luhn check.",
            kind: FieldKind::Toggle,
        }],
        validate: accept,
    },
    EditorContract {
        source: "sha256_hash",
        fields: &[],
        validate: accept,
    },
];
