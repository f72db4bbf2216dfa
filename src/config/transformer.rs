use super::{ConfigEnvelope, value_or_empty};
use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Master macro defining the transformer config union: the enum itself, the
/// source/case mappings, per-kind defaults, and the `{case, value}` wire
/// codec with the never-fail unknown-case fallback.
macro_rules! define_transformer_configs {
    ( $( ($variant:ident, $config:ty, $source:literal, $case:literal) ),* $(,)? ) => {
        /// One configuration of one transformer kind.
        ///
        /// The case tag and the shape of the payload are mutually consistent
        /// by construction; a payload can never be read under a mismatched
        /// case.
        #[derive(Debug, Clone, PartialEq)]
        pub enum TransformerConfig {
            $( $variant($config), )*
        }

        impl TransformerConfig {
            /// The kind identifier that owns this configuration.
            pub fn source(&self) -> &'static str {
                match self { $( Self::$variant(_) => $source, )* }
            }

            /// The wire case tag for this configuration.
            pub fn case(&self) -> &'static str {
                match self { $( Self::$variant(_) => $case, )* }
            }

            /// Default configuration for a kind.
            ///
            /// An unrecognized `source` yields the Passthrough default,
            /// consistent with the metadata registry's fallback policy.
            pub fn default_for(source: &str) -> Self {
                match source {
                    $( $source => Self::$variant(<$config>::default()), )*
                    _ => Self::Passthrough(PassthroughConfig::default()),
                }
            }

            /// The wire case tag a given kind identifier is expected to
            /// produce. Unrecognized kinds map to the Passthrough case.
            pub fn case_for(source: &str) -> &'static str {
                match source {
                    $( $source => $case, )*
                    _ => "passthroughConfig",
                }
            }
        }

        impl Serialize for TransformerConfig {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut state = serializer.serialize_struct("TransformerConfig", 2)?;
                state.serialize_field("case", self.case())?;
                match self {
                    $( Self::$variant(value) => state.serialize_field("value", value)?, )*
                }
                state.end()
            }
        }

        impl<'de> Deserialize<'de> for TransformerConfig {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let ConfigEnvelope { case, value } = ConfigEnvelope::deserialize(deserializer)?;
                match case.as_str() {
                    $( $case => serde_json::from_value(value_or_empty(value))
                        .map(Self::$variant)
                        .map_err(D::Error::custom), )*
                    // Unknown cases decode as an inert Passthrough so that
                    // older clients keep working against newer backends.
                    _ => Ok(Self::Passthrough(PassthroughConfig::default())),
                }
            }
        }
    };
}

define_transformer_configs! {
    (Email, EmailConfig, "email", "emailConfig"),
    (PhoneNumber, PhoneNumberConfig, "phone_number", "phoneNumberConfig"),
    (IntPhoneNumber, IntPhoneNumberConfig, "int_phone_number", "intPhoneNumberConfig"),
    (FirstName, FirstNameConfig, "first_name", "firstNameConfig"),
    (LastName, LastNameConfig, "last_name", "lastNameConfig"),
    (FullName, FullNameConfig, "full_name", "fullNameConfig"),
    (Uuid, UuidConfig, "uuid", "uuidConfig"),
    (Passthrough, PassthroughConfig, "passthrough", "passthroughConfig"),
    (Null, NullConfig, "null", "nullConfig"),
    (RandomString, RandomStringConfig, "random_string", "randomStringConfig"),
    (RandomBool, RandomBoolConfig, "random_bool", "randomBoolConfig"),
    (RandomInt, RandomIntConfig, "random_int", "randomIntConfig"),
    (RandomFloat, RandomFloatConfig, "random_float", "randomFloatConfig"),
    (Gender, GenderConfig, "gender", "genderConfig"),
    (UtcTimestamp, UtcTimestampConfig, "utc_timestamp", "utcTimestampConfig"),
    (UnixTimestamp, UnixTimestampConfig, "unix_timestamp", "unixTimestampConfig"),
    (StreetAddress, StreetAddressConfig, "street_address", "streetAddressConfig"),
    (City, CityConfig, "city", "cityConfig"),
    (Zipcode, ZipcodeConfig, "zipcode", "zipcodeConfig"),
    (State, StateConfig, "state", "stateConfig"),
    (FullAddress, FullAddressConfig, "full_address", "fullAddressConfig"),
    (CreditCard, CreditCardConfig, "credit_card", "creditCardConfig"),
    (Sha256Hash, Sha256HashConfig, "sha256_hash", "sha256HashConfig"),
}

impl Default for TransformerConfig {
    fn default() -> Self {
        TransformerConfig::Passthrough(PassthroughConfig::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailConfig {
    pub preserve_domain: bool,
    pub preserve_length: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneNumberConfig {
    pub preserve_length: bool,
    pub e164_format: bool,
    pub include_hyphens: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntPhoneNumberConfig {
    pub preserve_length: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FirstNameConfig {
    pub preserve_length: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LastNameConfig {
    pub preserve_length: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FullNameConfig {
    pub preserve_length: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UuidConfig {
    pub include_hyphens: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassthroughConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullConfig {}

/// Parameters for the random string generator. Defaults to a length of 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomStringConfig {
    pub preserve_length: bool,
    pub str_length: i64,
}

impl Default for RandomStringConfig {
    fn default() -> Self {
        Self {
            preserve_length: false,
            str_length: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomBoolConfig {}

/// Parameters for the random integer generator. Defaults to a length of 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomIntConfig {
    pub preserve_length: bool,
    pub int_length: i64,
}

impl Default for RandomIntConfig {
    fn default() -> Self {
        Self {
            preserve_length: false,
            int_length: 4,
        }
    }
}

/// Parameters for the random float generator. Defaults to the `<XX.XXX>`
/// shape: two digits before the decimal point and three after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomFloatConfig {
    pub preserve_length: bool,
    pub digits_before_decimal: i64,
    pub digits_after_decimal: i64,
}

impl Default for RandomFloatConfig {
    fn default() -> Self {
        Self {
            preserve_length: false,
            digits_before_decimal: 2,
            digits_after_decimal: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenderConfig {
    pub abbreviate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestampConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnixTimestampConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetAddressConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipcodeConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullAddressConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditCardConfig {
    pub valid_luhn: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sha256HashConfig {}
