use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared datatype of the value a transformer kind produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Int64,
    Float,
    Bool,
    Uuid,
    Time,
    Passthrough,
    Null,
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::Passthrough
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueType::String => "string",
            ValueType::Int64 => "int64",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::Uuid => "uuid",
            ValueType::Time => "time",
            ValueType::Passthrough => "passthrough",
            ValueType::Null => "null",
        };
        write!(f, "{}", s)
    }
}

/// Human-readable metadata for a transformer kind.
///
/// Entries are static data referenced by identifier from persisted
/// configurations, so their meaning must stay stable over time. The table is
/// extended only by adding entries, never by mutating existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub value_type: ValueType,
}

impl KindMetadata {
    /// Fallback entry for an unrecognized or absent kind identifier.
    ///
    /// Treating an unknown kind as an inert passthrough is a forward
    /// compatibility feature: an older client can still render a kind that
    /// only a newer backend knows about.
    pub const PASSTHROUGH: KindMetadata = KindMetadata {
        name: "Passthrough",
        description: "Passthrough",
        value_type: ValueType::Passthrough,
    };
}

/// Master macro defining the built-in transformer kind table: the total
/// metadata lookup and the list of known sources.
macro_rules! define_kind_metadata {
    ( $( ($source:literal, $name:literal, $desc:literal, $vt:expr) ),* $(,)? ) => {
        /// Looks up display metadata for a transformer kind.
        ///
        /// Deterministic and total: an unknown or absent `source` yields
        /// [`KindMetadata::PASSTHROUGH`] rather than an error.
        pub fn transformer_metadata(source: Option<&str>) -> KindMetadata {
            match source {
                $( Some($source) => KindMetadata {
                    name: $name,
                    description: $desc,
                    value_type: $vt,
                }, )*
                _ => KindMetadata::PASSTHROUGH,
            }
        }

        /// All built-in transformer kind identifiers, in table order.
        pub fn transformer_sources() -> &'static [&'static str] {
            &[ $( $source, )* ]
        }
    };
}

define_kind_metadata! {
    ("email", "Email", "Anonymizes or generates a new email.", ValueType::String),
    ("phone_number", "Phone Number", "Anonymizes or generates a new phone number. The default format is <XXX-XXX-XXXX>.", ValueType::String),
    ("int_phone_number", "Int64 Phone Number", "Anonymizes or generates a new phone number of type int64 with a default length of 10.", ValueType::Int64),
    ("first_name", "First Name", "Anonymizes or generates a new first name.", ValueType::String),
    ("last_name", "Last Name", "Anonymizes or generates a new last name.", ValueType::String),
    ("full_name", "Full Name", "Anonymizes or generates a new full name consisting of a first and last name.", ValueType::String),
    ("uuid", "UUID", "Generates a new UUIDv4 id.", ValueType::Uuid),
    ("passthrough", "Passthrough", "Passes the input value through to the destination with no changes.", ValueType::Passthrough),
    ("null", "Null", "Inserts a <null> string instead of the source value.", ValueType::Null),
    ("random_string", "Random String", "Creates a randomly ordered alphanumeric string with a default length of 10 unless the String Length or Preserve Length parameters are defined.", ValueType::String),
    ("random_bool", "Random Bool", "Generates a boolean value at random.", ValueType::Bool),
    ("random_int", "Random Integer", "Generates a random integer value with a default length of 4 unless the Integer Length or Preserve Length parameters are defined.", ValueType::Int64),
    ("random_float", "Random Float", "Generates a random float value with a default length of <XX.XXX>.", ValueType::Float),
    ("gender", "Gender", "Randomly generates one of the following genders: female, male, undefined, nonbinary.", ValueType::String),
    ("utc_timestamp", "UTC Timestamp", "Randomly generates a UTC timestamp.", ValueType::Time),
    ("unix_timestamp", "Unix Timestamp", "Randomly generates a Unix timestamp.", ValueType::Int64),
    ("street_address", "Street Address", "Randomly generates a street address in the format: {street_num} {street_address} {street_descriptor}. For example, 123 Main Street.", ValueType::String),
    ("city", "City", "Randomly selects a city from a list of predefined US cities.", ValueType::String),
    ("zipcode", "Zip Code", "Randomly selects a zip code from a list of predefined US cities.", ValueType::String),
    ("state", "State", "Randomly selects a US state and returns the two-character state code.", ValueType::String),
    ("full_address", "Full Address", "Randomly generates a street address in the format: {street_num} {street_address} {street_descriptor} {city}, {state} {zipcode}. For example, 123 Main Street Boston, Massachusetts 02169.", ValueType::String),
    ("credit_card", "Credit Card", "Randomly generates a 16 digit credit card number with an option to generate a luhn valid credit card number.", ValueType::Int64),
    ("sha256_hash", "SHA256 Hash", "SHA256 hashes the input value and returns back a string representation of the hash.", ValueType::String),
}
