pub mod connection;
pub mod transformer;

pub use connection::*;
pub use transformer::*;

use serde::Deserialize;

/// Raw `{case, value}` envelope shared by both config wire codecs.
#[derive(Deserialize)]
pub(crate) struct ConfigEnvelope {
    pub(crate) case: String,
    #[serde(default)]
    pub(crate) value: serde_json::Value,
}

/// The backend omits `value` entirely for kinds with no parameters; payload
/// structs still expect an object to fill their defaults from.
pub(crate) fn value_or_empty(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
        v => v,
    }
}
