use crate::config::{ConnectionConfig, TransformerConfig};
use crate::error::EncodeError;

/// Wraps an edited transformer config for submission under the given kind.
///
/// The value passes through untouched; this is purely the defensive
/// invariant check that the editor contract which produced `config` really
/// was the one dispatched for `source`. A mismatch is a programming error
/// (unreachable under correct dispatch) and is reported loudly rather than
/// silently coerced.
pub fn encode(source: &str, config: TransformerConfig) -> Result<TransformerConfig, EncodeError> {
    let expected = TransformerConfig::case_for(source);
    if config.case() != expected {
        return Err(EncodeError::Mismatch {
            kind: source.to_string(),
            expected_case: expected.to_string(),
            found_case: config.case().to_string(),
        });
    }
    Ok(config)
}

/// The inverse of [`encode`]: yields the kind identifier owning a stored
/// config, for populating an editor.
///
/// Total by construction: a config whose case was unrecognized on the wire
/// has already collapsed to the Passthrough default at deserialization, so
/// there is no failure path here.
pub fn decode(config: TransformerConfig) -> (&'static str, TransformerConfig) {
    (config.source(), config)
}

/// Connection-namespace analog of [`encode`].
pub fn encode_connection(
    source: &str,
    config: ConnectionConfig,
) -> Result<ConnectionConfig, EncodeError> {
    let expected = ConnectionConfig::case_for(source);
    if config.case() != expected {
        return Err(EncodeError::Mismatch {
            kind: source.to_string(),
            expected_case: expected.to_string(),
            found_case: config.case().to_string(),
        });
    }
    Ok(config)
}

/// Connection-namespace analog of [`decode`]. Unknown cases keep their raw
/// payload and report their case tag as the source.
pub fn decode_connection(config: ConnectionConfig) -> (String, ConnectionConfig) {
    (config.source().to_string(), config)
}
