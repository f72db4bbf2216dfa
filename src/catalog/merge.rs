use super::{Origin, SystemTransformer, TransformerDefinition};
use crate::kind::transformer_metadata;
use itertools::Itertools;

/// Merges the backend's system transformer catalog with the account's custom
/// definitions into one addressable collection.
///
/// Custom definitions come first, verbatim and in their given order, so the
/// more specific user-authored entries are discoverable first in any list
/// built from the result. Each system record is then synthesized into a
/// system-origin definition with name, description and value type taken from
/// the metadata registry.
///
/// Two entries may legitimately share a `source` (a custom transformer
/// cloned from a system one); no deduplication happens here. Name uniqueness
/// among custom definitions is checked separately at submission time.
pub fn merge_transformers(
    system: &[SystemTransformer],
    custom: Vec<TransformerDefinition>,
) -> Vec<TransformerDefinition> {
    let mut merged = custom;
    merged.reserve(system.len());
    for st in system {
        let meta = transformer_metadata(Some(&st.source));
        merged.push(TransformerDefinition {
            origin: Origin::System,
            name: meta.name.to_string(),
            description: meta.description.to_string(),
            value_type: meta.value_type,
            source: st.source.clone(),
            config: st.config.clone(),
        });
    }
    merged
}

/// Distinct source kinds present in a catalog, in first-appearance order.
pub fn catalog_sources(catalog: &[TransformerDefinition]) -> Vec<&str> {
    catalog
        .iter()
        .map(|def| def.source.as_str())
        .unique()
        .collect()
}
