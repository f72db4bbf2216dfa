//! Common test utilities for building catalog records and configs.
use henkan::prelude::*;

/// Builds system transformer records for the given kinds, each carrying its
/// kind's default config, the way the backend catalog call returns them.
#[allow(dead_code)]
pub fn system_transformers(sources: &[&str]) -> Vec<SystemTransformer> {
    sources
        .iter()
        .map(|source| SystemTransformer {
            source: source.to_string(),
            data_type: transformer_metadata(Some(source)).value_type,
            config: TransformerConfig::default_for(source),
        })
        .collect()
}

/// Builds a custom-origin definition with the given persisted id, cloned
/// from `source` with that kind's default config.
#[allow(dead_code)]
pub fn custom_definition(id: &str, name: &str, source: &str) -> TransformerDefinition {
    let meta = transformer_metadata(Some(source));
    TransformerDefinition {
        origin: Origin::Custom { id: id.to_string() },
        name: name.to_string(),
        description: format!("Custom transformer based on {}", source),
        value_type: meta.value_type,
        source: source.to_string(),
        config: TransformerConfig::default_for(source),
    }
}

/// A stored AWS S3 connection config using instance-profile credentials and
/// no static access key.
#[allow(dead_code)]
pub fn aws_s3_ec2_role_json() -> &'static str {
    r#"{
        "case": "awsS3Config",
        "value": {
            "bucketArn": "arn:aws:s3:::prod-exports",
            "pathPrefix": "/exports",
            "region": "us-east-1",
            "credentials": { "fromEc2Role": true }
        }
    }"#
}
