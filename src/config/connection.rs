use super::{ConfigEnvelope, value_or_empty};
use crate::error::ValidationError;
use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One configuration of one connection kind.
///
/// Structurally the same tagged union as
/// [`TransformerConfig`](super::TransformerConfig), over the separate
/// connection kind namespace. Connections have no passthrough analog, so an
/// unrecognized case is kept verbatim in [`ConnectionConfig::Unknown`] and
/// re-serialized unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionConfig {
    AwsS3(AwsS3ConnectionConfig),
    Postgres(PostgresConnectionConfig),
    Mysql(MysqlConnectionConfig),
    /// A case this build does not know about; the raw payload is carried
    /// through so the record still round-trips.
    Unknown {
        case: String,
        value: serde_json::Value,
    },
}

impl ConnectionConfig {
    /// The kind identifier that owns this configuration. For an unknown case
    /// this is the raw case tag itself.
    pub fn source(&self) -> &str {
        match self {
            ConnectionConfig::AwsS3(_) => "aws_s3",
            ConnectionConfig::Postgres(_) => "postgres",
            ConnectionConfig::Mysql(_) => "mysql",
            ConnectionConfig::Unknown { case, .. } => case,
        }
    }

    /// The wire case tag for this configuration.
    pub fn case(&self) -> &str {
        match self {
            ConnectionConfig::AwsS3(_) => "awsS3Config",
            ConnectionConfig::Postgres(_) => "pgConfig",
            ConnectionConfig::Mysql(_) => "mysqlConfig",
            ConnectionConfig::Unknown { case, .. } => case,
        }
    }

    /// Default configuration for a connection kind. Unknown kinds get an
    /// empty payload under their own case tag.
    pub fn default_for(source: &str) -> Self {
        match source {
            "aws_s3" => ConnectionConfig::AwsS3(AwsS3ConnectionConfig::default()),
            "postgres" => ConnectionConfig::Postgres(PostgresConnectionConfig::default()),
            "mysql" => ConnectionConfig::Mysql(MysqlConnectionConfig::default()),
            other => ConnectionConfig::Unknown {
                case: other.to_string(),
                value: serde_json::Value::Object(serde_json::Map::new()),
            },
        }
    }

    /// The wire case tag a given connection kind is expected to produce.
    pub fn case_for(source: &str) -> &str {
        match source {
            "aws_s3" => "awsS3Config",
            "postgres" => "pgConfig",
            "mysql" => "mysqlConfig",
            other => other,
        }
    }

    /// Checks the per-kind required fields. An S3 connection must name its
    /// bucket; the database kinds and unknown cases have no required fields
    /// at this layer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ConnectionConfig::AwsS3(config) if config.bucket_arn.trim().is_empty() => {
                Err(ValidationError::MissingField { field: "bucketArn" })
            }
            _ => Ok(()),
        }
    }
}

impl Serialize for ConnectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ConnectionConfig", 2)?;
        state.serialize_field("case", self.case())?;
        match self {
            ConnectionConfig::AwsS3(value) => state.serialize_field("value", value)?,
            ConnectionConfig::Postgres(value) => state.serialize_field("value", value)?,
            ConnectionConfig::Mysql(value) => state.serialize_field("value", value)?,
            ConnectionConfig::Unknown { value, .. } => state.serialize_field("value", value)?,
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for ConnectionConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ConfigEnvelope { case, value } = ConfigEnvelope::deserialize(deserializer)?;
        match case.as_str() {
            "awsS3Config" => serde_json::from_value(value_or_empty(value))
                .map(ConnectionConfig::AwsS3)
                .map_err(D::Error::custom),
            "pgConfig" => serde_json::from_value(value_or_empty(value))
                .map(ConnectionConfig::Postgres)
                .map_err(D::Error::custom),
            "mysqlConfig" => serde_json::from_value(value_or_empty(value))
                .map(ConnectionConfig::Mysql)
                .map_err(D::Error::custom),
            unknown => Ok(ConnectionConfig::Unknown {
                case: unknown.to_string(),
                value,
            }),
        }
    }
}

/// Configuration for an AWS S3 object-store connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwsS3ConnectionConfig {
    pub bucket_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<AwsS3Credentials>,
}

/// Credential material for an AWS S3 connection. All mechanisms are
/// optional; `from_ec2_role` selects instance-profile credentials and makes
/// the static key fields unnecessary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwsS3Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    pub from_ec2_role: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_external_id: Option<String>,
}

/// Configuration for a PostgreSQL database connection. When `url` is set it
/// wins over the individual host fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostgresConnectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub host: String,
    pub port: i32,
    pub name: String,
    pub user: String,
    pub pass: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_mode: Option<String>,
}

impl Default for PostgresConnectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: String::new(),
            port: 5432,
            name: String::new(),
            user: String::new(),
            pass: String::new(),
            ssl_mode: None,
        }
    }
}

/// Configuration for a MySQL database connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MysqlConnectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub host: String,
    pub port: i32,
    pub name: String,
    pub user: String,
    pub pass: String,
}

impl Default for MysqlConnectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: String::new(),
            port: 3306,
            name: String::new(),
            user: String::new(),
            pass: String::new(),
        }
    }
}
