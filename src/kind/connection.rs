/// Human-readable metadata for a connection kind.
///
/// Connections live in a separate namespace from transformer kinds and have
/// no value datatype; instead they carry a transfer-direction restriction
/// that the execution backend enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionKindMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Whether the backend currently accepts this kind only as a transfer
    /// destination, never as a source.
    pub destination_only: bool,
}

impl ConnectionKindMetadata {
    /// Fallback entry for an unrecognized or absent connection kind.
    pub const UNKNOWN: ConnectionKindMetadata = ConnectionKindMetadata {
        name: "Unknown",
        description: "Unrecognized connection kind.",
        destination_only: false,
    };
}

macro_rules! define_connection_metadata {
    ( $( ($source:literal, $name:literal, $desc:literal, $dest_only:literal) ),* $(,)? ) => {
        /// Looks up display metadata for a connection kind.
        ///
        /// Total like [`transformer_metadata`](super::transformer_metadata):
        /// an unknown or absent `source` yields
        /// [`ConnectionKindMetadata::UNKNOWN`].
        pub fn connection_metadata(source: Option<&str>) -> ConnectionKindMetadata {
            match source {
                $( Some($source) => ConnectionKindMetadata {
                    name: $name,
                    description: $desc,
                    destination_only: $dest_only,
                }, )*
                _ => ConnectionKindMetadata::UNKNOWN,
            }
        }

        /// All built-in connection kind identifiers, in table order.
        pub fn connection_sources() -> &'static [&'static str] {
            &[ $( $source, )* ]
        }
    };
}

define_connection_metadata! {
    ("aws_s3", "AWS S3", "Stores output records in an AWS S3 bucket. Right now AWS S3 connections can only be used as a destination.", true),
    ("postgres", "PostgreSQL", "Connects to a PostgreSQL database.", false),
    ("mysql", "MySQL", "Connects to a MySQL database.", false),
}
