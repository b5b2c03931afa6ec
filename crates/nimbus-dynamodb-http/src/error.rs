//! Codec error type.

use nimbus_core::Scheme;
use nimbus_dynamodb_model::DynamoDBError;

/// Errors produced while encoding requests or decoding responses.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The region is not in the service description.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// The region does not accept the requested scheme.
    #[error("region {region} does not support {scheme}")]
    SchemeNotSupported {
        /// Region name.
        region: String,
        /// Rejected scheme.
        scheme: Scheme,
    },

    /// The payload could not be serialized or parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP message could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),

    /// The `x-amz-crc32` header did not match the body.
    #[error("CRC32 mismatch: header {expected}, body {actual}")]
    CrcMismatch {
        /// Checksum announced in the header.
        expected: u32,
        /// Checksum computed over the body.
        actual: u32,
    },

    /// The `x-amz-crc32` header was not a decimal `u32`.
    #[error("invalid x-amz-crc32 header: {0}")]
    InvalidChecksumHeader(String),

    /// The service answered with an error.
    #[error(transparent)]
    Service(#[from] DynamoDBError),
}

impl CodecError {
    /// The service error, if the failure came from the remote side.
    #[must_use]
    pub fn as_service(&self) -> Option<&DynamoDBError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}
