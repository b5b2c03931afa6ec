//! DynamoDB error types.
//!
//! DynamoDB errors use JSON format with a `__type` field containing the
//! fully-qualified error type name. The first seven codes below are the ones the
//! `2012-08-10` service description declares on its operations; the rest are
//! protocol-level failures raised before an operation is reached.

use std::fmt;

/// Namespace prefix for service-declared error types.
const SERVICE_NAMESPACE: &str = "com.amazonaws.dynamodb.v20120810#";

/// Well-known DynamoDB error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DynamoDBErrorCode {
    /// Request rate too high for the provisioned throughput.
    ProvisionedThroughputExceededException,
    /// Table or index not found.
    ResourceNotFoundException,
    /// Internal server error. Declared as `InternalServerErrorException`.
    InternalServerError,
    /// Item collection size limit exceeded.
    ItemCollectionSizeLimitExceededException,
    /// Table already exists or is in a conflicting state.
    ResourceInUseException,
    /// Too many concurrent table requests.
    LimitExceededException,
    /// Condition check failed.
    ConditionalCheckFailedException,
    /// Validation error.
    #[default]
    ValidationException,
    /// Serialization error.
    SerializationException,
    /// Missing action.
    MissingAction,
    /// Unknown operation.
    UnrecognizedClientException,
    /// An error type this crate does not know about.
    UnknownError,
}

impl DynamoDBErrorCode {
    /// Every known code, declared ones first.
    pub const ALL: &[Self] = &[
        Self::ProvisionedThroughputExceededException,
        Self::ResourceNotFoundException,
        Self::InternalServerError,
        Self::ItemCollectionSizeLimitExceededException,
        Self::ResourceInUseException,
        Self::LimitExceededException,
        Self::ConditionalCheckFailedException,
        Self::ValidationException,
        Self::SerializationException,
        Self::MissingAction,
        Self::UnrecognizedClientException,
        Self::UnknownError,
    ];

    /// Returns the fully-qualified error type string for JSON `__type` field.
    #[must_use]
    pub fn error_type(&self) -> String {
        match self {
            Self::ValidationException => "com.amazon.coral.validate#ValidationException".to_owned(),
            other => format!("{SERVICE_NAMESPACE}{}", other.as_str()),
        }
    }

    /// Returns the short error code string as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProvisionedThroughputExceededException => {
                "ProvisionedThroughputExceededException"
            }
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::InternalServerError => "InternalServerError",
            Self::ItemCollectionSizeLimitExceededException => {
                "ItemCollectionSizeLimitExceededException"
            }
            Self::ResourceInUseException => "ResourceInUseException",
            Self::LimitExceededException => "LimitExceededException",
            Self::ConditionalCheckFailedException => "ConditionalCheckFailedException",
            Self::ValidationException => "ValidationException",
            Self::SerializationException => "SerializationException",
            Self::MissingAction => "MissingAction",
            Self::UnrecognizedClientException => "UnrecognizedClientException",
            Self::UnknownError => "UnknownError",
        }
    }

    /// Parse an error name, either bare (`ResourceNotFoundException`) or
    /// namespaced (`com.amazonaws.dynamodb.v20120810#ResourceNotFoundException`).
    ///
    /// Both `InternalServerError` and the declared `InternalServerErrorException`
    /// spellings map to [`Self::InternalServerError`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let short = name.rsplit_once('#').map_or(name, |(_, short)| short);
        match short {
            "InternalServerError" | "InternalServerErrorException" => {
                Some(Self::InternalServerError)
            }
            other => Self::ALL
                .iter()
                .copied()
                .filter(|c| *c != Self::UnknownError)
                .find(|c| c.as_str() == other),
        }
    }

    /// Returns `true` for codes declared by operations in the service description.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        matches!(
            self,
            Self::ProvisionedThroughputExceededException
                | Self::ResourceNotFoundException
                | Self::InternalServerError
                | Self::ItemCollectionSizeLimitExceededException
                | Self::ResourceInUseException
                | Self::LimitExceededException
                | Self::ConditionalCheckFailedException
        )
    }

    /// Human-readable reason for the error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ProvisionedThroughputExceededException => {
                "The request rate is too high, or the request is too large, for the available \
                 throughput to accommodate. The AWS SDKs automatically retry requests that \
                 receive this exception; therefore, your request will eventually succeed, unless \
                 the request is too large or your retry queue is too large to finish. Reduce the \
                 frequency of requests by using the strategies listed in Error Retries and \
                 Exponential Backoff in the Amazon DynamoDB Developer Guide."
            }
            Self::ResourceNotFoundException => {
                "The operation tried to access a nonexistent table or index. The resource may \
                 not be specified correctly, or its status may not be ACTIVE."
            }
            Self::InternalServerError => "An error occurred on the server side.",
            Self::ItemCollectionSizeLimitExceededException => {
                "An item collection is too large. This exception is only returned for tables \
                 that have one or more local secondary indexes."
            }
            Self::ResourceInUseException => {
                "The operation conflicts with the resource's availability. For example, you \
                 attempted to recreate an existing table, or tried to delete a table currently \
                 in the CREATING state."
            }
            Self::LimitExceededException => {
                "The number of concurrent table requests (cumulative number of tables in the \
                 CREATING, DELETING or UPDATING state) exceeds the maximum allowed of 10."
            }
            Self::ConditionalCheckFailedException => {
                "A condition specified in the operation could not be evaluated."
            }
            Self::ValidationException => "One or more parameter values were invalid.",
            Self::SerializationException => "The request body could not be parsed.",
            Self::MissingAction => "The request did not name an operation.",
            Self::UnrecognizedClientException => "The requested operation is not recognized.",
            Self::UnknownError => "The service returned an error type that is not recognized.",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InternalServerError | Self::UnknownError => {
                http::StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for DynamoDBErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DynamoDB error response.
#[derive(Debug)]
pub struct DynamoDBError {
    /// The error code.
    pub code: DynamoDBErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for DynamoDBError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamoDBError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for DynamoDBError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl DynamoDBError {
    /// Create a new `DynamoDBError` from an error code, using its reason as message.
    #[must_use]
    pub fn new(code: DynamoDBErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.reason().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `DynamoDBError` with a custom message.
    #[must_use]
    pub fn with_message(code: DynamoDBErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Override the HTTP status code (used when decoding responses).
    #[must_use]
    pub fn with_status(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error response.
    #[must_use]
    pub fn error_type(&self) -> String {
        self.code.error_type()
    }

    // -- Convenience constructors --

    /// Table already exists or is busy.
    #[must_use]
    pub fn resource_in_use(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ResourceInUseException, message)
    }

    /// Table or index not found.
    #[must_use]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ResourceNotFoundException, message)
    }

    /// Condition evaluated to false.
    #[must_use]
    pub fn conditional_check_failed(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ConditionalCheckFailedException, message)
    }

    /// Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ValidationException, message)
    }

    /// Serialization error.
    #[must_use]
    pub fn serialization_exception(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::SerializationException, message)
    }

    /// Internal server error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::InternalServerError, message)
    }

    /// Missing action header.
    #[must_use]
    pub fn missing_action() -> Self {
        Self::with_message(
            DynamoDBErrorCode::MissingAction,
            "Missing required header: X-Amz-Target",
        )
    }

    /// Unknown operation.
    #[must_use]
    pub fn unknown_operation(target: &str) -> Self {
        Self::with_message(
            DynamoDBErrorCode::UnrecognizedClientException,
            format!("Unrecognized operation: {target}"),
        )
    }
}

/// Create a `DynamoDBError` from an error code.
///
/// # Examples
///
/// ```
/// use nimbus_dynamodb_model::dynamodb_error;
/// use nimbus_dynamodb_model::error::DynamoDBErrorCode;
///
/// let err = dynamodb_error!(ValidationException);
/// assert_eq!(err.code, DynamoDBErrorCode::ValidationException);
///
/// let err = dynamodb_error!(ResourceNotFoundException, "Table not found");
/// assert_eq!(err.message, "Table not found");
/// ```
#[macro_export]
macro_rules! dynamodb_error {
    ($code:ident) => {
        $crate::error::DynamoDBError::new($crate::error::DynamoDBErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::DynamoDBError::with_message($crate::error::DynamoDBErrorCode::$code, $msg)
    };
}
