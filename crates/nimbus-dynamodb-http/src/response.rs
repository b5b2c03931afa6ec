//! DynamoDB response serialization, error formatting, and decoding.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use nimbus_dynamodb_model::error::{DynamoDBError, DynamoDBErrorCode};
use nimbus_dynamodb_model::schema::CONTENT_TYPE;

use crate::body::JsonBody;
use crate::error::CodecError;

/// Header carrying the CRC32 of the response body.
pub const CRC32_HEADER: &str = "x-amz-crc32";

/// Serialize a DynamoDB error into a JSON response body.
///
/// The error format follows the AWS DynamoDB JSON protocol:
///
/// ```json
/// {
///   "__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
///   "Message": "Requested resource not found"
/// }
/// ```
#[must_use]
pub fn error_to_json(error: &DynamoDBError) -> Vec<u8> {
    let body = serde_json::json!({
        "__type": error.error_type(),
        "Message": error.message,
    });
    serde_json::to_vec(&body).unwrap_or_default()
}

/// Convert a `DynamoDBError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(error: &DynamoDBError, request_id: &str) -> http::Response<JsonBody> {
    build_response(error.status_code, error_to_json(error), request_id)
}

/// Build a success response from JSON bytes.
#[must_use]
pub fn json_response(json: Vec<u8>, request_id: &str) -> http::Response<JsonBody> {
    build_response(http::StatusCode::OK, json, request_id)
}

fn build_response(
    status: http::StatusCode,
    json: Vec<u8>,
    request_id: &str,
) -> http::Response<JsonBody> {
    let crc = crc32fast::hash(&json);
    let mut response = http::Response::new(JsonBody::from_json(json));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static(CONTENT_TYPE),
    );
    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.insert("x-amzn-requestid", hv);
    }
    headers.insert(CRC32_HEADER, http::HeaderValue::from(crc));

    response
}

/// Decode a buffered DynamoDB response.
///
/// On a 2xx status the optional `x-amz-crc32` header is verified and the body is
/// parsed as `T`. Any other status is decoded as an error body and mapped onto
/// [`DynamoDBErrorCode`] through its `__type`; names this crate does not know
/// become [`DynamoDBErrorCode::UnknownError`].
pub fn decode_response<T: DeserializeOwned>(
    response: http::Response<Bytes>,
) -> Result<T, CodecError> {
    let (parts, body) = response.into_parts();
    verify_crc32(&parts.headers, &body)?;

    if parts.status.is_success() {
        let body = if body.is_empty() {
            Bytes::from_static(b"{}")
        } else {
            body
        };
        return Ok(serde_json::from_slice(&body)?);
    }

    Err(CodecError::Service(decode_error(parts.status, &body)))
}

fn verify_crc32(headers: &http::HeaderMap, body: &[u8]) -> Result<(), CodecError> {
    let Some(raw) = headers.get(CRC32_HEADER) else {
        return Ok(());
    };
    let expected = raw
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or_else(|| {
            CodecError::InvalidChecksumHeader(String::from_utf8_lossy(raw.as_bytes()).into_owned())
        })?;
    let actual = crc32fast::hash(body);
    if expected == actual {
        Ok(())
    } else {
        tracing::warn!(expected, actual, "response checksum mismatch");
        Err(CodecError::CrcMismatch { expected, actual })
    }
}

fn decode_error(status: http::StatusCode, body: &[u8]) -> DynamoDBError {
    let parsed: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();
    let type_name = parsed
        .get("__type")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    let message = parsed
        .get("message")
        .or_else(|| parsed.get("Message"))
        .and_then(serde_json::Value::as_str);

    let code = DynamoDBErrorCode::from_name(type_name).unwrap_or(DynamoDBErrorCode::UnknownError);
    let message = match (code, message) {
        (DynamoDBErrorCode::UnknownError, Some(m)) => format!("{type_name}: {m}"),
        (DynamoDBErrorCode::UnknownError, None) if !type_name.is_empty() => type_name.to_owned(),
        (_, Some(m)) => m.to_owned(),
        (_, None) => code.reason().to_owned(),
    };

    tracing::debug!(%status, code = %code, "decoded DynamoDB error response");
    DynamoDBError::with_message(code, message).with_status(status)
}

#[cfg(test)]
mod tests {
    use nimbus_dynamodb_model::output::ListTablesOutput;

    use super::*;

    fn raw_response(status: u16, body: &str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from(body.to_owned()))
            .unwrap()
    }

    #[test]
    fn test_should_format_error_json() {
        let err = DynamoDBError::with_message(
            DynamoDBErrorCode::ResourceNotFoundException,
            "Table 'users' not found",
        );
        let json = error_to_json(&err);
        let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(
            parsed["__type"],
            "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException"
        );
        assert_eq!(parsed["Message"], "Table 'users' not found");
    }

    #[test]
    fn test_should_build_error_response_with_correct_status() {
        let err = DynamoDBError::with_message(
            DynamoDBErrorCode::ValidationException,
            "Missing required key",
        );
        let resp = error_to_response(&err, "test-req-123");
        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers().get("content-type").unwrap(), CONTENT_TYPE);
        assert_eq!(
            resp.headers().get("x-amzn-requestid").unwrap(),
            "test-req-123",
        );
        assert!(resp.headers().get(CRC32_HEADER).is_some());
    }

    #[test]
    fn test_should_round_trip_success_response() {
        let json = serde_json::to_vec(&serde_json::json!({"TableNames": ["users"]})).unwrap();
        let resp = JsonBody::buffer(json_response(json, "req-456"));
        let output: ListTablesOutput = decode_response(resp).unwrap();
        assert_eq!(output.table_names, vec!["users".to_owned()]);
    }

    #[test]
    fn test_should_round_trip_error_response() {
        let err = DynamoDBError::resource_in_use("Table already exists: users");
        let resp = JsonBody::buffer(error_to_response(&err, "req-789"));
        let decoded = decode_response::<ListTablesOutput>(resp).unwrap_err();
        let service = decoded.as_service().unwrap();
        assert_eq!(service.code, DynamoDBErrorCode::ResourceInUseException);
        assert_eq!(service.message, "Table already exists: users");
        assert_eq!(service.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_should_decode_lowercase_message_and_wire_spelling() {
        let resp = raw_response(
            500,
            r#"{"__type":"com.amazonaws.dynamodb.v20120810#InternalServerError","message":"boom"}"#,
        );
        let err = decode_response::<ListTablesOutput>(resp).unwrap_err();
        let service = err.as_service().unwrap();
        assert_eq!(service.code, DynamoDBErrorCode::InternalServerError);
        assert_eq!(service.message, "boom");
        assert_eq!(service.status_code, http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_should_decode_validation_namespace() {
        let resp = raw_response(
            400,
            r#"{"__type":"com.amazon.coral.validate#ValidationException","message":"bad"}"#,
        );
        let err = decode_response::<ListTablesOutput>(resp).unwrap_err();
        assert_eq!(
            err.as_service().unwrap().code,
            DynamoDBErrorCode::ValidationException
        );
    }

    #[test]
    fn test_should_bucket_undeclared_error_names() {
        let resp = raw_response(400, r#"{"__type":"com.example#ThrottlingException"}"#);
        let err = decode_response::<ListTablesOutput>(resp).unwrap_err();
        let service = err.as_service().unwrap();
        assert_eq!(service.code, DynamoDBErrorCode::UnknownError);
        assert!(service.message.contains("ThrottlingException"));
    }

    #[test]
    fn test_should_report_crc_mismatch() {
        let mut resp = raw_response(200, r#"{"TableNames":[]}"#);
        resp.headers_mut()
            .insert(CRC32_HEADER, http::HeaderValue::from_static("12345"));
        let err = decode_response::<ListTablesOutput>(resp).unwrap_err();
        assert!(matches!(err, CodecError::CrcMismatch { expected: 12345, .. }));
    }

    #[test]
    fn test_should_reject_non_numeric_crc_header() {
        let mut resp = raw_response(200, "{}");
        resp.headers_mut()
            .insert(CRC32_HEADER, http::HeaderValue::from_static("abc"));
        let err = decode_response::<ListTablesOutput>(resp).unwrap_err();
        assert!(matches!(err, CodecError::InvalidChecksumHeader(_)));
    }
}
