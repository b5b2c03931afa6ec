//! Request encoding and server-side body decoding.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use nimbus_dynamodb_model::error::DynamoDBError;
use nimbus_dynamodb_model::input::OperationInput;
use nimbus_dynamodb_model::operations::DynamoDBOperation;
use nimbus_dynamodb_model::schema::{CONTENT_TYPE, service};

use crate::endpoint::Endpoint;
use crate::error::CodecError;

/// Build an unsigned `POST /` request for `op`.
///
/// The request carries `content-type`, `x-amz-target`, `host` and a fresh
/// `amz-sdk-invocation-id`. Signing is left to the caller.
pub fn encode_request<T: Serialize>(
    op: DynamoDBOperation,
    input: &T,
    endpoint: &Endpoint,
) -> Result<http::Request<Bytes>, CodecError> {
    let desc = service().describe(op);
    let body = serde_json::to_vec(input)?;

    let request = http::Request::builder()
        .method(desc.http_method)
        .uri(format!("{}://{}{}", endpoint.scheme, endpoint.hostname, desc.uri))
        .header(http::header::HOST, endpoint.hostname.as_str())
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header("x-amz-target", desc.target())
        .header("amz-sdk-invocation-id", uuid::Uuid::new_v4().to_string())
        .header(http::header::CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))?;

    tracing::debug!(operation = %op, host = %endpoint.hostname, "encoded DynamoDB request");
    Ok(request)
}

/// Encode a typed input, taking the operation from its type.
pub fn encode_input<T: OperationInput>(
    input: &T,
    endpoint: &Endpoint,
) -> Result<http::Request<Bytes>, CodecError> {
    encode_request(T::OPERATION, input, endpoint)
}

/// Parse a request body for `op` into its typed input.
///
/// Empty bodies are treated as `{}`. Malformed JSON or shape mismatches map to
/// `SerializationException`, as DynamoDB does.
pub fn decode_request_body<T: DeserializeOwned>(
    op: DynamoDBOperation,
    body: &[u8],
) -> Result<T, DynamoDBError> {
    let body = if body.is_empty() { b"{}".as_slice() } else { body };
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(operation = %op, error = %e, "failed to parse request body");
        DynamoDBError::serialization_exception(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use nimbus_core::Scheme;
    use nimbus_dynamodb_model::error::DynamoDBErrorCode;
    use nimbus_dynamodb_model::input::{BatchWriteItemInput, ListTablesInput, PutItemInput};
    use nimbus_dynamodb_model::AttributeValue;

    use super::*;
    use crate::endpoint::resolve_endpoint;
    use crate::router::resolve_operation;

    fn endpoint() -> Endpoint {
        resolve_endpoint("us-east-1", Scheme::Https).unwrap()
    }

    #[test]
    fn test_should_set_target_and_content_type() {
        let mut item = HashMap::new();
        item.insert("id".to_owned(), AttributeValue::from("u1"));
        let input = PutItemInput {
            table_name: "Users".to_owned(),
            item,
            ..Default::default()
        };
        let req = encode_input(&input, &endpoint()).unwrap();

        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.uri(), "https://dynamodb.us-east-1.amazonaws.com/");
        assert_eq!(req.headers()["content-type"], "application/x-amz-json-1.0");
        assert_eq!(req.headers()["x-amz-target"], "DynamoDB_20120810.PutItem");
        assert_eq!(req.headers()["host"], "dynamodb.us-east-1.amazonaws.com");
        assert!(req.headers().contains_key("amz-sdk-invocation-id"));

        let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
        assert_eq!(body["Item"]["id"]["S"], "u1");
    }

    #[test]
    fn test_should_route_encoded_request_back_to_operation() {
        let req = encode_request(
            DynamoDBOperation::ListTables,
            &ListTablesInput::default(),
            &endpoint(),
        )
        .unwrap();
        assert_eq!(
            resolve_operation(req.headers()).unwrap(),
            DynamoDBOperation::ListTables
        );
        assert_eq!(req.body().as_ref(), b"{}");
    }

    #[test]
    fn test_should_decode_empty_body_as_defaults() {
        let input: ListTablesInput =
            decode_request_body(DynamoDBOperation::ListTables, b"").unwrap();
        assert!(input.limit.is_none());
    }

    #[test]
    fn test_should_map_bad_json_to_serialization_exception() {
        let err = decode_request_body::<ListTablesInput>(DynamoDBOperation::ListTables, b"{")
            .unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::SerializationException);
    }

    #[test]
    fn test_should_reject_ambiguous_write_request_body() {
        let body = br#"{"RequestItems":{"T":[{"PutRequest":{"Item":{}},"DeleteRequest":{"Key":{}}}]}}"#;
        let err = decode_request_body::<BatchWriteItemInput>(
            DynamoDBOperation::BatchWriteItem,
            body,
        )
        .unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::SerializationException);
    }
}
