//! DynamoDB request router.
//!
//! DynamoDB uses the `awsJson1_0` protocol where all requests are `POST /`
//! with the operation specified in the `X-Amz-Target` header:
//!
//! ```text
//! X-Amz-Target: DynamoDB_20120810.CreateTable
//! ```

use nimbus_dynamodb_model::error::DynamoDBError;
use nimbus_dynamodb_model::operations::DynamoDBOperation;
use nimbus_dynamodb_model::schema::TARGET_PREFIX;

/// Resolve a DynamoDB operation from request headers.
///
/// Extracts the operation from the `X-Amz-Target` header, validates the
/// format, and maps it to a [`DynamoDBOperation`] enum variant.
pub fn resolve_operation(headers: &http::HeaderMap) -> Result<DynamoDBOperation, DynamoDBError> {
    let target = headers
        .get("x-amz-target")
        .ok_or_else(DynamoDBError::missing_action)?;

    let target_str = target
        .to_str()
        .map_err(|_| DynamoDBError::missing_action())?;

    let operation_name = target_str
        .strip_prefix(TARGET_PREFIX)
        .ok_or_else(|| DynamoDBError::unknown_operation(target_str))?;

    let op = DynamoDBOperation::from_name(operation_name)
        .ok_or_else(|| DynamoDBError::unknown_operation(target_str))?;
    tracing::debug!(operation = %op, "resolved DynamoDB operation");
    Ok(op)
}

#[cfg(test)]
mod tests {
    use nimbus_dynamodb_model::error::DynamoDBErrorCode;

    use super::*;

    fn headers_with_target(target: &str) -> http::HeaderMap {
        let mut map = http::HeaderMap::new();
        map.insert("x-amz-target", http::HeaderValue::from_str(target).unwrap());
        map
    }

    #[test]
    fn test_should_resolve_update_table() {
        let headers = headers_with_target("DynamoDB_20120810.UpdateTable");
        let op = resolve_operation(&headers).unwrap();
        assert_eq!(op, DynamoDBOperation::UpdateTable);
    }

    #[test]
    fn test_should_resolve_all_operations() {
        for op in DynamoDBOperation::ALL {
            let target = format!("DynamoDB_20120810.{op}");
            let headers = headers_with_target(&target);
            assert_eq!(resolve_operation(&headers).unwrap(), *op, "failed for {target}");
        }
    }

    #[test]
    fn test_should_error_on_missing_target() {
        let err = resolve_operation(&http::HeaderMap::new()).unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::MissingAction);
    }

    #[test]
    fn test_should_error_on_older_api_version() {
        let headers = headers_with_target("DynamoDB_20111205.CreateTable");
        let err = resolve_operation(&headers).unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::UnrecognizedClientException);
    }

    #[test]
    fn test_should_error_on_unknown_operation() {
        let headers = headers_with_target("DynamoDB_20120810.TransactGetItems");
        let err = resolve_operation(&headers).unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::UnrecognizedClientException);
    }
}
