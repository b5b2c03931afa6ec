//! DynamoDB `2012-08-10` model for Nimbus.
//!
//! This crate carries the static service description (operations, parameters,
//! declared errors, regions, waiters) together with hand-written serde types for
//! every request and response shape. DynamoDB's JSON protocol makes serde derives
//! trivial, so nothing here is generated.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute_value;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod schema;
pub mod types;
pub mod validate;
pub mod waiter;

pub use attribute_value::AttributeValue;
pub use error::{DynamoDBError, DynamoDBErrorCode};
pub use operations::DynamoDBOperation;
pub use schema::{OperationDescriptor, ServiceDescription, service};
pub use validate::{validate_attribute_value, validate_input, validate_request_json};
pub use waiter::{WaiterDescriptor, WaiterSuccess};
