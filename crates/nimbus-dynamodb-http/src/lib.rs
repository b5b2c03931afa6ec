//! DynamoDB `awsJson1_0` codec for Nimbus.
//!
//! This crate encodes and decodes the DynamoDB wire protocol without owning a
//! transport:
//!
//! - **Request**: builds `POST /` requests with the target header and content type
//! - **Router**: extracts the operation from the `X-Amz-Target` header
//! - **Response**: JSON success/error response formatting and decoding
//! - **Endpoint**: resolves a regional endpoint from the service description
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]

pub mod body;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;
pub mod router;

pub use body::JsonBody;
pub use endpoint::{Endpoint, resolve_endpoint};
pub use error::CodecError;
pub use request::{decode_request_body, encode_input, encode_request};
pub use response::{decode_response, error_to_json, error_to_response, json_response};
pub use router::resolve_operation;
