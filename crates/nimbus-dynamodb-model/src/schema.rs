//! Static description of the DynamoDB `2012-08-10` API.
//!
//! The table below is the single source of truth for operation names, HTTP
//! bindings, top-level parameter constraints, declared errors, regional
//! endpoints, and waiters. Everything is `'static`; lookups are linear scans
//! over short slices.

use std::fmt;

use crate::error::DynamoDBErrorCode;
use crate::operations::DynamoDBOperation;
use crate::waiter::{TABLE_EXISTS, TABLE_NOT_EXISTS, WaiterDescriptor};

/// JSON protocol content type.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Prefix for the `X-Amz-Target` header value.
pub const TARGET_PREFIX: &str = "DynamoDB_20120810.";

/// API version implemented by this crate.
pub const API_VERSION: &str = "2012-08-10";

// ---------------------------------------------------------------------------
// Descriptor types
// ---------------------------------------------------------------------------

/// Top-level service metadata plus the operation, region, and waiter tables.
#[derive(Debug)]
pub struct ServiceDescription {
    /// API version string (`2012-08-10`).
    pub api_version: &'static str,
    /// Endpoint prefix used to build hostnames.
    pub endpoint_prefix: &'static str,
    /// Full service name.
    pub service_full_name: &'static str,
    /// Short service name.
    pub service_abbreviation: &'static str,
    /// Protocol family (`json`).
    pub service_type: &'static str,
    /// JSON protocol version.
    pub json_version: &'static str,
    /// Prefix for the `X-Amz-Target` header.
    pub target_prefix: &'static str,
    /// Request signing scheme.
    pub signature_version: &'static str,
    /// Regional endpoints.
    pub regions: &'static [RegionEndpoint],
    /// Operations, in declaration order.
    pub operations: &'static [OperationDescriptor],
    /// Waiters built on top of the operations.
    pub waiters: &'static [WaiterDescriptor],
}

impl ServiceDescription {
    /// Look up an operation by its exact name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Look up the descriptor for a typed operation.
    #[must_use]
    pub fn describe(&self, op: DynamoDBOperation) -> &OperationDescriptor {
        // The table has one entry per enum variant; the fidelity test pins this.
        self.operations
            .iter()
            .find(|d| d.operation == op)
            .unwrap_or(&self.operations[0])
    }

    /// Look up a region endpoint by region name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&RegionEndpoint> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Look up a waiter by name.
    #[must_use]
    pub fn waiter(&self, name: &str) -> Option<&WaiterDescriptor> {
        self.waiters.iter().find(|w| w.name == name)
    }
}

/// A regional endpoint and the schemes it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEndpoint {
    /// Region name, e.g. `us-east-1`.
    pub name: &'static str,
    /// Hostname serving the region.
    pub hostname: &'static str,
    /// Plain HTTP is accepted.
    pub http: bool,
    /// HTTPS is accepted.
    pub https: bool,
}

impl RegionEndpoint {
    const fn dual(name: &'static str, hostname: &'static str) -> Self {
        Self {
            name,
            hostname,
            http: true,
            https: true,
        }
    }

    const fn https_only(name: &'static str, hostname: &'static str) -> Self {
        Self {
            name,
            hostname,
            http: false,
            https: true,
        }
    }
}

/// Static description of one API operation.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// Typed identity of the operation.
    pub operation: DynamoDBOperation,
    /// Operation name as sent in `X-Amz-Target`.
    pub name: &'static str,
    /// HTTP method.
    pub http_method: &'static str,
    /// Request URI template.
    pub uri: &'static str,
    /// Name of the response shape.
    pub response_class: &'static str,
    /// First sentence of the operation documentation.
    pub summary: &'static str,
    /// Top-level input parameters.
    pub params: &'static [ParamDescriptor],
    /// Errors the operation declares, in declaration order.
    pub errors: &'static [ErrorDescriptor],
}

impl OperationDescriptor {
    /// The `X-Amz-Target` header value for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}{}", self.name)
    }

    /// Static request headers: content type and target.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Type", CONTENT_TYPE.to_owned()),
            ("X-Amz-Target", self.target()),
        ]
    }

    /// Look up a top-level parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Iterate over the required parameters.
    pub fn required_params(&self) -> impl Iterator<Item = &ParamDescriptor> {
        self.params.iter().filter(|p| p.required)
    }

    /// Returns `true` if the operation declares the named error.
    ///
    /// Accepts the declared class name as well as any spelling
    /// [`DynamoDBErrorCode::from_name`] understands.
    #[must_use]
    pub fn declares_error(&self, name: &str) -> bool {
        let code = DynamoDBErrorCode::from_name(name);
        self.errors
            .iter()
            .any(|e| e.class == name || Some(e.code) == code)
    }
}

/// JSON type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// JSON string.
    String,
    /// JSON number.
    Numeric,
    /// JSON boolean.
    Boolean,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

impl ParamType {
    /// Returns the schema name of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Returns `true` if `value` has this JSON type.
    #[must_use]
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Numeric => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level input parameter and its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Wire name of the parameter.
    pub name: &'static str,
    /// JSON type.
    pub param_type: ParamType,
    /// Must be present.
    pub required: bool,
    /// Allowed values for enumerated strings; empty when unconstrained.
    pub enum_values: &'static [&'static str],
    /// Minimum string length.
    pub min_length: Option<u64>,
    /// Maximum string length.
    pub max_length: Option<u64>,
    /// Minimum array length.
    pub min_items: Option<u64>,
    /// Maximum array length.
    pub max_items: Option<u64>,
    /// Minimum numeric value.
    pub minimum: Option<i64>,
    /// Maximum numeric value.
    pub maximum: Option<i64>,
}

impl ParamDescriptor {
    const fn new(name: &'static str, param_type: ParamType) -> Self {
        Self {
            name,
            param_type,
            required: false,
            enum_values: &[],
            min_length: None,
            max_length: None,
            min_items: None,
            max_items: None,
            minimum: None,
            maximum: None,
        }
    }

    const fn string(name: &'static str) -> Self {
        Self::new(name, ParamType::String)
    }

    const fn numeric(name: &'static str) -> Self {
        Self::new(name, ParamType::Numeric)
    }

    const fn boolean(name: &'static str) -> Self {
        Self::new(name, ParamType::Boolean)
    }

    const fn array(name: &'static str) -> Self {
        Self::new(name, ParamType::Array)
    }

    const fn object(name: &'static str) -> Self {
        Self::new(name, ParamType::Object)
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.enum_values = values;
        self
    }

    const fn length(mut self, min: u64, max: u64) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    const fn min_items(mut self, min: u64) -> Self {
        self.min_items = Some(min);
        self
    }

    const fn max_items(mut self, max: u64) -> Self {
        self.max_items = Some(max);
        self
    }

    const fn minimum(mut self, min: i64) -> Self {
        self.minimum = Some(min);
        self
    }

    const fn maximum(mut self, max: i64) -> Self {
        self.maximum = Some(max);
        self
    }
}

/// An error an operation declares it may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDescriptor {
    /// Error class name exactly as declared.
    pub class: &'static str,
    /// The code the error maps to on the wire.
    pub code: DynamoDBErrorCode,
}

impl ErrorDescriptor {
    /// Human-readable reason for the error.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        self.code.reason()
    }
}

// ---------------------------------------------------------------------------
// Shared parameter and error definitions
// ---------------------------------------------------------------------------

const RETURN_CONSUMED_CAPACITY: ParamDescriptor =
    ParamDescriptor::string("ReturnConsumedCapacity").one_of(&["TOTAL", "NONE"]);
const RETURN_ITEM_COLLECTION_METRICS: ParamDescriptor =
    ParamDescriptor::string("ReturnItemCollectionMetrics").one_of(&["SIZE", "NONE"]);
const RETURN_VALUES: ParamDescriptor = ParamDescriptor::string("ReturnValues").one_of(&[
    "NONE",
    "ALL_OLD",
    "UPDATED_OLD",
    "ALL_NEW",
    "UPDATED_NEW",
]);
const SELECT: ParamDescriptor = ParamDescriptor::string("Select").one_of(&[
    "ALL_ATTRIBUTES",
    "ALL_PROJECTED_ATTRIBUTES",
    "SPECIFIC_ATTRIBUTES",
    "COUNT",
]);
const TABLE_NAME: ParamDescriptor = ParamDescriptor::string("TableName")
    .required()
    .length(3, 255);
const KEY: ParamDescriptor = ParamDescriptor::object("Key").required();
const EXPECTED: ParamDescriptor = ParamDescriptor::object("Expected");
const ATTRIBUTES_TO_GET: ParamDescriptor = ParamDescriptor::array("AttributesToGet").min_items(1);
const CONSISTENT_READ: ParamDescriptor = ParamDescriptor::boolean("ConsistentRead");
const LIMIT: ParamDescriptor = ParamDescriptor::numeric("Limit").minimum(1);
const EXCLUSIVE_START_KEY: ParamDescriptor = ParamDescriptor::object("ExclusiveStartKey");
const REQUEST_ITEMS: ParamDescriptor = ParamDescriptor::object("RequestItems").required();
const PROVISIONED_THROUGHPUT: ParamDescriptor =
    ParamDescriptor::object("ProvisionedThroughput").required();

const THROUGHPUT_EXCEEDED: ErrorDescriptor = ErrorDescriptor {
    class: "ProvisionedThroughputExceededException",
    code: DynamoDBErrorCode::ProvisionedThroughputExceededException,
};
const RESOURCE_NOT_FOUND: ErrorDescriptor = ErrorDescriptor {
    class: "ResourceNotFoundException",
    code: DynamoDBErrorCode::ResourceNotFoundException,
};
const INTERNAL_SERVER_ERROR: ErrorDescriptor = ErrorDescriptor {
    class: "InternalServerErrorException",
    code: DynamoDBErrorCode::InternalServerError,
};
const COLLECTION_SIZE_EXCEEDED: ErrorDescriptor = ErrorDescriptor {
    class: "ItemCollectionSizeLimitExceededException",
    code: DynamoDBErrorCode::ItemCollectionSizeLimitExceededException,
};
const RESOURCE_IN_USE: ErrorDescriptor = ErrorDescriptor {
    class: "ResourceInUseException",
    code: DynamoDBErrorCode::ResourceInUseException,
};
const LIMIT_EXCEEDED: ErrorDescriptor = ErrorDescriptor {
    class: "LimitExceededException",
    code: DynamoDBErrorCode::LimitExceededException,
};
const CONDITIONAL_CHECK_FAILED: ErrorDescriptor = ErrorDescriptor {
    class: "ConditionalCheckFailedException",
    code: DynamoDBErrorCode::ConditionalCheckFailedException,
};

const READ_ERRORS: &[ErrorDescriptor] =
    &[THROUGHPUT_EXCEEDED, RESOURCE_NOT_FOUND, INTERNAL_SERVER_ERROR];
const WRITE_ERRORS: &[ErrorDescriptor] = &[
    CONDITIONAL_CHECK_FAILED,
    THROUGHPUT_EXCEEDED,
    RESOURCE_NOT_FOUND,
    COLLECTION_SIZE_EXCEEDED,
    INTERNAL_SERVER_ERROR,
];
const TABLE_CHANGE_ERRORS: &[ErrorDescriptor] = &[
    RESOURCE_IN_USE,
    RESOURCE_NOT_FOUND,
    LIMIT_EXCEEDED,
    INTERNAL_SERVER_ERROR,
];

const fn operation(
    operation: DynamoDBOperation,
    name: &'static str,
    response_class: &'static str,
    summary: &'static str,
    params: &'static [ParamDescriptor],
    errors: &'static [ErrorDescriptor],
) -> OperationDescriptor {
    OperationDescriptor {
        operation,
        name,
        http_method: "POST",
        uri: "/",
        response_class,
        summary,
        params,
        errors,
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

static REGIONS: [RegionEndpoint; 9] = [
    RegionEndpoint::dual("us-east-1", "dynamodb.us-east-1.amazonaws.com"),
    RegionEndpoint::dual("us-west-1", "dynamodb.us-west-1.amazonaws.com"),
    RegionEndpoint::dual("us-west-2", "dynamodb.us-west-2.amazonaws.com"),
    RegionEndpoint::dual("eu-west-1", "dynamodb.eu-west-1.amazonaws.com"),
    RegionEndpoint::dual("ap-northeast-1", "dynamodb.ap-northeast-1.amazonaws.com"),
    RegionEndpoint::dual("ap-southeast-1", "dynamodb.ap-southeast-1.amazonaws.com"),
    RegionEndpoint::dual("ap-southeast-2", "dynamodb.ap-southeast-2.amazonaws.com"),
    RegionEndpoint::dual("sa-east-1", "dynamodb.sa-east-1.amazonaws.com"),
    RegionEndpoint::https_only("us-gov-west-1", "dynamodb.us-gov-west-1.amazonaws.com"),
];

static OPERATIONS: [OperationDescriptor; 13] = [
    operation(
        DynamoDBOperation::BatchGetItem,
        "BatchGetItem",
        "BatchGetItemOutput",
        "The BatchGetItem operation returns the attributes of one or more items from one or \
         more tables.",
        &[REQUEST_ITEMS, RETURN_CONSUMED_CAPACITY],
        READ_ERRORS,
    ),
    operation(
        DynamoDBOperation::BatchWriteItem,
        "BatchWriteItem",
        "BatchWriteItemOutput",
        "The BatchWriteItem operation puts or deletes multiple items in one or more tables.",
        &[
            REQUEST_ITEMS,
            RETURN_CONSUMED_CAPACITY,
            RETURN_ITEM_COLLECTION_METRICS,
        ],
        &[
            THROUGHPUT_EXCEEDED,
            RESOURCE_NOT_FOUND,
            COLLECTION_SIZE_EXCEEDED,
            INTERNAL_SERVER_ERROR,
        ],
    ),
    operation(
        DynamoDBOperation::CreateTable,
        "CreateTable",
        "CreateTableOutput",
        "The CreateTable operation adds a new table to your account.",
        &[
            ParamDescriptor::array("AttributeDefinitions").required(),
            TABLE_NAME,
            ParamDescriptor::array("KeySchema")
                .required()
                .min_items(1)
                .max_items(2),
            ParamDescriptor::array("LocalSecondaryIndexes"),
            PROVISIONED_THROUGHPUT,
        ],
        &[RESOURCE_IN_USE, LIMIT_EXCEEDED, INTERNAL_SERVER_ERROR],
    ),
    operation(
        DynamoDBOperation::DeleteItem,
        "DeleteItem",
        "DeleteItemOutput",
        "Deletes a single item in a table by primary key.",
        &[
            TABLE_NAME,
            KEY,
            EXPECTED,
            RETURN_VALUES,
            RETURN_CONSUMED_CAPACITY,
            RETURN_ITEM_COLLECTION_METRICS,
        ],
        WRITE_ERRORS,
    ),
    operation(
        DynamoDBOperation::DeleteTable,
        "DeleteTable",
        "DeleteTableOutput",
        "The DeleteTable operation deletes a table and all of its items.",
        &[TABLE_NAME],
        TABLE_CHANGE_ERRORS,
    ),
    operation(
        DynamoDBOperation::DescribeTable,
        "DescribeTable",
        "DescribeTableOutput",
        "Returns information about the table, including the current status of the table, when \
         it was created, the primary key schema, and any indexes on the table.",
        &[TABLE_NAME],
        &[RESOURCE_NOT_FOUND, INTERNAL_SERVER_ERROR],
    ),
    operation(
        DynamoDBOperation::GetItem,
        "GetItem",
        "GetItemOutput",
        "The GetItem operation returns a set of attributes for the item with the given primary \
         key.",
        &[
            TABLE_NAME,
            KEY,
            ATTRIBUTES_TO_GET,
            CONSISTENT_READ,
            RETURN_CONSUMED_CAPACITY,
        ],
        READ_ERRORS,
    ),
    operation(
        DynamoDBOperation::ListTables,
        "ListTables",
        "ListTablesOutput",
        "Returns an array of all the tables associated with the current account and endpoint.",
        &[
            ParamDescriptor::string("ExclusiveStartTableName").length(3, 255),
            ParamDescriptor::numeric("Limit").minimum(1).maximum(100),
        ],
        &[INTERNAL_SERVER_ERROR],
    ),
    operation(
        DynamoDBOperation::PutItem,
        "PutItem",
        "PutItemOutput",
        "Creates a new item, or replaces an old item with a new item.",
        &[
            TABLE_NAME,
            ParamDescriptor::object("Item").required(),
            EXPECTED,
            RETURN_VALUES,
            RETURN_CONSUMED_CAPACITY,
            RETURN_ITEM_COLLECTION_METRICS,
        ],
        WRITE_ERRORS,
    ),
    operation(
        DynamoDBOperation::Query,
        "Query",
        "QueryOutput",
        "A Query operation directly accesses items from a table using the table primary key, \
         or from an index using the index key.",
        &[
            TABLE_NAME,
            ParamDescriptor::string("IndexName").length(3, 255),
            SELECT,
            ATTRIBUTES_TO_GET,
            LIMIT,
            CONSISTENT_READ,
            ParamDescriptor::object("KeyConditions"),
            ParamDescriptor::boolean("ScanIndexForward"),
            EXCLUSIVE_START_KEY,
            RETURN_CONSUMED_CAPACITY,
        ],
        READ_ERRORS,
    ),
    operation(
        DynamoDBOperation::Scan,
        "Scan",
        "ScanOutput",
        "The Scan operation returns one or more items and item attributes by accessing every \
         item in the table.",
        &[
            TABLE_NAME,
            ATTRIBUTES_TO_GET,
            LIMIT,
            SELECT,
            ParamDescriptor::object("ScanFilter"),
            EXCLUSIVE_START_KEY,
            RETURN_CONSUMED_CAPACITY,
            ParamDescriptor::numeric("TotalSegments")
                .minimum(1)
                .maximum(4096),
            ParamDescriptor::numeric("Segment").maximum(4095),
        ],
        READ_ERRORS,
    ),
    operation(
        DynamoDBOperation::UpdateItem,
        "UpdateItem",
        "UpdateItemOutput",
        "Edits an existing item's attributes, or inserts a new item if it does not already \
         exist.",
        &[
            TABLE_NAME,
            KEY,
            ParamDescriptor::object("AttributeUpdates"),
            EXPECTED,
            RETURN_VALUES,
            RETURN_CONSUMED_CAPACITY,
            RETURN_ITEM_COLLECTION_METRICS,
        ],
        WRITE_ERRORS,
    ),
    operation(
        DynamoDBOperation::UpdateTable,
        "UpdateTable",
        "UpdateTableOutput",
        "Updates the provisioned throughput for the given table.",
        &[TABLE_NAME, PROVISIONED_THROUGHPUT],
        TABLE_CHANGE_ERRORS,
    ),
];

static WAITERS: [WaiterDescriptor; 2] = [TABLE_EXISTS, TABLE_NOT_EXISTS];

static SERVICE: ServiceDescription = ServiceDescription {
    api_version: API_VERSION,
    endpoint_prefix: "dynamodb",
    service_full_name: "Amazon DynamoDB",
    service_abbreviation: "DynamoDB",
    service_type: "json",
    json_version: "1.0",
    target_prefix: TARGET_PREFIX,
    signature_version: "v4",
    regions: &REGIONS,
    operations: &OPERATIONS,
    waiters: &WAITERS,
};

/// The DynamoDB `2012-08-10` service description.
#[must_use]
pub fn service() -> &'static ServiceDescription {
    &SERVICE
}
