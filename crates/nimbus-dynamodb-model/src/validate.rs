//! Descriptor-driven request validation.
//!
//! Top-level parameters are checked against the [`ParamDescriptor`]s in the
//! static schema. Attribute values found in `Item`, `Key` and
//! `ExclusiveStartKey` are additionally checked for the set and number rules
//! DynamoDB enforces server side, and every `Condition` in `KeyConditions` or
//! `ScanFilter` must carry as many operands as its operator takes.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::attribute_value::AttributeValue;
use crate::error::DynamoDBError;
use crate::input::OperationInput;
use crate::operations::DynamoDBOperation;
use crate::types::{ComparisonOperator, Condition};
use crate::schema::{ParamDescriptor, ParamType, service};

/// Parameters whose values are attribute maps.
const ATTRIBUTE_MAP_PARAMS: &[&str] = &["Item", "Key", "ExclusiveStartKey"];

/// Parameters whose values map attribute names to a `Condition`.
const CONDITION_MAP_PARAMS: &[&str] = &["KeyConditions", "ScanFilter"];

/// Validate a typed input against the schema of the operation it belongs to.
///
/// # Errors
///
/// Returns a `SerializationException` if the input cannot be encoded and a
/// `ValidationException` listing every violated constraint otherwise.
pub fn validate_input<T: OperationInput>(input: &T) -> Result<(), DynamoDBError> {
    let value = serde_json::to_value(input)
        .map_err(|e| DynamoDBError::serialization_exception(e.to_string()))?;
    validate_request_json(T::OPERATION, &value)
}

/// Validate a raw JSON request body against the schema for `op`.
///
/// # Errors
///
/// Returns a `ValidationException` listing every violated constraint, or a
/// `SerializationException` if the body is not a JSON object.
pub fn validate_request_json(op: DynamoDBOperation, body: &Value) -> Result<(), DynamoDBError> {
    let Some(fields) = body.as_object() else {
        return Err(DynamoDBError::serialization_exception(
            "Request body must be a JSON object",
        ));
    };

    let desc = service().describe(op);
    let mut violations = Vec::new();

    for param in desc.params {
        match fields.get(param.name) {
            None | Some(Value::Null) if param.required => violations.push(format!(
                "Value null at '{}' failed to satisfy constraint: Member must not be null",
                member_path(param.name)
            )),
            None | Some(Value::Null) => {}
            Some(value) => check_param(param, value, &mut violations),
        }
    }

    for key in fields.keys() {
        if desc.param(key).is_none() {
            violations.push(format!("Unexpected parameter '{key}'"));
        }
    }

    if violations.is_empty() {
        check_attribute_maps(fields, &mut violations);
        check_condition_maps(fields, &mut violations);
    }

    if violations.is_empty() {
        return Ok(());
    }

    let message = format_violations(&violations);
    debug!(operation = %op, violations = violations.len(), "request failed validation");
    Err(DynamoDBError::validation(message))
}

/// Check the set and number invariants of a single attribute value.
///
/// # Errors
///
/// Returns a `ValidationException` for empty sets, sets with duplicate
/// members, or numbers that do not parse.
pub fn validate_attribute_value(value: &AttributeValue) -> Result<(), DynamoDBError> {
    match value {
        AttributeValue::S(_) | AttributeValue::B(_) => Ok(()),
        AttributeValue::N(n) => check_number(n),
        AttributeValue::Ss(members) => check_set("string", members),
        AttributeValue::Ns(members) => {
            check_set("number", members)?;
            members.iter().try_for_each(|n| check_number(n))
        }
        AttributeValue::Bs(members) => check_set("binary", members),
    }
}

#[allow(clippy::cast_precision_loss)]
fn check_param(param: &ParamDescriptor, value: &Value, violations: &mut Vec<String>) {
    let path = member_path(param.name);

    if !param.param_type.matches(value) {
        violations.push(format!(
            "Value '{value}' at '{path}' failed to satisfy constraint: Member must be of type {}",
            param.param_type
        ));
        return;
    }

    match param.param_type {
        ParamType::String => {
            let Some(s) = value.as_str() else { return };
            if !param.enum_values.is_empty() && !param.enum_values.contains(&s) {
                violations.push(format!(
                    "Value '{s}' at '{path}' failed to satisfy constraint: Member must satisfy \
                     enum value set: [{}]",
                    param.enum_values.join(", ")
                ));
            }
            let len = s.chars().count() as u64;
            if let Some(min) = param.min_length.filter(|min| len < *min) {
                violations.push(format!(
                    "Value '{s}' at '{path}' failed to satisfy constraint: Member must have \
                     length greater than or equal to {min}"
                ));
            }
            if let Some(max) = param.max_length.filter(|max| len > *max) {
                violations.push(format!(
                    "Value '{s}' at '{path}' failed to satisfy constraint: Member must have \
                     length less than or equal to {max}"
                ));
            }
        }
        ParamType::Array => {
            let Some(items) = value.as_array() else { return };
            let len = items.len() as u64;
            if let Some(min) = param.min_items.filter(|min| len < *min) {
                violations.push(format!(
                    "Value '{value}' at '{path}' failed to satisfy constraint: Member must have \
                     length greater than or equal to {min}"
                ));
            }
            if let Some(max) = param.max_items.filter(|max| len > *max) {
                violations.push(format!(
                    "Value '{value}' at '{path}' failed to satisfy constraint: Member must have \
                     length less than or equal to {max}"
                ));
            }
        }
        ParamType::Numeric => {
            let Some(n) = value.as_f64() else { return };
            if let Some(min) = param.minimum.filter(|min| n < *min as f64) {
                violations.push(format!(
                    "Value '{value}' at '{path}' failed to satisfy constraint: Member must have \
                     value greater than or equal to {min}"
                ));
            }
            if let Some(max) = param.maximum.filter(|max| n > *max as f64) {
                violations.push(format!(
                    "Value '{value}' at '{path}' failed to satisfy constraint: Member must have \
                     value less than or equal to {max}"
                ));
            }
        }
        ParamType::Boolean | ParamType::Object => {}
    }
}

fn check_attribute_maps(
    fields: &serde_json::Map<String, Value>,
    violations: &mut Vec<String>,
) {
    for name in ATTRIBUTE_MAP_PARAMS {
        let Some(Value::Object(attrs)) = fields.get(*name) else {
            continue;
        };
        for (attr, raw) in attrs {
            let checked = serde_json::from_value::<AttributeValue>(raw.clone())
                .map_err(|e| e.to_string())
                .and_then(|v| validate_attribute_value(&v).map_err(|e| e.message));
            if let Err(reason) = checked {
                violations.push(format!(
                    "Invalid attribute '{attr}' at '{}': {reason}",
                    member_path(name)
                ));
            }
        }
    }
}

fn check_condition_maps(
    fields: &serde_json::Map<String, Value>,
    violations: &mut Vec<String>,
) {
    for name in CONDITION_MAP_PARAMS {
        let Some(Value::Object(conditions)) = fields.get(*name) else {
            continue;
        };
        let key_conditions = *name == "KeyConditions";
        for (attr, raw) in conditions {
            match serde_json::from_value::<Condition>(raw.clone()) {
                Ok(condition) => {
                    if let Err(reason) = check_condition(&condition, key_conditions) {
                        violations.push(format!(
                            "Invalid condition on '{attr}' at '{}': {reason}",
                            member_path(name)
                        ));
                    }
                }
                Err(e) => violations.push(format!(
                    "Invalid condition on '{attr}' at '{}': {e}",
                    member_path(name)
                )),
            }
        }
    }
}

fn check_condition(condition: &Condition, key_condition: bool) -> Result<(), String> {
    let op = condition.comparison_operator;
    if key_condition && !op.is_key_condition() {
        return Err(format!(
            "Attempted conditional constraint is not an indexable operation: {op}"
        ));
    }
    let given = condition.attribute_value_list.len();
    let arity_ok = match op.operand_count() {
        Some(expected) => given == expected,
        None => given > 0,
    };
    if !arity_ok {
        return Err(format!(
            "One or more parameter values were invalid: Invalid number of argument(s) for the \
             {op} ComparisonOperator"
        ));
    }
    if let (ComparisonOperator::Between, [low, high]) =
        (op, condition.attribute_value_list.as_slice())
    {
        if low.type_descriptor() != high.type_descriptor() {
            return Err(format!(
                "One or more parameter values were invalid: AttributeValues inside \
                 AttributeValueList must be of same type ({} vs {})",
                low.type_descriptor(),
                high.type_descriptor()
            ));
        }
    }
    condition
        .attribute_value_list
        .iter()
        .try_for_each(validate_attribute_value)
        .map_err(|e| e.message)
}

fn check_set<T: Eq + std::hash::Hash>(kind: &str, members: &[T]) -> Result<(), DynamoDBError> {
    if members.is_empty() {
        return Err(DynamoDBError::validation(format!(
            "One or more parameter values were invalid: An {kind} set may not be empty"
        )));
    }
    let mut seen = HashSet::with_capacity(members.len());
    if members.iter().all(|m| seen.insert(m)) {
        Ok(())
    } else {
        Err(DynamoDBError::validation(format!(
            "One or more parameter values were invalid: Input {kind} set contains duplicates"
        )))
    }
}

fn check_number(raw: &str) -> Result<(), DynamoDBError> {
    if is_decimal_number(raw) {
        Ok(())
    } else {
        Err(DynamoDBError::validation(format!(
            "The parameter cannot be converted to a numeric value: {raw}"
        )))
    }
}

/// Decimal literal with optional sign, fraction, and exponent. Rejects `inf`/`NaN`.
fn is_decimal_number(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty()
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// `TableName` -> `tableName`, the member path DynamoDB uses in messages.
fn member_path(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn format_violations(violations: &[String]) -> String {
    let noun = if violations.len() == 1 {
        "error"
    } else {
        "errors"
    };
    format!(
        "{} validation {noun} detected: {}",
        violations.len(),
        violations.join("; ")
    )
}
