//! Subcommand implementations.
//!
//! Every command renders to a `String` so `main` only has to print it.

use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Value, json};
use tracing::debug;

use nimbus_core::Scheme;
use nimbus_dynamodb_core::WaiterConfig;
use nimbus_dynamodb_http::{Endpoint, encode_request, resolve_endpoint};
use nimbus_dynamodb_model::schema::{OperationDescriptor, ParamDescriptor, service};
use nimbus_dynamodb_model::validate_request_json;

/// Find an operation by its wire name.
fn lookup(name: &str) -> Result<&'static OperationDescriptor> {
    service().operation(name).ok_or_else(|| {
        let known: Vec<_> = service().operations.iter().map(|o| o.name).collect();
        anyhow!("unknown operation '{name}', expected one of: {}", known.join(", "))
    })
}

/// Read a JSON document from a file path, or stdin for `-`.
pub fn read_json(source: &Path) -> Result<Value> {
    let raw = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read {}", source.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", source.display()))
}

fn constraints(param: &ParamDescriptor) -> String {
    let mut parts = Vec::new();
    if param.required {
        parts.push("required".to_owned());
    }
    if !param.enum_values.is_empty() {
        parts.push(format!("one of [{}]", param.enum_values.join(", ")));
    }
    if param.min_length.is_some() || param.max_length.is_some() {
        parts.push(format!(
            "length {}",
            bounds(param.min_length.map(i128::from), param.max_length.map(i128::from))
        ));
    }
    if param.min_items.is_some() || param.max_items.is_some() {
        parts.push(format!(
            "items {}",
            bounds(param.min_items.map(i128::from), param.max_items.map(i128::from))
        ));
    }
    if param.minimum.is_some() || param.maximum.is_some() {
        parts.push(format!(
            "value {}",
            bounds(param.minimum.map(i128::from), param.maximum.map(i128::from))
        ));
    }
    parts.join("; ")
}

fn bounds(min: Option<i128>, max: Option<i128>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{lo}..={hi}"),
        (Some(lo), None) => format!(">= {lo}"),
        (None, Some(hi)) => format!("<= {hi}"),
        (None, None) => String::new(),
    }
}

fn param_json(param: &ParamDescriptor) -> Value {
    json!({
        "name": param.name,
        "type": param.param_type.as_str(),
        "required": param.required,
        "enum": param.enum_values,
        "minLength": param.min_length,
        "maxLength": param.max_length,
        "minItems": param.min_items,
        "maxItems": param.max_items,
        "minimum": param.minimum,
        "maximum": param.maximum,
    })
}

fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to render JSON")
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// `nimbus operations`
pub fn operations(as_json: bool) -> Result<String> {
    let ops = service().operations;
    if as_json {
        let list: Vec<_> = ops
            .iter()
            .map(|o| json!({"name": o.name, "summary": o.summary}))
            .collect();
        return pretty(&Value::Array(list));
    }
    let width = ops.iter().map(|o| o.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for op in ops {
        let _ = writeln!(out, "{:width$}  {}", op.name, op.summary);
    }
    Ok(out)
}

/// `nimbus describe <Operation>`
pub fn describe(name: &str, as_json: bool) -> Result<String> {
    let op = lookup(name)?;
    if as_json {
        return pretty(&json!({
            "name": op.name,
            "httpMethod": op.http_method,
            "uri": op.uri,
            "target": op.target(),
            "responseClass": op.response_class,
            "summary": op.summary,
            "parameters": op.params.iter().map(param_json).collect::<Vec<_>>(),
            "errors": op.errors.iter().map(|e| e.class).collect::<Vec<_>>(),
        }));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", op.name);
    let _ = writeln!(out, "  {}", op.summary);
    let _ = writeln!(out, "  {} {}  ->  {}", op.http_method, op.uri, op.response_class);
    for (header, value) in op.headers() {
        let _ = writeln!(out, "  {header}: {value}");
    }
    let _ = writeln!(out, "parameters:");
    for param in op.params {
        let _ = writeln!(
            out,
            "  {:28} {:8} {}",
            param.name,
            param.param_type.as_str(),
            constraints(param)
        );
    }
    let _ = writeln!(out, "errors:");
    for error in op.errors {
        let _ = writeln!(out, "  {}", error.class);
    }
    Ok(out)
}

/// `nimbus errors <Operation>`
pub fn errors(name: &str, as_json: bool) -> Result<String> {
    let op = lookup(name)?;
    if as_json {
        let list: Vec<_> = op
            .errors
            .iter()
            .map(|e| {
                json!({
                    "class": e.class,
                    "type": e.code.error_type(),
                    "status": e.code.default_status_code().as_u16(),
                    "reason": e.reason(),
                })
            })
            .collect();
        return pretty(&Value::Array(list));
    }
    let mut out = String::new();
    for error in op.errors {
        let _ = writeln!(
            out,
            "{} ({}): {}",
            error.class,
            error.code.default_status_code().as_u16(),
            error.reason()
        );
    }
    Ok(out)
}

/// `nimbus validate <Operation> <file|->`
pub fn validate(name: &str, body: &Value) -> Result<String> {
    let op = lookup(name)?;
    validate_request_json(op.operation, body).map_err(|e| anyhow!("{}", e.message))?;
    debug!(operation = op.name, "request is valid");
    Ok(format!("{}: request is valid\n", op.name))
}

/// `nimbus encode <Operation> <file|->`
pub fn encode(name: &str, body: &Value, endpoint: &Endpoint) -> Result<String> {
    let op = lookup(name)?;
    validate_request_json(op.operation, body).map_err(|e| anyhow!("{}", e.message))?;
    let request = encode_request(op.operation, body, endpoint)
        .with_context(|| format!("failed to encode {} request", op.name))?;

    let mut out = String::new();
    let _ = writeln!(out, "{} {} HTTP/1.1", request.method(), request.uri());
    for (header, value) in request.headers() {
        let _ = writeln!(out, "{header}: {}", value.to_str().unwrap_or("<binary>"));
    }
    let _ = writeln!(out);
    out.push_str(&String::from_utf8_lossy(request.body()));
    out.push('\n');
    Ok(out)
}

/// `nimbus endpoint <region> [--http]`
pub fn endpoint(region: &str, scheme: Scheme) -> Result<String> {
    let endpoint = resolve_endpoint(region, scheme)?;
    Ok(format!("{}\n", endpoint.url()))
}

/// `nimbus waiters`
///
/// Shows the declared cadence next to the effective one from `config`.
pub fn waiters(config: &WaiterConfig, as_json: bool) -> Result<String> {
    let waiters = service().waiters;
    if as_json {
        let list: Vec<_> = waiters
            .iter()
            .map(|w| {
                json!({
                    "name": w.name,
                    "description": w.description,
                    "operation": w.operation.as_str(),
                    "interval": w.interval_secs,
                    "maxAttempts": w.max_attempts,
                    "success": {"type": w.success.kind(), "value": w.success.value()},
                    "ignoreErrors": w.ignore_errors,
                })
            })
            .collect();
        return pretty(&Value::Array(list));
    }

    let mut out = String::new();
    for waiter in waiters {
        let _ = writeln!(out, "{}: {}", waiter.name, waiter.description);
        let _ = writeln!(
            out,
            "  polls {} every {}s, up to {} attempts (effective: {}s x {})",
            waiter.operation,
            waiter.interval_secs,
            waiter.max_attempts,
            config.interval.as_secs(),
            config.max_attempts
        );
        let _ = writeln!(
            out,
            "  succeeds on {} {}",
            waiter.success.kind(),
            waiter.success.value()
        );
        if !waiter.ignore_errors.is_empty() {
            let _ = writeln!(out, "  ignores {}", waiter.ignore_errors.join(", "));
        }
    }
    Ok(out)
}

/// Resolve the scheme for `endpoint`: `--http` wins, then the configured default.
#[must_use]
pub fn pick_scheme(force_http: bool, configured: Scheme) -> Scheme {
    if force_http { Scheme::Http } else { configured }
}

/// Accept `DynamoDB_20120810.Op` as well as `Op`; other prefixes are rejected.
pub fn normalize_operation(name: &str) -> Result<&str> {
    match name.rsplit_once('.') {
        Some((prefix, op)) if format!("{prefix}.") == service().target_prefix => Ok(op),
        Some(_) => bail!("unsupported target prefix in '{name}'"),
        None => Ok(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_list_every_operation() {
        let out = operations(false).unwrap();
        assert_eq!(out.lines().count(), 13);
        assert!(out.contains("BatchWriteItem"));

        let parsed: Value = serde_json::from_str(&operations(true).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 13);
    }

    #[test]
    fn test_should_describe_operation_with_constraints() {
        let out = describe("Query", false).unwrap();
        assert!(out.contains("X-Amz-Target: DynamoDB_20120810.Query"));
        assert!(out.contains("TableName"));
        assert!(out.contains("length 3..=255"));
        assert!(out.contains("ResourceNotFoundException"));

        let parsed: Value = serde_json::from_str(&describe("Query", true).unwrap()).unwrap();
        assert_eq!(parsed["httpMethod"], "POST");
        assert_eq!(parsed["uri"], "/");
    }

    #[test]
    fn test_should_reject_unknown_operation() {
        let err = describe("Frobnicate", false).unwrap_err();
        assert!(err.to_string().contains("unknown operation 'Frobnicate'"));
    }

    #[test]
    fn test_should_list_errors_with_status() {
        let out = errors("GetItem", false).unwrap();
        assert!(out.contains("ProvisionedThroughputExceededException (400)"));
        assert!(out.contains("InternalServerErrorException (500)"));
    }

    #[test]
    fn test_should_validate_request_documents() {
        let ok = json!({"TableName": "Users", "Key": {"id": {"S": "u1"}}});
        assert!(validate("GetItem", &ok).unwrap().contains("valid"));

        let bad = json!({"TableName": "ab"});
        let err = validate("GetItem", &bad).unwrap_err().to_string();
        assert!(err.contains("2 validation errors detected"), "{err}");
    }

    #[test]
    fn test_should_render_encoded_request() {
        let endpoint = resolve_endpoint("eu-west-1", Scheme::Https).unwrap();
        let out = encode("ListTables", &json!({"Limit": 10}), &endpoint).unwrap();
        assert!(out.starts_with("POST https://dynamodb.eu-west-1.amazonaws.com/ HTTP/1.1"));
        assert!(out.contains("x-amz-target: DynamoDB_20120810.ListTables"));
        assert!(out.trim_end().ends_with(r#"{"Limit":10}"#));
    }

    #[test]
    fn test_should_resolve_endpoints() {
        assert_eq!(
            endpoint("us-east-1", Scheme::Http).unwrap(),
            "http://dynamodb.us-east-1.amazonaws.com/\n"
        );
        assert!(endpoint("us-gov-west-1", Scheme::Http).is_err());
        assert!(endpoint("mars-north-1", Scheme::Https).is_err());
    }

    #[test]
    fn test_should_show_waiter_cadence() {
        let config = WaiterConfig::default().with_max_attempts(3);
        let out = waiters(&config, false).unwrap();
        assert!(out.contains("TableExists"));
        assert!(out.contains("effective: 20s x 3"));
        assert!(out.contains("ignores ResourceNotFoundException"));
    }

    #[test]
    fn test_should_prefer_http_flag() {
        assert_eq!(pick_scheme(true, Scheme::Https), Scheme::Http);
        assert_eq!(pick_scheme(false, Scheme::Https), Scheme::Https);
    }

    #[test]
    fn test_should_strip_target_prefix() {
        assert_eq!(normalize_operation("DynamoDB_20120810.PutItem").unwrap(), "PutItem");
        assert_eq!(normalize_operation("PutItem").unwrap(), "PutItem");
        assert!(normalize_operation("DynamoDB_20111205.PutItem").is_err());
    }
}
