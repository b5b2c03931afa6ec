//! Regional endpoint resolution.

use nimbus_core::Scheme;
use nimbus_dynamodb_model::schema::{RegionEndpoint, service};

use crate::error::CodecError;

/// A resolved service endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Region the endpoint serves.
    pub region: String,
    /// Scheme used to reach it.
    pub scheme: Scheme,
    /// Hostname, also sent as the `host` header.
    pub hostname: String,
}

impl Endpoint {
    /// Base URL, e.g. `https://dynamodb.us-east-1.amazonaws.com/`.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}://{}/", self.scheme, self.hostname)
    }
}

/// Resolve the endpoint for `region` using `scheme`.
///
/// # Errors
///
/// Returns [`CodecError::UnknownRegion`] for regions outside the service
/// description and [`CodecError::SchemeNotSupported`] when the region does not
/// accept the scheme (plain HTTP on `us-gov-west-1`).
pub fn resolve_endpoint(region: &str, scheme: Scheme) -> Result<Endpoint, CodecError> {
    let entry: &RegionEndpoint = service()
        .region(region)
        .ok_or_else(|| CodecError::UnknownRegion(region.to_owned()))?;

    let allowed = match scheme {
        Scheme::Http => entry.http,
        Scheme::Https => entry.https,
    };
    if !allowed {
        return Err(CodecError::SchemeNotSupported {
            region: region.to_owned(),
            scheme,
        });
    }

    Ok(Endpoint {
        region: entry.name.to_owned(),
        scheme,
        hostname: entry.hostname.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_resolve_https_endpoint() {
        let endpoint = resolve_endpoint("ap-southeast-2", Scheme::Https).unwrap();
        assert_eq!(endpoint.hostname, "dynamodb.ap-southeast-2.amazonaws.com");
        assert_eq!(endpoint.url(), "https://dynamodb.ap-southeast-2.amazonaws.com/");
    }

    #[test]
    fn test_should_allow_http_where_declared() {
        let endpoint = resolve_endpoint("us-west-1", Scheme::Http).unwrap();
        assert_eq!(endpoint.url(), "http://dynamodb.us-west-1.amazonaws.com/");
    }

    #[test]
    fn test_should_reject_http_for_gov_cloud() {
        let err = resolve_endpoint("us-gov-west-1", Scheme::Http).unwrap_err();
        assert!(matches!(err, CodecError::SchemeNotSupported { .. }));
        assert!(resolve_endpoint("us-gov-west-1", Scheme::Https).is_ok());
    }

    #[test]
    fn test_should_reject_unknown_region() {
        let err = resolve_endpoint("eu-central-1", Scheme::Https).unwrap_err();
        assert!(matches!(err, CodecError::UnknownRegion(ref r) if r == "eu-central-1"));
    }
}
