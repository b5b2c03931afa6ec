//! Configuration management for Nimbus.
//!
//! All configuration is driven by environment variables. Binaries may layer
//! command-line flags on top of the values loaded here.

use crate::error::{NimbusError, NimbusResult};
use crate::types::{AwsRegion, Scheme};

/// Global configuration for Nimbus.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NimbusConfig {
    /// Region used to resolve service endpoints.
    pub default_region: AwsRegion,
    /// Log level.
    pub log_level: String,
    /// Scheme used when building endpoint URLs.
    pub endpoint_scheme: Scheme,
}

impl Default for NimbusConfig {
    fn default() -> Self {
        Self {
            default_region: AwsRegion::default(),
            log_level: "info".to_owned(),
            endpoint_scheme: Scheme::default(),
        }
    }
}

impl NimbusConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `LOG_LEVEL` | `info` |
    /// | `ENDPOINT_SCHEME` | `https` |
    pub fn from_env() -> NimbusResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> NimbusResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("DEFAULT_REGION") {
            if v.trim().is_empty() {
                return Err(NimbusError::Config("DEFAULT_REGION is empty".to_owned()));
            }
            config.default_region = AwsRegion::new(v.trim());
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("ENDPOINT_SCHEME") {
            config.endpoint_scheme = v.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = NimbusConfig::default();
        assert_eq!(config.default_region.as_str(), "us-east-1");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.endpoint_scheme, Scheme::Https);
    }

    #[test]
    fn test_should_override_from_lookup() {
        let config = NimbusConfig::from_lookup(lookup_from(&[
            ("DEFAULT_REGION", "eu-west-1"),
            ("LOG_LEVEL", "debug"),
            ("ENDPOINT_SCHEME", "http"),
        ]))
        .unwrap();
        assert_eq!(config.default_region.as_str(), "eu-west-1");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.endpoint_scheme, Scheme::Http);
    }

    #[test]
    fn test_should_reject_bad_scheme() {
        let err = NimbusConfig::from_lookup(lookup_from(&[("ENDPOINT_SCHEME", "gopher")]))
            .unwrap_err();
        assert!(matches!(err, NimbusError::InvalidScheme(_)));
    }

    #[test]
    fn test_should_reject_empty_region() {
        let err =
            NimbusConfig::from_lookup(lookup_from(&[("DEFAULT_REGION", "  ")])).unwrap_err();
        assert!(matches!(err, NimbusError::Config(_)));
    }

    #[test]
    fn test_should_serialize_config_in_camel_case() {
        let json = serde_json::to_value(NimbusConfig::default()).unwrap();
        assert_eq!(json["defaultRegion"], "us-east-1");
        assert_eq!(json["endpointScheme"], "https");
    }
}
