//! Import and export options.
//!
//! Every enumerated field has two setters: a typed one that cannot fail, and a
//! raw one taking the wire value (`&str` or integer code) that rejects anything
//! outside the enumeration and leaves the current value untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Serialization format of calendar data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarFormat {
    /// iCalendar text (RFC 5545).
    #[default]
    Ical,
    /// jCal JSON (RFC 7265).
    Jcal,
    /// xCal XML (RFC 6321).
    Xcal,
}

impl CalendarFormat {
    /// Every format, in declaration order.
    pub const ALL: &[Self] = &[Self::Ical, Self::Jcal, Self::Xcal];

    /// Returns the wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ical => "ical",
            Self::Jcal => "jcal",
            Self::Xcal => "xcal",
        }
    }
}

impl fmt::Display for CalendarFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                CalendarError::invalid(format!("format must be one of ical, jcal, xcal: {s}"))
            })
    }
}

/// What an import does when a single object fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ImportErrorMode {
    /// Record the failure and keep going.
    Continue = 0,
    /// Stop at the first failure.
    #[default]
    Fail = 1,
}

impl ImportErrorMode {
    /// Integer code used on the wire.
    #[must_use]
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for ImportErrorMode {
    type Error = CalendarError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Continue),
            1 => Ok(Self::Fail),
            other => Err(CalendarError::invalid(format!(
                "errors must be 0 (continue) or 1 (fail): {other}"
            ))),
        }
    }
}

impl From<ImportErrorMode> for i64 {
    fn from(mode: ImportErrorMode) -> Self {
        mode.code()
    }
}

/// How an import treats objects that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ImportValidationMode {
    /// Do not validate.
    None = 0,
    /// Skip invalid objects.
    #[default]
    Skip = 1,
    /// Fail on the first invalid object.
    Fail = 2,
}

impl ImportValidationMode {
    /// Integer code used on the wire.
    #[must_use]
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for ImportValidationMode {
    type Error = CalendarError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Skip),
            2 => Ok(Self::Fail),
            other => Err(CalendarError::invalid(format!(
                "validate must be 0 (none), 1 (skip) or 2 (fail): {other}"
            ))),
        }
    }
}

impl From<ImportValidationMode> for i64 {
    fn from(mode: ImportValidationMode) -> Self {
        mode.code()
    }
}

// ---------------------------------------------------------------------------
// Import options
// ---------------------------------------------------------------------------

/// Options controlling a calendar import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarImportOptions {
    format: CalendarFormat,
    supersede: bool,
    errors: ImportErrorMode,
    validate: ImportValidationMode,
}

impl CalendarImportOptions {
    /// Options with defaults: `ical`, no supersede, fail on error, skip invalid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input format.
    #[must_use]
    pub fn format(&self) -> CalendarFormat {
        self.format
    }

    /// Set the input format.
    pub fn set_format(&mut self, format: CalendarFormat) {
        self.format = format;
    }

    /// Set the input format from its wire name.
    pub fn set_format_str(&mut self, format: &str) -> Result<(), CalendarError> {
        self.format = format.parse()?;
        Ok(())
    }

    /// Whether imported objects replace existing ones with the same UID.
    #[must_use]
    pub fn supersede(&self) -> bool {
        self.supersede
    }

    /// Set the supersede flag.
    pub fn set_supersede(&mut self, supersede: bool) {
        self.supersede = supersede;
    }

    /// Error handling mode.
    #[must_use]
    pub fn errors(&self) -> ImportErrorMode {
        self.errors
    }

    /// Set the error handling mode.
    pub fn set_errors(&mut self, errors: ImportErrorMode) {
        self.errors = errors;
    }

    /// Set the error handling mode from its integer code.
    pub fn set_errors_code(&mut self, code: i64) -> Result<(), CalendarError> {
        self.errors = ImportErrorMode::try_from(code)?;
        Ok(())
    }

    /// Validation mode.
    #[must_use]
    pub fn validate(&self) -> ImportValidationMode {
        self.validate
    }

    /// Set the validation mode.
    pub fn set_validate(&mut self, validate: ImportValidationMode) {
        self.validate = validate;
    }

    /// Set the validation mode from its integer code.
    pub fn set_validate_code(&mut self, code: i64) -> Result<(), CalendarError> {
        self.validate = ImportValidationMode::try_from(code)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Export options
// ---------------------------------------------------------------------------

/// Options controlling a calendar export.
///
/// `range_start` is an opaque cursor returned by a previous export page and
/// `range_count` caps the number of objects per page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CalendarExportOptionsRaw")]
pub struct CalendarExportOptions {
    format: CalendarFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range_count: Option<u32>,
}

impl CalendarExportOptions {
    /// Options with defaults: `ical`, no range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Output format.
    #[must_use]
    pub fn format(&self) -> CalendarFormat {
        self.format
    }

    /// Set the output format.
    pub fn set_format(&mut self, format: CalendarFormat) {
        self.format = format;
    }

    /// Set the output format from its wire name.
    pub fn set_format_str(&mut self, format: &str) -> Result<(), CalendarError> {
        self.format = format.parse()?;
        Ok(())
    }

    /// Cursor of the first object to export.
    #[must_use]
    pub fn range_start(&self) -> Option<&str> {
        self.range_start.as_deref()
    }

    /// Set or clear the start cursor.
    pub fn set_range_start(&mut self, start: Option<String>) {
        self.range_start = start;
    }

    /// Maximum number of objects to export.
    #[must_use]
    pub fn range_count(&self) -> Option<u32> {
        self.range_count
    }

    /// Set or clear the page size. A count of zero is rejected.
    pub fn set_range_count(&mut self, count: Option<u32>) -> Result<(), CalendarError> {
        if count == Some(0) {
            return Err(CalendarError::invalid("range count must be positive"));
        }
        self.range_count = count;
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarExportOptionsRaw {
    format: CalendarFormat,
    #[serde(default)]
    range_start: Option<String>,
    #[serde(default)]
    range_count: Option<u32>,
}

impl TryFrom<CalendarExportOptionsRaw> for CalendarExportOptions {
    type Error = CalendarError;

    fn try_from(raw: CalendarExportOptionsRaw) -> Result<Self, Self::Error> {
        let mut opts = Self {
            format: raw.format,
            range_start: raw.range_start,
            range_count: None,
        };
        opts.set_range_count(raw.range_count)?;
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_import_options() {
        let opts = CalendarImportOptions::new();
        assert_eq!(opts.format(), CalendarFormat::Ical);
        assert!(!opts.supersede());
        assert_eq!(opts.errors(), ImportErrorMode::Fail);
        assert_eq!(opts.validate(), ImportValidationMode::Skip);
    }

    #[test]
    fn test_should_accept_every_format_name() {
        let mut import = CalendarImportOptions::new();
        let mut export = CalendarExportOptions::new();
        for format in CalendarFormat::ALL {
            import.set_format_str(format.as_str()).unwrap();
            export.set_format_str(format.as_str()).unwrap();
            assert_eq!(import.format(), *format);
            assert_eq!(export.format(), *format);
        }
    }

    #[test]
    fn test_should_keep_format_on_invalid_name() {
        let mut import = CalendarImportOptions::new();
        import.set_format(CalendarFormat::Jcal);
        let err = import.set_format_str("vcard").unwrap_err();
        assert!(matches!(err, CalendarError::InvalidArgument(_)));
        assert_eq!(import.format(), CalendarFormat::Jcal);

        let mut export = CalendarExportOptions::new();
        export.set_format(CalendarFormat::Xcal);
        assert!(export.set_format_str("ICAL").is_err());
        assert_eq!(export.format(), CalendarFormat::Xcal);
    }

    #[test]
    fn test_should_accept_every_error_code() {
        let mut opts = CalendarImportOptions::new();
        opts.set_errors_code(0).unwrap();
        assert_eq!(opts.errors(), ImportErrorMode::Continue);
        opts.set_errors_code(1).unwrap();
        assert_eq!(opts.errors(), ImportErrorMode::Fail);
    }

    #[test]
    fn test_should_keep_error_mode_on_invalid_code() {
        let mut opts = CalendarImportOptions::new();
        opts.set_errors(ImportErrorMode::Continue);
        for code in [-1, 2, 99] {
            let err = opts.set_errors_code(code).unwrap_err();
            assert!(matches!(err, CalendarError::InvalidArgument(_)));
            assert_eq!(opts.errors(), ImportErrorMode::Continue);
        }
    }

    #[test]
    fn test_should_accept_every_validation_code() {
        let mut opts = CalendarImportOptions::new();
        for (code, mode) in [
            (0, ImportValidationMode::None),
            (1, ImportValidationMode::Skip),
            (2, ImportValidationMode::Fail),
        ] {
            opts.set_validate_code(code).unwrap();
            assert_eq!(opts.validate(), mode);
            assert_eq!(opts.validate().code(), code);
        }
    }

    #[test]
    fn test_should_keep_validation_mode_on_invalid_code() {
        let mut opts = CalendarImportOptions::new();
        opts.set_validate(ImportValidationMode::Fail);
        let err = opts.set_validate_code(3).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidArgument(_)));
        assert_eq!(opts.validate(), ImportValidationMode::Fail);
    }

    #[test]
    fn test_should_toggle_supersede() {
        let mut opts = CalendarImportOptions::new();
        opts.set_supersede(true);
        assert!(opts.supersede());
    }

    #[test]
    fn test_should_validate_range_count() {
        let mut opts = CalendarExportOptions::new();
        opts.set_range_count(Some(50)).unwrap();
        assert_eq!(opts.range_count(), Some(50));

        let err = opts.set_range_count(Some(0)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidArgument(_)));
        assert_eq!(opts.range_count(), Some(50));

        opts.set_range_count(None).unwrap();
        assert_eq!(opts.range_count(), None);
    }

    #[test]
    fn test_should_reject_zero_range_count_on_deserialize() {
        let json = serde_json::json!({ "format": "ical", "rangeCount": 0 });
        let err = serde_json::from_value::<CalendarExportOptions>(json).unwrap_err();
        assert!(err.to_string().contains("range count must be positive"));

        let json = serde_json::json!({ "format": "jcal", "rangeStart": "e-1.ics", "rangeCount": 10 });
        let opts: CalendarExportOptions = serde_json::from_value(json).unwrap();
        assert_eq!(opts.format(), CalendarFormat::Jcal);
        assert_eq!(opts.range_start(), Some("e-1.ics"));
        assert_eq!(opts.range_count(), Some(10));
    }

    #[test]
    fn test_should_store_range_start() {
        let mut opts = CalendarExportOptions::new();
        opts.set_range_start(Some("event-42.ics".to_owned()));
        assert_eq!(opts.range_start(), Some("event-42.ics"));
    }

    #[test]
    fn test_should_serialize_modes_as_codes() {
        let mut opts = CalendarImportOptions::new();
        opts.set_errors(ImportErrorMode::Continue);
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["format"], "ical");
        assert_eq!(json["errors"], 0);
        assert_eq!(json["validate"], 1);

        let back: CalendarImportOptions = serde_json::from_value(json).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn test_should_reject_out_of_range_code_on_deserialize() {
        let json = serde_json::json!({
            "format": "ical", "supersede": false, "errors": 7, "validate": 1
        });
        assert!(serde_json::from_value::<CalendarImportOptions>(json).is_err());
    }
}
