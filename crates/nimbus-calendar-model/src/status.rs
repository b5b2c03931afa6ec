//! Event status values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// The `STATUS` property of a `VEVENT` (RFC 5545 section 3.8.1.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarEventStatus {
    /// Not yet confirmed.
    #[serde(rename = "TENTATIVE")]
    Tentative,
    /// Definite.
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    /// Cancelled.
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl CalendarEventStatus {
    /// Returns the iCalendar value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tentative => "TENTATIVE",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for CalendarEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarEventStatus {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TENTATIVE" => Ok(Self::Tentative),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(CalendarError::invalid(format!("unknown event status: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_ical_values() {
        for status in [
            CalendarEventStatus::Tentative,
            CalendarEventStatus::Confirmed,
            CalendarEventStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<CalendarEventStatus>().unwrap(), status);
        }
        assert!("confirmed".parse::<CalendarEventStatus>().is_err());
    }

    #[test]
    fn test_should_serialize_as_ical_value() {
        let json = serde_json::to_string(&CalendarEventStatus::Cancelled).unwrap();
        assert_eq!(json, r#""CANCELLED""#);
    }
}
