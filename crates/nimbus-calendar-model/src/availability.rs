//! Free/busy availability checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A validated availability request.
///
/// Construction enforces `start < end` and at least one attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AvailabilityRequestRaw")]
pub struct AvailabilityRequest {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    organizer: String,
    attendees: Vec<String>,
}

impl AvailabilityRequest {
    /// Build a request for `attendees` over `[start, end)` on behalf of `organizer`.
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        organizer: impl Into<String>,
        attendees: Vec<String>,
    ) -> Result<Self, CalendarError> {
        if start >= end {
            return Err(CalendarError::invalid(format!(
                "availability start {start} must be before end {end}"
            )));
        }
        if attendees.is_empty() {
            return Err(CalendarError::invalid("availability check needs at least one attendee"));
        }
        Ok(Self {
            start,
            end,
            organizer: organizer.into(),
            attendees,
        })
    }

    /// Start of the window.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End of the window.
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Organizer email.
    #[must_use]
    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    /// Attendee emails.
    #[must_use]
    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityRequestRaw {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    organizer: String,
    attendees: Vec<String>,
}

impl TryFrom<AvailabilityRequestRaw> for AvailabilityRequest {
    type Error = CalendarError;

    fn try_from(raw: AvailabilityRequestRaw) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.organizer, raw.attendees)
    }
}

/// Availability of one attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    /// Attendee email.
    pub attendee_email: String,
    /// `true` when the attendee has no busy time in the window.
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_should_accept_ordered_window() {
        let req = AvailabilityRequest::new(
            at(9),
            at(10),
            "organizer@example.com",
            vec!["bob@example.com".to_owned()],
        )
        .unwrap();
        assert_eq!(req.organizer(), "organizer@example.com");
        assert_eq!(req.attendees().len(), 1);
        assert!(req.start() < req.end());
    }

    #[test]
    fn test_should_reject_empty_or_inverted_window() {
        let attendees = vec!["bob@example.com".to_owned()];
        for (start, end) in [(at(10), at(10)), (at(11), at(10))] {
            let err = AvailabilityRequest::new(start, end, "o@example.com", attendees.clone())
                .unwrap_err();
            assert!(matches!(err, CalendarError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_should_reject_missing_attendees() {
        assert!(AvailabilityRequest::new(at(9), at(10), "o@example.com", Vec::new()).is_err());
    }

    #[test]
    fn test_should_validate_request_on_deserialize() {
        let inverted = serde_json::json!({
            "start": at(11), "end": at(10),
            "organizer": "o@example.com", "attendees": ["bob@example.com"]
        });
        let err = serde_json::from_value::<AvailabilityRequest>(inverted).unwrap_err();
        assert!(err.to_string().contains("must be before end"));

        let nobody = serde_json::json!({
            "start": at(9), "end": at(10),
            "organizer": "o@example.com", "attendees": []
        });
        let err = serde_json::from_value::<AvailabilityRequest>(nobody).unwrap_err();
        assert!(err.to_string().contains("at least one attendee"));
    }

    #[test]
    fn test_should_round_trip_request_through_json() {
        let req = AvailabilityRequest::new(
            at(9),
            at(10),
            "o@example.com",
            vec!["bob@example.com".to_owned()],
        )
        .unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["organizer"], "o@example.com");
        let back: AvailabilityRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_should_serialize_result_in_camel_case() {
        let result = AvailabilityResult {
            attendee_email: "bob@example.com".to_owned(),
            available: false,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["attendeeEmail"], "bob@example.com");
        assert_eq!(json["available"], false);
    }
}
