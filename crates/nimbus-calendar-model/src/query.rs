//! Calendar search queries.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// iCalendar properties a search pattern may be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchProperty {
    /// `ATTENDEE`.
    Attendee,
    /// `CATEGORIES`.
    Categories,
    /// `COMMENT`.
    Comment,
    /// `CONTACT`.
    Contact,
    /// `DESCRIPTION`.
    Description,
    /// `LOCATION`.
    Location,
    /// `ORGANIZER`.
    Organizer,
    /// `RESOURCES`.
    Resources,
    /// `STATUS`.
    Status,
    /// `SUMMARY`.
    Summary,
}

impl SearchProperty {
    /// Every searchable property.
    pub const ALL: &[Self] = &[
        Self::Attendee,
        Self::Categories,
        Self::Comment,
        Self::Contact,
        Self::Description,
        Self::Location,
        Self::Organizer,
        Self::Resources,
        Self::Status,
        Self::Summary,
    ];

    /// Returns the iCalendar property name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attendee => "ATTENDEE",
            Self::Categories => "CATEGORIES",
            Self::Comment => "COMMENT",
            Self::Contact => "CONTACT",
            Self::Description => "DESCRIPTION",
            Self::Location => "LOCATION",
            Self::Organizer => "ORGANIZER",
            Self::Resources => "RESOURCES",
            Self::Status => "STATUS",
            Self::Summary => "SUMMARY",
        }
    }
}

impl fmt::Display for SearchProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchProperty {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CalendarError::invalid(format!("unsupported search property: {s}")))
    }
}

/// Calendar component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentType {
    /// `VEVENT`.
    #[serde(rename = "VEVENT")]
    Event,
    /// `VTODO`.
    #[serde(rename = "VTODO")]
    Todo,
    /// `VJOURNAL`.
    #[serde(rename = "VJOURNAL")]
    Journal,
}

impl ComponentType {
    /// Returns the iCalendar component name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VEVENT" => Ok(Self::Event),
            "VTODO" => Ok(Self::Todo),
            "VJOURNAL" => Ok(Self::Journal),
            other => Err(CalendarError::invalid(format!("unsupported component type: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Time range and options
// ---------------------------------------------------------------------------

/// Half-open time window; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "TimeRangeRaw")]
pub struct TimeRange {
    /// Inclusive start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Exclusive end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// Build a range, rejecting `end <= start` when both are set.
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, CalendarError> {
        if let (Some(s), Some(e)) = (start, end) {
            if e <= s {
                return Err(CalendarError::invalid(format!(
                    "time range end {e} must be after start {s}"
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Whether `[from, to)` overlaps this range.
    #[must_use]
    pub fn overlaps(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.start.is_none_or(|s| to > s) && self.end.is_none_or(|e| from < e)
    }
}

#[derive(Deserialize)]
struct TimeRangeRaw {
    #[serde(default)]
    start: Option<DateTime<Utc>>,
    #[serde(default)]
    end: Option<DateTime<Utc>>,
}

impl TryFrom<TimeRangeRaw> for TimeRange {
    type Error = CalendarError;

    fn try_from(raw: TimeRangeRaw) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Filters applied on top of the pattern match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Only objects overlapping this window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    /// Only these component kinds; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<ComponentType>,
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A search across one or more calendars of a principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    principal_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    search_properties: BTreeSet<SearchProperty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    calendar_uris: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_limit"
    )]
    limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
    #[serde(default)]
    options: SearchOptions,
}

impl CalendarQuery {
    /// A query over every calendar of `principal_uri`.
    #[must_use]
    pub fn new(principal_uri: impl Into<String>) -> Self {
        Self {
            principal_uri: principal_uri.into(),
            ..Self::default()
        }
    }

    /// Principal whose calendars are searched.
    #[must_use]
    pub fn principal_uri(&self) -> &str {
        &self.principal_uri
    }

    /// Set the text to match.
    pub fn set_search_pattern(&mut self, pattern: impl Into<String>) {
        self.search_pattern = Some(pattern.into());
    }

    /// Text to match, if any.
    #[must_use]
    pub fn search_pattern(&self) -> Option<&str> {
        self.search_pattern.as_deref()
    }

    /// Add a property the pattern is matched against.
    pub fn add_search_property(&mut self, property: SearchProperty) {
        self.search_properties.insert(property);
    }

    /// Add a property by its iCalendar name.
    pub fn add_search_property_str(&mut self, property: &str) -> Result<(), CalendarError> {
        self.search_properties.insert(property.parse()?);
        Ok(())
    }

    /// Properties to match, in a stable order.
    pub fn search_properties(&self) -> impl Iterator<Item = SearchProperty> + '_ {
        self.search_properties.iter().copied()
    }

    /// Restrict the search to a calendar.
    pub fn add_search_calendar(&mut self, calendar_uri: impl Into<String>) {
        self.calendar_uris.push(calendar_uri.into());
    }

    /// Calendars to search; empty means all.
    #[must_use]
    pub fn calendar_uris(&self) -> &[String] {
        &self.calendar_uris
    }

    /// Restrict the search to a component kind.
    pub fn add_type(&mut self, component: ComponentType) {
        if !self.options.types.contains(&component) {
            self.options.types.push(component);
        }
    }

    /// Cap the number of results. Zero is rejected.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), CalendarError> {
        if limit == 0 {
            return Err(CalendarError::invalid("limit must be positive"));
        }
        self.limit = Some(limit);
        Ok(())
    }

    /// Result cap.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Skip the first `offset` results.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = Some(offset);
    }

    /// Results to skip.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Only return objects overlapping `[start, end)`.
    pub fn set_time_range(
        &mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<(), CalendarError> {
        self.options.time_range = Some(TimeRange::new(start, end)?);
        Ok(())
    }

    /// Type and time filters.
    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let limit = Option::<usize>::deserialize(deserializer)?;
    if limit == Some(0) {
        return Err(serde::de::Error::custom("limit must be positive"));
    }
    Ok(limit)
}

/// A calendar object returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarObject {
    /// Backend identifier.
    pub id: String,
    /// Object URI inside its calendar.
    pub uri: String,
    /// iCalendar `UID`.
    pub uid: String,
    /// Kind of the main component.
    pub component: ComponentType,
    /// Serialized object.
    pub data: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_should_parse_every_search_property() {
        let mut query = CalendarQuery::new("principals/users/alice");
        for property in SearchProperty::ALL {
            query.add_search_property_str(property.as_str()).unwrap();
        }
        assert_eq!(query.search_properties().count(), 10);
    }

    #[test]
    fn test_should_reject_unknown_search_property() {
        let mut query = CalendarQuery::new("principals/users/alice");
        query.add_search_property(SearchProperty::Summary);
        let err = query.add_search_property_str("DTSTART").unwrap_err();
        assert!(matches!(err, CalendarError::InvalidArgument(_)));
        assert_eq!(
            query.search_properties().collect::<Vec<_>>(),
            vec![SearchProperty::Summary]
        );
    }

    #[test]
    fn test_should_reject_inverted_time_range() {
        let mut query = CalendarQuery::new("principals/users/alice");
        query.set_time_range(Some(at(9)), Some(at(10))).unwrap();
        assert!(query.set_time_range(Some(at(10)), Some(at(9))).is_err());
        assert_eq!(query.options().time_range.unwrap().start, Some(at(9)));
    }

    #[test]
    fn test_should_reject_inverted_time_range_on_deserialize() {
        let json = serde_json::json!({ "start": at(10), "end": at(9) });
        let err = serde_json::from_value::<TimeRange>(json).unwrap_err();
        assert!(err.to_string().contains("must be after start"));

        let query = serde_json::json!({
            "principalUri": "principals/users/alice",
            "options": { "timeRange": { "start": at(9), "end": at(9) } }
        });
        assert!(serde_json::from_value::<CalendarQuery>(query).is_err());

        let open: TimeRange = serde_json::from_value(serde_json::json!({ "end": at(9) })).unwrap();
        assert_eq!(open.start, None);
        assert_eq!(open.end, Some(at(9)));
    }

    #[test]
    fn test_should_check_overlap_with_open_bounds() {
        let range = TimeRange::new(Some(at(9)), None).unwrap();
        assert!(range.overlaps(at(8), at(10)));
        assert!(!range.overlaps(at(7), at(9)));
        assert!(TimeRange::default().overlaps(at(1), at(2)));
    }

    #[test]
    fn test_should_dedupe_component_types() {
        let mut query = CalendarQuery::new("p");
        query.add_type(ComponentType::Event);
        query.add_type(ComponentType::Event);
        query.add_type(ComponentType::Todo);
        assert_eq!(
            query.options().types,
            vec![ComponentType::Event, ComponentType::Todo]
        );
    }

    #[test]
    fn test_should_reject_zero_limit() {
        let mut query = CalendarQuery::new("p");
        query.set_limit(5).unwrap();
        assert!(query.set_limit(0).is_err());
        assert_eq!(query.limit(), Some(5));

        let json = serde_json::json!({ "principalUri": "p", "limit": 0 });
        assert!(serde_json::from_value::<CalendarQuery>(json).is_err());
        let json = serde_json::json!({ "principalUri": "p", "limit": 3 });
        let query: CalendarQuery = serde_json::from_value(json).unwrap();
        assert_eq!(query.limit(), Some(3));
    }

    #[test]
    fn test_should_serialize_component_names() {
        let json = serde_json::to_value(ComponentType::Journal).unwrap();
        assert_eq!(json, "VJOURNAL");
        assert_eq!("VTODO".parse::<ComponentType>().unwrap(), ComponentType::Todo);
    }
}
