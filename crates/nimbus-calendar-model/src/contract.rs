//! Capability traits implemented by calendar backends.
//!
//! A backend implements [`Calendar`] and whichever capability traits it
//! supports. Capabilities are separate traits so hosts can require exactly the
//! set they need, e.g. `T: Calendar + CalendarImport`.
//!
//! The traits use `#[async_trait]` so they stay object-safe and a host can keep
//! heterogeneous backends behind `Box<dyn Calendar>`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::availability::{AvailabilityRequest, AvailabilityResult};
use crate::error::CalendarResult;
use crate::import::ImportResult;
use crate::options::{CalendarExportOptions, CalendarImportOptions};
use crate::permissions::CalendarPermissions;
use crate::query::{CalendarObject, SearchOptions, SearchProperty};

/// A calendar exposed to the host application.
#[async_trait]
pub trait Calendar: Send + Sync {
    /// Backend-unique key.
    fn key(&self) -> &str;

    /// URI of the calendar relative to its principal.
    fn uri(&self) -> &str;

    /// Human readable name, if set.
    fn display_name(&self) -> Option<&str>;

    /// Display colour as `#RRGGBB`, if set.
    fn display_color(&self) -> Option<&str>;

    /// Operations the current principal may perform.
    fn permissions(&self) -> CalendarPermissions;

    /// Whether the calendar is in the trash bin.
    fn is_deleted(&self) -> bool;

    /// Search objects matching `pattern` in `properties`.
    ///
    /// An empty `properties` slice matches against every supported property.
    async fn search(
        &self,
        pattern: &str,
        properties: &[SearchProperty],
        options: &SearchOptions,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> CalendarResult<Vec<CalendarObject>>;

    /// Whether the current principal holds every bit of `permission`.
    fn can(&self, permission: CalendarPermissions) -> bool {
        self.permissions().contains(permission)
    }
}

/// A calendar that may be shared with other principals.
pub trait CalendarIsShared: Calendar {
    /// Whether the calendar is shared.
    fn is_shared(&self) -> bool;
}

/// A calendar that may accept writes.
pub trait CalendarIsWritable: Calendar {
    /// Whether writes are currently accepted.
    fn is_writable(&self) -> bool;
}

/// A calendar that may be disabled by its owner.
pub trait CalendarIsEnabled: Calendar {
    /// Whether the calendar is enabled.
    fn is_enabled(&self) -> bool;
}

/// Object creation from serialized iCalendar data.
#[async_trait]
pub trait CreateFromString: CalendarIsWritable {
    /// Store `data` as a new object named `name`.
    async fn create_from_string(&self, name: &str, data: &str) -> CalendarResult<()>;

    /// Apply an iMIP message (RFC 6047) carried in `data`.
    async fn handle_imip_message(&self, name: &str, data: &str) -> CalendarResult<()>;
}

/// Calendar export.
#[async_trait]
pub trait CalendarExport: Calendar {
    /// Serialize objects according to `options`, or the defaults when `None`.
    ///
    /// Each entry is one serialized object in the requested format.
    async fn export(&self, options: Option<CalendarExportOptions>) -> CalendarResult<Vec<String>>;
}

/// Calendar import.
#[async_trait]
pub trait CalendarImport: Calendar {
    /// Import serialized `objects`, returning one result per object processed.
    ///
    /// With [`ImportErrorMode::Fail`](crate::options::ImportErrorMode::Fail)
    /// the backend stops after the first failed object.
    async fn import(
        &self,
        options: CalendarImportOptions,
        objects: Vec<String>,
    ) -> CalendarResult<Vec<ImportResult>>;
}

/// Free/busy lookups.
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    /// Check a validated request.
    async fn check(&self, request: &AvailabilityRequest)
    -> CalendarResult<Vec<AvailabilityResult>>;

    /// Validate the arguments and check availability of `attendees`.
    async fn check_availability(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        organizer: &str,
        attendees: &[String],
    ) -> CalendarResult<Vec<AvailabilityResult>> {
        let request = AvailabilityRequest::new(start, end, organizer, attendees.to_vec())?;
        tracing::debug!(
            organizer,
            attendees = attendees.len(),
            %start,
            %end,
            "checking availability"
        );
        self.check(&request).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use chrono::TimeZone;

    use super::*;
    use crate::error::CalendarError;
    use crate::import::ImportOutcome;
    use crate::options::{CalendarFormat, ImportErrorMode};
    use crate::query::ComponentType;

    #[derive(Debug, Default)]
    struct MemoryCalendar {
        objects: Mutex<BTreeMap<String, String>>,
        read_only: bool,
    }

    fn uid_of(data: &str) -> Option<&str> {
        data.lines()
            .find_map(|line| line.trim().strip_prefix("UID:"))
            .filter(|uid| !uid.is_empty())
    }

    fn event(uid: &str, summary: &str) -> String {
        format!("BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:{uid}\nSUMMARY:{summary}\nEND:VEVENT\nEND:VCALENDAR")
    }

    #[async_trait]
    impl Calendar for MemoryCalendar {
        fn key(&self) -> &str {
            "1"
        }

        fn uri(&self) -> &str {
            "personal"
        }

        fn display_name(&self) -> Option<&str> {
            Some("Personal")
        }

        fn display_color(&self) -> Option<&str> {
            None
        }

        fn permissions(&self) -> CalendarPermissions {
            if self.read_only {
                CalendarPermissions::READ
            } else {
                CalendarPermissions::ALL
            }
        }

        fn is_deleted(&self) -> bool {
            false
        }

        async fn search(
            &self,
            pattern: &str,
            properties: &[SearchProperty],
            options: &SearchOptions,
            limit: Option<usize>,
            offset: Option<usize>,
        ) -> CalendarResult<Vec<CalendarObject>> {
            if !options.types.is_empty() && !options.types.contains(&ComponentType::Event) {
                return Ok(Vec::new());
            }
            let wanted = |line: &str| {
                properties.is_empty()
                    || properties
                        .iter()
                        .any(|p| line.starts_with(&format!("{}:", p.as_str())))
            };
            let objects = self.objects.lock().unwrap();
            Ok(objects
                .iter()
                .filter(|(_, data)| {
                    data.lines()
                        .any(|line| wanted(line) && line.contains(pattern))
                })
                .skip(offset.unwrap_or(0))
                .take(limit.unwrap_or(usize::MAX))
                .map(|(uid, data)| CalendarObject {
                    id: uid.clone(),
                    uri: format!("{uid}.ics"),
                    uid: uid.clone(),
                    component: ComponentType::Event,
                    data: data.clone(),
                })
                .collect())
        }
    }

    impl CalendarIsWritable for MemoryCalendar {
        fn is_writable(&self) -> bool {
            self.can(CalendarPermissions::CREATE)
        }
    }

    #[async_trait]
    impl CreateFromString for MemoryCalendar {
        async fn create_from_string(&self, name: &str, data: &str) -> CalendarResult<()> {
            if !self.is_writable() {
                return Err(CalendarError::PermissionDenied(format!(
                    "calendar is read-only: {name}"
                )));
            }
            let uid = uid_of(data)
                .ok_or_else(|| CalendarError::invalid(format!("object has no UID: {name}")))?;
            self.objects
                .lock()
                .unwrap()
                .insert(uid.to_owned(), data.to_owned());
            Ok(())
        }

        async fn handle_imip_message(&self, name: &str, data: &str) -> CalendarResult<()> {
            self.create_from_string(name, data).await
        }
    }

    #[async_trait]
    impl CalendarExport for MemoryCalendar {
        async fn export(
            &self,
            options: Option<CalendarExportOptions>,
        ) -> CalendarResult<Vec<String>> {
            let options = options.unwrap_or_default();
            if options.format() != CalendarFormat::Ical {
                return Err(CalendarError::invalid(format!(
                    "unsupported export format: {}",
                    options.format()
                )));
            }
            let objects = self.objects.lock().unwrap();
            Ok(objects
                .iter()
                .filter(|(uid, _)| options.range_start().is_none_or(|start| uid.as_str() >= start))
                .take(options.range_count().map_or(usize::MAX, |c| c as usize))
                .map(|(_, data)| data.clone())
                .collect())
        }
    }

    #[async_trait]
    impl CalendarImport for MemoryCalendar {
        async fn import(
            &self,
            options: CalendarImportOptions,
            objects: Vec<String>,
        ) -> CalendarResult<Vec<ImportResult>> {
            let mut results = Vec::new();
            let mut store = self.objects.lock().unwrap();
            for data in objects {
                let result = match uid_of(&data) {
                    None => ImportResult::failed("", vec!["missing UID".to_owned()]),
                    Some(uid) if store.contains_key(uid) && !options.supersede() => {
                        ImportResult::new(uid, ImportOutcome::Exists)
                    }
                    Some(uid) => {
                        let outcome = if store.insert(uid.to_owned(), data.clone()).is_some() {
                            ImportOutcome::Updated
                        } else {
                            ImportOutcome::Created
                        };
                        ImportResult::new(uid, outcome)
                    }
                };
                let stop = result.is_error() && options.errors() == ImportErrorMode::Fail;
                results.push(result);
                if stop {
                    break;
                }
            }
            Ok(results)
        }
    }

    struct BusyUntilNoon;

    #[async_trait]
    impl AvailabilityChecker for BusyUntilNoon {
        async fn check(
            &self,
            request: &AvailabilityRequest,
        ) -> CalendarResult<Vec<AvailabilityResult>> {
            let noon = Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap();
            Ok(request
                .attendees()
                .iter()
                .map(|email| AvailabilityResult {
                    attendee_email: email.clone(),
                    available: request.start() >= noon,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_should_create_and_search_objects() {
        let calendar = MemoryCalendar::default();
        calendar
            .create_from_string("a.ics", &event("a", "Standup"))
            .await
            .unwrap();
        calendar
            .create_from_string("b.ics", &event("b", "Retro"))
            .await
            .unwrap();

        let found = calendar
            .search(
                "Retro",
                &[SearchProperty::Summary],
                &SearchOptions::default(),
                None,
                None,
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].uid, "b");

        let none = calendar
            .search(
                "Retro",
                &[SearchProperty::Location],
                &SearchOptions::default(),
                None,
                None,
            )
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_should_deny_writes_on_read_only_calendar() {
        let calendar = MemoryCalendar {
            read_only: true,
            ..Default::default()
        };
        assert!(!calendar.is_writable());
        let err = calendar
            .create_from_string("a.ics", &event("a", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CalendarError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_should_honour_supersede_and_error_mode_on_import() {
        let calendar = MemoryCalendar::default();
        calendar
            .create_from_string("a.ics", &event("a", "old"))
            .await
            .unwrap();

        let mut options = CalendarImportOptions::new();
        let results = calendar
            .import(
                options.clone(),
                vec![event("a", "new"), "BEGIN:VCALENDAR".to_owned(), event("c", "x")],
            )
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].outcome, ImportOutcome::Exists);
        assert!(results[1].is_error());

        options.set_supersede(true);
        options.set_errors(ImportErrorMode::Continue);
        let results = calendar
            .import(
                options,
                vec![event("a", "new"), "BEGIN:VCALENDAR".to_owned(), event("c", "x")],
            )
            .await
            .unwrap();
        let outcomes: Vec<_> = results.iter().map(|r| r.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                ImportOutcome::Updated,
                ImportOutcome::Error,
                ImportOutcome::Created
            ]
        );
    }

    #[tokio::test]
    async fn test_should_page_exports() {
        let calendar = MemoryCalendar::default();
        for uid in ["a", "b", "c"] {
            calendar
                .create_from_string(uid, &event(uid, uid))
                .await
                .unwrap();
        }
        assert_eq!(calendar.export(None).await.unwrap().len(), 3);

        let mut options = CalendarExportOptions::new();
        options.set_range_start(Some("b".to_owned()));
        options.set_range_count(Some(1)).unwrap();
        let page = calendar.export(Some(options)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert!(page[0].contains("UID:b"));

        let mut jcal = CalendarExportOptions::new();
        jcal.set_format(CalendarFormat::Jcal);
        assert!(calendar.export(Some(jcal)).await.is_err());
    }

    #[tokio::test]
    async fn test_should_validate_before_checking_availability() {
        let at = |h| Utc.with_ymd_and_hms(2026, 5, 4, h, 0, 0).unwrap();
        let attendees = vec!["bob@example.com".to_owned()];

        let results = BusyUntilNoon
            .check_availability(at(13), at(14), "o@example.com", &attendees)
            .await
            .unwrap();
        assert!(results[0].available);

        let results = BusyUntilNoon
            .check_availability(at(9), at(10), "o@example.com", &attendees)
            .await
            .unwrap();
        assert!(!results[0].available);

        let err = BusyUntilNoon
            .check_availability(at(10), at(9), "o@example.com", &attendees)
            .await
            .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidArgument(_)));
    }

    #[test]
    fn test_should_be_object_safe() {
        let calendars: Vec<Box<dyn Calendar>> = vec![Box::new(MemoryCalendar::default())];
        assert_eq!(calendars[0].display_name(), Some("Personal"));
        assert!(calendars[0].can(CalendarPermissions::SHARE));
    }
}
