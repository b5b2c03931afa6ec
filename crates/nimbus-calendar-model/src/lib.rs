//! Calendar plugin contracts for Nimbus.
//!
//! Capability traits a calendar backend implements, plus the value types that
//! cross the plugin boundary: import/export options, search queries,
//! availability checks, permissions, and event status. Nothing here talks to a
//! server; the host application provides the implementations.

pub mod availability;
pub mod contract;
pub mod error;
pub mod import;
pub mod options;
pub mod permissions;
pub mod query;
pub mod status;

pub use availability::{AvailabilityRequest, AvailabilityResult};
pub use contract::{
    AvailabilityChecker, Calendar, CalendarExport, CalendarImport, CalendarIsEnabled,
    CalendarIsShared, CalendarIsWritable, CreateFromString,
};
pub use error::{CalendarError, CalendarResult};
pub use import::{ImportOutcome, ImportResult};
pub use options::{
    CalendarExportOptions, CalendarFormat, CalendarImportOptions, ImportErrorMode,
    ImportValidationMode,
};
pub use permissions::CalendarPermissions;
pub use query::{
    CalendarObject, CalendarQuery, ComponentType, SearchOptions, SearchProperty, TimeRange,
};
pub use status::CalendarEventStatus;
