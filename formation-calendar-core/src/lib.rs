//! Compliance calendar for newly formed small businesses.
//!
//! - `derive` builds the dated tax and compliance events for a `BusinessProfile`
//! - `grouping` buckets them by month for display
//! - `ics` serializes them to an iCalendar document
//! - `export` delivers generated files through an `ExportSink`

pub mod baseline;
pub mod config;
pub mod derive;
pub mod error;
pub mod event;
pub mod export;
pub mod grouping;
pub mod ics;
pub mod profile;
pub mod store;

pub use baseline::REFERENCE_YEAR;
pub use derive::derive;
pub use error::{CalendarError, CalendarResult};
pub use event::{Category, ComplianceEvent, Recurrence};
pub use grouping::{MonthGroup, group_by_month};
pub use ics::{ExportOptions, serialize};
pub use profile::BusinessProfile;
