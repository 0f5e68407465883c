//! ICS calendar generation.
//!
//! Turns an event sequence into an RFC 5545 document of all-day events.

mod generate;

pub use generate::{ExportOptions, serialize};
