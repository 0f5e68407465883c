//! ICS file generation.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, Property, ValueType};

use crate::event::ComplianceEvent;

pub const DEFAULT_PRODUCT_ID: &str = "-//Business Formation Assistant//EN";
pub const DEFAULT_CALENDAR_NAME: &str = "Business Compliance Calendar";
pub const DEFAULT_UID_DOMAIN: &str = "businessformation.app";

/// Document-level settings for generated calendars
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// PRODID written in the calendar header
    pub product_id: String,
    /// X-WR-CALNAME shown by calendar apps
    pub calendar_name: String,
    /// Domain part of every event UID
    pub uid_domain: String,
    /// DTSTAMP for every event. Left out when None.
    pub stamp: Option<DateTime<Utc>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            stamp: None,
        }
    }
}

/// Generate a calendar document with one all-day VEVENT per input event.
///
/// Events are written in the order given. UIDs come from each event's
/// position, so they are unique within the document and stable across runs.
/// icalendar applies RFC 5545 TEXT escaping, so values are passed unescaped.
pub fn serialize(events: &[ComplianceEvent], options: &ExportOptions) -> String {
    let product_id = normalize_newlines(&options.product_id);
    let calendar_name = normalize_newlines(&options.calendar_name);

    let mut cal = Calendar::empty();
    cal.append_property(Property::new("VERSION", "2.0"));
    cal.append_property(Property::new("PRODID", product_id));
    cal.append_property(Property::new("CALSCALE", "GREGORIAN"));
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.append_property(Property::new("X-WR-CALNAME", calendar_name));

    for (index, event) in events.iter().enumerate() {
        cal.push(build_event(index, event, options));
    }

    let cal = cal.done();

    postprocess(&cal.to_string(), options)
}

fn build_event(index: usize, event: &ComplianceEvent, options: &ExportOptions) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("event-{}@{}", index, options.uid_domain));

    if let Some(stamp) = options.stamp {
        ics_event.add_property("DTSTAMP", stamp.format("%Y%m%dT%H%M%SZ").to_string());
    }

    let mut dtstart = Property::new("DTSTART", event.date.format("%Y%m%d").to_string());
    dtstart.append_parameter(ValueType::Date);
    ics_event.append_property(dtstart);

    ics_event.summary(&normalize_newlines(&event.title));
    ics_event.description(&normalize_newlines(&event.description));
    ics_event.add_property("CATEGORIES", event.category.as_ics_str());
    ics_event.add_property("SEQUENCE", "0");
    ics_event.add_property("STATUS", "CONFIRMED");
    ics_event.add_property("TRANSP", "TRANSPARENT");

    ics_event.done()
}

/// icalendar escapes `\n` but passes a bare `\r` through, so CRLF and CR
/// become LF before the value is handed over.
fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Drop the DTSTAMP icalendar generates on its own when no stamp was requested
fn postprocess(ics: &str, options: &ExportOptions) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if options.stamp.is_none() && line.starts_with("DTSTAMP:") {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
