//! Group events by calendar month for display.

use chrono::{Datelike, NaiveDate};

use crate::event::ComplianceEvent;

/// Events that fall in one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    pub year: i32,
    pub month: u32,
    pub events: Vec<&'a ComplianceEvent>,
}

impl MonthGroup<'_> {
    /// e.g. "January 2025"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

/// Bucket `events` by month.
///
/// Groups appear in order of their first event and each group keeps input
/// order, so a date-sorted input gives date-sorted groups.
pub fn group_by_month(events: &[ComplianceEvent]) -> Vec<MonthGroup<'_>> {
    let mut groups: Vec<MonthGroup<'_>> = Vec::new();

    for event in events {
        let (year, month) = (event.date.year(), event.date.month());

        match groups
            .iter_mut()
            .find(|g| g.year == year && g.month == month)
        {
            Some(group) => group.events.push(event),
            None => groups.push(MonthGroup {
                year,
                month,
                events: vec![event],
            }),
        }
    }

    groups
}
