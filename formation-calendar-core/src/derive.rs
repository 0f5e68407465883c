//! Derive the compliance calendar for a business profile.

use chrono::{Datelike, NaiveDate};

use crate::baseline::{REFERENCE_YEAR, baseline_events};
use crate::event::{Category, ComplianceEvent, Recurrence};
use crate::profile::BusinessProfile;

/// Derive the full, date-sorted event list for `profile`.
///
/// Starts from the baseline, adds the state anniversary event when both a
/// state and a formation date are known, then sorts by date. Equal dates keep
/// baseline order, with the anniversary after any baseline event that day.
/// Missing profile data is not an error: the anniversary is simply left out.
pub fn derive(profile: &BusinessProfile) -> Vec<ComplianceEvent> {
    let mut events = baseline_events();

    if let Some(anniversary) = state_anniversary(profile) {
        events.push(anniversary);
    }

    events.sort_by_key(|e| e.date);
    events
}

/// The annual report / franchise tax reminder for the formation state.
pub fn state_anniversary(profile: &BusinessProfile) -> Option<ComplianceEvent> {
    let Some(state) = profile.state_name() else {
        tracing::debug!("No formation state, skipping state anniversary event");
        return None;
    };

    let Some(formed) = profile.formation_date else {
        tracing::debug!(state, "No formation date, skipping state anniversary event");
        return None;
    };

    let date = anniversary_in_reference_year(formed);

    Some(ComplianceEvent {
        date,
        title: format!("{} Annual Report/Franchise Tax", state),
        description: format!(
            "Annual report and/or franchise tax may be due (check {} Secretary of State)",
            state
        ),
        category: Category::Compliance,
        recurring: Some(Recurrence::Annual),
    })
}

/// Same month and day in the reference year. February 29 becomes February 28
/// when the reference year isn't a leap year.
fn anniversary_in_reference_year(formed: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, formed.month(), formed.day())
        .or_else(|| NaiveDate::from_ymd_opt(REFERENCE_YEAR, formed.month(), 28))
        .unwrap_or(formed)
}
