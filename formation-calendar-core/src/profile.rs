//! The business profile that drives derived compliance events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// US states offered when picking where the business is formed.
pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Snapshot of what the user has told us about their business.
///
/// Only `state` and `formation_date` affect the derived calendar. The other
/// fields are carried along for storage and data export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// State of formation, e.g. "Delaware"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Date the formation documents were filed with the Secretary of State
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_date: Option<NaiveDate>,
}

impl BusinessProfile {
    /// Build a profile from raw form input.
    ///
    /// An absent or blank date is fine. A date that is present but not
    /// `YYYY-MM-DD` is rejected here so nothing downstream has to re-validate.
    pub fn new(state: Option<&str>, formation_date: Option<&str>) -> CalendarResult<Self> {
        let formation_date = match formation_date.map(str::trim) {
            Some(s) if !s.is_empty() => Some(parse_formation_date(s)?),
            _ => None,
        };

        Ok(BusinessProfile {
            state: state.map(str::to_string),
            formation_date,
            ..Default::default()
        })
    }

    /// The state name, if one was given and it isn't blank.
    pub fn state_name(&self) -> Option<&str> {
        self.state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Overlay every field that is set on `other` onto a copy of `self`.
    pub fn merged_with(&self, other: &BusinessProfile) -> BusinessProfile {
        BusinessProfile {
            business_name: other.business_name.clone().or_else(|| self.business_name.clone()),
            entity_type: other.entity_type.clone().or_else(|| self.entity_type.clone()),
            industry: other.industry.clone().or_else(|| self.industry.clone()),
            state: other.state.clone().or_else(|| self.state.clone()),
            formation_date: other.formation_date.or(self.formation_date),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == BusinessProfile::default()
    }
}

/// Parse an ISO `YYYY-MM-DD` filing date.
pub fn parse_formation_date(s: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(s.to_string()))
}
