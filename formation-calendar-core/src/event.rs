//! Compliance event types.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated obligation or planning checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceEvent {
    /// All-day date in the reference year
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// How often the obligation comes back. Informational only.
    pub recurring: Option<Recurrence>,
}

impl ComplianceEvent {
    /// Short display date, e.g. "Jan 15"
    pub fn short_date(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

impl fmt::Display for ComplianceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_date(), self.title)
    }
}

/// What kind of obligation an event is. Affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tax,
    Compliance,
    Planning,
}

impl Category {
    /// Value used for the ICS CATEGORIES property
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Category::Tax => "TAX",
            Category::Compliance => "COMPLIANCE",
            Category::Planning => "PLANNING",
        }
    }

    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tax => "Tax Deadlines",
            Category::Compliance => "Compliance",
            Category::Planning => "Planning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Tax => "tax",
            Category::Compliance => "compliance",
            Category::Planning => "planning",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Monthly,
    Quarterly,
    Annual,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recurrence::Monthly => "monthly",
            Recurrence::Quarterly => "quarterly",
            Recurrence::Annual => "annual",
        };
        f.write_str(s)
    }
}
