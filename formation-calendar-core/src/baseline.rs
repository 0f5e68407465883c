//! Fixed federal tax and planning dates for the reference year.

use chrono::NaiveDate;

use crate::event::Category::{Compliance, Planning, Tax};
use crate::event::Recurrence::{Annual, Quarterly};
use crate::event::{Category, ComplianceEvent, Recurrence};

/// The year every baseline and derived event is dated in.
pub const REFERENCE_YEAR: i32 = 2025;

/// A baseline event as stored in the table below
#[derive(Debug, Clone, Copy)]
pub struct BaselineEvent {
    pub date: NaiveDate,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub recurring: Option<Recurrence>,
}

impl BaselineEvent {
    pub fn to_event(&self) -> ComplianceEvent {
        ComplianceEvent {
            date: self.date,
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            recurring: self.recurring,
        }
    }
}

/// Evaluated at compile time, so a bad month/day fails the build.
const fn entry(
    month: u32,
    day: u32,
    title: &'static str,
    description: &'static str,
    category: Category,
    recurring: Option<Recurrence>,
) -> BaselineEvent {
    let date = match NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day) {
        Some(date) => date,
        None => panic!("baseline date is not a day of the reference year"),
    };

    BaselineEvent {
        date,
        title,
        description,
        category,
        recurring,
    }
}

pub const BASELINE: [BaselineEvent; 16] = [
    // Quarterly estimated taxes
    entry(
        1,
        15,
        "Q4 2024 Estimated Tax Payment",
        "Pay estimated taxes for Q4 of previous year",
        Tax,
        Some(Quarterly),
    ),
    entry(
        4,
        15,
        "Q1 2025 Estimated Tax Payment",
        "Pay estimated taxes for Q1",
        Tax,
        Some(Quarterly),
    ),
    entry(
        6,
        16,
        "Q2 2025 Estimated Tax Payment",
        "Pay estimated taxes for Q2 (June 16 due to weekend)",
        Tax,
        Some(Quarterly),
    ),
    entry(
        9,
        15,
        "Q3 2025 Estimated Tax Payment",
        "Pay estimated taxes for Q3",
        Tax,
        Some(Quarterly),
    ),
    // Annual entity returns
    entry(
        3,
        17,
        "S-Corp/Partnership Tax Return Due",
        "Form 1120-S or 1065 due (March 15 + weekend)",
        Tax,
        Some(Annual),
    ),
    entry(
        4,
        15,
        "Individual/LLC Tax Return Due",
        "Form 1040 with Schedule C or 1120 for C-Corp",
        Tax,
        Some(Annual),
    ),
    // Payroll (Form 941)
    entry(
        1,
        31,
        "Q4 2024 Payroll Tax Return (941)",
        "File Form 941 for Q4 of previous year",
        Tax,
        Some(Quarterly),
    ),
    entry(
        4,
        30,
        "Q1 2025 Payroll Tax Return (941)",
        "File Form 941 for Q1",
        Tax,
        Some(Quarterly),
    ),
    entry(
        7,
        31,
        "Q2 2025 Payroll Tax Return (941)",
        "File Form 941 for Q2",
        Tax,
        Some(Quarterly),
    ),
    entry(
        10,
        31,
        "Q3 2025 Payroll Tax Return (941)",
        "File Form 941 for Q3",
        Tax,
        Some(Quarterly),
    ),
    // Wage statements
    entry(
        1,
        31,
        "W-2 and 1099 Forms Due",
        "Distribute W-2s to employees and 1099s to contractors",
        Tax,
        Some(Annual),
    ),
    entry(
        2,
        28,
        "1099 Filing Deadline",
        "File 1099 forms with IRS (paper)",
        Tax,
        Some(Annual),
    ),
    // State
    entry(
        12,
        31,
        "Review Annual Report Deadline",
        "Check your state's annual report/SOI deadline (varies by state and formation date)",
        Compliance,
        Some(Annual),
    ),
    // Planning
    entry(
        6,
        30,
        "Mid-Year Financial Review",
        "Review financials, adjust tax strategy, evaluate business performance",
        Planning,
        None,
    ),
    entry(
        11,
        30,
        "Year-End Tax Planning",
        "Meet with CPA for year-end tax planning and strategies",
        Planning,
        Some(Annual),
    ),
    entry(
        12,
        15,
        "Retirement Contribution Deadline Review",
        "Review retirement plan contributions for tax benefits",
        Planning,
        Some(Annual),
    ),
];

/// The baseline as events, in table order (not sorted).
pub fn baseline_events() -> Vec<ComplianceEvent> {
    BASELINE.iter().map(BaselineEvent::to_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_every_baseline_date_is_in_reference_year() {
        assert!(baseline_events().iter().all(|e| e.date.year() == REFERENCE_YEAR));
    }

    #[test]
    fn test_table_dates() {
        assert_eq!(BASELINE[0].date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(BASELINE[2].date, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(BASELINE[15].date, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
    }

    #[test]
    fn test_baseline_category_counts() {
        let events = baseline_events();
        let count = |c: Category| events.iter().filter(|e| e.category == c).count();
        assert_eq!(count(Category::Tax), 12);
        assert_eq!(count(Category::Compliance), 1);
        assert_eq!(count(Category::Planning), 3);
    }

    #[test]
    fn test_mid_year_review_does_not_recur() {
        let review = baseline_events()
            .into_iter()
            .find(|e| e.title == "Mid-Year Financial Review")
            .expect("Mid-year review missing");
        assert_eq!(review.recurring, None);
    }
}
