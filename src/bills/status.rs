//! Due-status classification derived from a bill's due date.
//!
//! None of these helpers consult `is_paid`; a paid one-time bill must be
//! special-cased by the caller (see [`crate::bills::Bill::effective_status_on`]).

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{errors::BillError, time};

pub const OVERDUE_COLOR: &str = "#EF4444";
pub const DUE_TODAY_COLOR: &str = "#F59E0B";
pub const UPCOMING_COLOR: &str = "#6B7280";
pub const PAID_COLOR: &str = "#10B981";

/// Display state of a bill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillStatus {
    Upcoming,
    DueToday,
    Overdue,
    Paid,
}

impl BillStatus {
    pub const ALL: [BillStatus; 4] = [
        BillStatus::Upcoming,
        BillStatus::DueToday,
        BillStatus::Overdue,
        BillStatus::Paid,
    ];

    fn classify(days: i64) -> BillStatus {
        match days {
            d if d < 0 => BillStatus::Overdue,
            0 => BillStatus::DueToday,
            _ => BillStatus::Upcoming,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Upcoming => "Upcoming",
            BillStatus::DueToday => "Due today",
            BillStatus::Overdue => "Overdue",
            BillStatus::Paid => "Paid",
        }
    }

    /// Fixed display colour for the status.
    pub fn default_color(&self) -> &'static str {
        match self {
            BillStatus::Overdue => OVERDUE_COLOR,
            BillStatus::DueToday => DUE_TODAY_COLOR,
            BillStatus::Upcoming => UPCOMING_COLOR,
            BillStatus::Paid => PAID_COLOR,
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillStatus {
    type Err = BillError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "UPCOMING" => Ok(BillStatus::Upcoming),
            "DUE_TODAY" => Ok(BillStatus::DueToday),
            "OVERDUE" => Ok(BillStatus::Overdue),
            "PAID" => Ok(BillStatus::Paid),
            _ => Err(BillError::UnknownStatus(value.to_string())),
        }
    }
}

/// Colour assignments per status, overridable through configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusPalette {
    pub upcoming: String,
    pub due_today: String,
    pub overdue: String,
    pub paid: String,
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            upcoming: UPCOMING_COLOR.into(),
            due_today: DUE_TODAY_COLOR.into(),
            overdue: OVERDUE_COLOR.into(),
            paid: PAID_COLOR.into(),
        }
    }
}

impl StatusPalette {
    pub fn color_for(&self, status: BillStatus) -> &str {
        match status {
            BillStatus::Upcoming => self.upcoming.as_str(),
            BillStatus::DueToday => self.due_today.as_str(),
            BillStatus::Overdue => self.overdue.as_str(),
            BillStatus::Paid => self.paid.as_str(),
        }
    }
}

/// Signed days from `today` until `due_date`; negative when overdue.
pub fn days_from_today_on(due_date: NaiveDate, today: NaiveDate) -> i64 {
    time::days_between(today, due_date)
}

pub fn days_from_today(due_date: NaiveDate) -> i64 {
    days_from_today_on(due_date, time::today())
}

pub fn bill_status_on(due_date: NaiveDate, today: NaiveDate) -> BillStatus {
    BillStatus::classify(days_from_today_on(due_date, today))
}

/// Date-derived status; never returns [`BillStatus::Paid`].
pub fn bill_status(due_date: NaiveDate) -> BillStatus {
    bill_status_on(due_date, time::today())
}

pub fn status_context_text_on(due_date: NaiveDate, today: NaiveDate) -> String {
    let days = days_from_today_on(due_date, today);
    if days == 0 {
        return "Due today".into();
    }
    let magnitude = days.unsigned_abs();
    let unit = if magnitude > 1 { "days" } else { "day" };
    if days > 0 {
        format!("{} {} left", magnitude, unit)
    } else {
        format!("Overdue {} {}", magnitude, unit)
    }
}

/// Human-readable countdown such as "3 days left" or "Overdue 1 day".
pub fn status_context_text(due_date: NaiveDate) -> String {
    status_context_text_on(due_date, time::today())
}

pub fn status_color_on(due_date: NaiveDate, today: NaiveDate) -> &'static str {
    bill_status_on(due_date, today).default_color()
}

/// Colour for the date-derived status. Paid bills need [`StatusPalette::color_for`].
pub fn status_color(due_date: NaiveDate) -> &'static str {
    status_color_on(due_date, time::today())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classifies_relative_to_reference_date() {
        let today = date(2024, 5, 10);
        assert_eq!(bill_status_on(date(2024, 5, 9), today), BillStatus::Overdue);
        assert_eq!(bill_status_on(today, today), BillStatus::DueToday);
        assert_eq!(bill_status_on(date(2024, 5, 11), today), BillStatus::Upcoming);
    }

    #[test]
    fn context_text_pluralizes_nonzero_magnitudes() {
        let today = date(2024, 5, 10);
        assert_eq!(status_context_text_on(today, today), "Due today");
        assert_eq!(status_context_text_on(date(2024, 5, 11), today), "1 day left");
        assert_eq!(status_context_text_on(date(2024, 5, 15), today), "5 days left");
        assert_eq!(status_context_text_on(date(2024, 5, 9), today), "Overdue 1 day");
        assert_eq!(
            status_context_text_on(date(2024, 4, 30), today),
            "Overdue 10 days"
        );
    }

    #[test]
    fn date_derived_color_never_paid() {
        let today = date(2024, 5, 10);
        for offset in -3..=3 {
            let due = today + chrono::Duration::days(offset);
            assert_ne!(status_color_on(due, today), PAID_COLOR);
        }
        assert_eq!(status_color_on(date(2024, 5, 1), today), OVERDUE_COLOR);
    }

    #[test]
    fn palette_maps_paid_explicitly() {
        let palette = StatusPalette::default();
        assert_eq!(palette.color_for(BillStatus::Paid), PAID_COLOR);
        assert_eq!(palette.color_for(BillStatus::DueToday), DUE_TODAY_COLOR);
    }
}
