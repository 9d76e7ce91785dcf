use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::BillError;

/// Repeat interval of a recurring bill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recurrence {
    Weekly,
    /// Applied when a recurring bill carries no explicit interval.
    #[default]
    Monthly,
    Yearly,
}

impl Recurrence {
    /// Advances `from` by exactly one period.
    ///
    /// Month and year steps keep the day of month, clamped to the last day of
    /// the target month (Jan 31 + 1 month is Feb 29 in a leap year). A step
    /// past the representable date range returns `from` unchanged.
    pub fn next_due_date(&self, from: NaiveDate) -> NaiveDate {
        match self {
            Recurrence::Weekly => from.checked_add_signed(Duration::weeks(1)).unwrap_or(from),
            Recurrence::Monthly => shift_month(from, 1),
            Recurrence::Yearly => shift_year(from, 1),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recurrence::Weekly => "Weekly",
            Recurrence::Monthly => "Monthly",
            Recurrence::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Recurrence {
    type Err = BillError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "WEEKLY" => Ok(Recurrence::Weekly),
            "MONTHLY" => Ok(Recurrence::Monthly),
            "YEARLY" => Ok(Recurrence::Yearly),
            _ => Err(BillError::UnknownRecurrence(value.to_string())),
        }
    }
}

/// Returns the due date one `recurrence` period after `current_due_date`.
pub fn calculate_next_due_date(current_due_date: NaiveDate, recurrence: Recurrence) -> NaiveDate {
    recurrence.next_due_date(current_due_date)
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    clamped_date(year, month as u32, date.day()).unwrap_or(date)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    clamped_date(date.year() + years, date.month(), date.day()).unwrap_or(date)
}

fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.min(last))
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((first_next - Duration::days(1)).day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_shift_clamps_to_month_end() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_month(date(2024, 3, 31), 1), date(2024, 4, 30));
        assert_eq!(shift_month(date(2024, 12, 15), 1), date(2025, 1, 15));
    }

    #[test]
    fn year_shift_clamps_leap_day() {
        assert_eq!(shift_year(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(shift_year(date(2023, 6, 1), 1), date(2024, 6, 1));
    }

    #[test]
    fn days_in_month_handles_december() {
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
    }

    #[test]
    fn every_interval_keeps_date_at_range_end() {
        for rule in [Recurrence::Weekly, Recurrence::Monthly, Recurrence::Yearly] {
            assert_eq!(rule.next_due_date(NaiveDate::MAX), NaiveDate::MAX);
        }
        let near_end = NaiveDate::MAX - Duration::days(3);
        assert_eq!(Recurrence::Weekly.next_due_date(near_end), near_end);
    }

    #[test]
    fn parses_recurrence_names() {
        assert_eq!("weekly".parse::<Recurrence>().unwrap(), Recurrence::Weekly);
        assert_eq!("MONTHLY".parse::<Recurrence>().unwrap(), Recurrence::Monthly);
        assert!(matches!(
            "DAILY".parse::<Recurrence>(),
            Err(BillError::UnknownRecurrence(_))
        ));
    }
}
