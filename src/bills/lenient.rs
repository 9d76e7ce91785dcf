//! Best-effort string interfaces for callers holding raw stored values.
//!
//! Malformed input never fails here: the original value comes back unchanged
//! (or `None`) and a warning is logged.

use chrono::NaiveDate;

use super::{bill::Bill, bill::BillType, recurrence::Recurrence, status::BillStatus};
use crate::{errors::BillError, time};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, BillError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|err| BillError::InvalidDate(format!("`{}`: {}", value, err)))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Advances an ISO date string by the named recurrence, or returns it unchanged.
pub fn next_due_date_or_same(current_due_date: &str, recurrence: &str) -> String {
    let date = match parse_iso_date(current_due_date) {
        Ok(date) => date,
        Err(err) => {
            tracing::warn!(%err, "leaving due date unchanged");
            return current_due_date.to_string();
        }
    };
    match recurrence.parse::<Recurrence>() {
        Ok(rule) => format_iso_date(rule.next_due_date(date)),
        Err(err) => {
            tracing::warn!(%err, "leaving due date unchanged");
            format_iso_date(date)
        }
    }
}

pub fn status_of_on(due_date: &str, today: NaiveDate) -> Option<BillStatus> {
    match parse_iso_date(due_date) {
        Ok(date) => Some(super::status::bill_status_on(date, today)),
        Err(err) => {
            tracing::warn!(%err, "cannot classify bill");
            None
        }
    }
}

pub fn status_of(due_date: &str) -> Option<BillStatus> {
    status_of_on(due_date, time::today())
}

/// Applies a payment when `bill_type` names a known kind, otherwise returns the bill as-is.
///
/// The stored `bill_type` label wins over the bill's typed field.
pub fn process_payment_by_label_on(bill: &Bill, bill_type: &str, today: NaiveDate) -> Bill {
    match bill_type.parse::<BillType>() {
        Ok(kind) => {
            let mut typed = bill.clone();
            typed.bill_type = kind;
            super::payment::process_payment_on(&typed, today)
        }
        Err(err) => {
            tracing::warn!(%err, bill_id = %bill.id, "payment not applied");
            bill.clone()
        }
    }
}
