use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::{bill::Bill, grouping::StatusGroups, status::BillStatus};

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct StatusTotals {
    pub count: usize,
    pub amount: f64,
}

/// Aggregate counts and amounts across status buckets.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BillSummary {
    pub per_status: BTreeMap<BillStatus, StatusTotals>,
    /// Sum over every unpaid bucket.
    pub outstanding_amount: f64,
    pub overdue_amount: f64,
}

impl BillSummary {
    pub fn from_groups(groups: &StatusGroups) -> Self {
        let mut summary = BillSummary::default();
        for status in BillStatus::ALL {
            let bills = groups.get(&status).map(Vec::as_slice).unwrap_or(&[]);
            let totals = StatusTotals {
                count: bills.len(),
                amount: bills.iter().map(|bill| bill.amount).sum(),
            };
            if status != BillStatus::Paid {
                summary.outstanding_amount += totals.amount;
            }
            if status == BillStatus::Overdue {
                summary.overdue_amount = totals.amount;
            }
            summary.per_status.insert(status, totals);
        }
        summary
    }

    pub fn totals(&self, status: BillStatus) -> StatusTotals {
        self.per_status.get(&status).copied().unwrap_or_default()
    }
}

/// Unpaid bills falling due between `today` and `today + days` inclusive.
///
/// A window reaching past the representable date range has no upper bound.
pub fn upcoming_within(bills: &[Bill], days: i64, today: NaiveDate) -> Vec<Bill> {
    let horizon = Duration::try_days(days).and_then(|span| today.checked_add_signed(span));
    let mut due: Vec<Bill> = bills
        .iter()
        .filter(|bill| !bill.is_paid && bill.due_date >= today)
        .filter(|bill| horizon.map_or(true, |end| bill.due_date <= end))
        .cloned()
        .collect();
    due.sort_by_key(|bill| bill.due_date);
    due
}
