use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{bill::Bill, status::BillStatus};
use crate::time;

/// Bills bucketed by status. Every status key is always present.
pub type StatusGroups = BTreeMap<BillStatus, Vec<Bill>>;

pub fn group_bills_by_status_on(bills: &[Bill], today: NaiveDate) -> StatusGroups {
    let mut groups: StatusGroups = BillStatus::ALL
        .into_iter()
        .map(|status| (status, Vec::new()))
        .collect();

    for bill in bills {
        groups
            .entry(bill.effective_status_on(today))
            .or_default()
            .push(bill.clone());
    }

    for bucket in groups.values_mut() {
        bucket.sort_by_key(|bill| bill.due_date);
    }

    tracing::debug!(
        total = bills.len(),
        overdue = groups[&BillStatus::Overdue].len(),
        due_today = groups[&BillStatus::DueToday].len(),
        paid = groups[&BillStatus::Paid].len(),
        "grouped bills by status"
    );
    groups
}

pub fn group_bills_by_status(bills: &[Bill]) -> StatusGroups {
    group_bills_by_status_on(bills, time::today())
}
