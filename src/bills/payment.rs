use chrono::NaiveDate;

use super::{
    bill::{Bill, BillType, PaymentRecord},
    recurrence::calculate_next_due_date,
};
use crate::time;

/// Returns a copy of `bill` with a payment applied on `today`.
///
/// One-time bills become paid. Recurring bills log the payment and roll
/// `due_date` and `next_due_date` forward one period; they are never marked paid.
pub fn process_payment_on(bill: &Bill, today: NaiveDate) -> Bill {
    let mut updated = bill.clone();
    match bill.bill_type {
        BillType::OneTime => {
            updated.is_paid = true;
            updated.paid_date = Some(today);
            tracing::debug!(bill_id = %bill.id, paid_date = %today, "one-time bill paid");
        }
        BillType::Recurring => {
            let next_due = calculate_next_due_date(bill.due_date, bill.effective_recurrence());
            updated
                .payment_history
                .push(PaymentRecord::new(today, bill.amount));
            updated.due_date = next_due;
            updated.next_due_date = Some(next_due);
            tracing::debug!(
                bill_id = %bill.id,
                previous_due = %bill.due_date,
                next_due = %next_due,
                payments = updated.payment_history.len(),
                "recurring bill advanced"
            );
        }
    }
    updated
}

pub fn process_payment(bill: &Bill) -> Bill {
    process_payment_on(bill, time::today())
}
