//! Bill model and the pure functions that classify, advance, and group bills.

pub mod bill;
pub mod category;
pub mod grouping;
pub mod lenient;
pub mod payment;
pub mod recurrence;
pub mod status;
pub mod summary;

pub use bill::{Bill, BillType, PaymentRecord};
pub use category::BillCategory;
pub use grouping::{group_bills_by_status, group_bills_by_status_on, StatusGroups};
pub use lenient::{format_iso_date, parse_iso_date};
pub use payment::{process_payment, process_payment_on};
pub use recurrence::{calculate_next_due_date, Recurrence};
pub use status::{
    bill_status, bill_status_on, days_from_today, days_from_today_on, status_color,
    status_color_on, status_context_text, status_context_text_on, BillStatus, StatusPalette,
};
pub use summary::{upcoming_within, BillSummary, StatusTotals};
