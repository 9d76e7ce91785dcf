use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::BillCategory, recurrence::Recurrence, status::BillStatus};
use crate::{
    bills::status,
    errors::{BillError, Result},
};

/// Whether a bill is settled once or rolls forward after each payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillType {
    OneTime,
    Recurring,
}

impl BillType {
    pub fn label(&self) -> &'static str {
        match self {
            BillType::OneTime => "One-time",
            BillType::Recurring => "Recurring",
        }
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillType {
    type Err = BillError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "ONE_TIME" => Ok(BillType::OneTime),
            "RECURRING" => Ok(BillType::Recurring),
            _ => Err(BillError::UnknownBillType(value.to_string())),
        }
    }
}

/// One payment made against a recurring bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PaymentRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub category: BillCategory,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_date: Option<NaiveDate>,
    pub bill_type: BillType,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_history: Vec<PaymentRecord>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

impl Bill {
    fn base(
        name: impl Into<String>,
        amount: f64,
        category: BillCategory,
        due_date: NaiveDate,
        bill_type: BillType,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
            category,
            due_date,
            reminder_date: None,
            bill_type,
            created_at: Utc::now(),
            recurrence: None,
            next_due_date: None,
            payment_history: Vec::new(),
            is_paid: false,
            paid_date: None,
        }
    }

    pub fn one_time(
        name: impl Into<String>,
        amount: f64,
        category: BillCategory,
        due_date: NaiveDate,
    ) -> Self {
        Self::base(name, amount, category, due_date, BillType::OneTime)
    }

    pub fn recurring(
        name: impl Into<String>,
        amount: f64,
        category: BillCategory,
        due_date: NaiveDate,
        recurrence: Recurrence,
    ) -> Self {
        let mut bill = Self::base(name, amount, category, due_date, BillType::Recurring);
        bill.recurrence = Some(recurrence);
        bill.next_due_date = Some(due_date);
        bill
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_reminder(mut self, reminder_date: NaiveDate) -> Self {
        self.reminder_date = Some(reminder_date);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.bill_type == BillType::Recurring
    }

    /// Interval used when advancing the due date; absent means monthly.
    pub fn effective_recurrence(&self) -> Recurrence {
        self.recurrence.unwrap_or_default()
    }

    /// Status as shown to the user: paid bills are `Paid`, the rest are date-derived.
    pub fn effective_status_on(&self, today: NaiveDate) -> BillStatus {
        if self.is_paid {
            BillStatus::Paid
        } else {
            status::bill_status_on(self.due_date, today)
        }
    }

    pub fn effective_status(&self) -> BillStatus {
        self.effective_status_on(crate::time::today())
    }

    /// Most recent payment by date.
    pub fn last_payment(&self) -> Option<&PaymentRecord> {
        self.payment_history.iter().max_by_key(|record| record.date)
    }

    pub fn total_paid(&self) -> f64 {
        self.payment_history.iter().map(|record| record.amount).sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BillError::Validation("bill name must not be empty".into()));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(BillError::Validation(format!(
                "bill `{}` must have a positive amount, got {}",
                self.name, self.amount
            )));
        }
        if let Some(record) = self
            .payment_history
            .iter()
            .find(|record| !record.amount.is_finite() || record.amount <= 0.0)
        {
            return Err(BillError::Validation(format!(
                "payment on {} for bill `{}` has non-positive amount {}",
                record.date, self.name, record.amount
            )));
        }
        Ok(())
    }
}
