use chrono::NaiveDate;
use serde::Serialize;

use crate::bills::{format_iso_date, PaymentRecord};

const MEDIUM_DATE_FORMAT: &str = "%b %-d, %Y";
const PERIOD_FORMAT: &str = "%B %Y";

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// "Jan 5, 2024" style dates.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediumDateFormatter;

impl DateFormatter for MediumDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format(MEDIUM_DATE_FORMAT).to_string()
    }
}

/// Symbol-prefixed amounts with two decimals and comma grouping.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCurrencyFormatter;

impl CurrencyFormatter for DefaultCurrencyFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let grouped = group_thousands(whole);
        match currency_symbol(currency) {
            Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, fraction),
            None => format!(
                "{}{} {}.{}",
                sign,
                currency.trim().to_uppercase(),
                grouped,
                fraction
            ),
        }
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.trim().to_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders a date as "Mon D, YYYY".
pub fn format_date(date: NaiveDate) -> String {
    MediumDateFormatter.format_date(date)
}

/// Renders the month a date falls in, e.g. "January 2024".
pub fn format_period(date: NaiveDate) -> String {
    date.format(PERIOD_FORMAT).to_string()
}

pub fn format_amount(amount: f64, currency: &str) -> String {
    DefaultCurrencyFormatter.format_amount(amount, currency)
}

/// Payment history row prepared for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentHistoryEntry {
    pub period: String,
    pub date: String,
    pub formatted_date: String,
    pub amount: f64,
}

/// Most recent payments first. Order between payments on the same date is unspecified.
pub fn format_payment_history(history: &[PaymentRecord]) -> Vec<PaymentHistoryEntry> {
    let mut records: Vec<&PaymentRecord> = history.iter().collect();
    records.sort_unstable_by(|a, b| b.date.cmp(&a.date));
    records
        .into_iter()
        .map(|record| PaymentHistoryEntry {
            period: format_period(record.date),
            date: format_iso_date(record.date),
            formatted_date: format_date(record.date),
            amount: record.amount,
        })
        .collect()
}
