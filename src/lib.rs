#![doc(test(attr(deny(warnings))))]

//! Bill Core derives due status for personal bills, advances recurring bills
//! when they are paid, and groups bills for display.

pub mod bills;
pub mod config;
pub mod errors;
pub mod format;
pub mod time;
pub mod utils;

pub use bills::{
    Bill, BillCategory, BillStatus, BillType, PaymentRecord, Recurrence, StatusGroups,
};
pub use errors::{BillError, Result};

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    if utils::init_tracing() {
        tracing::info!("Bill Core tracing initialized.");
    }
}

/// Initializes tracing using the log filter carried by `config`.
///
/// Tracing is initialized once per process. If [`init`] or an earlier call
/// already ran, `config.log_filter` is not applied and a debug event says so.
/// Returns whether `config.log_filter` took effect.
pub fn init_with_config(config: &config::Config) -> bool {
    let applied = utils::init_tracing_with(config.log_filter.as_deref());
    if applied {
        tracing::info!(currency = %config.currency, "Bill Core tracing initialized.");
    } else {
        tracing::debug!(
            log_filter = ?config.log_filter,
            "tracing already initialized; configured log filter not applied"
        );
    }
    applied
}

#[cfg(test)]
mod tests {
    #[test]
    fn later_config_init_reports_filter_not_applied() {
        super::init();
        let config = super::config::Config {
            log_filter: Some("bill_core=trace".into()),
            ..Default::default()
        };
        assert!(!super::init_with_config(&config));
    }
}
