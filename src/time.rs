use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

/// Clock abstracts access to the current timestamp so bill logic stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current local calendar date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock backed by the system local time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    /// Local noon of the pinned date, or the first later hour that exists locally.
    fn now(&self) -> DateTime<Local> {
        (12..24)
            .chain(0..12)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .find_map(|time| Local.from_local_datetime(&self.0.and_time(time)).earliest())
            .unwrap_or_else(|| {
                let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
                Local.from_utc_datetime(&self.0.and_time(noon))
            })
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Today's local date as read from the system clock.
pub fn today() -> NaiveDate {
    SystemClock.today()
}

/// Signed number of whole calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
