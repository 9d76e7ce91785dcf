use bill_core::bills::{
    bill_status, bill_status_on, days_from_today, status_color, status_context_text,
    BillStatus, StatusPalette,
};
use bill_core::time::{self, Clock, FixedClock};
use chrono::{Duration, NaiveDate};

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn past_dates_are_overdue() {
    let today = time::today();
    for offset in [1, 2, 30, 400] {
        let due = today - Duration::days(offset);
        assert_eq!(bill_status(due), BillStatus::Overdue);
        assert!(days_from_today(due) < 0);
    }
}

#[test]
fn today_is_due_today() {
    let today = time::today();
    assert_eq!(bill_status(today), BillStatus::DueToday);
    assert_eq!(days_from_today(today), 0);
    assert_eq!(status_context_text(today), "Due today");
}

#[test]
fn future_dates_are_upcoming() {
    let today = time::today();
    for offset in [1, 7, 365] {
        let due = today + Duration::days(offset);
        assert_eq!(bill_status(due), BillStatus::Upcoming);
        assert!(days_from_today(due) > 0);
    }
}

#[test]
fn context_text_reflects_distance() {
    let today = time::today();
    assert_eq!(status_context_text(today + Duration::days(1)), "1 day left");
    assert_eq!(status_context_text(today + Duration::days(12)), "12 days left");
    assert_eq!(status_context_text(today - Duration::days(1)), "Overdue 1 day");
    assert_eq!(status_context_text(today - Duration::days(3)), "Overdue 3 days");
}

#[test]
fn colors_follow_status() {
    let today = time::today();
    assert_eq!(status_color(today - Duration::days(2)), "#EF4444");
    assert_eq!(status_color(today), "#F59E0B");
    assert_eq!(status_color(today + Duration::days(2)), "#6B7280");
    assert_eq!(StatusPalette::default().color_for(BillStatus::Paid), "#10B981");
}

#[test]
fn fixed_clock_drives_classification() {
    let clock = FixedClock(sample_date(2024, 2, 29));
    assert_eq!(
        bill_status_on(sample_date(2024, 3, 1), clock.today()),
        BillStatus::Upcoming
    );
    assert_eq!(
        bill_status_on(sample_date(2024, 2, 28), clock.today()),
        BillStatus::Overdue
    );
}

#[test]
fn status_keys_serialize_in_screaming_case() {
    let json = serde_json::to_string(&BillStatus::DueToday).unwrap();
    assert_eq!(json, "\"DUE_TODAY\"");
    assert_eq!("due_today".parse::<BillStatus>().unwrap(), BillStatus::DueToday);
}
