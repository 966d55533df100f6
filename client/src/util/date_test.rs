use super::*;
use time::Month;

#[test]
fn format_badge_date_uses_day_short_month_year() {
    assert_eq!(format_badge_date("2024-03-05"), "5 Mar 2024");
    assert_eq!(format_badge_date("2023-12-25"), "25 Dec 2023");
}

#[test]
fn format_badge_date_accepts_us_style_dates() {
    assert_eq!(format_badge_date("03/05/2024"), "5 Mar 2024");
    assert_eq!(format_badge_date("3/5/2024"), "5 Mar 2024");
}

#[test]
fn format_badge_date_ignores_time_suffix() {
    assert_eq!(format_badge_date("2024-03-05T14:30:00Z"), "5 Mar 2024");
    assert_eq!(format_badge_date("2024-03-05 14:30"), "5 Mar 2024");
}

#[test]
fn format_badge_date_reports_invalid_dates_without_panicking() {
    assert_eq!(format_badge_date("not a date"), INVALID_DATE);
    assert_eq!(format_badge_date(""), INVALID_DATE);
    assert_eq!(format_badge_date("2024-02-30"), INVALID_DATE);
    assert_eq!(format_badge_date("13/01/2024"), INVALID_DATE);
}

#[test]
fn parse_card_date_returns_calendar_date() {
    let date = parse_card_date(" 2024-03-05 ").unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), Month::March);
    assert_eq!(date.day(), 5);
}
