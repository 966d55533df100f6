//! Incident date parsing and badge formatting.
//!
//! Card dates come from two producers: data files use ISO `YYYY-MM-DD`
//! while model-evaluated reports use `MM/DD/YYYY`. Both render as
//! `5 Mar 2024`. Anything unparseable renders as `Invalid Date`.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Badge text for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const US_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month padding:none]/[day padding:none]/[year]");
const BADGE_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day padding:none] [month repr:short] [year]");

/// Parse a card date. Trailing ISO time components (`T10:00:00Z`) are ignored.
pub fn parse_card_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.contains('/') {
        return Date::parse(trimmed, US_DATE).ok();
    }
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    Date::parse(date_part, ISO_DATE).ok()
}

/// Format a card date as `<day> <abbreviated month> <year>`.
pub fn format_badge_date(raw: &str) -> String {
    parse_card_date(raw)
        .and_then(|date| date.format(BADGE_DATE).ok())
        .unwrap_or_else(|| INVALID_DATE.to_owned())
}
