use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::static_regex;

use super::Error;

/// The menu for a day is usually posted the evening before.
fn freshness_offset() -> Duration {
    Duration::hours(4)
}

/// Finds the first `D.M.YYYY` date in `line` (spaces after the dots allowed).
pub fn find_date(line: &str) -> Option<NaiveDate> {
    static_regex!(DATE <- r"[0-9]{1,2}\.\s?[0-9]{1,2}\.\s?[0-9]{4}");
    let found = DATE.find(line)?;
    let compact: String = found
        .as_str()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    NaiveDate::parse_from_str(&compact, "%d.%m.%Y").ok()
}

/// Extracts the menu date from its header line and checks that it is today's.
pub fn fresh_date(line: &str, now: NaiveDateTime) -> Result<NaiveDate, Error> {
    let date = find_date(line).ok_or_else(|| {
        log::warn!("no date in menu header {line:?}");
        Error::DateNotFound
    })?;
    let shifted = date.and_time(NaiveTime::default()) + freshness_offset();
    if shifted.date() == now.date() {
        Ok(date)
    } else {
        log::warn!("menu is dated {date}, expected {}", now.date());
        Err(Error::StaleDate {
            found: date,
            today: now.date(),
        })
    }
}
