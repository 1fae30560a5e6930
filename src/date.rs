//! Date normalization.
//!
//! The API keys its timeline by US-style tokens with a two-digit year
//! (`"3/25/21"`, `"12/1/20"`). Everything downstream works on
//! [`chrono::NaiveDate`], so tokens are converted here, strictly.

use crate::error::{Error, Result};
use chrono::NaiveDate;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse an API date token of the form `m/d/yy` into a calendar date.
///
/// - `"1/1/21"` → 2021-01-01
/// - `"12/31/20"` → 2020-12-31
///
/// Fails with [`Error::BadDateFormat`] when the token is not three
/// `/`-separated parts, and with [`Error::InvalidCalendarDate`] when the parts
/// do not name a real day (month 13, Feb 30, a four-digit year, a part
/// padded with spaces, ...).
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(Error::BadDateFormat(raw.to_string()));
    };

    // chrono's numeric fields skip leading whitespace and %Y takes any width,
    // so the shape of each part is checked before parsing.
    let checks = [
        ("month", month, 1..=2, "one or two digits"),
        ("day", day, 1..=2, "one or two digits"),
        ("year", year, 2..=2, "two digits"),
    ];
    for (name, part, widths, expected) in checks {
        if !widths.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidCalendarDate {
                input: raw.to_string(),
                reason: format!("expected {expected} for the {name}, got {part:?}"),
            });
        }
    }

    let iso = format!("20{year}-{month:0>2}-{day:0>2}");
    NaiveDate::parse_from_str(&iso, ISO_FORMAT).map_err(|e| Error::InvalidCalendarDate {
        input: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a `YYYY-MM-DD` date as given on the command line.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).map_err(|e| Error::InvalidCalendarDate {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

/// Number of days to request so that the returned window reaches back to `from`.
///
/// `from == today` asks for one day. A `from` in the future still asks for one.
pub fn lookback_days(from: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - from).num_days() + 1;
    days.clamp(1, i64::from(u32::MAX)) as u32
}
