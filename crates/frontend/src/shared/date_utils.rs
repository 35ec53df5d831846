//! Date helpers for query derivation and table cells.
//!
//! The API expects UTC timestamps with millisecond precision
//! (`2024-03-08T00:00:00.000Z`).

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, Utc};

/// Number of days considered "recent" when a view asks for recent records
pub const RECENT_DAYS: i64 = 30;

/// Relative date filter offered in table headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    Week,
    Month,
    Year,
}

impl DateWindow {
    pub const ALL: [DateWindow; 3] = [DateWindow::Week, DateWindow::Month, DateWindow::Year];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "week" => Some(DateWindow::Week),
            "month" => Some(DateWindow::Month),
            "year" => Some(DateWindow::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateWindow::Week => "week",
            DateWindow::Month => "month",
            DateWindow::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateWindow::Week => "Last week",
            DateWindow::Month => "Last month",
            DateWindow::Year => "Last year",
        }
    }

    /// Start of the day the window opens on.
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let from = match self {
            DateWindow::Week => now - Duration::days(7),
            DateWindow::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
            DateWindow::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
        };
        start_of_day(from.date_naive())
    }

    /// `(value, label)` pairs for a filter dropdown, `all` first.
    pub fn options() -> Vec<(String, String)> {
        std::iter::once(("all".to_string(), "Anytime".to_string()))
            .chain(
                Self::ALL
                    .iter()
                    .map(|w| (w.as_str().to_string(), w.label().to_string())),
            )
            .collect()
    }
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Lower bound used by "recent" views
pub fn recent_interval(now: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day((now - Duration::days(RECENT_DAYS)).date_naive())
}

pub fn to_api_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Calendar date of a timestamp as shown in table cells: "2024-03-15"
pub fn iso_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_windows_start_at_midnight() {
        assert_eq!(to_api_timestamp(DateWindow::Week.since(now())), "2024-03-24T00:00:00.000Z");
        // 31 March minus one month clamps to the end of February
        assert_eq!(to_api_timestamp(DateWindow::Month.since(now())), "2024-02-29T00:00:00.000Z");
        assert_eq!(to_api_timestamp(DateWindow::Year.since(now())), "2023-03-31T00:00:00.000Z");
    }

    #[test]
    fn test_recent_interval() {
        assert_eq!(to_api_timestamp(recent_interval(now())), "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn test_window_parse() {
        assert_eq!(DateWindow::parse("month"), Some(DateWindow::Month));
        assert_eq!(DateWindow::parse("all"), None);
        assert_eq!(DateWindow::options()[0].0, "all");
        assert_eq!(DateWindow::options().len(), 4);
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date(&now()), "2024-03-31");
        assert_eq!(iso_date(&Utc.with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap()), "2024-03-15");
    }
}
