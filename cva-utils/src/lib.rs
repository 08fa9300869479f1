//! Shared utility functions for CVA crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike};

    /// ISO calendar date format used for snapshots, chart data and HTML inputs.
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)?)
    }

    /// Parse a BADEA diagnosis date in "DD/MM/YYYY" format.
    ///
    /// The day, month and year are split out and recombined as an ISO date.
    /// Returns `None` unless exactly three numeric parts form a real
    /// calendar date.
    pub fn parse_date_dmy(s: &str) -> Option<NaiveDate> {
        let mut parts = s.trim().split('/');
        let day = parts.next()?.trim().parse::<u32>().ok()?;
        let month = parts.next()?.trim().parse::<u32>().ok()?;
        let year = parts.next()?.trim().parse::<i32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Truncate a timestamp to the start of its UTC hour.
    ///
    /// e.g., 2021-03-15 14:59:59 +02:00 -> 2021-03-15 12:00:00 (UTC)
    ///
    /// Working in UTC keeps the two passes through a repeated local hour
    /// (DST fall-back) apart.
    pub fn truncate_to_hour<Tz: TimeZone>(at: &DateTime<Tz>) -> NaiveDateTime {
        let utc = at.naive_utc();
        utc.date().and_hms_opt(utc.hour(), 0, 0).unwrap_or(utc)
    }

}
