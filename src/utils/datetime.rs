use anyhow::{Context, Result};
use jiff::Timestamp;
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;

/// Parse an event's ISO-8601 datetime into wall-clock time.
///
/// Timestamps that carry a zone offset (e.g. `2024-01-05T09:00:00+03:00` or a
/// trailing `Z`) are converted to the system timezone first, so calendar
/// grouping follows the viewer's local clock. Plain civil datetimes are taken
/// as-is.
pub fn parse_event_datetime(raw: &str) -> Result<DateTime> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts.to_zoned(TimeZone::system()).datetime());
    }

    raw.parse::<DateTime>()
        .with_context(|| format!("unrecognized event datetime {raw:?}"))
}

/// Long-form calendar date label, e.g. "5 January 2024".
pub fn format_date_label(date: Date) -> String {
    date.strftime("%-d %B %Y").to_string()
}

/// 24-hour time-of-day label, e.g. "09:00".
pub fn format_time_label(time: Time) -> String {
    time.strftime("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn parses_minute_precision_civil_datetime() {
        let dt = parse_event_datetime("2024-01-05T09:00").unwrap();
        assert_eq!(dt, date(2024, 1, 5).at(9, 0, 0, 0));
    }

    #[test]
    fn parses_second_precision_civil_datetime() {
        let dt = parse_event_datetime("2024-06-19T15:22:45").unwrap();
        assert_eq!(dt, date(2024, 6, 19).at(15, 22, 45, 0));
    }

    #[test]
    fn accepts_offset_timestamps() {
        // The wall-clock result depends on the host timezone, so only check
        // that offset-carrying timestamps are accepted at all.
        assert!(parse_event_datetime("2024-01-05T09:00:00Z").is_ok());
        assert!(parse_event_datetime("2024-01-05T09:00:00+03:00").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_event_datetime("not a datetime").is_err());
        assert!(parse_event_datetime("").is_err());
    }

    #[test]
    fn date_label_is_long_form_without_zero_padding() {
        assert_eq!(format_date_label(date(2024, 1, 5)), "5 January 2024");
        assert_eq!(format_date_label(date(2024, 12, 31)), "31 December 2024");
    }

    #[test]
    fn time_label_is_24_hour() {
        let dt = date(2024, 1, 5).at(18, 30, 0, 0);
        assert_eq!(format_time_label(dt.time()), "18:30");

        let dt = date(2024, 1, 5).at(8, 5, 0, 0);
        assert_eq!(format_time_label(dt.time()), "08:05");
    }
}
