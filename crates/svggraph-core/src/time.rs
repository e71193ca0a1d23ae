//! Short human-readable durations for selection labels (`1d 2h 5m`).

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Formats `seconds` using years, months (`M`), days, hours and minutes.
///
/// Zero components are omitted. Durations shorter than a minute fall back to seconds so the label
/// is never empty.
pub fn format_duration(seconds: u64) -> String {
    let mut years = seconds / YEAR;
    let mut rest = seconds - years * YEAR;
    let mut months = rest / MONTH;
    rest -= months * MONTH;
    let days = rest / DAY;
    rest -= days * DAY;
    let hours = rest / HOUR;
    rest -= hours * HOUR;
    let minutes = rest / MINUTE;

    // 360..365 days leave twelve whole months and no whole year.
    if months == 12 {
        years += 1;
        months = 0;
    }

    let parts: Vec<String> = [
        (years, "y"),
        (months, "M"),
        (days, "d"),
        (hours, "h"),
        (minutes, "m"),
    ]
    .into_iter()
    .filter(|(n, _)| *n != 0)
    .map(|(n, unit)| format!("{n}{unit}"))
    .collect();

    if parts.is_empty() {
        return format!("{seconds}s");
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mixed_components() {
        assert_eq!(format_duration(60), "1m");
        assert_eq!(format_duration(3600 + 5 * 60 + 59), "1h 5m");
        assert_eq!(format_duration(DAY + 2 * HOUR), "1d 2h");
        assert_eq!(format_duration(YEAR + MONTH + 3 * MINUTE), "1y 1M 3m");
    }

    #[test]
    fn twelve_months_roll_into_a_year() {
        assert_eq!(format_duration(360 * DAY), "1y");
    }

    #[test]
    fn sub_minute_durations_use_seconds() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(42), "42s");
    }
}
