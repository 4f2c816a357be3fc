//! Date formatting used across the consoles
use chrono::{DateTime, Utc};

/// "15 Mar 2024, 14:02" (UTC as sent by the API)
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d %b %Y, %H:%M").to_string()
}

/// "15 Mar 2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d %b %Y").to_string()
}

/// Dash for missing timestamps
pub fn format_optional_datetime(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15 Mar 2024, 14:02");
        assert_eq!(format_date(&dt), "15 Mar 2024");
    }

    #[test]
    fn test_missing_datetime() {
        assert_eq!(format_optional_datetime(None), "—");
    }
}
