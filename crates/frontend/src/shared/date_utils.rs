/// Date and time formatting for table cells
use chrono::NaiveDateTime;

/// `2024-03-15 14:02`, or an em placeholder for missing values
pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// `2024-03-15`
pub fn format_date(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// "Never" for users that have not signed in yet
pub fn format_last_login(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(_) => format_datetime(value),
        None => "Never".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 3, 15).and_then(|d| d.and_hms_opt(14, 2, 26))
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(sample()), "2024-03-15 14:02");
        assert_eq!(format_datetime(None), "—");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(sample()), "2024-03-15");
    }

    #[test]
    fn test_last_login() {
        assert_eq!(format_last_login(None), "Never");
        assert_eq!(format_last_login(sample()), "2024-03-15 14:02");
    }
}
