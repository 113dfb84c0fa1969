use crate::domain::records::ReadingStatus;

/// Format a possibly-fractional count: whole values drop the decimals,
/// everything else keeps two.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Display string for a record's reading span.
pub fn format_duration(duration_days: Option<i64>, status: ReadingStatus) -> String {
    match duration_days {
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{days} days"),
        None => match status {
            ReadingStatus::Reading => "reading".to_string(),
            ReadingStatus::Finished | ReadingStatus::NotStarted => "not started".to_string(),
        },
    }
}

/// Em dash constant for use as a placeholder when a value is absent.
pub const EM_DASH: &str = "\u{2014}";

#[cfg(test)]
mod tests {
    use super::*;

    // --- format_count ---

    #[test]
    fn count_whole_number_drops_decimals() {
        assert_eq!(format_count(3.0), "3");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn count_fractional_keeps_two_decimals() {
        assert_eq!(format_count(0.63), "0.63");
        assert_eq!(format_count(1.5), "1.50");
    }

    // --- format_duration ---

    #[test]
    fn duration_singular_day() {
        assert_eq!(format_duration(Some(1), ReadingStatus::Finished), "1 day");
    }

    #[test]
    fn duration_plural_days() {
        assert_eq!(
            format_duration(Some(16), ReadingStatus::Finished),
            "16 days"
        );
        assert_eq!(format_duration(Some(0), ReadingStatus::Finished), "0 days");
    }

    #[test]
    fn duration_absent_shows_status() {
        assert_eq!(format_duration(None, ReadingStatus::Reading), "reading");
        assert_eq!(
            format_duration(None, ReadingStatus::NotStarted),
            "not started"
        );
    }
}
