//! Display formatting for the lecture-time column

use chrono::NaiveTime;

/// Shown when a room has no further lectures today
pub const NO_LECTURES_TODAY: &str = "No lectures today";

/// Format a lecture time as a 12-hour clock string, e.g. `"2:30 PM"`.
pub fn format_lecture_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => NO_LECTURES_TODAY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_afternoon_time() {
        assert_eq!(format_lecture_time(Some(at(14, 30))), "2:30 PM");
    }

    #[test]
    fn test_morning_time_keeps_minute_padding() {
        assert_eq!(format_lecture_time(Some(at(9, 5))), "9:05 AM");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_lecture_time(Some(at(0, 5))), "12:05 AM");
        assert_eq!(format_lecture_time(Some(at(12, 0))), "12:00 PM");
    }

    #[test]
    fn test_no_lecture() {
        assert_eq!(format_lecture_time(None), NO_LECTURES_TODAY);
    }
}
