//! Building-name filter over the loaded classroom list

use crate::models::Classroom;

/// Derive the displayable subset of `all` for the given query.
///
/// An empty query keeps only rooms that still have a lecture scheduled
/// today. A non-empty query keeps rooms whose building name contains the
/// query as a case-insensitive substring. Response order is preserved.
pub fn filter_classrooms(all: &[Classroom], query: &str) -> Vec<Classroom> {
    if query.is_empty() {
        return all
            .iter()
            .filter(|room| room.next_lecture_time.is_some())
            .cloned()
            .collect();
    }

    let needle = query.to_lowercase();
    all.iter()
        .filter(|room| room.building_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample() -> Vec<Classroom> {
        vec![
            Classroom::new("101", "Main Hall").with_next_lecture(at(9, 0)),
            Classroom::new("102", "Main Hall"),
            Classroom::new("201", "main annex").with_next_lecture(at(10, 15)),
            Classroom::new("301", "Maine Building").with_next_lecture(at(13, 45)),
            Classroom::new("302", "Science Wing"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_rooms_with_pending_lectures() {
        let filtered = filter_classrooms(&sample(), "");

        let rooms: Vec<&str> = filtered.iter().map(|c| c.room_number.as_str()).collect();
        assert_eq!(rooms, vec!["101", "201", "301"]);
        assert!(filtered.iter().all(|c| c.next_lecture_time.is_some()));
    }

    #[test]
    fn test_query_matches_substring_case_insensitively() {
        let filtered = filter_classrooms(&sample(), "Main");

        // "Maine Building" contains "main" as a substring, so it matches too.
        let buildings: Vec<&str> = filtered.iter().map(|c| c.building_name.as_str()).collect();
        assert_eq!(buildings, vec!["Main Hall", "Main Hall", "main annex", "Maine Building"]);
    }

    #[test]
    fn test_query_ignores_lecture_time_predicate() {
        // Room 302 has no pending lecture but still matches its building.
        let filtered = filter_classrooms(&sample(), "science");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].room_number, "302");
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(filter_classrooms(&sample(), "Gymnasium").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = sample();
        let once = filter_classrooms(&all, "main");
        let twice = filter_classrooms(&once, "main");
        assert_eq!(once, twice);
    }
}
