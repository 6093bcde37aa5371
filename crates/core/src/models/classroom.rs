//! Classroom model - one row of the free-classrooms feed

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A classroom that is free right now
///
/// `next_lecture_time` is the next scheduled lecture in that room today;
/// `None` means the room stays free for the rest of the day. The wire
/// format is `"HH:MM:SS"` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub room_number: String,
    pub building_name: String,
    pub next_lecture_time: Option<NaiveTime>,
}

impl Classroom {
    pub fn new(room_number: impl Into<String>, building_name: impl Into<String>) -> Self {
        Self {
            room_number: room_number.into(),
            building_name: building_name.into(),
            next_lecture_time: None,
        }
    }

    pub fn with_next_lecture(mut self, time: NaiveTime) -> Self {
        self.next_lecture_time = Some(time);
        self
    }
}
