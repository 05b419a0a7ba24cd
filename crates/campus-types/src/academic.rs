//! Academic records types
//!
//! Courses, students, and schedule entries served under `/academic/`. Field
//! names follow the backend's wire format (Indonesian column names) with
//! English names on the Rust side.

use serde::{Deserialize, Serialize};

/// Course lecturer summary (embedded in course listings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    /// Backend user primary key
    pub id: i64,
    /// Email address
    pub email: String,
    /// Full display name
    pub full_name: String,
}

/// Course record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course code, the backend's natural key
    #[serde(rename = "kode_mk")]
    pub code: String,
    /// Course name
    #[serde(rename = "nama")]
    pub name: String,
    /// Credit units
    #[serde(rename = "sks")]
    pub credits: u8,
    /// Assigned lecturers
    #[serde(rename = "pengajar", default)]
    pub lecturers: Vec<Lecturer>,
}

impl Course {
    /// Whether the given lecturer email teaches this course
    pub fn taught_by(&self, email: &str) -> bool {
        self.lecturers.iter().any(|l| l.email == email)
    }
}

/// Student profile (instructor-facing listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Backend user primary key
    pub id: i64,
    /// Email address
    pub email: String,
    /// Full display name
    pub full_name: String,
    /// Major / study program code
    #[serde(default)]
    pub major: Option<String>,
}

/// A course placed into the weekly timetable
///
/// The backend exposes no timetable endpoint; slots are assigned locally
/// from the enrollment order, matching how the portal renders the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The scheduled course
    pub course: Course,
    /// Weekday name
    pub day: String,
    /// Time window, e.g. "07:00 - 08:40"
    pub time: String,
    /// Room label
    pub room: String,
    /// Section letter (A, B, C)
    pub section: char,
}

const SCHEDULE_DAYS: [&str; 5] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat"];
const SCHEDULE_SLOTS: [&str; 6] = [
    "07:00 - 08:40",
    "08:40 - 10:20",
    "10:20 - 12:00",
    "13:00 - 14:40",
    "14:40 - 16:20",
    "16:20 - 18:00",
];
const SCHEDULE_CAPACITY: usize = 8;

/// Lay the first eight courses out over the teaching week
pub fn build_schedule(courses: Vec<Course>) -> Vec<ScheduleEntry> {
    courses
        .into_iter()
        .take(SCHEDULE_CAPACITY)
        .enumerate()
        .map(|(index, course)| ScheduleEntry {
            course,
            day: SCHEDULE_DAYS[index % SCHEDULE_DAYS.len()].to_string(),
            time: SCHEDULE_SLOTS[index % SCHEDULE_SLOTS.len()].to_string(),
            room: format!("R.{}", 100 + index),
            section: (b'A' + (index % 3) as u8) as char,
        })
        .collect()
}
