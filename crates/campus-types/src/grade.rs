//! Grade records and the letter-grade scale

use serde::{Deserialize, Serialize};

/// Letter grades on the campus scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    AB,
    B,
    BC,
    C,
    D,
    E,
}

/// Grading scale thresholds, highest first. A score at or above the
/// threshold earns the grade.
const GRADING_SCALE: &[(f64, LetterGrade)] = &[
    (80.0, LetterGrade::A),
    (75.0, LetterGrade::AB),
    (70.0, LetterGrade::B),
    (65.0, LetterGrade::BC),
    (60.0, LetterGrade::C),
    (50.0, LetterGrade::D),
];

impl LetterGrade {
    /// Convert a numeric score (0-100) to a letter grade
    ///
    /// Non-finite scores fall through to E, matching the backend's handling
    /// of unparseable values.
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            return Self::E;
        }
        for &(threshold, grade) in GRADING_SCALE {
            if score >= threshold {
                return grade;
            }
        }
        Self::E
    }

    /// Grade point value on the 4.0 scale
    pub const fn points(&self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::AB => 3.5,
            Self::B => 3.0,
            Self::BC => 2.5,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::E => 0.0,
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::AB => "AB",
            Self::B => "B",
            Self::BC => "BC",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        };
        write!(f, "{s}")
    }
}

/// Assessment component of a course (e.g. midterm, 30%)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeComponent {
    /// Backend primary key
    pub id: i64,
    /// Owning course code
    #[serde(rename = "matakuliah")]
    pub course_code: String,
    /// Component name
    #[serde(rename = "nama")]
    pub name: String,
    /// Weight in percent (components of a course sum to 100)
    #[serde(rename = "bobot_persen")]
    pub weight_percent: f64,
}

/// A student's score on one assessment component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentScore {
    /// Backend primary key
    pub id: i64,
    /// Graded student's user id
    #[serde(rename = "mahasiswa")]
    pub student_id: i64,
    /// Assessment component id
    #[serde(rename = "komponen")]
    pub component_id: i64,
    /// Numeric score (0-100)
    #[serde(rename = "nilai_angka")]
    pub score: f64,
}

/// Score submission payload (the backend assigns `id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewScore {
    /// Graded student's user id
    #[serde(rename = "mahasiswa")]
    pub student_id: i64,
    /// Assessment component id
    #[serde(rename = "komponen")]
    pub component_id: i64,
    /// Numeric score (0-100)
    #[serde(rename = "nilai_angka")]
    pub score: f64,
}

/// Final weighted grade for one course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalGrade {
    /// Graded student's user id
    #[serde(rename = "mahasiswa")]
    pub student_id: i64,
    /// Course code
    #[serde(rename = "matakuliah")]
    pub course_code: String,
    /// Weighted total (0-100)
    #[serde(rename = "nilai_total")]
    pub total: f64,
    /// Letter grade derived from the total
    #[serde(rename = "nilai_huruf")]
    pub letter: LetterGrade,
}
