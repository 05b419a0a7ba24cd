//! Assessment and grade endpoints
//!
//! Score submission is instructor-only on the server side; the client
//! forwards the request and surfaces the resulting 403 as a validation
//! error rather than pre-filtering by role.

use campus_types::{AssessmentScore, FinalGrade, GradeComponent, NewScore};

use crate::{ApiClient, ClientError, Result};

impl ApiClient {
    /// List assessment components, optionally scoped to one course
    pub async fn list_components(&self, course_code: Option<&str>) -> Result<Vec<GradeComponent>> {
        let mut query = Vec::new();
        if let Some(code) = course_code {
            query.push(("matakuliah", code.to_string()));
        }
        self.get_json("/api/academic/komponen/", &query).await
    }

    /// List recorded assessment scores for a student
    pub async fn list_scores(&self, student_id: i64) -> Result<Vec<AssessmentScore>> {
        let query = [("mahasiswa", student_id.to_string())];
        self.get_json("/api/academic/assessment/", &query).await
    }

    /// Record a score for one assessment component
    pub async fn submit_score(&self, score: &NewScore) -> Result<AssessmentScore> {
        let body = serde_json::to_value(score)
            .map_err(|e| ClientError::Unknown(format!("failed to encode score: {e}")))?;
        self.post_json("/api/academic/assessment/", &body).await
    }

    /// Final grades for one course (instructor view)
    pub async fn final_grades(&self, course_code: &str) -> Result<Vec<FinalGrade>> {
        let query = [("matakuliah", course_code.to_string())];
        self.get_json("/api/academic/nilai-akhir/", &query).await
    }

    /// A student's final grades across courses (transcript view)
    pub async fn transcript(&self, student_id: i64) -> Result<Vec<FinalGrade>> {
        let query = [("mahasiswa", student_id.to_string())];
        self.get_json("/api/academic/nilai-akhir/", &query).await
    }
}
