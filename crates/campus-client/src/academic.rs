//! Course and student endpoints

use campus_types::{build_schedule, Course, Role, ScheduleEntry, Student};

use crate::{ApiClient, ClientError, Result};

impl ApiClient {
    /// List all courses
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        self.get_json("/api/academic/matakuliah/", &[]).await
    }

    /// Fetch a single course by code
    pub async fn get_course(&self, code: &str) -> Result<Course> {
        self.get_json(&format!("/api/academic/matakuliah/{code}/"), &[])
            .await
    }

    /// List courses taught by the lecturer with the given email
    ///
    /// The server has no lecturer filter on the course listing, so this
    /// fetches all courses and filters locally.
    pub async fn courses_taught_by(&self, email: &str) -> Result<Vec<Course>> {
        let courses = self.list_courses().await?;
        Ok(courses
            .into_iter()
            .filter(|course| course.taught_by(email))
            .collect())
    }

    /// List enrolled students
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        self.get_json("/api/academic/mahasiswa/", &[]).await
    }

    /// The signed-in student's weekly timetable
    ///
    /// The backend has no timetable endpoint, so this fetches the course
    /// listing and assigns slots locally. The student-only check is
    /// enforced here and reported the way a server 403 would be; the
    /// session itself stays valid.
    pub async fn my_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        match self.session().role() {
            Some(Role::Student) => {}
            Some(Role::Instructor) => {
                return Err(ClientError::Validation {
                    status: 403,
                    detail: "schedule is only available to student accounts".to_string(),
                    fields: std::collections::BTreeMap::new(),
                })
            }
            None => return Err(ClientError::Auth("not signed in".to_string())),
        }

        let courses = self.list_courses().await?;
        Ok(build_schedule(courses))
    }
}
