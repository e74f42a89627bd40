// HTTP plumbing shared by every endpoint
//
// One ApiClient per backend: base URL plus a shared reqwest client. The
// association endpoints live here because they are not part of any entity's
// endpoint family.

use std::time::Duration;

use polis_contracts::{AckResponse, StudentCourseLink, TeacherCourseLink};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use polis_core::{Error, Result};

/// Transport-default request timeout; there is no per-call override
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for one Polis backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON and decode the response body
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| Error::transport(format!("invalid response body: {e}")))
    }

    async fn ack<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response: AckResponse = self.post(path, body).await?;
        response.into_ack().map_err(Error::from)
    }

    /// Enroll a student in a course
    pub async fn associate_student_to_course(&self, link: StudentCourseLink) -> Result<()> {
        self.ack("/associateStudentToCourse", &link).await
    }

    /// Remove a student from a course
    pub async fn remove_student_from_course(&self, link: StudentCourseLink) -> Result<()> {
        self.ack("/removeStudentFromCourse", &link).await
    }

    /// Assign a teacher to a course
    pub async fn associate_teacher_to_course(&self, link: TeacherCourseLink) -> Result<()> {
        self.ack("/associateTeacherToCourse", &link).await
    }

    /// Remove a teacher from a course
    pub async fn remove_teacher_from_course(&self, link: TeacherCourseLink) -> Result<()> {
        self.ack("/removeTeacherFromCourse", &link).await
    }
}
