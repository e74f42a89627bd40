// Filter, pagination, and response envelope contracts
//
// Shared by every entity endpoint. The envelope success rule lives here so it
// is enforced in exactly one place: a call succeeded iff `error` is absent AND
// no status entry carries ERROR/FATAL severity, regardless of the HTTP status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cursor into a paginated result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub field: String,
    pub direction: SortDirection,
}

/// Free-text filter with pagination, the request body of `{entity}/filter`
///
/// `filter` is a case-insensitive substring match over the entity's searchable
/// fields; `None` means unfiltered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Sorting>,
}

impl EntityFilter {
    /// Unfiltered request for one page
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            filter: None,
            pagination: Pagination::new(page_number, page_size),
            sorting: None,
        }
    }
}

/// Wire shape of an id-only request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityId {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub fn is_failure(self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }
}

/// Backend error vocabulary, preserved verbatim
///
/// Codes the client does not know about deserialize to `UnknownError` so a new
/// backend code degrades to the fallback message instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    StudentNotFound,
    TeacherNotFound,
    CourseNotFound,
    DeleteStudentNotAllowed,
    DeleteTeacherNotAllowed,
    DeleteCourseNotAllowed,
    #[serde(other)]
    UnknownError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::StudentNotFound => "STUDENT_NOT_FOUND",
            ErrorCode::TeacherNotFound => "TEACHER_NOT_FOUND",
            ErrorCode::CourseNotFound => "COURSE_NOT_FOUND",
            ErrorCode::DeleteStudentNotAllowed => "DELETE_STUDENT_NOT_ALLOWED",
            ErrorCode::DeleteTeacherNotAllowed => "DELETE_TEACHER_NOT_ALLOWED",
            ErrorCode::DeleteCourseNotAllowed => "DELETE_COURSE_NOT_ALLOWED",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        };
        f.write_str(s)
    }
}

/// One entry in the envelope's status channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub code: i32,
    pub message: String,
    pub severity: Severity,
}

/// Envelope-level failure description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub code: ErrorCode,
    pub message: String,
    pub severity: Severity,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice<T> {
    pub content: Vec<T>,
    pub has_next: bool,
    pub pageable: Pagination,
}

/// Envelope around a single-entity response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    pub status: Vec<StatusEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorContext>,
}

/// Envelope around a paged response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice: Option<Slice<T>>,
    #[serde(default)]
    pub status: Vec<StatusEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorContext>,
}

/// Envelope for endpoints that return no payload (delete, associations)
pub type AckResponse = SingleResponse<serde_json::Value>;

fn envelope_failure(status: &[StatusEntry], error: &Option<ErrorContext>) -> Option<ErrorContext> {
    if let Some(err) = error {
        return Some(err.clone());
    }
    status
        .iter()
        .find(|entry| entry.severity.is_failure())
        .map(|entry| ErrorContext {
            code: ErrorCode::UnknownError,
            message: entry.message.clone(),
            severity: entry.severity,
        })
}

fn missing_payload() -> ErrorContext {
    ErrorContext {
        code: ErrorCode::UnknownError,
        message: "response carried no payload".to_string(),
        severity: Severity::Error,
    }
}

impl<T> SingleResponse<T> {
    /// Apply the envelope success rule and yield the payload
    pub fn into_result(self) -> Result<T, ErrorContext> {
        if let Some(err) = envelope_failure(&self.status, &self.error) {
            return Err(err);
        }
        self.data.ok_or_else(missing_payload)
    }

    /// Success check only, for endpoints whose payload is irrelevant
    pub fn into_ack(self) -> Result<(), ErrorContext> {
        match envelope_failure(&self.status, &self.error) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            status: Vec::new(),
            error: None,
        }
    }
}

impl<T> SliceResponse<T> {
    /// Apply the envelope success rule and yield the page
    pub fn into_result(self) -> Result<Slice<T>, ErrorContext> {
        if let Some(err) = envelope_failure(&self.status, &self.error) {
            return Err(err);
        }
        self.slice.ok_or_else(missing_payload)
    }

    pub fn ok(slice: Slice<T>) -> Self {
        Self {
            slice: Some(slice),
            status: Vec::new(),
            error: None,
        }
    }
}
