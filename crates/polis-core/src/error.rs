// Error types for gateway calls and controller operations

use polis_contracts::{ErrorCode, ErrorContext};
use thiserror::Error;

/// Result type alias for gateway and controller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for the REST boundary
///
/// Four categories: transport (no usable response), HTTP (non-2xx), envelope
/// (2xx whose body reports a failure), and local preconditions that never
/// reach the network. Nothing is retried automatically; callers re-invoke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No usable response from the backend
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status
    #[error("server returned HTTP {status}")]
    Http { status: u16 },

    /// 2xx response whose envelope reported a failure
    #[error("{code}: {message}")]
    Api { code: ErrorCode, message: String },

    /// Operation requires a persisted entity with an id
    #[error("entity has no id")]
    MissingId,
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(msg.into())
    }

    /// Create an envelope-level error
    pub fn api(code: ErrorCode, message: impl Into<String>) -> Self {
        Error::Api {
            code,
            message: message.into(),
        }
    }

    /// The backend error code, if this is an envelope-level failure
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The single user-facing message surfaced through `ListState::error`
    ///
    /// Static code→message table; everything unrecognized falls back to the
    /// UNKNOWN_ERROR message.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { code, .. } => match code {
                ErrorCode::ValidationError => "Validation error. Please check your input.",
                ErrorCode::StudentNotFound => "Student not found.",
                ErrorCode::TeacherNotFound => "Teacher not found.",
                ErrorCode::CourseNotFound => "Course not found.",
                ErrorCode::DeleteStudentNotAllowed => {
                    "Cannot delete student. They are enrolled in courses."
                }
                ErrorCode::DeleteTeacherNotAllowed => {
                    "Cannot delete teacher. They are assigned to courses."
                }
                ErrorCode::DeleteCourseNotAllowed => {
                    "Cannot delete course. It has enrolled students."
                }
                ErrorCode::UnknownError => "An unexpected error occurred.",
            }
            .to_string(),
            Error::Http { status } => format!("Server error: {}", status),
            Error::Transport(_) => "An error occurred".to_string(),
            Error::MissingId => "Cannot delete an unsaved record.".to_string(),
        }
    }
}

impl From<ErrorContext> for Error {
    fn from(context: ErrorContext) -> Self {
        Error::Api {
            code: context.code,
            message: context.message,
        }
    }
}
