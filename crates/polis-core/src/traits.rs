// Gateway seams for pluggable backends
//
// The controller talks to EntityGateway and nothing else. Implementations:
// the HTTP gateway in polis-client, the in-memory gateway in `memory`, and
// whatever wrapper a test needs.

use async_trait::async_trait;
use polis_contracts::{Course, EntityFilter, ErrorCode, Slice, Student, Teacher};

use crate::error::Result;

/// A record the generic list/CRUD machinery can manage
pub trait Entity: Clone + Send + Sync + 'static {
    /// Path segment of the entity's endpoint family (`{PATH}/filter`, ...)
    const PATH: &'static str;
    /// Envelope code the backend uses when a lookup misses
    const NOT_FOUND: ErrorCode;
    /// Envelope code the backend uses when dependent associations block a delete
    const DELETE_NOT_ALLOWED: ErrorCode;

    /// Absent until the backend has persisted the record
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Text the backend's free-text filter matches against
    fn search_text(&self) -> String;

    /// Required scalar fields are present (mirrors backend validation)
    fn has_required_fields(&self) -> bool;
}

/// The four CRUD operations every entity endpoint family exposes
///
/// `upsert` is a single endpoint: id absent means create, id present means
/// update. Pagination is stable as long as no concurrent mutation reorders
/// the set; that obligation sits with the backend.
#[async_trait]
pub trait EntityGateway<E: Entity>: Send + Sync {
    async fn filter(&self, filter: &EntityFilter) -> Result<Slice<E>>;

    async fn get(&self, id: i64) -> Result<E>;

    async fn upsert(&self, entity: &E) -> Result<E>;

    async fn delete(&self, id: i64) -> Result<()>;
}

impl Entity for Student {
    const PATH: &'static str = "student";
    const NOT_FOUND: ErrorCode = ErrorCode::StudentNotFound;
    const DELETE_NOT_ALLOWED: ErrorCode = ErrorCode::DeleteStudentNotAllowed;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.first_name, self.last_name, self.email)
    }

    fn has_required_fields(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty() && !self.email.is_empty()
    }
}

impl Entity for Teacher {
    const PATH: &'static str = "teacher";
    const NOT_FOUND: ErrorCode = ErrorCode::TeacherNotFound;
    const DELETE_NOT_ALLOWED: ErrorCode = ErrorCode::DeleteTeacherNotAllowed;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.first_name, self.last_name, self.title)
    }

    fn has_required_fields(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty() && !self.title.is_empty()
    }
}

impl Entity for Course {
    const PATH: &'static str = "course";
    const NOT_FOUND: ErrorCode = ErrorCode::CourseNotFound;
    const DELETE_NOT_ALLOWED: ErrorCode = ErrorCode::DeleteCourseNotAllowed;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.code)
    }

    fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.code.is_empty()
    }
}
