// Association link bodies for the enrollment endpoints

use serde::{Deserialize, Serialize};

/// Body of `associateStudentToCourse` / `removeStudentFromCourse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourseLink {
    pub id_student: i64,
    pub id_course: i64,
}

/// Body of `associateTeacherToCourse` / `removeTeacherFromCourse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherCourseLink {
    pub id_teacher: i64,
    pub id_course: i64,
}
