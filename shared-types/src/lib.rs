use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod category;
pub mod certificate;
pub mod course;
pub mod project;
pub mod skill;

pub use category::{
    CategoriesResponse, CategoryProgress, CreateMainCategoryRequest, CreateMainGoalRequest,
    CreateSubGoalRequest, GoalProgress, MainCategory, MainGoal, OverallProgress, SubGoal,
    UpdateMainCategoryRequest, UpdateMainGoalRequest, UpdateSubGoalRequest,
};
pub use certificate::{Certificate, CertificatesResponse, CreateCertificateRequest};
pub use course::{
    AllNotesResponse, Course, CourseStatus, CoursesResponse, CreateCourseRequest,
    CreateNoteRequest, Note, NoteWithCourse, NotesResponse, Priority, UpdateCourseRequest,
    UpdateNoteRequest,
};
pub use project::{CreateProjectRequest, Project, ProjectsResponse, UpdateProjectRequest};
pub use skill::{CreateSkillRequest, Skill, SkillLevel, SkillsResponse, UpdateSkillRequest};

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

/// Body returned by delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raised when a stored enum column holds an unknown value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} value: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
