use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::ParseEnumError;

/// Priority scale, used for both a course's priority and its importance
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ParseEnumError::new("priority", other)),
        }
    }
}

/// Course progress status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "not-started",
            CourseStatus::InProgress => "in-progress",
            CourseStatus::Completed => "completed",
        }
    }
}

impl FromStr for CourseStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(CourseStatus::NotStarted),
            "in-progress" => Ok(CourseStatus::InProgress),
            "completed" => Ok(CourseStatus::Completed),
            other => Err(ParseEnumError::new("course status", other)),
        }
    }
}

/// Question/answer note embedded in a course
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
pub struct Note {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub main_category: Option<String>,
    pub main_goal: Option<String>,
    pub sub_goal: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A note listed outside its course, tagged with the owning course
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NoteWithCourse {
    pub course_id: i64,
    pub course_name: String,
    #[serde(flatten)]
    pub note: Note,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Course {
    pub id: i64,
    pub number: i64,
    pub name: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub sub_subcategory: Option<String>,
    pub priority: Priority,
    pub importance: Priority,
    pub status: CourseStatus,
    /// Duration in hours
    pub duration: f64,
    pub skills: Vec<String>,
    pub notes: Vec<Note>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCourseRequest {
    /// Assigned after the highest existing number when omitted
    pub number: Option<i64>,
    pub name: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub sub_subcategory: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub importance: Priority,
    #[serde(default)]
    pub status: CourseStatus,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateCourseRequest {
    pub number: Option<i64>,
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub category: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub subcategory: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub sub_subcategory: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub importance: Option<Priority>,
    pub status: Option<CourseStatus>,
    pub duration: Option<f64>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateNoteRequest {
    pub question: String,
    pub answer: String,
    pub main_category: Option<String>,
    pub main_goal: Option<String>,
    pub sub_goal: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateNoteRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub main_category: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub main_goal: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub sub_goal: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AllNotesResponse {
    pub notes: Vec<NoteWithCourse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&CourseStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let parsed: CourseStatus = json.trim_matches('"').parse().unwrap();
        assert_eq!(parsed, CourseStatus::InProgress);
    }

    #[test]
    fn test_unknown_priority_rejected() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.kind, "priority");
        assert_eq!(err.value, "urgent");
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateCourseRequest =
            serde_json::from_str(r#"{"name": "Rust for Rustaceans"}"#).unwrap();

        assert_eq!(req.number, None);
        assert_eq!(req.priority, Priority::Medium);
        assert_eq!(req.importance, Priority::Medium);
        assert_eq!(req.status, CourseStatus::NotStarted);
        assert_eq!(req.duration, 0.0);
        assert!(req.skills.is_empty());
    }

    #[test]
    fn test_note_with_course_is_flat() {
        let item = NoteWithCourse {
            course_id: 3,
            course_name: "Databases".to_string(),
            note: Note {
                id: 9,
                question: "What is a B-tree?".to_string(),
                answer: "A balanced search tree".to_string(),
                main_category: None,
                main_goal: None,
                sub_goal: None,
                created_at: 0,
                updated_at: 0,
            },
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["course_id"], 3);
        assert_eq!(value["id"], 9);
        assert_eq!(value["question"], "What is a B-tree?");
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let req: UpdateCourseRequest =
            serde_json::from_str(r#"{"category": null, "subcategory": "Web"}"#).unwrap();

        assert_eq!(req.category, Some(None));
        assert_eq!(req.subcategory, Some(Some("Web".to_string())));
        assert_eq!(req.sub_subcategory, None);

        let json = serde_json::to_value(&req).unwrap();
        assert!(json["category"].is_null());
        assert!(json.get("sub_subcategory").is_none());
    }
}
