use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Portfolio project built while learning
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub tech: Vec<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Request to create a new project
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// Request to update a project. Nullable fields sent as `null` are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    pub tech: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub github_link: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub live_link: Option<Option<String>>,
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
}

/// Response containing a list of projects
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}
