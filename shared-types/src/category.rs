use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Leaf of the progress checklist
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
pub struct SubGoal {
    pub id: i64,
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
pub struct MainGoal {
    pub id: i64,
    pub name: String,
    pub checked: bool,
    pub sub_goals: Vec<SubGoal>,
}

/// Root of the three-level checklist: category, goals, sub goals
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
pub struct MainCategory {
    pub id: i64,
    pub name: String,
    pub checked: bool,
    pub main_goals: Vec<MainGoal>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MainCategory {
    pub fn goal(&self, goal_id: i64) -> Option<&MainGoal> {
        self.main_goals.iter().find(|g| g.id == goal_id)
    }
}

impl MainGoal {
    pub fn sub_goal(&self, sub_goal_id: i64) -> Option<&SubGoal> {
        self.sub_goals.iter().find(|s| s.id == sub_goal_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateMainCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateMainCategoryRequest {
    pub name: Option<String>,
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateMainGoalRequest {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateMainGoalRequest {
    pub name: Option<String>,
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateSubGoalRequest {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateSubGoalRequest {
    pub name: Option<String>,
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CategoriesResponse {
    pub categories: Vec<MainCategory>,
}

/// Checked/total counts for one main goal
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
pub struct GoalProgress {
    pub goal_id: i64,
    pub name: String,
    pub checked: bool,
    pub sub_goals_checked: u32,
    pub sub_goals_total: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
pub struct CategoryProgress {
    pub category_id: i64,
    pub name: String,
    pub checked: bool,
    pub goals_checked: u32,
    pub goals_total: u32,
    pub percent: f64,
    pub goals: Vec<GoalProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
pub struct OverallProgress {
    pub categories_checked: u32,
    pub categories_total: u32,
    pub percent: f64,
    pub categories: Vec<CategoryProgress>,
}
