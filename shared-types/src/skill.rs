use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::ParseEnumError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            other => Err(ParseEnumError::new("skill level", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub level: SkillLevel,
    /// Icon component name, resolved by the client
    pub icon: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateSkillRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub level: SkillLevel,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateSkillRequest {
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    pub level: Option<SkillLevel>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(optional)]
    pub icon: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SkillsResponse {
    pub skills: Vec<Skill>,
}
