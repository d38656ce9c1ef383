use serde::{Deserialize, Deserializer, Serialize};

use super::RoleKey;
use crate::utils::format_date;

/// Response from /ai/generate-roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRoadmapResponse {
    pub id: i64,
    pub user_role_id: RoleKey,
    pub roadmap_text: String,
    pub generated_at: String,
}

/// Locally cached summary of a generated roadmap.
///
/// Stored under `user_roadmaps`. Persists independently of the server
/// until deleted or reconciled away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRoadmapEntry {
    pub id: i64,
    #[serde(rename = "user_role_id")]
    pub role_key: RoleKey,
    pub role_name: String,
    #[serde(deserialize_with = "duration_from_number_or_string")]
    pub duration_days: u32,
    pub roadmap_text: String,
    pub generated_at: String,
}

impl SavedRoadmapEntry {
    pub fn from_response(response: GenerateRoadmapResponse, role_name: &str, duration_days: u32) -> Self {
        Self {
            id: response.id,
            role_key: response.user_role_id,
            role_name: role_name.to_string(),
            duration_days,
            roadmap_text: response.roadmap_text,
            generated_at: response.generated_at,
        }
    }

    /// Parse the structured roadmap document, if the text is one.
    pub fn parsed(&self) -> Option<RoadmapDocument> {
        RoadmapDocument::parse(&self.roadmap_text)
    }

    pub fn matches_role(&self, role_name: &str) -> bool {
        self.role_name.to_lowercase() == role_name.to_lowercase()
    }

    pub fn generated_display(&self) -> String {
        format_date(&self.generated_at)
    }
}

// Older entries stored the duration as the raw form field text
fn duration_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Duration {
        Number(u32),
        Text(String),
    }

    match Duration::deserialize(deserializer)? {
        Duration::Number(n) => Ok(n),
        Duration::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid duration_days: {:?}", s))),
    }
}

/// Structured roadmap as generated by the AI backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadmapDocument {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub learning_path: Vec<LearningPhase>,
    #[serde(default)]
    pub recommended_projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub phase: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub duration_weeks: Option<u32>,
}

impl RoadmapDocument {
    /// Returns None when the text is not a roadmap object; callers
    /// fall back to showing the raw text.
    pub fn parse(text: &str) -> Option<Self> {
        let doc: RoadmapDocument = serde_json::from_str(text.trim()).ok()?;
        if doc.learning_path.is_empty() && doc.required_skills.is_empty() {
            return None;
        }
        Some(doc)
    }

    pub fn total_weeks(&self) -> u32 {
        self.learning_path
            .iter()
            .filter_map(|p| p.duration_weeks)
            .sum()
    }
}
