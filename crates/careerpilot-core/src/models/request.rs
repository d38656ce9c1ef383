//! Request bodies for the AI endpoints.
//!
//! Constructors enforce the same limits the server does, so obviously
//! invalid input never costs a round trip.

use serde::Serialize;
use thiserror::Error;

use super::RoleKey;

pub const ROLE_NAME_MIN_CHARS: usize = 2;
pub const ROLE_NAME_MAX_CHARS: usize = 200;
pub const DURATION_MIN_DAYS: u32 = 1;
pub const DURATION_MAX_DAYS: u32 = 365;
pub const TOPIC_MIN_CHARS: usize = 2;
pub const TOPIC_MAX_CHARS: usize = 500;
pub const CONTEXT_MAX_CHARS: usize = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Role name must be between {min} and {max} characters")]
    RoleName { min: usize, max: usize },

    #[error("Duration must be between {min} and {max} days (got {got})")]
    Duration { min: u32, max: u32, got: u32 },

    #[error("Topic must be between {min} and {max} characters")]
    Topic { min: usize, max: usize },

    #[error("Context must be at most {max} characters")]
    Context { max: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRoadmapRequest {
    pub role_name: String,
    pub duration_days: u32,
}

impl GenerateRoadmapRequest {
    pub fn new(role_name: &str, duration_days: u32) -> Result<Self, ValidationError> {
        let role_name = role_name.trim();
        let len = role_name.chars().count();
        if !(ROLE_NAME_MIN_CHARS..=ROLE_NAME_MAX_CHARS).contains(&len) {
            return Err(ValidationError::RoleName {
                min: ROLE_NAME_MIN_CHARS,
                max: ROLE_NAME_MAX_CHARS,
            });
        }
        if !(DURATION_MIN_DAYS..=DURATION_MAX_DAYS).contains(&duration_days) {
            return Err(ValidationError::Duration {
                min: DURATION_MIN_DAYS,
                max: DURATION_MAX_DAYS,
                got: duration_days,
            });
        }
        Ok(Self {
            role_name: role_name.to_string(),
            duration_days,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerateDailyPlanRequest {
    pub user_role_id: RoleKey,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeachTopicRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl TeachTopicRequest {
    pub fn new(topic: &str, context: Option<&str>) -> Result<Self, ValidationError> {
        let topic = topic.trim();
        let len = topic.chars().count();
        if !(TOPIC_MIN_CHARS..=TOPIC_MAX_CHARS).contains(&len) {
            return Err(ValidationError::Topic {
                min: TOPIC_MIN_CHARS,
                max: TOPIC_MAX_CHARS,
            });
        }

        let context = context.map(str::trim).filter(|c| !c.is_empty());
        if let Some(c) = context {
            if c.chars().count() > CONTEXT_MAX_CHARS {
                return Err(ValidationError::Context {
                    max: CONTEXT_MAX_CHARS,
                });
            }
        }

        Ok(Self {
            topic: topic.to_string(),
            context: context.map(str::to_string),
        })
    }
}
