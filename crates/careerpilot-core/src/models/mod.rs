//! Data models for CareerPilot entities.
//!
//! This module contains the data structures shared by the API client,
//! the local caches and the reconciler:
//!
//! - `RoleKey`, `DailyPlanGroup`, `CompletionSet`: the roster and progress
//! - `SavedRoadmapEntry`, `RoadmapDocument`: generated roadmaps
//! - `TeachTopicResponse`: topic explanations
//! - `User`, `LoginResponse`: account data
//! - Request bodies with client-side validation

pub mod plan;
pub mod request;
pub mod roadmap;
pub mod topic;
pub mod user;

pub use plan::{CompletionSet, DailyPlanGroup, DailyPlanItem, DailyPlanResponse, PlanDay, RoleKey};
pub use request::{GenerateDailyPlanRequest, GenerateRoadmapRequest, TeachTopicRequest, ValidationError};
pub use roadmap::{GenerateRoadmapResponse, LearningPhase, RoadmapDocument, SavedRoadmapEntry};
pub use topic::TeachTopicResponse;
pub use user::{DeleteResponse, LoginResponse, RegisterRequest, User};
