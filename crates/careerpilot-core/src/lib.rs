//! Core library for CareerPilot clients.
//!
//! Roadmaps and daily plans live on the server. Two things live only on
//! the client: an index of generated roadmaps and the set of completed
//! days per role. This crate keeps those local caches consistent with the
//! server's roster and provides the API client used to talk to it.
//!
//! - [`api`]: REST client for authentication and the AI endpoints
//! - [`storage`]: the key-value port all local state goes through
//! - [`cache`]: typed, fault-tolerant access to the two local caches
//! - [`reconcile`]: pure functions that purge orphans and toggle progress
//! - [`planner`]: orders remote calls and local reconciliation
//! - [`progress`]: dashboard statistics

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod models;
pub mod planner;
pub mod progress;
pub mod reconcile;
pub mod storage;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use cache::CacheManager;
pub use config::Config;
pub use planner::{DayToggle, DeleteOutcome, PlanService, Planner, RoadmapGeneration, Roster};
pub use progress::{GroupProgress, ProgressStats};
pub use reconcile::{delete_role, reconcile, toggle_completion, toggle_completion_checked, ProgressError, Reconciled};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
