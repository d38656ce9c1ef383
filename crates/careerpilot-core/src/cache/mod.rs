//! Local caching module for progress that only the client knows about.
//!
//! This module provides the `CacheManager` for storing and retrieving
//! the two client-owned caches through a `KeyValueStore`:
//! - `user_roadmaps`: summaries of generated roadmaps
//! - `completed_daily_plans`: completed day numbers per role key
//!
//! Roadmap and plan content itself is never cached; the roster is fetched
//! fresh from the API every time it is needed.

pub mod manager;

pub use manager::{CacheManager, COMPLETED_DAILY_PLANS_KEY, USER_ROADMAPS_KEY};
