//! Reconciliation of the local progress caches against the roster.
//!
//! The roster (the daily-plan groups the API currently returns) decides
//! which role keys exist. Saved roadmaps and completion entries for any
//! other key are orphans and get purged. Everything here is a pure
//! function over its inputs; persisting the result is the caller's job.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::models::{CompletionSet, DailyPlanGroup, RoleKey, SavedRoadmapEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Day {day} is outside the plan for role {role_key} (days 1-{total_days})")]
    DayOutOfRange {
        role_key: RoleKey,
        day: u32,
        total_days: u32,
    },

    #[error("Role {0} has no active daily plan")]
    UnknownRole(RoleKey),
}

/// Output of [`reconcile`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub roadmaps: Vec<SavedRoadmapEntry>,
    pub completion: CompletionSet,
    /// True when at least one entry was purged from either cache.
    /// Callers persist both caches only when this is set.
    pub changed: bool,
}

pub fn active_keys(groups: &[DailyPlanGroup]) -> HashSet<RoleKey> {
    groups.iter().map(|g| g.role_key).collect()
}

/// Restrict both caches to the role keys present in `active_groups`.
pub fn reconcile(
    active_groups: &[DailyPlanGroup],
    saved_roadmaps: &[SavedRoadmapEntry],
    completion: &CompletionSet,
) -> Reconciled {
    let active = active_keys(active_groups);

    let roadmaps: Vec<SavedRoadmapEntry> = saved_roadmaps
        .iter()
        .filter(|r| active.contains(&r.role_key))
        .cloned()
        .collect();

    let mut cleaned = completion.clone();
    cleaned.retain_roles(|k| active.contains(&k));

    for key in completion.role_keys().filter(|k| !active.contains(k)) {
        debug!(role_key = %key, "Purged orphaned completion data");
    }

    let changed = roadmaps.len() != saved_roadmaps.len() || cleaned.len() != completion.len();

    Reconciled {
        roadmaps,
        completion: cleaned,
        changed,
    }
}

/// Flip `day` for `role_key`, creating the role's entry if absent.
///
/// Performs no range check; see [`toggle_completion_checked`].
pub fn toggle_completion(role_key: RoleKey, day: u32, completion: &CompletionSet) -> CompletionSet {
    let mut updated = completion.clone();
    let days = updated.entry(role_key);
    if !days.remove(&day) {
        days.insert(day);
    }
    updated
}

/// Like [`toggle_completion`] but rejects days outside `1..=total_days`
/// of the given group.
pub fn toggle_completion_checked(
    group: &DailyPlanGroup,
    day: u32,
    completion: &CompletionSet,
) -> Result<CompletionSet, ProgressError> {
    if !group.contains_day(day) {
        return Err(ProgressError::DayOutOfRange {
            role_key: group.role_key,
            day,
            total_days: group.total_days,
        });
    }
    Ok(toggle_completion(group.role_key, day, completion))
}

/// Remove every trace of `role_key` from both caches. Idempotent.
pub fn delete_role(
    role_key: RoleKey,
    saved_roadmaps: &[SavedRoadmapEntry],
    completion: &CompletionSet,
) -> (Vec<SavedRoadmapEntry>, CompletionSet) {
    let roadmaps = saved_roadmaps
        .iter()
        .filter(|r| r.role_key != role_key)
        .cloned()
        .collect();

    let mut cleaned = completion.clone();
    cleaned.remove_role(role_key);

    (roadmaps, cleaned)
}
