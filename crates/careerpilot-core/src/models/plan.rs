use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier for a (user, target role) pairing.
/// Joins a roadmap, its daily plan and its completion record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleKey(pub i64);

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoleKey {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RoleKey)
    }
}

impl From<i64> for RoleKey {
    fn from(value: i64) -> Self {
        RoleKey(value)
    }
}

// Response item from /ai/daily-plans and /ai/generate-daily-plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlanItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_role_id: Option<RoleKey>,
    pub day_number: u32,
    pub topic: String,
    #[serde(default)]
    pub estimated_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlanResponse {
    #[serde(default)]
    pub message: String,
    pub total_days: u32,
    #[serde(default)]
    pub plans: Vec<DailyPlanItem>,
    pub role_name: Option<String>,
    pub user_role_id: Option<RoleKey>,
}

impl DailyPlanResponse {
    /// Resolve the role key, falling back to the first plan item's key.
    pub fn role_key(&self) -> Option<RoleKey> {
        self.user_role_id
            .or_else(|| self.plans.iter().find_map(|p| p.user_role_id))
    }

    /// Convert to the domain group. Responses with no resolvable role key
    /// cannot be joined against local state and are dropped.
    pub fn into_group(self) -> Option<DailyPlanGroup> {
        let Some(role_key) = self.role_key() else {
            warn!(message = %self.message, "Daily plan response has no role key");
            return None;
        };

        let mut items: Vec<PlanDay> = self
            .plans
            .into_iter()
            .map(|p| PlanDay {
                day_number: p.day_number,
                topic: p.topic,
                estimated_hours: p.estimated_hours,
            })
            .collect();
        items.sort_by_key(|d| d.day_number);

        Some(DailyPlanGroup {
            role_key,
            role_name: self.role_name.unwrap_or_default(),
            total_days: self.total_days,
            items,
        })
    }
}

/// One day of a daily learning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day_number: u32,
    pub topic: String,
    pub estimated_hours: u32,
}

/// An active daily plan as held by the remote service.
/// The set of these is the authoritative roster of role keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlanGroup {
    pub role_key: RoleKey,
    pub role_name: String,
    pub total_days: u32,
    pub items: Vec<PlanDay>,
}

impl DailyPlanGroup {
    pub fn day(&self, day_number: u32) -> Option<&PlanDay> {
        self.items.iter().find(|d| d.day_number == day_number)
    }

    pub fn contains_day(&self, day_number: u32) -> bool {
        (1..=self.total_days).contains(&day_number)
    }

    pub fn total_hours(&self) -> u32 {
        self.items.iter().map(|d| d.estimated_hours).sum()
    }

    pub fn display_name(&self) -> &str {
        if self.role_name.is_empty() {
            "Untitled role"
        } else {
            &self.role_name
        }
    }
}

/// Completed day numbers per role.
///
/// Copy-on-write from the caller's perspective: operations in
/// [`crate::reconcile`] take a reference and return a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    roles: BTreeMap<RoleKey, BTreeSet<u32>>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(&self, role_key: RoleKey) -> Option<&BTreeSet<u32>> {
        self.roles.get(&role_key)
    }

    pub fn is_completed(&self, role_key: RoleKey, day_number: u32) -> bool {
        self.roles
            .get(&role_key)
            .is_some_and(|days| days.contains(&day_number))
    }

    /// Number of completed days recorded for a role.
    pub fn completed_count(&self, role_key: RoleKey) -> usize {
        self.roles.get(&role_key).map_or(0, BTreeSet::len)
    }

    pub fn contains_role(&self, role_key: RoleKey) -> bool {
        self.roles.contains_key(&role_key)
    }

    pub fn role_keys(&self) -> impl Iterator<Item = RoleKey> + '_ {
        self.roles.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoleKey, &BTreeSet<u32>)> {
        self.roles.iter().map(|(k, v)| (*k, v))
    }

    /// Number of roles with a completion entry (empty entries included).
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Total completed days across every role.
    pub fn total_completed(&self) -> usize {
        self.roles.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn entry(&mut self, role_key: RoleKey) -> &mut BTreeSet<u32> {
        self.roles.entry(role_key).or_default()
    }

    pub(crate) fn remove_role(&mut self, role_key: RoleKey) -> Option<BTreeSet<u32>> {
        self.roles.remove(&role_key)
    }

    pub(crate) fn retain_roles(&mut self, mut keep: impl FnMut(RoleKey) -> bool) {
        self.roles.retain(|k, _| keep(*k));
    }
}

impl FromIterator<(RoleKey, BTreeSet<u32>)> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = (RoleKey, BTreeSet<u32>)>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl<const N: usize> From<[(i64, &[u32]); N]> for CompletionSet {
    fn from(entries: [(i64, &[u32]); N]) -> Self {
        entries
            .into_iter()
            .map(|(k, days)| (RoleKey(k), days.iter().copied().collect()))
            .collect()
    }
}
