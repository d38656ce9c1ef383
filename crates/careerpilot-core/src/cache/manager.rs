use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::{CompletionSet, RoleKey, SavedRoadmapEntry};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key for the per-role completed day numbers.
pub const COMPLETED_DAILY_PLANS_KEY: &str = "completed_daily_plans";

/// Storage key for the saved roadmap index.
pub const USER_ROADMAPS_KEY: &str = "user_roadmaps";

/// Typed access to the two local progress caches.
///
/// Loads never fail on bad data: anything that does not decode is treated
/// as absent and logged. Only storage I/O errors propagate.
pub struct CacheManager<K> {
    store: K,
}

impl<K: KeyValueStore> CacheManager<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    // ===== Saved Roadmaps =====

    pub fn load_saved_roadmaps(&self) -> Result<Vec<SavedRoadmapEntry>, StorageError> {
        let raw = self.store.get(USER_ROADMAPS_KEY)?;
        Ok(raw.as_deref().map(decode_saved_roadmaps).unwrap_or_default())
    }

    pub fn save_saved_roadmaps(&self, roadmaps: &[SavedRoadmapEntry]) -> Result<(), StorageError> {
        let contents = serde_json::to_string(roadmaps)?;
        self.store.set(USER_ROADMAPS_KEY, &contents)
    }

    // ===== Completion =====

    pub fn load_completion(&self) -> Result<CompletionSet, StorageError> {
        let raw = self.store.get(COMPLETED_DAILY_PLANS_KEY)?;
        Ok(raw.as_deref().map(decode_completion).unwrap_or_default())
    }

    pub fn save_completion(&self, completion: &CompletionSet) -> Result<(), StorageError> {
        let contents = serde_json::to_string(&encode_completion(completion))?;
        self.store.set(COMPLETED_DAILY_PLANS_KEY, &contents)
    }

    /// Drop all completion progress for every role.
    pub fn clear_completion(&self) -> Result<(), StorageError> {
        debug!("Clearing all completion data");
        self.store.remove(COMPLETED_DAILY_PLANS_KEY)
    }
}

/// Decode the saved roadmap index.
///
/// A value that is not a JSON array decodes as empty. Within an array,
/// entries that do not match the entry shape are skipped so one bad record
/// does not cost the user every other roadmap.
pub fn decode_saved_roadmaps(raw: &str) -> Vec<SavedRoadmapEntry> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!(key = USER_ROADMAPS_KEY, "Stored value is not an array, ignoring");
            return Vec::new();
        }
        Err(e) => {
            warn!(key = USER_ROADMAPS_KEY, error = %e, "Failed to parse stored value, ignoring");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<SavedRoadmapEntry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(key = USER_ROADMAPS_KEY, error = %e, "Skipping malformed roadmap entry");
                None
            }
        })
        .collect()
}

/// Decode `{ "<roleKey>": [day, ...] }`.
///
/// A value that is not a JSON object decodes as empty. Entries whose key is
/// not an integer, or whose value is not an array of positive integers,
/// are skipped.
pub fn decode_completion(raw: &str) -> CompletionSet {
    let object = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            warn!(key = COMPLETED_DAILY_PLANS_KEY, "Stored value is not an object, ignoring");
            return CompletionSet::new();
        }
        Err(e) => {
            warn!(key = COMPLETED_DAILY_PLANS_KEY, error = %e, "Failed to parse stored value, ignoring");
            return CompletionSet::new();
        }
    };

    object
        .into_iter()
        .filter_map(|(key, value)| {
            let Ok(role_key) = key.parse::<RoleKey>() else {
                warn!(key = COMPLETED_DAILY_PLANS_KEY, role = %key, "Skipping non-numeric role key");
                return None;
            };
            match decode_days(&value) {
                Some(days) => Some((role_key, days)),
                None => {
                    warn!(key = COMPLETED_DAILY_PLANS_KEY, role_key = %role_key, "Skipping malformed day list");
                    None
                }
            }
        })
        .collect()
}

fn decode_days(value: &Value) -> Option<BTreeSet<u32>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_u64().and_then(|d| u32::try_from(d).ok()).filter(|d| *d > 0))
        .collect()
}

pub fn encode_completion(completion: &CompletionSet) -> Value {
    let object: Map<String, Value> = completion
        .iter()
        .map(|(role_key, days)| {
            let days = days.iter().map(|d| Value::from(*d)).collect();
            (role_key.to_string(), Value::Array(days))
        })
        .collect();
    Value::Object(object)
}
