//! Orchestration of remote calls and local cache maintenance.
//!
//! `Planner` ties a [`PlanService`] to a [`CacheManager`]. Every operation
//! that changes or reads the roster fetches it fresh and reconciles the
//! local caches against exactly that response. Caches are re-read from
//! storage immediately before each mutation; nothing is held in memory
//! between calls.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cache::CacheManager;
use crate::models::{
    CompletionSet, DailyPlanGroup, DailyPlanResponse, GenerateRoadmapRequest,
    GenerateRoadmapResponse, RoleKey, SavedRoadmapEntry, TeachTopicRequest, TeachTopicResponse,
};
use crate::progress::ProgressStats;
use crate::reconcile::{self, ProgressError};
use crate::storage::KeyValueStore;

/// The remote operations the planner depends on.
///
/// Implemented by [`crate::api::ApiClient`]; tests substitute a fake.
#[allow(async_fn_in_trait)]
pub trait PlanService {
    /// Current active daily plans, one group per role key.
    async fn fetch_roster(&self) -> Result<Vec<DailyPlanGroup>>;

    async fn generate_roadmap(&self, request: &GenerateRoadmapRequest) -> Result<GenerateRoadmapResponse>;

    async fn generate_daily_plan(&self, role_key: RoleKey) -> Result<DailyPlanResponse>;

    async fn delete_daily_plan(&self, role_key: RoleKey) -> Result<()>;

    async fn delete_roadmap(&self, role_key: RoleKey) -> Result<()>;

    async fn teach_topic(&self, request: &TeachTopicRequest) -> Result<TeachTopicResponse>;
}

/// The roster together with the progress that applies to it.
#[derive(Debug, Clone)]
pub struct Roster {
    pub groups: Vec<DailyPlanGroup>,
    pub completion: CompletionSet,
    /// Whether the refresh purged orphaned cache entries.
    pub purged: bool,
}

impl Roster {
    pub fn group(&self, role_key: RoleKey) -> Option<&DailyPlanGroup> {
        self.groups.iter().find(|g| g.role_key == role_key)
    }
}

#[derive(Debug, Clone)]
pub enum RoadmapGeneration {
    Created(SavedRoadmapEntry),
    /// A roadmap for this role already exists with a different duration.
    /// Generating anyway replaces it and resets its progress.
    Conflict { existing: SavedRoadmapEntry },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayToggle {
    pub role_key: RoleKey,
    pub day: u32,
    pub completed: bool,
    pub completed_days: usize,
    pub total_days: u32,
}

#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub role_key: RoleKey,
    pub removed_roadmaps: usize,
    /// Set when the server-side delete failed. Local state was cleaned up
    /// anyway; the next refresh settles any drift.
    pub remote_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteTarget {
    DailyPlan,
    Roadmap,
}

pub struct Planner<S, K> {
    service: S,
    cache: CacheManager<K>,
}

impl<S: PlanService, K: KeyValueStore> Planner<S, K> {
    pub fn new(service: S, store: K) -> Self {
        Self {
            service,
            cache: CacheManager::new(store),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn cache(&self) -> &CacheManager<K> {
        &self.cache
    }

    /// Fetch the roster, then purge both caches of orphaned entries.
    ///
    /// A failed fetch leaves the caches untouched.
    pub async fn refresh(&self) -> Result<Roster> {
        let groups = self.service.fetch_roster().await?;
        self.reconcile_with(groups)
    }

    fn reconcile_with(&self, groups: Vec<DailyPlanGroup>) -> Result<Roster> {
        let saved = self.cache.load_saved_roadmaps()?;
        let completion = self.cache.load_completion()?;

        let result = reconcile::reconcile(&groups, &saved, &completion);
        if result.changed {
            self.cache.save_saved_roadmaps(&result.roadmaps)?;
            self.cache.save_completion(&result.completion)?;
            info!(
                roadmaps_removed = saved.len() - result.roadmaps.len(),
                roles_removed = completion.len() - result.completion.len(),
                "Cleaned orphaned local progress"
            );
        }

        Ok(Roster {
            groups,
            completion: result.completion,
            purged: result.changed,
        })
    }

    /// Mark a day done, or undo it.
    pub async fn toggle_day(&self, role_key: RoleKey, day: u32) -> Result<DayToggle> {
        let roster = self.refresh().await?;
        let group = roster
            .group(role_key)
            .ok_or(ProgressError::UnknownRole(role_key))?;

        let current = self.cache.load_completion()?;
        let updated = reconcile::toggle_completion_checked(group, day, &current)?;
        self.cache.save_completion(&updated)?;

        let completed = updated.is_completed(role_key, day);
        debug!(role_key = %role_key, day = day, completed = completed, "Toggled day");

        Ok(DayToggle {
            role_key,
            day,
            completed,
            completed_days: updated.completed_count(role_key),
            total_days: group.total_days,
        })
    }

    pub fn saved_roadmaps(&self) -> Result<Vec<SavedRoadmapEntry>> {
        Ok(self.cache.load_saved_roadmaps()?)
    }

    pub fn saved_roadmap(&self, role_key: RoleKey) -> Result<Option<SavedRoadmapEntry>> {
        Ok(self
            .cache
            .load_saved_roadmaps()?
            .into_iter()
            .find(|r| r.role_key == role_key))
    }

    /// Generate a roadmap and add it to the saved index.
    ///
    /// If a roadmap for the same role name exists with a different
    /// duration, nothing happens unless `replace_existing` is set; then the
    /// old entry and its progress are dropped once the new roadmap has been
    /// generated. A failed remote call leaves both caches untouched.
    pub async fn generate_roadmap(
        &self,
        role_name: &str,
        duration_days: u32,
        replace_existing: bool,
    ) -> Result<RoadmapGeneration> {
        let request = GenerateRoadmapRequest::new(role_name, duration_days)?;

        let conflicting = self
            .cache
            .load_saved_roadmaps()?
            .into_iter()
            .find(|r| r.matches_role(&request.role_name) && r.duration_days != request.duration_days);

        if let Some(existing) = conflicting {
            if !replace_existing {
                return Ok(RoadmapGeneration::Conflict { existing });
            }
        }

        let response = self.service.generate_roadmap(&request).await?;
        let entry = SavedRoadmapEntry::from_response(response, &request.role_name, request.duration_days);

        let saved = self.cache.load_saved_roadmaps()?;
        let replaced: Vec<RoleKey> = saved
            .iter()
            .filter(|r| {
                replace_existing
                    && r.matches_role(&request.role_name)
                    && r.duration_days != request.duration_days
            })
            .map(|r| r.role_key)
            .collect();

        let mut roadmaps: Vec<SavedRoadmapEntry> = saved
            .into_iter()
            .filter(|r| !replaced.contains(&r.role_key))
            .collect();
        roadmaps.push(entry.clone());

        if !replaced.is_empty() {
            let mut completion = self.cache.load_completion()?;
            for key in &replaced {
                completion = reconcile::delete_role(*key, &[], &completion).1;
            }
            self.cache.save_completion(&completion)?;
            info!(role = %entry.role_name, replaced = replaced.len(), "Replaced roadmap");
        }
        self.cache.save_saved_roadmaps(&roadmaps)?;

        info!(role_key = %entry.role_key, role = %entry.role_name, "Generated roadmap");
        Ok(RoadmapGeneration::Created(entry))
    }

    /// Generate the daily plan for a role, then refresh.
    pub async fn generate_daily_plan(&self, role_key: RoleKey) -> Result<Roster> {
        let response = self.service.generate_daily_plan(role_key).await?;
        debug!(role_key = %role_key, days = response.total_days, "Generated daily plan");
        self.refresh().await
    }

    /// Delete a daily plan (and with it the role on the server).
    pub async fn delete_plan(&self, role_key: RoleKey) -> Result<DeleteOutcome> {
        self.delete(role_key, DeleteTarget::DailyPlan).await
    }

    /// Delete a roadmap (and with it the role on the server).
    pub async fn delete_roadmap(&self, role_key: RoleKey) -> Result<DeleteOutcome> {
        self.delete(role_key, DeleteTarget::Roadmap).await
    }

    async fn delete(&self, role_key: RoleKey, target: DeleteTarget) -> Result<DeleteOutcome> {
        let remote = match target {
            DeleteTarget::DailyPlan => self.service.delete_daily_plan(role_key).await,
            DeleteTarget::Roadmap => self.service.delete_roadmap(role_key).await,
        };
        let remote_error = remote.err().map(|e| {
            warn!(role_key = %role_key, error = %e, "Remote delete failed, cleaning up locally");
            e.to_string()
        });

        let saved = self.cache.load_saved_roadmaps()?;
        let completion = self.cache.load_completion()?;
        let (roadmaps, completion) = reconcile::delete_role(role_key, &saved, &completion);
        self.cache.save_saved_roadmaps(&roadmaps)?;
        self.cache.save_completion(&completion)?;

        if remote_error.is_none() {
            // Settle anything else that changed server-side
            if let Err(e) = self.refresh().await {
                warn!(error = %e, "Refresh after delete failed");
            }
        }

        Ok(DeleteOutcome {
            role_key,
            removed_roadmaps: saved.len() - roadmaps.len(),
            remote_error,
        })
    }

    pub async fn teach_topic(&self, topic: &str, context: Option<&str>) -> Result<TeachTopicResponse> {
        let request = TeachTopicRequest::new(topic, context)?;
        self.service.teach_topic(&request).await
    }

    /// Forget every completed day. Saved roadmaps are kept.
    pub fn reset_progress(&self) -> Result<usize> {
        let cleared = self.cache.load_completion()?.total_completed();
        self.cache.clear_completion()?;
        info!(days = cleared, "Reset completion progress");
        Ok(cleared)
    }

    pub async fn stats(&self) -> Result<ProgressStats> {
        let roster = self.refresh().await?;
        Ok(ProgressStats::compute(&roster.groups, &roster.completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::cache::{COMPLETED_DAILY_PLANS_KEY, USER_ROADMAPS_KEY};
    use crate::models::{DailyPlanItem, PlanDay};
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct FakeService {
        groups: Mutex<Vec<DailyPlanGroup>>,
        next_role: Mutex<i64>,
        fail_fetch: bool,
        fail_generate: bool,
        fail_delete: bool,
        deleted: Mutex<Vec<RoleKey>>,
    }

    impl FakeService {
        fn with_roles(keys: &[i64]) -> Self {
            let service = Self::default();
            *service.groups.lock().unwrap() = keys.iter().map(|k| group(*k, 3)).collect();
            *service.next_role.lock().unwrap() = 100;
            service
        }
    }

    impl PlanService for FakeService {
        async fn fetch_roster(&self) -> Result<Vec<DailyPlanGroup>> {
            if self.fail_fetch {
                anyhow::bail!("network down");
            }
            Ok(self.groups.lock().unwrap().clone())
        }

        async fn generate_roadmap(&self, request: &GenerateRoadmapRequest) -> Result<GenerateRoadmapResponse> {
            if self.fail_generate {
                anyhow::bail!("generation timed out");
            }
            let mut next = self.next_role.lock().unwrap();
            *next += 1;
            Ok(GenerateRoadmapResponse {
                id: *next * 10,
                user_role_id: RoleKey(*next),
                roadmap_text: format!("{{\"role\":\"{}\"}}", request.role_name),
                generated_at: "2024-06-01T09:00:00".to_string(),
            })
        }

        async fn generate_daily_plan(&self, role_key: RoleKey) -> Result<DailyPlanResponse> {
            self.groups.lock().unwrap().push(group(role_key.0, 3));
            Ok(DailyPlanResponse {
                message: "ok".to_string(),
                total_days: 3,
                plans: vec![DailyPlanItem {
                    id: Some(1),
                    user_role_id: Some(role_key),
                    day_number: 1,
                    topic: "Intro".to_string(),
                    estimated_hours: 1,
                }],
                role_name: None,
                user_role_id: Some(role_key),
            })
        }

        async fn delete_daily_plan(&self, role_key: RoleKey) -> Result<()> {
            if self.fail_delete {
                anyhow::bail!("server error");
            }
            self.deleted.lock().unwrap().push(role_key);
            self.groups.lock().unwrap().retain(|g| g.role_key != role_key);
            Ok(())
        }

        async fn delete_roadmap(&self, role_key: RoleKey) -> Result<()> {
            self.delete_daily_plan(role_key).await
        }

        async fn teach_topic(&self, request: &TeachTopicRequest) -> Result<TeachTopicResponse> {
            Ok(TeachTopicResponse {
                topic: request.topic.clone(),
                explanation: "Explained".to_string(),
                examples: vec![],
                resources: vec![],
            })
        }
    }

    fn group(role_key: i64, days: u32) -> DailyPlanGroup {
        DailyPlanGroup {
            role_key: RoleKey(role_key),
            role_name: format!("Role {}", role_key),
            total_days: days,
            items: (1..=days)
                .map(|d| PlanDay {
                    day_number: d,
                    topic: format!("Topic {}", d),
                    estimated_hours: 1,
                })
                .collect(),
        }
    }

    fn entry(role_key: i64, role_name: &str, duration_days: u32) -> SavedRoadmapEntry {
        SavedRoadmapEntry {
            id: role_key,
            role_key: RoleKey(role_key),
            role_name: role_name.to_string(),
            duration_days,
            roadmap_text: String::new(),
            generated_at: String::new(),
        }
    }

    fn seeded_planner(service: FakeService, roadmaps: &[SavedRoadmapEntry], completion: &CompletionSet) -> Planner<FakeService, MemoryStore> {
        let planner = Planner::new(service, MemoryStore::new());
        planner.cache().save_saved_roadmaps(roadmaps).unwrap();
        planner.cache().save_completion(completion).unwrap();
        planner
    }

    #[tokio::test]
    async fn test_refresh_purges_orphans() {
        let planner = seeded_planner(
            FakeService::with_roles(&[1]),
            &[entry(1, "A", 3), entry(2, "B", 3)],
            &CompletionSet::from([(1, &[1, 2][..]), (2, &[1][..])]),
        );

        let roster = planner.refresh().await.unwrap();

        assert!(roster.purged);
        assert_eq!(roster.completion, CompletionSet::from([(1, &[1, 2][..])]));
        assert_eq!(planner.saved_roadmaps().unwrap(), vec![entry(1, "A", 3)]);
        assert_eq!(planner.cache().load_completion().unwrap(), roster.completion);
    }

    #[tokio::test]
    async fn test_refresh_without_orphans_does_not_write() {
        let store = MemoryStore::new();
        let planner = Planner::new(FakeService::with_roles(&[1]), &store);

        let roster = planner.refresh().await.unwrap();

        assert!(!roster.purged);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_caches_untouched() {
        let service = FakeService {
            fail_fetch: true,
            ..FakeService::default()
        };
        let completion = CompletionSet::from([(7, &[1][..])]);
        let planner = seeded_planner(service, &[entry(7, "A", 3)], &completion);

        assert!(planner.refresh().await.is_err());
        assert_eq!(planner.cache().load_completion().unwrap(), completion);
        assert_eq!(planner.saved_roadmaps().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_recovers_from_corrupt_cache() {
        let store = MemoryStore::with_entries([
            (COMPLETED_DAILY_PLANS_KEY, "not json"),
            (USER_ROADMAPS_KEY, "[]"),
        ]);
        let planner = Planner::new(FakeService::with_roles(&[1]), &store);

        let roster = planner.refresh().await.unwrap();
        assert!(roster.completion.is_empty());
        assert!(!roster.purged);
    }

    #[tokio::test]
    async fn test_toggle_day() {
        let planner = Planner::new(FakeService::with_roles(&[5]), MemoryStore::new());

        let first = planner.toggle_day(RoleKey(5), 3).await.unwrap();
        assert!(first.completed);
        assert_eq!(first.completed_days, 1);
        assert_eq!(first.total_days, 3);

        let second = planner.toggle_day(RoleKey(5), 3).await.unwrap();
        assert!(!second.completed);
        assert_eq!(
            planner.cache().load_completion().unwrap().days(RoleKey(5)),
            Some(&Default::default())
        );
    }

    #[tokio::test]
    async fn test_toggle_day_rejects_unknown_role_and_range() {
        let planner = Planner::new(FakeService::with_roles(&[5]), MemoryStore::new());

        let err = planner.toggle_day(RoleKey(6), 1).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProgressError>(),
            Some(&ProgressError::UnknownRole(RoleKey(6)))
        );

        let err = planner.toggle_day(RoleKey(5), 4).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProgressError>(),
            Some(ProgressError::DayOutOfRange { day: 4, .. })
        ));
        assert!(planner.cache().load_completion().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_reads_latest_persisted_state() {
        let store = MemoryStore::new();
        let planner = Planner::new(FakeService::with_roles(&[1]), &store);
        planner.toggle_day(RoleKey(1), 1).await.unwrap();

        // Another writer records day 2 behind the planner's back
        let other = CacheManager::new(&store);
        let mut completion = other.load_completion().unwrap();
        completion = reconcile::toggle_completion(RoleKey(1), 2, &completion);
        other.save_completion(&completion).unwrap();

        planner.toggle_day(RoleKey(1), 3).await.unwrap();
        let days = planner.cache().load_completion().unwrap();
        assert_eq!(days.completed_count(RoleKey(1)), 3);
    }

    #[tokio::test]
    async fn test_generate_roadmap_appends_entry() {
        let planner = Planner::new(FakeService::with_roles(&[]), MemoryStore::new());

        let result = planner.generate_roadmap("Backend Developer", 30, false).await.unwrap();
        let RoadmapGeneration::Created(created) = result else {
            panic!("expected a new roadmap");
        };
        assert_eq!(created.role_key, RoleKey(101));
        assert_eq!(created.duration_days, 30);
        assert_eq!(planner.saved_roadmaps().unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_generate_roadmap_validates_before_calling_remote() {
        let planner = Planner::new(FakeService::with_roles(&[]), MemoryStore::new());
        let err = planner.generate_roadmap("x", 30, false).await.unwrap_err();
        assert!(err.downcast_ref::<crate::models::ValidationError>().is_some());
        assert!(planner.saved_roadmaps().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_roadmap_duration_conflict() {
        let planner = seeded_planner(
            FakeService::with_roles(&[1]),
            &[entry(1, "Data Engineer", 30)],
            &CompletionSet::from([(1, &[1][..])]),
        );

        let result = planner.generate_roadmap("data engineer", 60, false).await.unwrap();
        assert!(matches!(result, RoadmapGeneration::Conflict { ref existing } if existing.role_key == RoleKey(1)));
        assert_eq!(planner.saved_roadmaps().unwrap().len(), 1);

        let result = planner.generate_roadmap("data engineer", 60, true).await.unwrap();
        assert!(matches!(result, RoadmapGeneration::Created(_)));
        let saved = planner.saved_roadmaps().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].duration_days, 60);
        assert!(!planner.cache().load_completion().unwrap().contains_role(RoleKey(1)));
    }

    #[tokio::test]
    async fn test_failed_replacement_keeps_old_roadmap_and_progress() {
        let service = FakeService {
            fail_generate: true,
            ..FakeService::with_roles(&[1])
        };
        let completion = CompletionSet::from([(1, &[1, 2, 3][..])]);
        let planner = seeded_planner(service, &[entry(1, "Data Engineer", 30)], &completion);

        assert!(planner.generate_roadmap("Data Engineer", 60, true).await.is_err());
        assert_eq!(planner.saved_roadmaps().unwrap(), vec![entry(1, "Data Engineer", 30)]);
        assert_eq!(planner.cache().load_completion().unwrap(), completion);
    }

    #[tokio::test]
    async fn test_generate_roadmap_same_duration_adds_entry() {
        let planner = seeded_planner(
            FakeService::with_roles(&[1]),
            &[entry(1, "QA", 30)],
            &CompletionSet::new(),
        );
        let result = planner.generate_roadmap("QA", 30, false).await.unwrap();
        assert!(matches!(result, RoadmapGeneration::Created(_)));
        assert_eq!(planner.saved_roadmaps().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_generate_daily_plan_refreshes_roster() {
        let planner = Planner::new(FakeService::with_roles(&[]), MemoryStore::new());
        let roster = planner.generate_daily_plan(RoleKey(9)).await.unwrap();
        assert!(roster.group(RoleKey(9)).is_some());
    }

    #[tokio::test]
    async fn test_delete_plan_cleans_local_state() {
        let planner = seeded_planner(
            FakeService::with_roles(&[1, 2]),
            &[entry(1, "A", 3), entry(2, "B", 3)],
            &CompletionSet::from([(1, &[1][..]), (2, &[2][..])]),
        );

        let outcome = planner.delete_plan(RoleKey(1)).await.unwrap();

        assert_eq!(outcome.removed_roadmaps, 1);
        assert!(outcome.remote_error.is_none());
        assert_eq!(*planner.service().deleted.lock().unwrap(), vec![RoleKey(1)]);
        assert_eq!(planner.saved_roadmaps().unwrap(), vec![entry(2, "B", 3)]);
        assert_eq!(
            planner.cache().load_completion().unwrap(),
            CompletionSet::from([(2, &[2][..])])
        );
    }

    #[tokio::test]
    async fn test_delete_plan_cleans_up_even_when_remote_fails() {
        let service = FakeService {
            fail_delete: true,
            ..FakeService::with_roles(&[1])
        };
        let planner = seeded_planner(
            service,
            &[entry(1, "A", 3)],
            &CompletionSet::from([(1, &[1][..])]),
        );

        let outcome = planner.delete_roadmap(RoleKey(1)).await.unwrap();

        assert!(outcome.remote_error.is_some());
        assert!(planner.saved_roadmaps().unwrap().is_empty());
        assert!(planner.cache().load_completion().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_locally() {
        let planner = seeded_planner(
            FakeService::with_roles(&[]),
            &[],
            &CompletionSet::new(),
        );
        let outcome = planner.delete_plan(RoleKey(3)).await.unwrap();
        assert_eq!(outcome.removed_roadmaps, 0);
        assert!(planner.cache().load_completion().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stats_use_reconciled_progress() {
        let planner = seeded_planner(
            FakeService::with_roles(&[1]),
            &[],
            &CompletionSet::from([(1, &[1, 2, 3][..]), (4, &[1][..])]),
        );
        let stats = planner.stats().await.unwrap();
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.completed_days, 3);
        assert_eq!(stats.completion_percentage, 100);
        // The orphan was purged by the refresh before counting the streak
        assert_eq!(stats.streak, 3);
    }

    #[tokio::test]
    async fn test_reset_progress_keeps_roadmaps() {
        let planner = seeded_planner(
            FakeService::with_roles(&[1, 2]),
            &[entry(1, "A", 3), entry(2, "B", 3)],
            &CompletionSet::from([(1, &[1, 2][..]), (2, &[3][..])]),
        );

        assert_eq!(planner.reset_progress().unwrap(), 3);
        assert!(planner.cache().load_completion().unwrap().is_empty());
        assert_eq!(planner.saved_roadmaps().unwrap().len(), 2);

        let roster = planner.refresh().await.unwrap();
        assert!(!roster.purged);
        assert_eq!(planner.reset_progress().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_teach_topic_validates() {
        let planner = Planner::new(FakeService::default(), MemoryStore::new());
        assert!(planner.teach_topic("a", None).await.is_err());
        let resp = planner.teach_topic("Ownership in Rust", Some("beginner")).await.unwrap();
        assert_eq!(resp.topic, "Ownership in Rust");
    }
}
