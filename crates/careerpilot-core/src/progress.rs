//! Progress statistics shown on the dashboard and profile views.

use crate::models::{CompletionSet, DailyPlanGroup, RoleKey};
use crate::reconcile::active_keys;
use crate::utils::percentage;

/// The streak counter never shows more than a week.
const MAX_STREAK_DAYS: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub total_roadmaps: usize,
    pub total_days: usize,
    /// Completed days for roles that are still on the roster
    pub completed_days: usize,
    pub completion_percentage: u32,
    /// Plans whose first day is still open
    pub today_tasks: usize,
    pub streak: usize,
}

impl ProgressStats {
    pub fn compute(roster: &[DailyPlanGroup], completion: &CompletionSet) -> Self {
        let active = active_keys(roster);

        let total_days = roster.iter().map(|g| g.items.len()).sum();
        let completed_days = completion
            .iter()
            .filter(|(key, _)| active.contains(key))
            .map(|(_, days)| days.len())
            .sum();
        let today_tasks = roster
            .iter()
            .filter(|g| !completion.is_completed(g.role_key, 1))
            .count();

        // Counts every cached role, reconciled or not
        let streak = completion.total_completed().min(MAX_STREAK_DAYS);

        Self {
            total_roadmaps: roster.len(),
            total_days,
            completed_days,
            completion_percentage: percentage(completed_days, total_days),
            today_tasks,
            streak,
        }
    }
}

/// Progress through a single daily plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupProgress {
    pub role_key: RoleKey,
    pub completed: usize,
    pub total: usize,
    pub next_day: Option<u32>,
}

impl GroupProgress {
    pub fn compute(group: &DailyPlanGroup, completion: &CompletionSet) -> Self {
        let completed = group
            .items
            .iter()
            .filter(|d| completion.is_completed(group.role_key, d.day_number))
            .count();
        let next_day = group
            .items
            .iter()
            .map(|d| d.day_number)
            .find(|day| !completion.is_completed(group.role_key, *day));

        Self {
            role_key: group.role_key,
            completed,
            total: group.items.len(),
            next_day,
        }
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.completed, self.total)
    }

    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanDay;

    fn group(role_key: i64, days: u32) -> DailyPlanGroup {
        DailyPlanGroup {
            role_key: RoleKey(role_key),
            role_name: format!("Role {}", role_key),
            total_days: days,
            items: (1..=days)
                .map(|d| PlanDay {
                    day_number: d,
                    topic: format!("Topic {}", d),
                    estimated_hours: 2,
                })
                .collect(),
        }
    }

    #[test]
    fn test_stats_empty() {
        let stats = ProgressStats::compute(&[], &CompletionSet::new());
        assert_eq!(stats, ProgressStats::default());
    }

    #[test]
    fn test_stats_ignore_orphaned_roles() {
        let roster = vec![group(1, 4), group(2, 2)];
        let completion = CompletionSet::from([(1, &[1, 2][..]), (9, &[1, 2, 3][..])]);

        let stats = ProgressStats::compute(&roster, &completion);

        assert_eq!(stats.total_roadmaps, 2);
        assert_eq!(stats.total_days, 6);
        assert_eq!(stats.completed_days, 2);
        assert_eq!(stats.completion_percentage, 33);
        // Role 2 has not done day 1
        assert_eq!(stats.today_tasks, 1);
        // Streak counts the orphan too, capped at a week
        assert_eq!(stats.streak, 5);
    }

    #[test]
    fn test_streak_is_capped() {
        let roster = vec![group(1, 10)];
        let completion = CompletionSet::from([(1, &[1, 2, 3, 4, 5, 6, 7, 8, 9][..])]);
        assert_eq!(ProgressStats::compute(&roster, &completion).streak, 7);
    }

    #[test]
    fn test_group_progress() {
        let plan = group(3, 3);
        let completion = CompletionSet::from([(3, &[1, 3][..])]);

        let progress = GroupProgress::compute(&plan, &completion);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.next_day, Some(2));
        assert_eq!(progress.percentage(), 67);
        assert!(!progress.is_finished());

        let done = toggle(&completion, 3, 2);
        let progress = GroupProgress::compute(&plan, &done);
        assert!(progress.is_finished());
        assert_eq!(progress.next_day, None);
    }

    fn toggle(completion: &CompletionSet, key: i64, day: u32) -> CompletionSet {
        crate::reconcile::toggle_completion(RoleKey(key), day, completion)
    }
}
