//! Plain-text rendering of command results.
//!
//! Every function returns a `String` so output can be tested without a
//! terminal.

use std::fmt::Write;

use careerpilot_core::models::{SavedRoadmapEntry, TeachTopicResponse, User};
use careerpilot_core::planner::{DayToggle, DeleteOutcome, Roster};
use careerpilot_core::progress::{GroupProgress, ProgressStats};
use careerpilot_core::utils::{format_date, progress_bar, truncate_string};

/// Width of progress bars in characters
const BAR_WIDTH: usize = 20;

/// Maximum width of a topic column before truncation
const MAX_TOPIC_WIDTH: usize = 60;

pub fn render_user(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", user.display_name(), user.username);
    let _ = writeln!(out, "  Email: {}", user.email);
    if let Some(ref created) = user.created_at {
        let _ = writeln!(out, "  Member since: {}", format_date(created));
    }
    out
}

pub fn render_roadmap_list(roadmaps: &[SavedRoadmapEntry]) -> String {
    if roadmaps.is_empty() {
        return "No saved roadmaps. Generate one with `careerpilot roadmap generate <ROLE> <DAYS>`.\n"
            .to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:<32}  {:>5}  Generated", "Key", "Role", "Days");
    for r in roadmaps {
        let _ = writeln!(
            out,
            "{:>6}  {:<32}  {:>5}  {}",
            r.role_key,
            truncate_string(&r.role_name, 32),
            r.duration_days,
            r.generated_display()
        );
    }
    out
}

pub fn render_roadmap(entry: &SavedRoadmapEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} - {} days (role key {})",
        entry.role_name, entry.duration_days, entry.role_key
    );
    let _ = writeln!(out, "Generated {}", entry.generated_display());
    let _ = writeln!(out);

    let Some(doc) = entry.parsed() else {
        let _ = writeln!(out, "{}", entry.roadmap_text.trim());
        return out;
    };

    if !doc.required_skills.is_empty() {
        let _ = writeln!(out, "Required skills:");
        for skill in &doc.required_skills {
            let _ = writeln!(out, "  - {}", skill);
        }
        let _ = writeln!(out);
    }

    if !doc.learning_path.is_empty() {
        let _ = writeln!(out, "Learning path ({} weeks):", doc.total_weeks());
        for (i, phase) in doc.learning_path.iter().enumerate() {
            match phase.duration_weeks {
                Some(weeks) => {
                    let _ = writeln!(out, "  {}. {} ({} weeks)", i + 1, phase.phase, weeks);
                }
                None => {
                    let _ = writeln!(out, "  {}. {}", i + 1, phase.phase);
                }
            }
            for topic in &phase.topics {
                let _ = writeln!(out, "       - {}", topic);
            }
        }
        let _ = writeln!(out);
    }

    if !doc.recommended_projects.is_empty() {
        let _ = writeln!(out, "Recommended projects:");
        for project in &doc.recommended_projects {
            let _ = writeln!(out, "  - {}", project);
        }
    }
    out
}

pub fn render_roster(roster: &Roster, show_days: bool) -> String {
    if roster.groups.is_empty() {
        return "No daily plans yet. Generate one with `careerpilot plan generate <ROLE_KEY>`.\n"
            .to_string();
    }

    let mut out = String::new();
    for group in &roster.groups {
        let progress = GroupProgress::compute(group, &roster.completion);
        let _ = writeln!(
            out,
            "[{}] {}  {} {}/{} days ({}%)",
            group.role_key,
            group.display_name(),
            progress_bar(progress.completed, progress.total, BAR_WIDTH),
            progress.completed,
            progress.total,
            progress.percentage()
        );

        if show_days {
            for day in &group.items {
                let mark = if roster.completion.is_completed(group.role_key, day.day_number) {
                    "x"
                } else {
                    " "
                };
                let _ = writeln!(
                    out,
                    "    [{}] Day {:>3}  {:<width$}  {}h",
                    mark,
                    day.day_number,
                    truncate_string(&day.topic, MAX_TOPIC_WIDTH),
                    day.estimated_hours,
                    width = MAX_TOPIC_WIDTH
                );
            }
        } else if let Some(next) = progress.next_day.and_then(|d| group.day(d)) {
            let _ = writeln!(
                out,
                "    Next: Day {} - {}",
                next.day_number,
                truncate_string(&next.topic, MAX_TOPIC_WIDTH)
            );
        } else if progress.is_finished() {
            let _ = writeln!(out, "    Complete!");
        }
    }

    if roster.purged {
        let _ = writeln!(out, "\nRemoved saved progress for plans that no longer exist.");
    }
    out
}

pub fn render_toggle(toggle: &DayToggle) -> String {
    let state = if toggle.completed { "done" } else { "not done" };
    format!(
        "Marked day {} {} for role {} ({}/{} days complete)\n",
        toggle.day,
        state,
        toggle.role_key,
        toggle.completed_days,
        toggle.total_days
    )
}

pub fn render_delete(outcome: &DeleteOutcome) -> String {
    let mut out = format!("Deleted local data for role {}.\n", outcome.role_key);
    if let Some(ref err) = outcome.remote_error {
        let _ = writeln!(
            out,
            "Warning: the server reported an error ({}). It will be rechecked on the next sync.",
            err
        );
    }
    out
}

pub fn render_stats(stats: &ProgressStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Roadmaps:        {}", stats.total_roadmaps);
    let _ = writeln!(
        out,
        "Days completed:  {} of {} ({}%)",
        stats.completed_days, stats.total_days, stats.completion_percentage
    );
    let _ = writeln!(
        out,
        "Progress:        {}",
        progress_bar(stats.completed_days, stats.total_days, BAR_WIDTH)
    );
    let _ = writeln!(out, "Today's tasks:   {}", stats.today_tasks);
    let _ = writeln!(out, "Streak:          {} days", stats.streak);
    out
}

pub fn render_topic(topic: &TeachTopicResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", topic.topic);
    let _ = writeln!(out, "{}\n", topic.explanation.trim());

    if !topic.examples.is_empty() {
        let _ = writeln!(out, "Examples:");
        for example in &topic.examples {
            let _ = writeln!(out, "  - {}", example);
        }
        let _ = writeln!(out);
    }

    if !topic.resources.is_empty() {
        let _ = writeln!(out, "Resources:");
        for (label, url) in topic.resource_links() {
            match (label, url) {
                ("", Some(url)) => {
                    let _ = writeln!(out, "  - {}", url);
                }
                (label, Some(url)) => {
                    let _ = writeln!(out, "  - {}\n      {}", label, url);
                }
                (label, None) => {
                    let _ = writeln!(out, "  - {}", label);
                }
            }
        }
    }
    out
}
