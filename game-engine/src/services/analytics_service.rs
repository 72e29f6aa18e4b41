//! Dashboard analytics derived from learner state.
//!
//! Pure aggregation over records the caller supplies; the persistence layer
//! decides which learners to load and what to do with the numbers.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::analytics::{
    DifficultyBalanceEntry, EngagementSummary, ScoreTrendPoint, SkillHeatmapEntry,
    SkillSummaryEntry, StudentAnalytics,
};
use crate::models::progress::LearnerProgress;
use crate::models::Difficulty;
use crate::services::progress_service::proficiency;

/// Window for "recent" activity, both for score trends and active-learner
/// counts.
const TREND_WINDOW_DAYS: i64 = 7;
/// Recent games echoed back on the student dashboard.
const RECENT_GAMES_SHOWN: usize = 5;

/// Per-skill heatmap rows for every skill the learner has state for.
pub fn skill_heatmap(progress: &LearnerProgress) -> Vec<SkillHeatmapEntry> {
    progress
        .skills
        .iter()
        .map(|(skill, state)| SkillHeatmapEntry {
            skill: skill.clone(),
            xp: state.xp,
            accuracy: state.accuracy,
            attempts: state.attempts,
            proficiency: proficiency(state),
        })
        .collect()
}

/// Student dashboard payload: heatmap, trailing-week score trend and the
/// latest plays.
pub fn student_analytics(progress: &LearnerProgress, now: DateTime<Utc>) -> StudentAnalytics {
    let cutoff = now - Duration::days(TREND_WINDOW_DAYS);

    let recent: Vec<_> = progress
        .game_history
        .iter()
        .filter(|entry| entry.completed_at >= cutoff)
        .collect();

    // Group by calendar day; BTreeMap keeps the trend ascending by date
    let mut daily: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
    for entry in &recent {
        let slot = daily.entry(entry.completed_at.date_naive()).or_default();
        slot.0 += u64::from(entry.score);
        slot.1 += 1;
    }

    let score_trends = daily
        .into_iter()
        .map(|(date, (total, count))| ScoreTrendPoint {
            date,
            average_score: total as f64 / count as f64,
        })
        .collect();

    let recent_games = recent
        .iter()
        .rev()
        .take(RECENT_GAMES_SHOWN)
        .rev()
        .map(|entry| (*entry).clone())
        .collect();

    StudentAnalytics {
        skill_heatmap: skill_heatmap(progress),
        score_trends,
        total_games_played: progress.game_history.len(),
        recent_games,
    }
}

/// Resume-ready summary: practiced skills only, strongest first.
pub fn skill_summary(progress: &LearnerProgress) -> Vec<SkillSummaryEntry> {
    let mut summary: Vec<SkillSummaryEntry> = progress
        .skills
        .iter()
        .filter(|(_, state)| state.attempts > 0)
        .map(|(skill, state)| SkillSummaryEntry {
            skill: skill.clone(),
            proficiency: proficiency(state),
            accuracy: state.accuracy.round() as u32,
            games_completed: state.attempts,
        })
        .collect();

    summary.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
    summary
}

/// Cohort engagement numbers. An empty cohort reports zeros rather than
/// dividing by it.
pub fn engagement_summary(cohort: &[LearnerProgress], now: DateTime<Utc>) -> EngagementSummary {
    if cohort.is_empty() {
        return EngagementSummary::default();
    }

    let cutoff = now - Duration::days(TREND_WINDOW_DAYS);
    let active_learners = cohort
        .iter()
        .filter(|p| p.last_active_date.map(|d| d >= cutoff).unwrap_or(false))
        .count();

    let total_games_played: usize = cohort.iter().map(|p| p.game_history.len()).sum();
    let total_xp: u64 = cohort.iter().map(|p| p.xp).sum();
    let total_employability: u64 = cohort
        .iter()
        .map(|p| u64::from(p.employability_score))
        .sum();
    let count = cohort.len() as f64;

    EngagementSummary {
        total_learners: cohort.len(),
        active_learners,
        total_games_played,
        average_xp: (total_xp as f64 / count).round() as u64,
        average_employability_score: (total_employability as f64 / count).round() as u32,
    }
}

/// Plays and average accuracy per difficulty across a cohort's history.
pub fn difficulty_balance(cohort: &[LearnerProgress]) -> Vec<DifficultyBalanceEntry> {
    let mut stats: BTreeMap<Difficulty, (usize, u64)> = BTreeMap::new();
    for progress in cohort {
        for entry in &progress.game_history {
            let slot = stats.entry(entry.difficulty).or_default();
            slot.0 += 1;
            slot.1 += u64::from(entry.accuracy);
        }
    }

    stats
        .into_iter()
        .map(|(difficulty, (count, total_accuracy))| DifficultyBalanceEntry {
            difficulty,
            games_played: count,
            average_accuracy: total_accuracy as f64 / count as f64,
        })
        .collect()
}
