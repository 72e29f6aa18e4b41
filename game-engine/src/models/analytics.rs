use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::progress::GameHistoryEntry;
use super::Difficulty;

/// One row of the per-skill heatmap shown on the learner dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillHeatmapEntry {
    pub skill: String,
    pub xp: u32,
    pub accuracy: f64,
    pub attempts: u32,
    pub proficiency: u32,
}

/// Average score for one calendar day of play.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTrendPoint {
    pub date: NaiveDate,
    pub average_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentAnalytics {
    pub skill_heatmap: Vec<SkillHeatmapEntry>,
    /// Daily averages over the trailing week, ascending by date
    pub score_trends: Vec<ScoreTrendPoint>,
    pub total_games_played: usize,
    pub recent_games: Vec<GameHistoryEntry>,
}

/// Resume-ready skill row; only skills that were actually practiced appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummaryEntry {
    pub skill: String,
    pub proficiency: u32,
    pub accuracy: u32,
    pub games_completed: u32,
}

/// Cohort-level engagement numbers for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    pub total_learners: usize,
    /// Learners active within the trailing week
    pub active_learners: usize,
    pub total_games_played: usize,
    pub average_xp: u64,
    pub average_employability_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyBalanceEntry {
    pub difficulty: Difficulty,
    pub games_played: usize,
    pub average_accuracy: f64,
}
