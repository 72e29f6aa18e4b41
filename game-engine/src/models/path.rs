use serde::{Deserialize, Serialize};

use super::{Difficulty, GameType};

/// A skill below the competence bar, ranked for remediation.
/// Derived on demand from [`super::LearnerProgress`]; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub current_accuracy: f64,
    pub current_attempts: u32,
    /// Accuracy-point deficit plus attempt-count deficit, >= 0.
    /// The two terms deliberately share one numeric scale.
    pub gap: f64,
    /// Ranking weight; may exceed 100
    pub priority: f64,
}

/// A catalog game scored against a learner's gaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub game_type: GameType,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub skills_tagged: Vec<String>,
    /// Raw arithmetic, no floor: can go negative for badly-matched games
    pub relevance_score: f64,
}

/// Slimmed-down game reference scheduled into a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedGame {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub game_type: GameType,
    pub difficulty: Difficulty,
}

impl From<&Recommendation> for PlannedGame {
    fn from(rec: &Recommendation) -> Self {
        Self {
            game_id: rec.game_id.clone(),
            title: rec.title.clone(),
            game_type: rec.game_type,
            difficulty: rec.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathWeek {
    /// 1-based week number
    pub week: u32,
    /// Gap skill driving the week, or "General Practice" once gaps run out
    pub focus: String,
    pub games: Vec<PlannedGame>,
    /// Exactly three templated goals
    pub goals: Vec<String>,
}

/// Full learning-path response assembled for the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathReport {
    pub skill_gaps: Vec<SkillGap>,
    pub recommendations: Vec<Recommendation>,
    pub learning_path: Vec<LearningPathWeek>,
    pub current_level: u32,
    pub target_level: u32,
    pub estimated_weeks: u32,
}
