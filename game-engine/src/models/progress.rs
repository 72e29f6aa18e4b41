use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Difficulty, GameType};
use crate::config::DEFAULT_SKILLS;

/// Running per-skill statistics. Created lazily with zeros the first time a
/// skill is touched; `xp` and `attempts` only ever grow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillState {
    pub xp: u32,
    /// Running weighted mean of per-play accuracy, 0..=100
    pub accuracy: f64,
    pub attempts: u32,
}

/// One completed game in the append-only history log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameHistoryEntry {
    pub id: String,
    pub game_id: String,
    pub game_type: GameType,
    pub score: u32,
    pub accuracy: u32,
    pub time_spent: u32,
    pub difficulty: Difficulty,
    pub completed_at: DateTime<Utc>,
    pub skills_tagged: Vec<String>,
}

/// A learner's long-lived progression state.
///
/// Owned exclusively by the learner and mutated only by the proficiency
/// tracker. The caller is responsible for serializing concurrent
/// `apply_result` calls per learner; the engine performs no locking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProgress {
    pub xp: u64,
    pub level: u32,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_date: Option<DateTime<Utc>>,
    /// Ordered map so gap analysis iterates skills deterministically
    #[serde(default)]
    pub skills: BTreeMap<String, SkillState>,
    #[serde(default)]
    pub employability_score: u32,
    #[serde(default)]
    pub game_history: Vec<GameHistoryEntry>,
}

impl LearnerProgress {
    /// Fresh learner with the default skill keys zeroed out. Starting with
    /// the keys present (rather than an empty map) is what makes a brand-new
    /// learner's gap analysis cover every default skill.
    pub fn new() -> Self {
        let skills = DEFAULT_SKILLS
            .iter()
            .map(|s| (s.to_string(), SkillState::default()))
            .collect();

        Self {
            xp: 0,
            level: 1,
            badges: Vec::new(),
            streak: 0,
            last_active_date: None,
            skills,
            employability_score: 0,
            game_history: Vec::new(),
        }
    }
}

impl Default for LearnerProgress {
    fn default() -> Self {
        Self::new()
    }
}
