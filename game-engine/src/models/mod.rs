use serde::{Deserialize, Serialize};

pub mod analytics;
pub mod game;
pub mod path;
pub mod progress;
pub mod result;

pub use game::{GameDefinition, Item, ItemKind, TestCase};
pub use path::{LearningPathReport, LearningPathWeek, PlannedGame, Recommendation, SkillGap};
pub use progress::{GameHistoryEntry, LearnerProgress, SkillState};
pub use result::{CodeTestReport, GameResult, ItemOutcome, TestCaseOutcome};

/// Supported game variants. Each type has its own item evaluation strategy
/// and default XP / point values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Quiz,
    Coding,
    Simulation,
}

impl GameType {
    pub fn as_str(&self) -> &str {
        match self {
            GameType::Quiz => "quiz",
            GameType::Coding => "coding",
            GameType::Simulation => "simulation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quiz" => Some(GameType::Quiz),
            "coding" => Some(GameType::Coding),
            "simulation" => Some(GameType::Simulation),
            _ => None,
        }
    }

    /// Base XP awarded for a perfect, unbonused play when the game record
    /// does not set its own reward.
    pub fn default_xp_reward(&self) -> u32 {
        match self {
            GameType::Quiz => 10,
            GameType::Coding => 15,
            GameType::Simulation => 12,
        }
    }

    /// Per-item points when the item does not set its own.
    pub fn default_points(&self) -> f64 {
        match self {
            GameType::Quiz => 1.0,
            GameType::Coding => 5.0,
            GameType::Simulation => 3.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}
