use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Difficulty, GameType};

/// Normalized game definition as produced by `grading_service::load_game`.
///
/// Immutable once loaded for a submission. Serializes back to the same wire
/// shape it was loaded from, so loading its own serialization is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub game_type: GameType,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub skills_tagged: Vec<String>,
    pub xp_reward: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Kept under the `questions` wire key for compatibility with stored
    /// game records (simulation scenarios land here too after normalization).
    #[serde(rename = "questions", default)]
    pub items: Vec<Item>,
}

fn default_true() -> bool {
    true
}

/// A single scorable item within a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Question / challenge / scenario text shown to the learner
    #[serde(rename = "question", default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub points: f64,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// Per-type answer key. Correct answers are coerced to canonical string/bool
/// form at load time so evaluation is a plain comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ItemKind {
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        #[serde(default)]
        options: Vec<String>,
        correct_answer: String,
    },
    #[serde(rename_all = "camelCase")]
    TrueFalse { correct_answer: bool },
    #[serde(rename_all = "camelCase")]
    Text { correct_answer: String },
    #[serde(rename_all = "camelCase")]
    Coding {
        #[serde(default)]
        test_cases: Vec<TestCase>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expected_pattern: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Scenario {
        correct_choice: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
}

/// One test case of a coding challenge. Inputs and outputs are opaque to the
/// heuristic checker and only echoed back in the result breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub expected_output: Value,
}
