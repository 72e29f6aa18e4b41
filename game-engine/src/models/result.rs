use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Graded outcome of a single game submission.
///
/// `score` and `accuracy` are rounded to whole percent on the way out; the
/// XP formula uses the unrounded accuracy internally. A game with no items
/// grades to all zeros rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// Points-weighted score, 0..=100
    pub score: u32,
    /// Share of items answered correctly, 0..=100
    pub accuracy: u32,
    pub correct_count: u32,
    pub total_items: u32,
    pub xp_earned: u32,
    /// Caller-supplied, echoed back for the history log
    pub time_spent: u32,
    pub breakdown: Vec<ItemOutcome>,
    pub feedback: String,
}

/// Per-item grading detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Raw submitted value; JSON null when the slot was missing
    pub user_answer: Value,
    /// Expected answer/choice in string form (absent for coding items)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    pub is_correct: bool,
    pub points_awarded: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_results: Option<CodeTestReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Outcome of the heuristic test run for one coding item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeTestReport {
    pub passed: u32,
    pub total: u32,
    pub cases: Vec<TestCaseOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseOutcome {
    /// 1-based test case number
    pub case: u32,
    pub passed: bool,
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub expected_output: Value,
}
