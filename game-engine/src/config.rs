use serde::Deserialize;

/// Skill keys every new learner starts with. Matches the profile schema used
/// by the persistence layer; unknown keys are still accepted everywhere and
/// weighted at [`DEFAULT_SKILL_WEIGHT`].
pub const DEFAULT_SKILLS: [&str; 6] = ["DSA", "ML", "DBMS", "Aptitude", "Frontend", "Backend"];

/// Weight applied to skills without an explicit entry in the weight table.
pub const DEFAULT_SKILL_WEIGHT: f64 = 0.10;

/// Employability weight for a skill key.
pub fn skill_weight(skill: &str) -> f64 {
    match skill {
        "DSA" => 0.25,
        "ML" => 0.20,
        "DBMS" => 0.15,
        "Aptitude" => 0.15,
        "Frontend" => 0.15,
        "Backend" => 0.10,
        _ => DEFAULT_SKILL_WEIGHT,
    }
}

/// Tunable knobs for recommendation and learning-path generation.
///
/// The grading, XP, level and employability formulas are intentionally not
/// configurable: every component of the pipeline has to agree on the same
/// definitions of accuracy and proficiency. Defaults reproduce the canonical
/// values; the embedding service can deserialize overrides from its own
/// configuration layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Games scheduled per learning-path week
    pub games_per_week: usize,
    /// Hard cap on the merged recommendation list
    pub max_recommendations: usize,
    /// Candidates kept per skill gap before merging
    pub gap_games_per_skill: usize,
    /// Advanced games injected per already-strong skill
    pub variety_games_per_skill: usize,
    /// Flat relevance assigned to variety picks
    pub variety_relevance: f64,
    /// Accuracy bar (percent) below which a skill counts as a gap
    pub target_accuracy: f64,
    /// Attempt count below which a skill counts as a gap
    pub target_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            games_per_week: 5,
            max_recommendations: 10,
            gap_games_per_skill: 3,
            variety_games_per_skill: 2,
            variety_relevance: 50.0,
            target_accuracy: 70.0,
            target_attempts: 10,
        }
    }
}
