use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::analytics::{
    DifficultyBalanceEntry, EngagementSummary, SkillHeatmapEntry, SkillSummaryEntry,
    StudentAnalytics,
};
use crate::models::game::GameDefinition;
use crate::models::path::{LearningPathReport, LearningPathWeek, Recommendation, SkillGap};
use crate::models::progress::LearnerProgress;
use crate::models::result::GameResult;

pub mod analytics_service;
pub mod gap_service;
pub mod grading_service;
pub mod learning_path_service;
pub mod progress_service;
pub mod recommendation_service;
pub mod scoring;

/// Stateless front door over the individual services. Callers that only need
/// one operation can use the service functions directly; the engine exists so
/// that a single configured value can be threaded through a whole request.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    config: EngineConfig,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and normalize a raw game document.
    pub fn load_game(&self, raw: &Value) -> Result<GameDefinition, EngineError> {
        grading_service::load_game(raw)
    }

    /// Load a raw game document and grade a submission against it in one
    /// step.
    pub fn process_submission(
        &self,
        raw: &Value,
        answers: &[Value],
        time_spent: u32,
    ) -> Result<(GameDefinition, GameResult), EngineError> {
        let game = grading_service::load_game(raw)?;
        let result = grading_service::process_result(&game, answers, time_spent);
        Ok((game, result))
    }

    /// Grade a submission against an already-loaded game.
    pub fn process_result(
        &self,
        game: &GameDefinition,
        answers: &[Value],
        time_spent: u32,
    ) -> GameResult {
        grading_service::process_result(game, answers, time_spent)
    }

    /// Fold a graded result into the learner's progression state.
    pub fn apply_result(
        &self,
        progress: &mut LearnerProgress,
        game: &GameDefinition,
        result: &GameResult,
    ) {
        progress_service::apply_result(progress, game, result);
    }

    pub fn analyze_skill_gaps(&self, progress: &LearnerProgress) -> Vec<SkillGap> {
        gap_service::analyze_skill_gaps(progress, &self.config)
    }

    pub fn recommend_games(
        &self,
        progress: &LearnerProgress,
        catalog: &[GameDefinition],
        gaps: &[SkillGap],
    ) -> Vec<Recommendation> {
        recommendation_service::recommend_games(progress, catalog, gaps, &self.config)
    }

    pub fn generate_learning_path(
        &self,
        recommendations: &[Recommendation],
        gaps: &[SkillGap],
    ) -> Vec<LearningPathWeek> {
        learning_path_service::generate_learning_path(recommendations, gaps, &self.config)
    }

    /// Full planning pipeline: gaps, recommendations and the weekly path.
    pub fn learning_path_report(
        &self,
        progress: &LearnerProgress,
        catalog: &[GameDefinition],
    ) -> LearningPathReport {
        learning_path_service::build_report(progress, catalog, &self.config)
    }

    pub fn skill_heatmap(&self, progress: &LearnerProgress) -> Vec<SkillHeatmapEntry> {
        analytics_service::skill_heatmap(progress)
    }

    pub fn student_analytics(
        &self,
        progress: &LearnerProgress,
        now: DateTime<Utc>,
    ) -> StudentAnalytics {
        analytics_service::student_analytics(progress, now)
    }

    pub fn skill_summary(&self, progress: &LearnerProgress) -> Vec<SkillSummaryEntry> {
        analytics_service::skill_summary(progress)
    }

    pub fn engagement_summary(
        &self,
        cohort: &[LearnerProgress],
        now: DateTime<Utc>,
    ) -> EngagementSummary {
        analytics_service::engagement_summary(cohort, now)
    }

    pub fn difficulty_balance(&self, cohort: &[LearnerProgress]) -> Vec<DifficultyBalanceEntry> {
        analytics_service::difficulty_balance(cohort)
    }
}
