//! Partitions ranked recommendations into a weekly study plan.

use crate::config::EngineConfig;
use crate::metrics::LEARNING_PATHS_GENERATED_TOTAL;
use crate::models::game::GameDefinition;
use crate::models::path::{
    LearningPathReport, LearningPathWeek, PlannedGame, Recommendation, SkillGap,
};
use crate::models::progress::LearnerProgress;
use crate::services::{gap_service, recommendation_service};

/// Focus label for weeks beyond the gap list.
const GENERAL_FOCUS: &str = "General Practice";
/// Levels the plan aims to gain.
const TARGET_LEVEL_DELTA: u32 = 2;

/// Slice the ranked recommendations into weeks of `games_per_week`, each
/// focused on the next-highest-priority gap (falling back to general
/// practice once gaps run out) with three templated goals.
pub fn generate_learning_path(
    recommendations: &[Recommendation],
    gaps: &[SkillGap],
    cfg: &EngineConfig,
) -> Vec<LearningPathWeek> {
    let per_week = cfg.games_per_week.max(1);
    let week_count = recommendations.len().div_ceil(per_week);

    let path: Vec<LearningPathWeek> = (1..=week_count)
        .map(|week| {
            let games: Vec<PlannedGame> = recommendations
                .iter()
                .skip((week - 1) * per_week)
                .take(per_week)
                .map(PlannedGame::from)
                .collect();

            let focus = gaps
                .get(week - 1)
                .map(|gap| gap.skill.clone())
                .unwrap_or_else(|| GENERAL_FOCUS.to_string());

            let goals = vec![
                format!("Complete {} games", games.len()),
                format!("Improve {} skills", focus),
                "Maintain daily streak".to_string(),
            ];

            LearningPathWeek {
                week: week as u32,
                focus,
                games,
                goals,
            }
        })
        .collect();

    LEARNING_PATHS_GENERATED_TOTAL.inc();

    path
}

/// Run the full pipeline for one learner: gap analysis, recommendations and
/// the weekly plan, bundled with the level targets the caller reports back.
pub fn build_report(
    progress: &LearnerProgress,
    catalog: &[GameDefinition],
    cfg: &EngineConfig,
) -> LearningPathReport {
    let skill_gaps = gap_service::analyze_skill_gaps(progress, cfg);
    let recommendations =
        recommendation_service::recommend_games(progress, catalog, &skill_gaps, cfg);
    let learning_path = generate_learning_path(&recommendations, &skill_gaps, cfg);

    let estimated_weeks = recommendations.len().div_ceil(cfg.games_per_week.max(1)) as u32;

    tracing::info!(
        "Built learning path: {} gaps, {} recommendations, {} weeks",
        skill_gaps.len(),
        recommendations.len(),
        estimated_weeks
    );

    LearningPathReport {
        skill_gaps,
        recommendations,
        learning_path,
        current_level: progress.level,
        target_level: progress.level + TARGET_LEVEL_DELTA,
        estimated_weeks,
    }
}
