//! Ranks and deduplicates catalog games against a learner's skill gaps.

use std::collections::{HashMap, HashSet};

use crate::config::EngineConfig;
use crate::metrics::RECOMMENDATIONS_GENERATED_TOTAL;
use crate::models::game::GameDefinition;
use crate::models::path::{Recommendation, SkillGap};
use crate::models::progress::LearnerProgress;
use crate::models::Difficulty;

const BASE_RELEVANCE: f64 = 100.0;
const ADVANCED_TOO_EARLY_PENALTY: f64 = 30.0;
const BEGINNER_TOO_LATE_PENALTY: f64 = 20.0;
const ADVANCED_MIN_LEVEL: u32 = 5;
const BEGINNER_MAX_LEVEL: u32 = 10;

/// Build the merged recommendation list: gap-driven picks first, then a few
/// advanced games for skills the learner is already strong in, deduplicated
/// by game id and capped.
pub fn recommend_games(
    progress: &LearnerProgress,
    catalog: &[GameDefinition],
    gaps: &[SkillGap],
    cfg: &EngineConfig,
) -> Vec<Recommendation> {
    let played: HashSet<&str> = progress
        .game_history
        .iter()
        .map(|entry| entry.game_id.as_str())
        .collect();

    // Later insertions for the same game id overwrite the earlier entry's
    // value while keeping its position, so the final stable sort breaks ties
    // by first appearance.
    let mut merged: Vec<Recommendation> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut insert = |rec: Recommendation| match positions.get(&rec.game_id) {
        Some(&i) => merged[i] = rec,
        None => {
            positions.insert(rec.game_id.clone(), merged.len());
            merged.push(rec);
        }
    };

    for gap in gaps {
        let mut candidates: Vec<Recommendation> = catalog
            .iter()
            .filter(|game| {
                game.is_active
                    && !played.contains(game.game_id.as_str())
                    && game.skills_tagged.iter().any(|s| s == &gap.skill)
            })
            .map(|game| to_recommendation(game, relevance_score(progress.level, game, gap)))
            .collect();

        candidates.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        candidates.truncate(cfg.gap_games_per_skill);

        for candidate in candidates {
            insert(candidate);
        }
    }

    // Variety injection: keep strong skills warm with advanced games at a
    // flat relevance, independent of the gap ranking
    let strong_skills = progress.skills.iter().filter(|(_, state)| {
        state.accuracy >= cfg.target_accuracy && state.attempts >= cfg.target_attempts
    });

    for (skill, _) in strong_skills {
        let advanced = catalog
            .iter()
            .filter(|game| {
                game.is_active
                    && game.difficulty == Difficulty::Advanced
                    && !played.contains(game.game_id.as_str())
                    && game.skills_tagged.iter().any(|s| s == skill)
            })
            .take(cfg.variety_games_per_skill);

        for game in advanced {
            insert(to_recommendation(game, cfg.variety_relevance));
        }
    }

    merged.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    merged.truncate(cfg.max_recommendations);

    RECOMMENDATIONS_GENERATED_TOTAL.inc_by(merged.len() as u64);

    tracing::debug!(
        "Recommended {} games from a catalog of {} ({} gaps, {} already played)",
        merged.len(),
        catalog.len(),
        gaps.len(),
        played.len()
    );

    merged
}

/// Raw relevance arithmetic: base 100, difficulty/level mismatch penalties,
/// plus the gap priority when the game targets the gap skill. There is no
/// floor, so a badly matched game can score negative.
fn relevance_score(level: u32, game: &GameDefinition, gap: &SkillGap) -> f64 {
    let mut score = BASE_RELEVANCE;

    if game.difficulty == Difficulty::Advanced && level < ADVANCED_MIN_LEVEL {
        score -= ADVANCED_TOO_EARLY_PENALTY;
    }
    if game.difficulty == Difficulty::Beginner && level > BEGINNER_MAX_LEVEL {
        score -= BEGINNER_TOO_LATE_PENALTY;
    }

    if game.skills_tagged.iter().any(|s| s == &gap.skill) {
        score += gap.priority;
    }

    score
}

fn to_recommendation(game: &GameDefinition, relevance_score: f64) -> Recommendation {
    Recommendation {
        game_id: game.game_id.clone(),
        title: game.title.clone(),
        game_type: game.game_type,
        difficulty: game.difficulty,
        skills_tagged: game.skills_tagged.clone(),
        relevance_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::progress::SkillState;
    use crate::models::GameType;

    fn game(id: &str, skills: &[&str], difficulty: Difficulty) -> GameDefinition {
        GameDefinition {
            game_id: id.to_string(),
            title: Some(id.to_string()),
            description: None,
            game_type: GameType::Quiz,
            difficulty,
            skills_tagged: skills.iter().map(|s| s.to_string()).collect(),
            xp_reward: 10,
            time_limit: None,
            is_active: true,
            items: Vec::new(),
        }
    }

    fn gap(skill: &str, priority: f64) -> SkillGap {
        SkillGap {
            skill: skill.to_string(),
            current_accuracy: 0.0,
            current_attempts: 0,
            gap: 0.0,
            priority,
        }
    }

    #[test]
    fn gap_tagged_games_get_priority_boost() {
        let progress = LearnerProgress::new();
        let catalog = [game("a", &["DSA"], Difficulty::Beginner)];
        let recs = recommend_games(
            &progress,
            &catalog,
            &[gap("DSA", 68.0)],
            &EngineConfig::default(),
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].relevance_score, 168.0);
    }

    #[test]
    fn difficulty_mismatch_penalties_apply() {
        let mut progress = LearnerProgress::new();
        progress.level = 1;
        let advanced = [game("adv", &["DSA"], Difficulty::Advanced)];
        let recs = recommend_games(
            &progress,
            &advanced,
            &[gap("DSA", 0.0)],
            &EngineConfig::default(),
        );
        assert_eq!(recs[0].relevance_score, 70.0); // 100 - 30 early-advanced

        progress.level = 11;
        let beginner = [game("beg", &["DSA"], Difficulty::Beginner)];
        let recs = recommend_games(
            &progress,
            &beginner,
            &[gap("DSA", 0.0)],
            &EngineConfig::default(),
        );
        assert_eq!(recs[0].relevance_score, 80.0); // 100 - 20 late-beginner
    }

    #[test]
    fn played_and_inactive_games_are_skipped() {
        let mut progress = LearnerProgress::new();
        let mut inactive = game("off", &["DSA"], Difficulty::Beginner);
        inactive.is_active = false;
        let catalog = [game("seen", &["DSA"], Difficulty::Beginner), inactive];

        // Mark "seen" as played via history
        let def = game("seen", &["DSA"], Difficulty::Beginner);
        let result = crate::models::result::GameResult {
            score: 100,
            accuracy: 100,
            correct_count: 1,
            total_items: 1,
            xp_earned: 10,
            time_spent: 10,
            breakdown: Vec::new(),
            feedback: String::new(),
        };
        crate::services::progress_service::apply_result(&mut progress, &def, &result);

        let recs = recommend_games(
            &progress,
            &catalog,
            &[gap("DSA", 10.0)],
            &EngineConfig::default(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn top_three_per_gap_before_merging() {
        let progress = LearnerProgress::new();
        let catalog: Vec<GameDefinition> = (0..5)
            .map(|i| game(&format!("g{}", i), &["DSA"], Difficulty::Beginner))
            .collect();
        let recs = recommend_games(
            &progress,
            &catalog,
            &[gap("DSA", 50.0)],
            &EngineConfig::default(),
        );
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn duplicate_game_across_gaps_keeps_later_score() {
        let progress = LearnerProgress::new();
        // One game tagged with both gap skills: surfaced by both passes with
        // different relevance, must appear once with the second pass's score
        let catalog = [game("dual", &["DSA", "ML"], Difficulty::Beginner)];
        let recs = recommend_games(
            &progress,
            &catalog,
            &[gap("DSA", 80.0), gap("ML", 40.0)],
            &EngineConfig::default(),
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].relevance_score, 140.0); // later (ML) pass wins
    }

    #[test]
    fn strong_skills_inject_flat_relevance_variety() {
        let mut progress = LearnerProgress::new();
        progress.skills.insert(
            "DSA".to_string(),
            SkillState {
                xp: 0,
                accuracy: 85.0,
                attempts: 20,
            },
        );
        let catalog = [
            game("adv1", &["DSA"], Difficulty::Advanced),
            game("adv2", &["DSA"], Difficulty::Advanced),
            game("adv3", &["DSA"], Difficulty::Advanced),
            game("easy", &["DSA"], Difficulty::Beginner),
        ];
        // No gaps for DSA itself: only the variety pass contributes
        let recs = recommend_games(&progress, &catalog, &[], &EngineConfig::default());
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.relevance_score == 50.0));
        assert!(recs.iter().all(|r| r.difficulty == Difficulty::Advanced));
    }

    #[test]
    fn variety_pass_skips_inactive_games() {
        let mut progress = LearnerProgress::new();
        progress.skills.insert(
            "DSA".to_string(),
            SkillState {
                xp: 0,
                accuracy: 90.0,
                attempts: 20,
            },
        );
        let mut retired = game("adv-off", &["DSA"], Difficulty::Advanced);
        retired.is_active = false;
        let catalog = [retired, game("adv-on", &["DSA"], Difficulty::Advanced)];

        let recs = recommend_games(&progress, &catalog, &[], &EngineConfig::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].game_id, "adv-on");
    }

    #[test]
    fn merged_list_is_capped_at_ten() {
        let progress = LearnerProgress::new();
        let skills = ["DSA", "ML", "DBMS", "Aptitude"];
        let catalog: Vec<GameDefinition> = skills
            .iter()
            .flat_map(|skill| {
                (0..3).map(move |i| {
                    game(&format!("{}{}", skill, i), &[skill], Difficulty::Beginner)
                })
            })
            .collect();
        let gaps: Vec<SkillGap> = skills.iter().map(|s| gap(s, 100.0)).collect();
        // Four gaps x three candidates = twelve unique games before the cap
        let recs = recommend_games(&progress, &catalog, &gaps, &EngineConfig::default());
        assert_eq!(recs.len(), 10);
    }

    #[test]
    fn sorted_by_relevance_descending() {
        let progress = LearnerProgress::new();
        let catalog = [
            game("low", &["ML"], Difficulty::Beginner),
            game("high", &["DSA"], Difficulty::Beginner),
        ];
        let recs = recommend_games(
            &progress,
            &catalog,
            &[gap("ML", 10.0), gap("DSA", 90.0)],
            &EngineConfig::default(),
        );
        assert_eq!(recs[0].game_id, "high");
        assert_eq!(recs[1].game_id, "low");
    }
}
