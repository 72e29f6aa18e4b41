//! Folds graded results into a learner's long-lived progression state.
//!
//! The caller owns read-modify-write atomicity: two concurrent submissions
//! for the same learner must be serialized outside the engine (single-writer
//! queue or optimistic retry keyed by learner id). Everything here is a
//! synchronous in-place mutation of the owned `LearnerProgress`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::skill_weight;
use crate::metrics::{LEVEL_UPS_TOTAL, RESULTS_APPLIED_TOTAL};
use crate::models::game::GameDefinition;
use crate::models::progress::{GameHistoryEntry, LearnerProgress, SkillState};
use crate::models::result::GameResult;
use crate::utils::time::{is_previous_calendar_day, same_calendar_day};

/// Accuracy is blended with attempt volume 60/40 for the display proficiency.
const PROFICIENCY_ACCURACY_WEIGHT: f64 = 0.6;
const PROFICIENCY_ATTEMPTS_WEIGHT: f64 = 0.4;
/// Attempts saturate the proficiency volume term at this count.
const PROFICIENCY_ATTEMPTS_CAP: f64 = 20.0;
/// Attempts saturate the employability volume term at this count.
const EMPLOYABILITY_ATTEMPTS_CAP: f64 = 50.0;

/// Fold one graded result into the learner's state, stamped with the current
/// wall clock.
pub fn apply_result(progress: &mut LearnerProgress, game: &GameDefinition, result: &GameResult) {
    apply_result_at(progress, game, result, Utc::now());
}

/// Same as [`apply_result`] with an explicit "now" for deterministic callers.
///
/// Updates, in order: per-skill running stats, total XP, the history log,
/// the calendar-day streak, the derived level, and the employability score.
/// `attempts` and `xp` never decrease.
pub fn apply_result_at(
    progress: &mut LearnerProgress,
    game: &GameDefinition,
    result: &GameResult,
    now: DateTime<Utc>,
) {
    for skill in &game.skills_tagged {
        let state = progress.skills.entry(skill.clone()).or_default();
        update_skill_state(state, result);
    }

    progress.xp += u64::from(result.xp_earned);

    progress.game_history.push(GameHistoryEntry {
        id: Uuid::new_v4().to_string(),
        game_id: game.game_id.clone(),
        game_type: game.game_type,
        score: result.score,
        accuracy: result.accuracy,
        time_spent: result.time_spent,
        difficulty: game.difficulty,
        completed_at: now,
        skills_tagged: game.skills_tagged.clone(),
    });

    update_streak(progress, now);

    let previous_level = progress.level;
    progress.level = level_for_xp(progress.xp);
    if progress.level > previous_level {
        LEVEL_UPS_TOTAL.inc();
        tracing::info!(
            "Learner leveled up: {} -> {} (xp={})",
            previous_level,
            progress.level,
            progress.xp
        );
    }

    progress.employability_score = employability_score(progress);

    RESULTS_APPLIED_TOTAL.inc();

    tracing::debug!(
        "Applied result: game={}, xp_total={}, level={}, streak={}, employability={}",
        game.game_id,
        progress.xp,
        progress.level,
        progress.streak,
        progress.employability_score
    );
}

/// Incremental running mean: the old mean is weighted by the prior attempt
/// count, then the new play's accuracy is averaged in.
fn update_skill_state(state: &mut SkillState, result: &GameResult) {
    let prior_attempts = f64::from(state.attempts);
    state.attempts += 1;
    state.xp += result.xp_earned;
    state.accuracy =
        (state.accuracy * prior_attempts + f64::from(result.accuracy)) / f64::from(state.attempts);
}

/// Calendar-day streak transition: same day leaves the streak alone, the
/// previous day extends it, any other gap resets it to 1.
fn update_streak(progress: &mut LearnerProgress, now: DateTime<Utc>) {
    progress.streak = match progress.last_active_date {
        Some(last) if same_calendar_day(last, now) => progress.streak,
        Some(last) if is_previous_calendar_day(last, now) => progress.streak + 1,
        _ => 1,
    };
    progress.last_active_date = Some(now);
}

/// Level curve: `floor(sqrt(xp / 100)) + 1`.
pub fn level_for_xp(xp: u64) -> u32 {
    ((xp as f64 / 100.0).sqrt().floor() as u32) + 1
}

/// Display proficiency for one skill, 0..=100: 60% running accuracy, 40%
/// attempt volume capped at 20 plays. Distinct from raw accuracy.
pub fn proficiency(state: &SkillState) -> u32 {
    if state.attempts == 0 {
        return 0;
    }
    let accuracy_score = state.accuracy / 100.0;
    let attempts_score = (f64::from(state.attempts) / PROFICIENCY_ATTEMPTS_CAP).min(1.0);
    ((accuracy_score * PROFICIENCY_ACCURACY_WEIGHT + attempts_score * PROFICIENCY_ATTEMPTS_WEIGHT)
        * 100.0)
        .round() as u32
}

/// Weighted composite of practiced skills plus badge and level bonuses,
/// clamped to 0..=100.
pub fn employability_score(progress: &LearnerProgress) -> u32 {
    let mut score = 0.0;

    for (skill, state) in &progress.skills {
        if state.attempts == 0 || state.accuracy == 0.0 {
            continue;
        }
        let volume = f64::from(state.attempts.min(50)) / EMPLOYABILITY_ATTEMPTS_CAP;
        let skill_score = (state.accuracy / 100.0) * volume * 100.0;
        score += skill_score * skill_weight(skill);
    }

    score += progress.badges.len() as f64 * 5.0;
    score += f64::from(progress.level) * 2.0;

    (score.round() as i64).clamp(0, 100) as u32
}
