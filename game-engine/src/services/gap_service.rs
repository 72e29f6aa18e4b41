//! Derives weighted skill gaps from current learner statistics.

use crate::config::EngineConfig;
use crate::models::path::SkillGap;
use crate::models::progress::LearnerProgress;

/// Accuracy deficit weight in the priority formula.
const PRIORITY_ACCURACY_WEIGHT: f64 = 0.6;
/// Per-missing-attempt weight in the priority formula.
const PRIORITY_ATTEMPTS_WEIGHT: f64 = 4.0;

/// Emit a gap for every skill below the competence bar (accuracy under the
/// target, or too few attempts), ranked by priority descending.
///
/// The gap magnitude adds the accuracy-point deficit to the attempt-count
/// deficit on a shared numeric scale; both formulas are part of the shared
/// proficiency contract and are not rescaled. Ties keep the skill map's
/// iteration order (the sort is stable).
pub fn analyze_skill_gaps(progress: &LearnerProgress, cfg: &EngineConfig) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = progress
        .skills
        .iter()
        .filter(|(_, state)| {
            state.accuracy < cfg.target_accuracy || state.attempts < cfg.target_attempts
        })
        .map(|(skill, state)| {
            let accuracy_deficit = (cfg.target_accuracy - state.accuracy).max(0.0);
            let attempts_deficit = cfg.target_attempts.saturating_sub(state.attempts);

            SkillGap {
                skill: skill.clone(),
                current_accuracy: state.accuracy,
                current_attempts: state.attempts,
                gap: accuracy_deficit + f64::from(attempts_deficit),
                priority: (100.0 - state.accuracy) * PRIORITY_ACCURACY_WEIGHT
                    + f64::from(attempts_deficit) * PRIORITY_ATTEMPTS_WEIGHT,
            }
        })
        .collect();

    gaps.sort_by(|a, b| b.priority.total_cmp(&a.priority));

    tracing::debug!(
        "Skill gap analysis: {} of {} skills below target",
        gaps.len(),
        progress.skills.len()
    );

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::progress::SkillState;

    fn progress_with(skills: &[(&str, f64, u32)]) -> LearnerProgress {
        let mut progress = LearnerProgress::new();
        progress.skills.clear();
        for (skill, accuracy, attempts) in skills {
            progress.skills.insert(
                skill.to_string(),
                SkillState {
                    xp: 0,
                    accuracy: *accuracy,
                    attempts: *attempts,
                },
            );
        }
        progress
    }

    #[test]
    fn competent_skills_produce_no_gap() {
        let progress = progress_with(&[("DSA", 85.0, 15)]);
        assert!(analyze_skill_gaps(&progress, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn either_deficit_triggers_a_gap() {
        let progress = progress_with(&[("Low", 40.0, 20), ("Thin", 90.0, 3)]);
        let gaps = analyze_skill_gaps(&progress, &EngineConfig::default());
        assert_eq!(gaps.len(), 2);
    }

    #[test]
    fn magnitude_adds_both_deficits_unscaled() {
        let progress = progress_with(&[("DSA", 40.0, 2)]);
        let gaps = analyze_skill_gaps(&progress, &EngineConfig::default());
        assert_eq!(gaps[0].gap, 30.0 + 8.0);
        assert_eq!(gaps[0].priority, 60.0 * 0.6 + 8.0 * 4.0); // 68
    }

    #[test]
    fn low_accuracy_few_attempts_outranks_moderate_skill() {
        let progress = progress_with(&[("Moderate", 65.0, 12), ("Weak", 40.0, 2)]);
        let gaps = analyze_skill_gaps(&progress, &EngineConfig::default());
        // Weak: (100-40)*0.6 + 8*4 = 68; Moderate: (100-65)*0.6 = 21
        assert_eq!(gaps[0].skill, "Weak");
        assert_eq!(gaps[1].skill, "Moderate");
    }

    #[test]
    fn ties_keep_skill_map_order() {
        let progress = progress_with(&[("Alpha", 0.0, 0), ("Beta", 0.0, 0)]);
        let gaps = analyze_skill_gaps(&progress, &EngineConfig::default());
        assert_eq!(gaps[0].priority, gaps[1].priority);
        assert_eq!(gaps[0].skill, "Alpha");
        assert_eq!(gaps[1].skill, "Beta");
    }

    #[test]
    fn fresh_learner_gaps_cover_every_default_skill() {
        let progress = LearnerProgress::new();
        let gaps = analyze_skill_gaps(&progress, &EngineConfig::default());
        assert_eq!(gaps.len(), progress.skills.len());
        for gap in &gaps {
            assert_eq!(gap.gap, 80.0); // 70 accuracy points + 10 attempts
            assert_eq!(gap.priority, 100.0); // 100*0.6 + 10*4
        }
    }
}
