//! Loads raw game records and grades submissions against them.
//!
//! A game record arrives as plain JSON from the catalog store. `load_game`
//! validates and normalizes it into a [`GameDefinition`]; `process_result`
//! grades a positional answer list against the normalized definition. Bad
//! game data is a hard error, bad *answers* never are.

use serde_json::Value;

use crate::error::EngineError;
use crate::metrics::{GAMES_PROCESSED_TOTAL, XP_AWARDED_TOTAL};
use crate::models::game::{GameDefinition, Item, ItemKind, TestCase};
use crate::models::result::{CodeTestReport, GameResult, ItemOutcome, TestCaseOutcome};
use crate::models::{Difficulty, GameType};
use crate::services::scoring;
use crate::utils::coerce::{string_form, truthy};

/// Submitted code shorter than this is rejected by the heuristic checker.
const MIN_CODE_LENGTH: usize = 10;

/// Validate and normalize a raw game record.
///
/// Fails when `gameId` is absent or `type` is not a supported variant.
/// Everything else is defaulted: difficulty to beginner, XP reward by game
/// type, items from `questions` (or `scenarios` for simulations) with
/// per-type default points. Loading the serialized form of a normalized
/// definition yields the identical definition.
pub fn load_game(raw: &Value) -> Result<GameDefinition, EngineError> {
    let game_id = match raw.get("gameId") {
        None | Some(Value::Null) => return Err(EngineError::MissingGameId),
        Some(v) => {
            let id = string_form(v);
            if id.is_empty() {
                return Err(EngineError::MissingGameId);
            }
            id
        }
    };

    let game_type = match raw.get("type") {
        Some(v) => match v.as_str().and_then(GameType::parse) {
            Some(t) => t,
            None => return Err(EngineError::UnsupportedGameType(string_form(v))),
        },
        None => return Err(EngineError::UnsupportedGameType("none".to_string())),
    };

    let raw_items = raw
        .get("questions")
        .and_then(Value::as_array)
        .or_else(|| raw.get("scenarios").and_then(Value::as_array));

    let mut items = Vec::new();
    if let Some(raw_items) = raw_items {
        items.reserve(raw_items.len());
        for (index, raw_item) in raw_items.iter().enumerate() {
            items.push(parse_item(game_type, index, raw_item)?);
        }
    }

    let game = GameDefinition {
        game_id,
        title: raw.get("title").and_then(Value::as_str).map(str::to_string),
        description: raw
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        game_type,
        difficulty: raw
            .get("difficulty")
            .and_then(Value::as_str)
            .and_then(Difficulty::parse)
            .unwrap_or_default(),
        skills_tagged: raw
            .get("skillsTagged")
            .and_then(Value::as_array)
            .map(|skills| skills.iter().map(string_form).collect())
            .unwrap_or_default(),
        xp_reward: raw
            .get("xpReward")
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(|| game_type.default_xp_reward()),
        time_limit: raw
            .get("timeLimit")
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok()),
        is_active: raw.get("isActive").and_then(Value::as_bool).unwrap_or(true),
        items,
    };

    tracing::debug!(
        "Loaded game definition: id={}, type={}, items={}",
        game.game_id,
        game.game_type.as_str(),
        game.items.len()
    );

    Ok(game)
}

fn parse_item(game_type: GameType, index: usize, raw: &Value) -> Result<Item, EngineError> {
    let kind = match game_type {
        GameType::Quiz => parse_quiz_kind(index, raw)?,
        GameType::Coding => ItemKind::Coding {
            test_cases: raw
                .get("testCases")
                .and_then(Value::as_array)
                .map(|cases| cases.iter().map(parse_test_case).collect())
                .unwrap_or_default(),
            expected_pattern: raw
                .get("expectedPattern")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
        GameType::Simulation => ItemKind::Scenario {
            correct_choice: string_form(required_field(raw, "correctChoice", index)?),
            explanation: raw
                .get("explanation")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
    };

    let prompt = match game_type {
        GameType::Quiz => raw.get("question").and_then(Value::as_str),
        // Challenges and scenarios describe themselves; fall back to the quiz key
        GameType::Coding | GameType::Simulation => raw
            .get("description")
            .and_then(Value::as_str)
            .or_else(|| raw.get("question").and_then(Value::as_str)),
    }
    .map(str::to_string);

    Ok(Item {
        id: raw.get("id").map(string_form),
        prompt,
        points: raw
            .get("points")
            .and_then(Value::as_f64)
            .filter(|p| *p != 0.0)
            .unwrap_or_else(|| game_type.default_points()),
        kind,
    })
}

fn parse_quiz_kind(index: usize, raw: &Value) -> Result<ItemKind, EngineError> {
    let tag = raw.get("type").and_then(Value::as_str).ok_or_else(|| {
        EngineError::MalformedItems(format!("question {} is missing a type tag", index))
    })?;

    match tag {
        "multiple-choice" => Ok(ItemKind::MultipleChoice {
            options: raw
                .get("options")
                .and_then(Value::as_array)
                .map(|opts| opts.iter().map(string_form).collect())
                .unwrap_or_default(),
            correct_answer: string_form(required_field(raw, "correctAnswer", index)?),
        }),
        "true-false" => Ok(ItemKind::TrueFalse {
            correct_answer: truthy(required_field(raw, "correctAnswer", index)?),
        }),
        "text" => Ok(ItemKind::Text {
            correct_answer: string_form(required_field(raw, "correctAnswer", index)?),
        }),
        other => Err(EngineError::MalformedItems(format!(
            "question {} has unknown type '{}'",
            index, other
        ))),
    }
}

fn parse_test_case(raw: &Value) -> TestCase {
    TestCase {
        input: raw.get("input").cloned().unwrap_or(Value::Null),
        expected_output: raw.get("expectedOutput").cloned().unwrap_or(Value::Null),
    }
}

fn required_field<'a>(raw: &'a Value, key: &str, index: usize) -> Result<&'a Value, EngineError> {
    match raw.get(key) {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(EngineError::MalformedItems(format!(
            "item {} is missing {}",
            index, key
        ))),
    }
}

/// Grade a positional answer list against a normalized game definition.
///
/// Answers align 1:1 with items by index; a missing or null slot scores
/// incorrect. Score and accuracy are rounded on the way out while the XP
/// formula consumes the unrounded accuracy.
pub fn process_result(game: &GameDefinition, answers: &[Value], time_spent: u32) -> GameResult {
    let mut breakdown = Vec::with_capacity(game.items.len());
    let mut correct_count: u32 = 0;
    let mut points_total = 0.0;
    let mut max_points = 0.0;

    for (index, item) in game.items.iter().enumerate() {
        let user_answer = answers.get(index).cloned().unwrap_or(Value::Null);
        let outcome = evaluate_item(index, item, user_answer);

        if outcome.is_correct {
            correct_count += 1;
        }
        points_total += outcome.points_awarded;
        max_points += item.points;
        breakdown.push(outcome);
    }

    let total_items = game.items.len() as u32;
    let accuracy = scoring::percentage(f64::from(correct_count), f64::from(total_items));
    let score = scoring::percentage(points_total, max_points);
    let bonus = scoring::time_bonus(game.time_limit, time_spent);
    let xp = scoring::xp_earned(game.xp_reward, accuracy, bonus);

    GAMES_PROCESSED_TOTAL
        .with_label_values(&[game.game_type.as_str()])
        .inc();
    XP_AWARDED_TOTAL.inc_by(u64::from(xp));

    tracing::info!(
        "Graded submission: game={}, type={}, correct={}/{}, score={:.1}, bonus={}, xp={}",
        game.game_id,
        game.game_type.as_str(),
        correct_count,
        total_items,
        score,
        bonus,
        xp
    );

    GameResult {
        score: score.round() as u32,
        accuracy: accuracy.round() as u32,
        correct_count,
        total_items,
        xp_earned: xp,
        time_spent,
        breakdown,
        feedback: feedback_message(game.game_type, accuracy, correct_count, total_items),
    }
}

fn evaluate_item(index: usize, item: &Item, user_answer: Value) -> ItemOutcome {
    // A missing or null slot is always incorrect, regardless of item type
    let answered = !user_answer.is_null();

    let (is_correct, expected, test_results) = match &item.kind {
        ItemKind::MultipleChoice { correct_answer, .. } => (
            answered && string_form(&user_answer) == *correct_answer,
            Some(correct_answer.clone()),
            None,
        ),
        ItemKind::TrueFalse { correct_answer } => (
            answered && truthy(&user_answer) == *correct_answer,
            Some(correct_answer.to_string()),
            None,
        ),
        ItemKind::Text { correct_answer } => (
            answered && text_matches(correct_answer, &string_form(&user_answer)),
            Some(correct_answer.clone()),
            None,
        ),
        ItemKind::Coding {
            test_cases,
            expected_pattern,
        } => {
            let code = extract_code(&user_answer);
            let report = run_code_tests(test_cases, expected_pattern.as_deref(), code);
            let all_passed = answered && report.passed == report.total;
            (all_passed, None, Some(report))
        }
        ItemKind::Scenario { correct_choice, .. } => (
            answered && string_form(&user_answer) == *correct_choice,
            Some(correct_choice.clone()),
            None,
        ),
    };

    let explanation = match &item.kind {
        ItemKind::Scenario { explanation, .. } => explanation.clone(),
        _ => None,
    };

    ItemOutcome {
        index,
        item_id: item.id.clone(),
        prompt: item.prompt.clone(),
        user_answer,
        expected,
        is_correct,
        points_awarded: if is_correct { item.points } else { 0.0 },
        test_results,
        explanation,
    }
}

/// Lenient text match: after lowercasing and trimming both sides, accept an
/// exact match or either string containing the other.
fn text_matches(correct: &str, user: &str) -> bool {
    let correct = correct.to_lowercase();
    let correct = correct.trim();
    let user = user.to_lowercase();
    let user = user.trim();
    correct == user || correct.contains(user) || user.contains(correct)
}

/// Pull the code string out of a submission slot. Clients send either a bare
/// string or an object `{ "code": "..." }`.
fn extract_code(user_answer: &Value) -> &str {
    match user_answer {
        Value::Object(obj) => obj.get("code").and_then(Value::as_str).unwrap_or(""),
        Value::String(s) => s.as_str(),
        _ => "",
    }
}

/// Heuristic stand-in for code execution: a test "passes" when the submitted
/// code contains the expected pattern (if any) and is longer than
/// [`MIN_CODE_LENGTH`] characters. Explicitly a placeholder, not a grader.
/// Real execution belongs to a sandboxing service outside this engine.
fn run_code_tests(
    test_cases: &[TestCase],
    expected_pattern: Option<&str>,
    code: &str,
) -> CodeTestReport {
    let pattern_ok = expected_pattern.map(|p| code.contains(p)).unwrap_or(true);
    let test_passed = pattern_ok && code.chars().count() > MIN_CODE_LENGTH;

    if test_cases.is_empty() {
        // No test cases: one implicit pass/fail slot driven by the same check
        return CodeTestReport {
            passed: u32::from(test_passed),
            total: 1,
            cases: Vec::new(),
        };
    }

    let cases: Vec<TestCaseOutcome> = test_cases
        .iter()
        .enumerate()
        .map(|(i, tc)| TestCaseOutcome {
            case: i as u32 + 1,
            passed: test_passed,
            input: tc.input.clone(),
            expected_output: tc.expected_output.clone(),
        })
        .collect();

    CodeTestReport {
        passed: cases.iter().filter(|c| c.passed).count() as u32,
        total: cases.len() as u32,
        cases,
    }
}

fn feedback_message(game_type: GameType, accuracy: f64, correct: u32, total: u32) -> String {
    match game_type {
        GameType::Quiz => {
            if accuracy >= 90.0 {
                format!(
                    "Excellent! You got {}/{} correct. Outstanding performance!",
                    correct, total
                )
            } else if accuracy >= 70.0 {
                format!(
                    "Good job! You got {}/{} correct. Keep practicing!",
                    correct, total
                )
            } else if accuracy >= 50.0 {
                format!(
                    "Not bad! You got {}/{} correct. Review the concepts and try again.",
                    correct, total
                )
            } else {
                format!(
                    "You got {}/{} correct. Don't give up! Review the material and practice more.",
                    correct, total
                )
            }
        }
        GameType::Coding => {
            if accuracy >= 90.0 {
                format!(
                    "Brilliant coding! {}/{} challenges solved correctly.",
                    correct, total
                )
            } else if accuracy >= 70.0 {
                format!("Well done! {}/{} challenges solved. Keep coding!", correct, total)
            } else if accuracy >= 50.0 {
                format!(
                    "Not bad! {}/{} challenges solved. Review the failing ones and retry.",
                    correct, total
                )
            } else {
                format!(
                    "{}/{} challenges solved. Practice more to improve your coding skills.",
                    correct, total
                )
            }
        }
        GameType::Simulation => {
            if accuracy >= 90.0 {
                format!(
                    "Excellent decision-making! {}/{} scenarios handled correctly.",
                    correct, total
                )
            } else if accuracy >= 70.0 {
                format!("Good choices! {}/{} scenarios correct.", correct, total)
            } else if accuracy >= 50.0 {
                format!(
                    "Not bad! {}/{} scenarios correct. Reflect on the tougher calls.",
                    correct, total
                )
            } else {
                format!(
                    "{}/{} scenarios correct. Think through each scenario carefully.",
                    correct, total
                )
            }
        }
    }
}
