#![allow(dead_code)]

use serde_json::{json, Value};

use skillforge_engine::models::game::GameDefinition;
use skillforge_engine::models::progress::{LearnerProgress, SkillState};
use skillforge_engine::services::grading_service;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Four-question multiple-choice quiz tagged DSA, default reward, no limit.
pub fn raw_quiz() -> Value {
    json!({
        "gameId": "quiz-arrays",
        "title": "Array Basics",
        "type": "quiz",
        "difficulty": "beginner",
        "skillsTagged": ["DSA"],
        "questions": [
            { "id": "q1", "type": "multiple-choice", "question": "Index of the first element?",
              "options": ["0", "1"], "correctAnswer": "0" },
            { "id": "q2", "type": "multiple-choice", "question": "Lookup cost by index?",
              "options": ["O(1)", "O(n)"], "correctAnswer": "O(1)" },
            { "id": "q3", "type": "true-false", "question": "Arrays are contiguous.",
              "correctAnswer": true },
            { "id": "q4", "type": "text", "question": "Name a divide-and-conquer search.",
              "correctAnswer": "Binary Search" }
        ]
    })
}

pub fn raw_coding() -> Value {
    json!({
        "gameId": "code-sort",
        "title": "Sort It Out",
        "type": "coding",
        "difficulty": "intermediate",
        "skillsTagged": ["DSA", "Backend"],
        "timeLimit": 300,
        "questions": [
            {
                "id": "c1",
                "description": "Sort the list ascending",
                "expectedPattern": "sort",
                "testCases": [
                    { "input": "[3,1,2]", "expectedOutput": "[1,2,3]" }
                ]
            }
        ]
    })
}

pub fn raw_simulation() -> Value {
    json!({
        "gameId": "sim-outage",
        "title": "Production Outage",
        "type": "simulation",
        "skillsTagged": ["Backend"],
        "scenarios": [
            { "id": "s1", "description": "Deploy broke checkout. First move?",
              "correctChoice": "rollback", "explanation": "Restore service before debugging." },
            { "id": "s2", "description": "Error rate is climbing. Next?",
              "correctChoice": "page-oncall" }
        ]
    })
}

/// Learner with one strong skill and one weak one, mid levels.
pub fn seasoned_learner() -> LearnerProgress {
    let mut progress = LearnerProgress::new();
    progress.xp = 900;
    progress.level = 4;
    progress.skills.insert(
        "DSA".to_string(),
        SkillState {
            xp: 400,
            accuracy: 85.0,
            attempts: 15,
        },
    );
    progress.skills.insert(
        "ML".to_string(),
        SkillState {
            xp: 50,
            accuracy: 45.0,
            attempts: 3,
        },
    );
    progress
}

/// Small mixed-difficulty catalog covering the default skills.
pub fn catalog() -> Vec<GameDefinition> {
    [
        json!({ "gameId": "dsa-1", "type": "quiz", "difficulty": "beginner",
                "skillsTagged": ["DSA"] }),
        json!({ "gameId": "dsa-adv", "type": "coding", "difficulty": "advanced",
                "skillsTagged": ["DSA"] }),
        json!({ "gameId": "ml-1", "type": "quiz", "difficulty": "beginner",
                "skillsTagged": ["ML"] }),
        json!({ "gameId": "ml-2", "type": "simulation", "difficulty": "intermediate",
                "skillsTagged": ["ML"] }),
        json!({ "gameId": "db-1", "type": "quiz", "difficulty": "beginner",
                "skillsTagged": ["DBMS"] }),
        json!({ "gameId": "apt-1", "type": "quiz", "difficulty": "beginner",
                "skillsTagged": ["Aptitude"] }),
        json!({ "gameId": "fe-1", "type": "quiz", "difficulty": "beginner",
                "skillsTagged": ["Frontend"] }),
        json!({ "gameId": "be-1", "type": "quiz", "difficulty": "beginner",
                "skillsTagged": ["Backend"] }),
    ]
    .iter()
    .map(|raw| grading_service::load_game(raw).expect("fixture games are valid"))
    .collect()
}
