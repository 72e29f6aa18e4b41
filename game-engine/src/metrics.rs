use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    // Grading metrics
    pub static ref GAMES_PROCESSED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "games_processed_total",
        "Total number of game submissions graded",
        &["game_type"]
    )
    .unwrap();

    pub static ref XP_AWARDED_TOTAL: IntCounter = register_int_counter!(
        "xp_awarded_total",
        "Total XP awarded across all graded submissions"
    )
    .unwrap();

    // Progression metrics
    pub static ref RESULTS_APPLIED_TOTAL: IntCounter = register_int_counter!(
        "results_applied_total",
        "Total number of game results folded into learner progress"
    )
    .unwrap();

    pub static ref LEVEL_UPS_TOTAL: IntCounter = register_int_counter!(
        "level_ups_total",
        "Total number of learner level increases"
    )
    .unwrap();

    // Recommendation metrics
    pub static ref RECOMMENDATIONS_GENERATED_TOTAL: IntCounter = register_int_counter!(
        "recommendations_generated_total",
        "Total number of game recommendations produced"
    )
    .unwrap();

    pub static ref LEARNING_PATHS_GENERATED_TOTAL: IntCounter = register_int_counter!(
        "learning_paths_generated_total",
        "Total number of weekly learning paths generated"
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}
