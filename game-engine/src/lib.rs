//! Game scoring and adaptive recommendation engine.
//!
//! Grades raw game submissions, folds the results into per-learner
//! progression state and plans what to play next. The crate is pure
//! computation: no HTTP surface, no storage, no authentication. Embed it
//! behind whatever transport and persistence the host application uses.

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod utils;

pub use config::EngineConfig;
pub use error::EngineError;
pub use services::GameEngine;
