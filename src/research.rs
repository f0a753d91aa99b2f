//! This directory provides some features for research.
//! Measure the followings of each importance metric per trial
//! - Running time
//! - Training error
//! - Test error

/// Runs the decision tree learner repeatedly for each metric.
pub mod experiment;

/// Defines the outcome of an experiment.
pub mod report;

/// Draws the test error of each trial.
mod plot;

pub use experiment::Experiment;
pub use report::{
    Report,
    MetricSummary,
    TrialRecord,
};
