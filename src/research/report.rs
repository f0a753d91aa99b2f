use serde::Serialize;

use crate::error::Result;
use super::plot::plot_test_errors;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

const HEADER: &str = "Trial,Importance,TrainError,TestError,Time\n";


/// Error rates of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialRecord {
    pub(crate) trial: usize,
    pub(crate) train_error: f64,
    pub(crate) test_error: f64,
    pub(crate) time: u64,
}


impl TrialRecord {
    /// 1-indexed trial number.
    #[inline]
    pub fn trial(&self) -> usize {
        self.trial
    }


    /// Error rate on the training table.
    #[inline]
    pub fn train_error(&self) -> f64 {
        self.train_error
    }


    /// Error rate on the test table.
    #[inline]
    pub fn test_error(&self) -> f64 {
        self.test_error
    }


    /// Training time in milliseconds.
    #[inline]
    pub fn time(&self) -> u64 {
        self.time
    }
}


/// Trials of one importance metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    name: String,
    records: Vec<TrialRecord>,
}


impl MetricSummary {
    pub(crate) fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), records: Vec::new() }
    }


    pub(crate) fn push(&mut self, record: TrialRecord) {
        self.records.push(record);
    }


    /// Name of the importance metric.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Records in the order of trials.
    #[inline]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records[..]
    }


    /// Training error of each trial.
    pub fn train_errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.train_error).collect()
    }


    /// Test error of each trial.
    pub fn test_errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.test_error).collect()
    }


    /// Mean test error over the trials.
    pub fn mean_test_error(&self) -> f64 {
        if self.records.is_empty() { return 0f64; }
        self.records.iter().map(|r| r.test_error).sum::<f64>()
            / self.records.len() as f64
    }


    /// Smallest test error over the trials.
    pub fn min_test_error(&self) -> f64 {
        self.records.iter()
            .map(|r| r.test_error)
            .fold(f64::INFINITY, f64::min)
    }


    /// Largest test error over the trials.
    pub fn max_test_error(&self) -> f64 {
        self.records.iter()
            .map(|r| r.test_error)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}


/// Outcome of [`Experiment::run`](super::Experiment::run).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    summaries: Vec<MetricSummary>,
}


impl Report {
    pub(crate) fn new(summaries: Vec<MetricSummary>) -> Self {
        Self { summaries }
    }


    /// One summary per importance metric.
    #[inline]
    pub fn summaries(&self) -> &[MetricSummary] {
        &self.summaries[..]
    }


    /// Returns the summary of the metric named `name`.
    pub fn summary(&self, name: &str) -> Option<&MetricSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }


    /// Write every record to a CSV file.
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        for summary in self.summaries.iter() {
            for r in summary.records.iter() {
                let line = format!(
                    "{},{},{},{},{}\n",
                    r.trial, summary.name, r.train_error, r.test_error, r.time
                );
                file.write_all(line.as_bytes())?;
            }
        }
        Ok(())
    }


    /// Render the report as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }


    /// Draw the test error of each trial as an SVG line chart.
    pub fn plot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        plot_test_errors(path.as_ref(), &self.summaries[..])
    }
}
