//! Serializable experiment results.
//!
//! Reports hold plain numeric series for an external plotting or analysis
//! tool. Nothing here touches the filesystem.

use crate::error::SimError;
use drunkwalk_core::{DistanceStats, StepPolicy};
use serde::{Deserialize, Serialize};

/// Distance summary for one step count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    pub num_steps: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Square root of `num_steps`, the reference curve for unbiased walks
    pub sqrt_steps: f64,
}

impl StepSummary {
    pub fn new(num_steps: usize, stats: DistanceStats) -> Self {
        Self {
            num_steps,
            mean: stats.mean,
            min: stats.min,
            max: stats.max,
            sqrt_steps: (num_steps as f64).sqrt(),
        }
    }
}

/// One policy's summaries across step counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySeries {
    pub policy: StepPolicy,
    pub points: Vec<StepSummary>,
}

/// End-point displacements for one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub policy: StepPolicy,
    pub num_steps: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Complete result of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Experiment name
    pub experiment: String,

    /// Master seed used
    pub seed: u64,

    /// Trials per data point
    pub num_trials: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<PolicySeries>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scatter: Vec<ScatterSeries>,
}

impl ExperimentReport {
    /// Creates an empty report.
    pub fn new(experiment: &str, seed: u64, num_trials: usize) -> Self {
        Self {
            experiment: experiment.to_string(),
            seed,
            num_trials,
            series: Vec::new(),
            scatter: Vec::new(),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable lines, one observation per line.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for series in &self.series {
            lines.push(format!("{} walker, {} trials", series.policy, self.num_trials));
            for p in &series.points {
                lines.push(format!(
                    "  {:>6} steps | mean {:>9.3} | min {:>9.3} | max {:>9.3} | sqrt {:>8.3}",
                    p.num_steps, p.mean, p.min, p.max, p.sqrt_steps
                ));
            }
        }

        for cloud in &self.scatter {
            let radius: Vec<f64> = cloud.x.iter().zip(&cloud.y).map(|(x, y)| x.hypot(*y)).collect();
            let summary = DistanceStats::from_samples(&radius).ok();
            lines.push(format!(
                "{} walker, {} points after {} steps",
                cloud.policy,
                cloud.x.len(),
                cloud.num_steps
            ));
            if let Some(stats) = summary {
                lines.push(format!(
                    "  |d| mean {:.3} | min {:.3} | max {:.3}",
                    stats.mean, stats.min, stats.max
                ));
            }
        }

        lines
    }
}
