//! Catalogue of walk experiments.

use crate::error::SimError;
use drunkwalk_core::StepPolicy;

/// Experiment identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentId {
    /// Mean / max / min distance per step count for one policy
    DrunkTest,

    /// Mean distance per step count, one series per policy
    MeanDistance,

    /// Mean distance compared against the square root of the step count
    SqrtComparison,

    /// Signed end-point displacements for scatter plotting
    Scatter,
}

impl ExperimentId {
    /// Returns a list of all experiments.
    pub fn all() -> Vec<ExperimentId> {
        vec![
            ExperimentId::DrunkTest,
            ExperimentId::MeanDistance,
            ExperimentId::SqrtComparison,
            ExperimentId::Scatter,
        ]
    }

    /// Returns the experiment name.
    pub fn name(&self) -> &'static str {
        match self {
            ExperimentId::DrunkTest => "drunk_test",
            ExperimentId::MeanDistance => "mean_distance",
            ExperimentId::SqrtComparison => "sqrt_comparison",
            ExperimentId::Scatter => "scatter",
        }
    }

    /// Returns a description of the experiment.
    pub fn description(&self) -> &'static str {
        match self {
            ExperimentId::DrunkTest => "distance summary per step count for one walker kind",
            ExperimentId::MeanDistance => "mean distance from origin for several walker kinds",
            ExperimentId::SqrtComparison => "mean distance against the square root of steps taken",
            ExperimentId::Scatter => "end-point displacement cloud after a fixed walk",
        }
    }

    /// Trials per data point when the caller does not override it.
    pub fn default_trials(&self) -> usize {
        match self {
            ExperimentId::DrunkTest => 20,
            _ => 50,
        }
    }

    /// Policies walked when the caller does not choose any.
    pub fn default_policies(&self) -> Vec<StepPolicy> {
        match self {
            ExperimentId::DrunkTest | ExperimentId::SqrtComparison => vec![StepPolicy::EStyle],
            ExperimentId::MeanDistance => {
                vec![StepPolicy::Usual, StepPolicy::EStyle, StepPolicy::Cold]
            }
            ExperimentId::Scatter => vec![StepPolicy::Usual],
        }
    }
}

impl std::fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ExperimentId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drunk_test" | "drunktest" | "summary" => Ok(ExperimentId::DrunkTest),
            "mean_distance" | "meandistance" | "mean" => Ok(ExperimentId::MeanDistance),
            "sqrt_comparison" | "sqrtcomparison" | "sqrt" => Ok(ExperimentId::SqrtComparison),
            "scatter" => Ok(ExperimentId::Scatter),
            _ => Err(SimError::UnknownExperiment(s.to_string())),
        }
    }
}
