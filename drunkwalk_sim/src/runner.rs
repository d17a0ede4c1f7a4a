//! Experiment runner - executes walk experiments and builds reports.

use crate::context::SimContext;
use crate::error::SimError;
use crate::experiments::ExperimentId;
use crate::report::{ExperimentReport, PolicySeries, ScatterSeries, StepSummary};

use drunkwalk_core::{simulate_distances, simulate_scatter, DistanceStats, StepPolicy};
use tracing::{debug, info};

/// Step counts walked when the caller does not choose any.
pub const DEFAULT_STEP_COUNTS: [usize; 4] = [10, 100, 1000, 10000];

/// Walk length for the scatter experiment.
pub const DEFAULT_SCATTER_STEPS: usize = 100;

/// Runs walk experiments.
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    /// Seed source for every trial
    context: SimContext,

    /// Trials per data point (None = experiment default)
    num_trials: Option<usize>,

    /// Step counts for the distance experiments
    step_counts: Vec<usize>,

    /// Policies to walk (None = experiment default)
    policies: Option<Vec<StepPolicy>>,

    /// Walk length for the scatter experiment
    scatter_steps: usize,
}

impl ExperimentRunner {
    /// Creates a new experiment runner.
    pub fn new(seed: u64) -> Self {
        Self {
            context: SimContext::new(seed),
            num_trials: None,
            step_counts: DEFAULT_STEP_COUNTS.to_vec(),
            policies: None,
            scatter_steps: DEFAULT_SCATTER_STEPS,
        }
    }

    /// Sets the number of trials per data point.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.num_trials = Some(trials);
        self
    }

    /// Sets the step counts.
    pub fn with_step_counts(mut self, step_counts: Vec<usize>) -> Self {
        self.step_counts = step_counts;
        self
    }

    /// Sets the policies to walk.
    pub fn with_policies(mut self, policies: Vec<StepPolicy>) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Sets the scatter walk length.
    pub fn with_scatter_steps(mut self, steps: usize) -> Self {
        self.scatter_steps = steps;
        self
    }

    /// Returns the master seed.
    pub fn seed(&self) -> u64 {
        self.context.seed()
    }

    /// Runs an experiment and returns its report.
    pub fn run(&self, experiment: ExperimentId) -> Result<ExperimentReport, SimError> {
        let trials = self.num_trials.unwrap_or_else(|| experiment.default_trials());
        let policies = self
            .policies
            .clone()
            .unwrap_or_else(|| experiment.default_policies());

        if policies.is_empty() {
            return Err(SimError::config("no step policies selected"));
        }

        info!(
            "Starting experiment: {} (seed={}, trials={})",
            experiment.name(),
            self.seed(),
            trials
        );
        debug!("  {}", experiment.description());

        let mut report = ExperimentReport::new(experiment.name(), self.seed(), trials);

        match experiment {
            ExperimentId::Scatter => {
                for policy in policies {
                    report.scatter.push(self.scatter_series(experiment, policy, trials)?);
                }
            }
            _ => {
                if self.step_counts.is_empty() {
                    return Err(SimError::config("no step counts selected"));
                }
                if let Some(dup) = first_duplicate(&self.step_counts) {
                    return Err(SimError::config(format!("step count {} listed twice", dup)));
                }
                for policy in policies {
                    report.series.push(self.distance_series(experiment, policy, trials)?);
                }
            }
        }

        Ok(report)
    }

    fn distance_series(
        &self,
        experiment: ExperimentId,
        policy: StepPolicy,
        trials: usize,
    ) -> Result<PolicySeries, SimError> {
        let mut points = Vec::with_capacity(self.step_counts.len());

        for &num_steps in &self.step_counts {
            let mut rng = self.context.cell_rng(experiment, policy, num_steps);
            let distances = simulate_distances(num_steps, trials, policy, &mut rng)?;
            let stats = DistanceStats::from_samples(&distances)?;

            debug!(
                "  {} | {} steps | mean={:.3} min={:.3} max={:.3}",
                policy, num_steps, stats.mean, stats.min, stats.max
            );
            points.push(StepSummary::new(num_steps, stats));
        }

        Ok(PolicySeries { policy, points })
    }

    fn scatter_series(
        &self,
        experiment: ExperimentId,
        policy: StepPolicy,
        trials: usize,
    ) -> Result<ScatterSeries, SimError> {
        let mut rng = self.context.cell_rng(experiment, policy, self.scatter_steps);
        let scatter = simulate_scatter(self.scatter_steps, trials, policy, &mut rng)?;

        debug!("  {} | {} points collected", policy, scatter.len());

        Ok(ScatterSeries {
            policy,
            num_steps: self.scatter_steps,
            x: scatter.dx,
            y: scatter.dy,
        })
    }
}

fn first_duplicate(values: &[usize]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .find(|&(i, v)| values[..i].contains(v))
        .map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use drunkwalk_core::WalkError;
    use proptest::prelude::*;

    fn small_runner(seed: u64) -> ExperimentRunner {
        ExperimentRunner::new(seed)
            .with_trials(8)
            .with_step_counts(vec![0, 10, 50])
            .with_scatter_steps(25)
    }

    #[test]
    fn test_drunk_test_defaults_to_e_style() {
        let report = small_runner(42).run(ExperimentId::DrunkTest).unwrap();

        assert_eq!(report.experiment, "drunk_test");
        assert_eq!(report.num_trials, 8);
        assert_eq!(report.series.len(), 1);
        assert_eq!(report.series[0].policy, StepPolicy::EStyle);
        assert_eq!(report.series[0].points.len(), 3);
        assert!(report.scatter.is_empty());
    }

    #[test]
    fn test_zero_steps_summary_is_zero() {
        let report = small_runner(1).run(ExperimentId::MeanDistance).unwrap();

        for series in &report.series {
            let first = &series.points[0];
            assert_eq!(first.num_steps, 0);
            assert_eq!((first.mean, first.min, first.max), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_summaries_are_ordered() {
        let report = small_runner(3)
            .with_policies(StepPolicy::all())
            .run(ExperimentId::MeanDistance)
            .unwrap();

        assert_eq!(report.series.len(), 5);
        for p in report.series.iter().flat_map(|s| &s.points) {
            assert!(p.min <= p.mean && p.mean <= p.max);
            assert!(p.min >= 0.0);
        }
    }

    #[test]
    fn test_scatter_experiment() {
        let report = small_runner(5)
            .with_policies(vec![StepPolicy::Photo, StepPolicy::Dstyle])
            .run(ExperimentId::Scatter)
            .unwrap();

        assert!(report.series.is_empty());
        assert_eq!(report.scatter.len(), 2);
        for cloud in &report.scatter {
            assert_eq!(cloud.num_steps, 25);
            assert_eq!(cloud.x.len(), 8);
            assert_eq!(cloud.y.len(), 8);
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = small_runner(99).run(ExperimentId::SqrtComparison).unwrap();
        let b = small_runner(99).run(ExperimentId::SqrtComparison).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cells_independent_of_selection() {
        let alone = small_runner(11)
            .with_policies(vec![StepPolicy::Cold])
            .run(ExperimentId::MeanDistance)
            .unwrap();
        let together = small_runner(11)
            .with_policies(vec![StepPolicy::Usual, StepPolicy::Cold])
            .run(ExperimentId::MeanDistance)
            .unwrap();

        assert_eq!(alone.series[0], together.series[1]);
    }

    #[test]
    fn test_experiments_do_not_replay_each_other() {
        let runner = ExperimentRunner::new(42)
            .with_trials(6)
            .with_step_counts(vec![100])
            .with_scatter_steps(100)
            .with_policies(vec![StepPolicy::EStyle]);

        let drunk = runner.run(ExperimentId::DrunkTest).unwrap();
        let sqrt = runner.run(ExperimentId::SqrtComparison).unwrap();
        let scatter = runner.run(ExperimentId::Scatter).unwrap();

        assert_ne!(drunk.series[0].points[0], sqrt.series[0].points[0]);

        let cloud = &scatter.scatter[0];
        let radius: Vec<f64> = cloud.x.iter().zip(&cloud.y).map(|(x, y)| x.hypot(*y)).collect();
        let stats = DistanceStats::from_samples(&radius).unwrap();
        assert_ne!(stats.mean, drunk.series[0].points[0].mean);
    }

    #[test]
    fn test_usual_one_step_mean_is_one() {
        let report = ExperimentRunner::new(2)
            .with_trials(10)
            .with_step_counts(vec![1])
            .with_policies(vec![StepPolicy::Usual])
            .run(ExperimentId::DrunkTest)
            .unwrap();

        assert_relative_eq!(report.series[0].points[0].mean, 1.0);
    }

    #[test]
    fn test_invalid_configuration() {
        let runner = ExperimentRunner::new(1).with_trials(0);
        assert!(matches!(
            runner.run(ExperimentId::DrunkTest),
            Err(SimError::Walk(WalkError::InvalidArgument(_)))
        ));
        assert!(matches!(
            runner.run(ExperimentId::Scatter),
            Err(SimError::Walk(WalkError::InvalidArgument(_)))
        ));

        let runner = ExperimentRunner::new(1).with_step_counts(vec![10, 100, 10]);
        assert!(matches!(
            runner.run(ExperimentId::MeanDistance),
            Err(SimError::InvalidConfig(msg)) if msg.contains("10")
        ));

        let runner = ExperimentRunner::new(1).with_policies(vec![]);
        assert!(matches!(
            runner.run(ExperimentId::Scatter),
            Err(SimError::InvalidConfig(_))
        ));

        let runner = ExperimentRunner::new(1).with_step_counts(vec![]);
        assert!(matches!(
            runner.run(ExperimentId::MeanDistance),
            Err(SimError::InvalidConfig(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_scatter_bounded_by_step_length(seed in any::<u64>(), steps in 0usize..40) {
            let report = ExperimentRunner::new(seed)
                .with_trials(4)
                .with_scatter_steps(steps)
                .with_policies(vec![StepPolicy::EStyle])
                .run(ExperimentId::Scatter)
                .unwrap();

            for (x, y) in report.scatter[0].x.iter().zip(&report.scatter[0].y) {
                prop_assert!(x.hypot(*y) <= steps as f64 + 1e-9);
            }
        }
    }
}
