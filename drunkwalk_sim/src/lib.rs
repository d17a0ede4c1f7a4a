//! Drunkwalk experiment harness
//!
//! Wraps the walk core in reproducible, seeded experiments:
//!
//! - **Randomness**: every (policy, step count) cell draws from its own
//!   ChaCha8 stream derived from a single 64-bit master seed
//! - **Experiments**: summary tables, mean-distance curves, a square-root
//!   comparison and displacement scatters
//! - **Reports**: serde models carrying plain numeric series for whatever
//!   plots or post-processes them
//!
//! # Usage
//!
//! ```ignore
//! use drunkwalk_sim::{ExperimentId, ExperimentRunner};
//!
//! let runner = ExperimentRunner::new(42).with_trials(50);
//! let report = runner.run(ExperimentId::MeanDistance)?;
//! println!("{}", report.to_json_pretty()?);
//! ```

mod context;
mod error;
mod report;
mod runner;
pub mod experiments;

pub use context::SimContext;
pub use error::SimError;
pub use experiments::ExperimentId;
pub use report::{ExperimentReport, PolicySeries, ScatterSeries, StepSummary};
pub use runner::{ExperimentRunner, DEFAULT_SCATTER_STEPS, DEFAULT_STEP_COUNTS};
