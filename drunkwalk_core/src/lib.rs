//! Drunkwalk Core - biased random walks on a continuous plane
//!
//! Walkers ("drunks") take randomized steps according to a [`StepPolicy`]
//! inside a [`Field`] that tracks where each of them stands. The
//! [`simulator`] functions repeat single-walker trials and return plain
//! numeric sequences; [`DistanceStats`] reduces those to mean/min/max.
//!
//! All randomness comes from a caller-supplied `rand::Rng`, so a seeded
//! generator makes every run reproducible.
//!
//! # Example
//!
//! ```
//! use drunkwalk_core::{simulate_distances, DistanceStats, StepPolicy};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let distances = simulate_distances(100, 20, StepPolicy::Usual, &mut rng).unwrap();
//! let stats = DistanceStats::from_samples(&distances).unwrap();
//! assert!(stats.min <= stats.mean && stats.mean <= stats.max);
//! ```

pub mod error;
pub mod field;
pub mod position;
pub mod simulator;
pub mod stats;
pub mod step_policy;
pub mod walker;

// Re-export key types for convenience
pub use error::WalkError;
pub use field::Field;
pub use position::Position;
pub use simulator::{run_trial_scalar, run_trial_vector, simulate_distances, simulate_scatter, Scatter};
pub use stats::DistanceStats;
pub use step_policy::{Step, StepPolicy, StepSource};
pub use walker::{Walker, WalkerId};
