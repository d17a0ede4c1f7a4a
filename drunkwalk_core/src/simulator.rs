//! Trial execution and multi-trial aggregation.
//!
//! A trial walks one walker for a fixed number of steps inside a field and
//! reports either the straight-line distance covered or the signed
//! displacement. The aggregate procedures repeat that with a fresh field
//! and walker per trial, starting at the origin.

use crate::error::WalkError;
use crate::field::Field;
use crate::position::Position;
use crate::step_policy::{StepPolicy, StepSource};
use crate::walker::Walker;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Name given to the walker built for each aggregate trial.
pub const TRIAL_WALKER_NAME: &str = "Homer";

/// Per-trial signed displacements, as two parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scatter {
    pub dx: Vec<f64>,
    pub dy: Vec<f64>,
}

impl Scatter {
    pub fn len(&self) -> usize {
        self.dx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dx.is_empty()
    }

    /// Iterates the `(dx, dy)` pairs in trial order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.dx.iter().copied().zip(self.dy.iter().copied())
    }

    /// Euclidean length of each displacement.
    pub fn distances(&self) -> Vec<f64> {
        self.points().map(|(x, y)| x.hypot(y)).collect()
    }
}

/// Walks `walker` for `num_steps` steps and returns the distance between
/// its start and end positions.
pub fn run_trial_scalar<S, R>(
    field: &mut Field,
    walker: &Walker<S>,
    num_steps: usize,
    rng: &mut R,
) -> Result<f64, WalkError>
where
    S: StepSource,
    R: Rng + ?Sized,
{
    let (start, end) = walk(field, walker, num_steps, rng)?;
    Ok(start.distance_from(&end))
}

/// Walks `walker` for `num_steps` steps and returns the signed
/// `(dx, dy)` displacement from its start position.
pub fn run_trial_vector<S, R>(
    field: &mut Field,
    walker: &Walker<S>,
    num_steps: usize,
    rng: &mut R,
) -> Result<(f64, f64), WalkError>
where
    S: StepSource,
    R: Rng + ?Sized,
{
    let (start, end) = walk(field, walker, num_steps, rng)?;
    Ok(end.displacement_from(&start))
}

/// Runs `num_trials` independent scalar trials for `policy` and returns the
/// distances in trial order.
pub fn simulate_distances<R: Rng + ?Sized>(
    num_steps: usize,
    num_trials: usize,
    policy: StepPolicy,
    rng: &mut R,
) -> Result<Vec<f64>, WalkError> {
    repeat_trials(num_trials, || {
        let (mut field, walker) = fresh_trial(policy)?;
        run_trial_scalar(&mut field, &walker, num_steps, &mut *rng)
    })
}

/// Runs `num_trials` independent vector trials for `policy` and collects
/// the signed displacements.
pub fn simulate_scatter<R: Rng + ?Sized>(
    num_steps: usize,
    num_trials: usize,
    policy: StepPolicy,
    rng: &mut R,
) -> Result<Scatter, WalkError> {
    let points = repeat_trials(num_trials, || {
        let (mut field, walker) = fresh_trial(policy)?;
        run_trial_vector(&mut field, &walker, num_steps, &mut *rng)
    })?;

    let (dx, dy) = points.into_iter().unzip();
    Ok(Scatter { dx, dy })
}

fn walk<S, R>(
    field: &mut Field,
    walker: &Walker<S>,
    num_steps: usize,
    rng: &mut R,
) -> Result<(Position, Position), WalkError>
where
    S: StepSource,
    R: Rng + ?Sized,
{
    let start = field.position(walker)?;
    for _ in 0..num_steps {
        field.move_walker(walker, rng)?;
    }
    Ok((start, field.position(walker)?))
}

fn fresh_trial(policy: StepPolicy) -> Result<(Field, Walker), WalkError> {
    let mut field = Field::new();
    let walker = Walker::new(TRIAL_WALKER_NAME, policy);
    field.add_walker(&walker, Position::origin())?;
    Ok((field, walker))
}

/// Runs `trial` `num_trials` times, stopping at the first error.
///
/// Results grow with the trials actually run; nothing is reserved up front.
fn repeat_trials<T, F>(num_trials: usize, mut trial: F) -> Result<Vec<T>, WalkError>
where
    F: FnMut() -> Result<T, WalkError>,
{
    if num_trials == 0 {
        return Err(WalkError::invalid("number of trials must be positive"));
    }
    (0..num_trials).map(|_| trial()).collect()
}
