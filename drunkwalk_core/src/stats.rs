//! Summary statistics over trial distances.

use crate::error::WalkError;
use serde::{Deserialize, Serialize};

/// Mean and extremes of a set of trial results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl DistanceStats {
    /// Summarizes `samples`. Fails on an empty slice.
    pub fn from_samples(samples: &[f64]) -> Result<Self, WalkError> {
        let mean = mean(samples)?;
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });

        Ok(Self {
            count: samples.len(),
            mean,
            min,
            max,
        })
    }
}

/// Arithmetic mean of `samples`. Fails on an empty slice.
pub fn mean(samples: &[f64]) -> Result<f64, WalkError> {
    if samples.is_empty() {
        return Err(WalkError::invalid("cannot summarize zero samples"));
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stats_basic() {
        let stats = DistanceStats::from_samples(&[2.0, 4.0, 9.0, 1.0]).unwrap();

        assert_eq!(stats.count, 4);
        assert_relative_eq!(stats.mean, 4.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_stats_single_sample() {
        let stats = DistanceStats::from_samples(&[0.0]).unwrap();
        assert_eq!((stats.mean, stats.min, stats.max), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(mean(&[]), Err(WalkError::InvalidArgument(_))));
        assert!(DistanceStats::from_samples(&[]).is_err());
    }
}
