//! Step generation policies.
//!
//! Each policy draws one `(delta_x, delta_y)` vector per call from a
//! caller-supplied random source. Discrete policies pick uniformly among a
//! fixed table of four vectors.

use crate::error::WalkError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A 2D step vector `(delta_x, delta_y)`.
pub type Step = (f64, f64);

/// Anything that can produce a step vector from a random source.
pub trait StepSource {
    /// Draws the next step.
    fn take_step<R: Rng + ?Sized>(&self, rng: &mut R) -> Step;
}

const USUAL_STEPS: [Step; 4] = [(0.0, 1.0), (0.0, -1.0), (1.0, 0.0), (-1.0, 0.0)];
const COLD_STEPS: [Step; 4] = [(0.0, 0.9), (0.0, -1.03), (1.03, 0.0), (-1.03, 0.0)];
const PHOTO_STEPS: [Step; 4] = [(0.0, 0.5), (0.0, -0.5), (1.5, 0.0), (-1.5, 0.0)];
const DSTYLE_STEPS: [Step; 4] = [(0.85, 0.85), (-0.85, -0.85), (-0.56, 0.56), (0.56, -0.56)];

/// The closed set of movement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// One unit along an axis
    Usual,
    /// Axis steps, shorter going north
    Cold,
    /// Random direction, length in [0.5, 1.0)
    EStyle,
    /// Short vertical, long horizontal
    Photo,
    /// Diagonal steps
    #[serde(rename = "d_style")]
    Dstyle,
}

impl StepPolicy {
    /// Returns every policy.
    pub fn all() -> Vec<StepPolicy> {
        vec![
            StepPolicy::Usual,
            StepPolicy::Cold,
            StepPolicy::EStyle,
            StepPolicy::Photo,
            StepPolicy::Dstyle,
        ]
    }

    /// Returns the policy name.
    pub fn name(&self) -> &'static str {
        match self {
            StepPolicy::Usual => "usual",
            StepPolicy::Cold => "cold",
            StepPolicy::EStyle => "e_style",
            StepPolicy::Photo => "photo",
            StepPolicy::Dstyle => "d_style",
        }
    }

    /// Returns a description of the policy.
    pub fn description(&self) -> &'static str {
        match self {
            StepPolicy::Usual => "unit step N/S/E/W with equal odds",
            StepPolicy::Cold => "0.9 north, 1.03 south/east/west",
            StepPolicy::EStyle => "uniform angle, length uniform in [0.5, 1.0)",
            StepPolicy::Photo => "0.5 north/south, 1.5 east/west",
            StepPolicy::Dstyle => "0.85 along the main diagonal, 0.56 along the anti-diagonal",
        }
    }

    /// The discrete step table, or `None` for continuous policies.
    pub fn choices(&self) -> Option<&'static [Step]> {
        match self {
            StepPolicy::Usual => Some(&USUAL_STEPS),
            StepPolicy::Cold => Some(&COLD_STEPS),
            StepPolicy::EStyle => None,
            StepPolicy::Photo => Some(&PHOTO_STEPS),
            StepPolicy::Dstyle => Some(&DSTYLE_STEPS),
        }
    }
}

impl StepSource for StepPolicy {
    fn take_step<R: Rng + ?Sized>(&self, rng: &mut R) -> Step {
        match self.choices() {
            Some(choices) => choices[rng.gen_range(0..choices.len())],
            None => {
                let angle = 2.0 * PI * rng.gen::<f64>();
                let length = 0.5 + 0.5 * rng.gen::<f64>();
                (length * angle.sin(), length * angle.cos())
            }
        }
    }
}

impl fmt::Display for StepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for StepPolicy {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usual" | "usual_drunk" | "usualdrunk" => Ok(StepPolicy::Usual),
            "cold" | "cold_drunk" | "colddrunk" => Ok(StepPolicy::Cold),
            "e_style" | "estyle" | "e" | "ed" | "edrunk" => Ok(StepPolicy::EStyle),
            "photo" | "photo_drunk" | "photodrunk" => Ok(StepPolicy::Photo),
            "d_style" | "dstyle" | "d" | "dd" | "ddrunk" => Ok(StepPolicy::Dstyle),
            _ => Err(WalkError::UnknownPolicy(s.to_string())),
        }
    }
}
