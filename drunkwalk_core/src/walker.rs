//! Walkers and their identities.

use crate::step_policy::{Step, StepPolicy, StepSource};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a walker.
///
/// Two walkers with the same name are still different entities; fields
/// key their positions by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalkerId(pub Uuid);

impl WalkerId {
    /// Creates a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a deterministic id from a seed.
    pub fn from_seed(seed: u64) -> Self {
        let mut bytes = [0u8; 16];
        bytes[0..8].copy_from_slice(&seed.to_le_bytes());
        bytes[8..16].copy_from_slice(&seed.wrapping_mul(0x517cc1b727220a95).to_le_bytes());
        Self(Uuid::from_bytes(bytes))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for WalkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A named agent that moves according to its step source.
///
/// Clones share the id, so a clone is the same walker as far as a
/// [`Field`](crate::Field) is concerned.
#[derive(Debug, Clone)]
pub struct Walker<S = StepPolicy> {
    id: WalkerId,
    name: String,
    source: S,
}

impl<S: StepSource> Walker<S> {
    /// Creates a walker with a fresh identity.
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self::with_id(WalkerId::new(), name, source)
    }

    /// Creates a walker with a caller-chosen identity.
    pub fn with_id(id: WalkerId, name: impl Into<String>, source: S) -> Self {
        Self {
            id,
            name: name.into(),
            source,
        }
    }

    pub fn id(&self) -> WalkerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draws one step from the walker's policy.
    pub fn take_step<R: Rng + ?Sized>(&self, rng: &mut R) -> Step {
        self.source.take_step(rng)
    }
}

impl<S> PartialEq for Walker<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S> Eq for Walker<S> {}

impl<S> fmt::Display for Walker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "walker \"{}\"", self.name)
    }
}
