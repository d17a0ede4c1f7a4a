//! The field: where each walker currently stands.

use crate::error::WalkError;
use crate::position::Position;
use crate::step_policy::StepSource;
use crate::walker::{Walker, WalkerId};
use rand::Rng;
use std::collections::HashMap;

/// Registry of walker positions for a single trial.
///
/// Walkers must be added exactly once before they can be moved or queried.
/// Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// Positions in registration order
    positions: Vec<(WalkerId, Position)>,

    /// Walker id -> slot in `positions`
    index: HashMap<WalkerId, usize>,
}

impl Field {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `walker` at `position`.
    pub fn add_walker<S: StepSource>(
        &mut self,
        walker: &Walker<S>,
        position: Position,
    ) -> Result<(), WalkError> {
        let id = walker.id();
        if self.index.contains_key(&id) {
            return Err(WalkError::DuplicateWalker(id));
        }

        self.index.insert(id, self.positions.len());
        self.positions.push((id, position));
        Ok(())
    }

    /// Takes one step for `walker` and stores the resulting position.
    pub fn move_walker<S: StepSource, R: Rng + ?Sized>(
        &mut self,
        walker: &Walker<S>,
        rng: &mut R,
    ) -> Result<(), WalkError> {
        let slot = self.slot(walker.id())?;
        let (delta_x, delta_y) = walker.take_step(rng);

        let entry = &mut self.positions[slot].1;
        *entry = entry.move_by(delta_x, delta_y);
        Ok(())
    }

    /// Returns the current position of `walker`.
    pub fn position<S>(&self, walker: &Walker<S>) -> Result<Position, WalkError>
    where
        S: StepSource,
    {
        let slot = self.slot(walker.id())?;
        Ok(self.positions[slot].1)
    }

    /// Returns true if `walker` is registered.
    pub fn contains<S: StepSource>(&self, walker: &Walker<S>) -> bool {
        self.index.contains_key(&walker.id())
    }

    /// Iterates over `(id, position)` pairs in registration order.
    pub fn walkers(&self) -> impl Iterator<Item = (WalkerId, Position)> + '_ {
        self.positions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn slot(&self, id: WalkerId) -> Result<usize, WalkError> {
        self.index.get(&id).copied().ok_or(WalkError::UnknownWalker(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step_policy::StepPolicy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut field = Field::new();
        let homer = Walker::new("Homer", StepPolicy::Usual);

        field.add_walker(&homer, Position::origin()).unwrap();
        let err = field.add_walker(&homer, Position::new(1.0, 1.0)).unwrap_err();

        assert_eq!(err, WalkError::DuplicateWalker(homer.id()));
        assert_eq!(field.position(&homer).unwrap(), Position::origin());
    }

    #[test]
    fn test_unknown_walker_rejected() {
        let mut field = Field::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let stranger = Walker::new("Barney", StepPolicy::Usual);

        assert_eq!(
            field.position(&stranger),
            Err(WalkError::UnknownWalker(stranger.id()))
        );
        assert_eq!(
            field.move_walker(&stranger, &mut rng),
            Err(WalkError::UnknownWalker(stranger.id()))
        );
    }

    #[test]
    fn test_move_applies_one_step() {
        let mut field = Field::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let homer = Walker::new("Homer", StepPolicy::Usual);

        field.add_walker(&homer, Position::new(5.0, 5.0)).unwrap();
        field.move_walker(&homer, &mut rng).unwrap();

        let moved = field.position(&homer).unwrap();
        assert_eq!(moved.distance_from(&Position::new(5.0, 5.0)), 1.0);
    }

    #[test]
    fn test_same_name_walkers_tracked_separately() {
        let mut field = Field::new();
        let a = Walker::new("Homer", StepPolicy::Usual);
        let b = Walker::new("Homer", StepPolicy::Usual);

        field.add_walker(&a, Position::origin()).unwrap();
        field.add_walker(&b, Position::new(2.0, 0.0)).unwrap();

        assert_eq!(field.len(), 2);
        assert_eq!(field.position(&b).unwrap(), Position::new(2.0, 0.0));
    }

    #[test]
    fn test_walkers_in_registration_order() {
        let mut field = Field::new();
        let walkers: Vec<_> = (0..4)
            .map(|i| Walker::with_id(WalkerId::from_seed(10 - i), "w", StepPolicy::Photo))
            .collect();

        for (i, w) in walkers.iter().enumerate() {
            field.add_walker(w, Position::new(i as f64, 0.0)).unwrap();
        }

        let order: Vec<WalkerId> = field.walkers().map(|(id, _)| id).collect();
        let expected: Vec<WalkerId> = walkers.iter().map(|w| w.id()).collect();
        assert_eq!(order, expected);
    }
}
