use serde::{Deserialize, Serialize};

/// Orientation of a single lattice spin
///
/// Maps to +1 (Up) / -1 (Down) for energy arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Up,
    Down,
}

impl Orientation {
    /// Spin value used in the interaction energy
    pub fn value(self) -> i32 {
        match self {
            Orientation::Up => 1,
            Orientation::Down => -1,
        }
    }

    /// The opposite orientation
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
        }
    }
}

/// A double-buffered lattice cell
///
/// One slot is active and read by `current()`; `stage()` writes the other
/// slot, and `commit()` swaps which slot is active. Decisions made during a
/// sweep therefore all read the same frozen snapshot of the lattice, and the
/// staged values become visible simultaneously at sweep end.
#[derive(Debug, Clone)]
pub struct Spin {
    slots: [Orientation; 2],
    active: usize,
}

impl Spin {
    /// Create a spin with both slots holding `initial`, so a commit before
    /// any stage leaves the value unchanged.
    pub fn new(initial: Orientation) -> Self {
        Self {
            slots: [initial, initial],
            active: 0,
        }
    }

    /// The committed orientation
    pub fn current(&self) -> Orientation {
        self.slots[self.active]
    }

    /// Write `next` into the inactive slot; invisible until `commit()`.
    /// Staging twice before a commit overwrites the earlier value.
    pub fn stage(&mut self, next: Orientation) {
        self.slots[1 - self.active] = next;
    }

    /// Swap active/inactive slots, making the last staged value current
    pub fn commit(&mut self) {
        self.active = 1 - self.active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_does_not_affect_current() {
        let mut spin = Spin::new(Orientation::Down);
        spin.stage(Orientation::Up);
        assert_eq!(spin.current(), Orientation::Down);
    }

    #[test]
    fn test_commit_applies_staged_value() {
        let mut spin = Spin::new(Orientation::Down);
        spin.stage(Orientation::Up);
        spin.commit();
        assert_eq!(spin.current(), Orientation::Up);
    }

    #[test]
    fn test_last_stage_wins() {
        let mut spin = Spin::new(Orientation::Down);
        spin.stage(Orientation::Up);
        spin.stage(Orientation::Down);
        spin.commit();
        assert_eq!(spin.current(), Orientation::Down);
    }

    #[test]
    fn test_commit_without_stage_keeps_value() {
        let mut spin = Spin::new(Orientation::Up);
        spin.commit();
        assert_eq!(spin.current(), Orientation::Up);
    }

    #[test]
    fn test_stage_commit_cycles() {
        let mut spin = Spin::new(Orientation::Down);
        for _ in 0..4 {
            let next = spin.current().flipped();
            spin.stage(next);
            spin.commit();
            assert_eq!(spin.current(), next);
        }
    }

    #[test]
    fn test_orientation_values() {
        assert_eq!(Orientation::Up.value(), 1);
        assert_eq!(Orientation::Down.value(), -1);
        assert_eq!(Orientation::Up.flipped(), Orientation::Down);
        assert_eq!(Orientation::Down.flipped(), Orientation::Up);
    }
}
