//! The majority rule used to pick leaf labels and
//! the default label of a partition.
use rand::prelude::*;

use std::cmp::Ordering;

use crate::Label;


/// Seed used when no seed is given.
pub(crate) const DEFAULT_SEED: u64 = 1234;


/// How to resolve a tie between the `yes` and `no` counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Flip a fair coin drawn from a random source seeded with `seed`.
    Random {
        /// Seed of the random source.
        seed: u64,
    },
    /// Always return the given label.
    Prefer(Label),
}


impl Default for TieBreak {
    fn default() -> Self {
        Self::Random { seed: DEFAULT_SEED }
    }
}


/// The majority rule together with the state of its tie-breaker.
pub(super) enum Majority {
    Random(StdRng),
    Prefer(Label),
}


impl Majority {
    pub(super) fn new(tie_break: TieBreak) -> Self {
        match tie_break {
            TieBreak::Random { seed } => {
                Self::Random(StdRng::seed_from_u64(seed))
            },
            TieBreak::Prefer(label) => Self::Prefer(label),
        }
    }


    /// Returns the most frequent label.
    /// Equal counts (including `0` vs `0`) go to the tie-breaker.
    pub(super) fn mode(&mut self, yes: usize, no: usize) -> Label {
        match yes.cmp(&no) {
            Ordering::Greater => Label::Yes,
            Ordering::Less => Label::No,
            Ordering::Equal => self.break_tie(),
        }
    }


    fn break_tie(&mut self) -> Label {
        match self {
            Self::Random(rng) => {
                if rng.gen_bool(0.5) { Label::Yes } else { Label::No }
            },
            Self::Prefer(label) => *label,
        }
    }
}
