use crate::Label;
use super::{
    dtree::DecisionTree,
    majority::{TieBreak, DEFAULT_SEED},
};


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use miniclassifiers::prelude::*;
///
/// let learner = DecisionTreeBuilder::new()
///     .tie_break(TieBreak::Prefer(Label::Yes))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct DecisionTreeBuilder {
    tie_break: TieBreak,
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// tie_break: TieBreak::Random { seed: 1234 },
    /// ```
    pub fn new() -> Self {
        let tie_break = TieBreak::Random { seed: DEFAULT_SEED };
        Self { tie_break }
    }


    /// Set the rule that resolves `yes`/`no` ties of the majority vote.
    #[inline]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }


    /// Break ties by a fair coin seeded with `seed`.
    #[inline]
    pub fn seed(self, seed: u64) -> Self {
        self.tie_break(TieBreak::Random { seed })
    }


    /// Break ties in favor of `label`.
    #[inline]
    pub fn prefer(self, label: Label) -> Self {
        self.tie_break(TieBreak::Prefer(label))
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.tie_break)
    }
}
