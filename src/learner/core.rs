//! The core library for the learners.
//!
//! A learner receives a training sample and returns a classifier.
//! All the work happens eagerly inside `produce`,
//! so the returned classifier never changes afterwards.
use crate::{Classifier, Result, Sample};


/// A trait that defines the behavor of learner.
/// You only need to implement `produce` and `name` methods.
pub trait Learner {
    /// The classifier produced by this learner.
    type Hypothesis: Classifier;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Trains a classifier on `sample`.
    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis>;
}
