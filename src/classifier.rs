//! The classifier trait shared by the decision tree, KNN,
//! and Naive Bayes models.
//!
//! A classifier is produced once from a training sample
//! and is read-only afterwards.
use rayon::prelude::*;

use crate::{Label, Result, Sample};
use crate::research::accuracy;


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of a single example.
    /// The example must hold one value per training feature,
    /// in feature-index order.
    fn predict<S>(&self, example: &[S]) -> Result<Label>
        where S: AsRef<str>;


    /// Predicts the label of the `row`-th example of `sample`.
    fn predict_row(&self, sample: &Sample, row: usize) -> Result<Label> {
        self.predict(&sample.examples()[row][..])
    }


    /// Predicts the labels of `sample`.
    /// The labels are returned in the order of the examples.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<Label>>
        where Self: Sync
    {
        sample.examples()
            .par_iter()
            .map(|example| self.predict(&example[..]))
            .collect::<Result<Vec<_>>>()
    }


    /// Predicts `sample` and returns the accuracy against its labels,
    /// truncated to two decimal digits.
    fn accuracy(&self, sample: &Sample) -> Result<f64>
        where Self: Sync
    {
        let predictions = self.predict_all(sample)?;
        accuracy(&predictions, sample.target())
    }
}
