use crate::{Error, Learner, Result, Sample};

use super::knn_classifier::KnnClassifier;


/// The number of neighbors set as default.
pub const DEFAULT_NEIGHBORS: usize = 5;


/// A factory that produces a `KnnClassifier`.
/// KNN is a lazy learner; `produce` only stores the training sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knn {
    k: usize,
}


impl Default for Knn {
    fn default() -> Self {
        Self { k: DEFAULT_NEIGHBORS }
    }
}


impl Knn {
    /// Initializes the `Knn` instance that votes among `k` neighbors.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidParameter(
                "the number of neighbors must be positive".to_string()
            ));
        }
        Ok(Self { k })
    }


    /// Returns the number of neighbors.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }
}


impl Learner for Knn {
    type Hypothesis = KnnClassifier;


    fn name(&self) -> &str {
        "K-Nearest Neighbors"
    }


    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        if sample.is_empty() {
            return Err(Error::NoData(
                "KNN needs at least one training example".to_string()
            ));
        }
        Ok(KnnClassifier::from_components(
            self.k,
            sample.features().len(),
            sample.examples().to_vec(),
            sample.target().to_vec(),
        ))
    }
}
