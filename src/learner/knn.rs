/// Defines the KNN learner.
mod kneighbors;
/// Defines the classifier returned by `Knn`.
mod knn_classifier;

pub use kneighbors::Knn;
pub use knn_classifier::{KnnClassifier, hamming_distance};
