#![warn(missing_docs)]

//!
//! A crate that provides three classic classifiers
//! for tables of categorical features with a `yes`/`no` label.
//!
//! - Decision tree
//!     `DecisionTree` grows a multi-way tree by the ID3 algorithm,
//!     splitting on the feature of maximal information gain.
//!     The resulting `DecisionTreeClassifier` can be written
//!     in an indented text format, as a dot file, or as JSON.
//!
//! - k-nearest neighbors
//!     `Knn` votes among the training examples
//!     of smallest Hamming distance.
//!
//! - Naive Bayes
//!     `NBayes` multiplies conditional probabilities
//!     estimated from frequency counts.
//!
//! Every learner implements [`Learner`] and every classifier
//! implements [`Classifier`], so the tools in [`research`]
//! (truncated accuracy, cross validation, result files)
//! work with all of them.

pub mod error;
pub mod sample;
pub mod classifier;
pub mod learner;
pub mod research;
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{Label, Sample, SampleReader};

pub use classifier::Classifier;

pub use learner::{
    Learner,

    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    FeatureValueIndex,
    Node,
    TieBreak,

    // KNN
    Knn,
    KnnClassifier,

    // Naive Bayes
    NBayes,
    NBayesClassifier,
};

pub use research::{
    CrossValidation,
    CrossValidationReport,
    cross_validate,
};
