//! Exports the standard learners, classifiers, and traits.
//!
pub use crate::learner::{
    // Learner trait
    Learner,


    // Decision tree ----------------------------
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TieBreak,


    // KNN --------------------------------------
    Knn,
    KnnClassifier,


    // Naive Bayes ------------------------------
    NBayes,
    NBayesClassifier,
};


pub use crate::classifier::Classifier;


pub use crate::sample::{
    Label,
    Sample,
    SampleReader,
};


pub use crate::error::{Error, Result};
