//! The files in `learner/` directory defines
//! `Learner` trait and the three learners.

/// Provides Learner trait.
pub mod core;

/// Defines the ID3 decision tree.
pub mod decision_tree;

/// Defines k-nearest neighbors over categorical values.
pub mod knn;

/// Defines Naive Bayes over categorical values.
pub mod naive_bayes;


pub use self::core::Learner;

pub use self::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    FeatureValueIndex,
    Node,
    TieBreak,
};

pub use self::knn::{
    Knn,
    KnnClassifier,
};

pub use self::naive_bayes::{
    NBayes,
    NBayesClassifier,
};
