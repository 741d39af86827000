/// Defines Naive Bayes learner.
mod nbayes;
/// Defines Naive Bayes Classifiers returned by `NBayes`.
mod nbayes_classifier;

/// Defines the conditional probability tables.
mod probability;

pub use nbayes::NBayes;
pub use nbayes_classifier::NBayesClassifier;
pub use probability::{Conditional, ConditionalTable};
