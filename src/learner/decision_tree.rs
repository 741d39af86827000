/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the entropy and information-gain scores.
pub mod criterion;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;
mod value_index;
mod majority;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use majority::TieBreak;
pub use node::Node;
pub use value_index::{FeatureValueIndex, FeatureValues};
