//! This directory provides the evaluation tools
//! shared by every classifier.
//! - Truncated accuracy
//! - k-fold cross validation
//! - Result files

/// Defines the accuracy and its truncation.
pub mod accuracy;

/// Provides an iterator over train/test pairs.
pub mod cross_validation;

/// Writes the tree and the accuracies to files.
pub mod report;


pub use accuracy::{
    accuracy,
    truncate,
    format_accuracy,
};

pub use cross_validation::{
    CrossValidation,
    CrossValidationReport,
    cross_validate,
};

pub use report::{
    Accuracies,
    accuracy_line,
    write_output,
    write_tree,
    write_accuracy,
};
