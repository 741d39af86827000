//! Result files: the tree, the test accuracies, and
//! the cross-validation accuracies.
use std::fs;
use std::path::Path;

use crate::{DecisionTreeClassifier, Result};
use super::accuracy::format_accuracy;


/// Accuracies of the decision tree, KNN, and Naive Bayes, in this order.
pub type Accuracies = [f64; 3];


/// Returns the line `dt\tknn\tnb` without a trailing newline.
pub fn accuracy_line(accuracies: &Accuracies) -> String {
    accuracies.iter()
        .map(|&acc| format_accuracy(acc))
        .collect::<Vec<_>>()
        .join("\t")
}


/// Writes the tree followed by the accuracy line.
pub fn write_output<P>(
    path: P,
    tree: &DecisionTreeClassifier,
    accuracies: &Accuracies,
) -> Result<()>
    where P: AsRef<Path>
{
    let contents = format!("{tree}{}", accuracy_line(accuracies));
    fs::write(path, contents)?;
    Ok(())
}


/// Writes the tree alone.
pub fn write_tree<P>(path: P, tree: &DecisionTreeClassifier) -> Result<()>
    where P: AsRef<Path>
{
    tree.to_text_file(path)
}


/// Writes the accuracy line alone.
pub fn write_accuracy<P>(path: P, accuracies: &Accuracies) -> Result<()>
    where P: AsRef<Path>
{
    fs::write(path, accuracy_line(accuracies))?;
    Ok(())
}
