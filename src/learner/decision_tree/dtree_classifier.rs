//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::{self, File};
use std::io::prelude::*;

use crate::{Classifier, Error, Label, Result};
use super::node::*;
use super::value_index::FeatureValueIndex;


/// Decision tree classifier.
/// This struct owns the root `Node` and
/// the feature-value index the tree was grown with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    index: FeatureValueIndex,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_components(root: Node, index: FeatureValueIndex)
        -> Self
    {
        Self { root, index }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the feature-value index recorded at training time.
    #[inline]
    pub fn feature_values(&self) -> &FeatureValueIndex {
        &self.index
    }


    /// Writes the current decision tree in the indented text format.
    pub fn to_text_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        fs::write(path, self.to_string())?;
        Ok(())
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Serializes the classifier to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }


    /// Deserializes a classifier from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict<S>(&self, example: &[S]) -> Result<Label>
        where S: AsRef<str>
    {
        let n_feature = self.index.len();
        if example.len() != n_feature {
            return Err(Error::ShapeMismatch {
                expected: n_feature,
                got: example.len(),
            });
        }
        self.root.predict(example)
    }
}


/// The indented text format.
/// Root edges read `feature=value`, deeper edges are indented by tabs
/// and prefixed by `|`, and edges into leaves end with `:label`.
/// A tree that is a single leaf renders as the empty string.
impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_edges(f, 0, true)
    }
}
