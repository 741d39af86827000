//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use crate::{Error, Label, Result};


/// Enumeration of branch and leaf nodes.
/// A branch node owns one child per value recorded
/// for its feature at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on a feature.
    Branch {
        /// Name of the splitting feature.
        feature: String,
        /// Column position of the splitting feature.
        index: usize,
        /// A child for every recorded value of `feature`.
        children: BTreeMap<String, Node>,
        /// Majority label of the examples this node was built from.
        default: Label,
    },


    /// A node that have no child.
    Leaf {
        /// The predicted label.
        label: Label,
    },
}


impl Node {
    /// Returns a branch node.
    #[inline]
    pub(super) fn branch(
        feature: String,
        index: usize,
        children: BTreeMap<String, Node>,
        default: Label,
    ) -> Self
    {
        Self::Branch { feature, index, children, default, }
    }


    /// Returns a leaf node that predicts `label`.
    #[inline]
    pub(super) fn leaf(label: Label) -> Self {
        Self::Leaf { label }
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the depth of the subtree rooted at `self`.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves of the subtree rooted at `self`.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.values().map(Node::n_leaves).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Walks down from `self` following `example` and
    /// returns the label of the reached leaf.
    pub(super) fn predict<S>(&self, example: &[S]) -> Result<Label>
        where S: AsRef<str>
    {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => return Ok(*label),
                Self::Branch { feature, index, children, .. } => {
                    let value = example.get(*index)
                        .ok_or(Error::ShapeMismatch {
                            expected: index + 1,
                            got: example.len(),
                        })?
                        .as_ref();

                    node = children.get(value)
                        .ok_or_else(|| Error::UnknownValue {
                            feature: feature.clone(),
                            value: value.to_string(),
                        })?;
                },
            }
        }
    }


    /// Writes the edges below `self` in the indented text format.
    /// The edges of the root have neither indentation nor `|`;
    /// the other edges are prefixed by `depth` tabs and `|`.
    /// An edge into a leaf always reads `|feature=value:label`.
    pub(super) fn write_edges<W>(&self, f: &mut W, depth: usize, is_root: bool)
        -> fmt::Result
        where W: fmt::Write
    {
        let Self::Branch { feature, children, .. } = self else {
            return Ok(());
        };

        for (value, child) in children {
            write_tabs(f, depth)?;
            match child {
                Self::Leaf { label } => {
                    writeln!(f, "|{feature}={value}:{label}")?;
                },
                Self::Branch { .. } => {
                    let bar = if is_root { "" } else { "|" };
                    writeln!(f, "{bar}{feature}={value}")?;
                    child.write_edges(f, depth + 1, false)?;
                },
            }
        }
        Ok(())
    }


    /// Returns the Graphviz statements of the subtree rooted at `self`
    /// and the next unused node id.
    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { feature, children, .. } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feat} ?\" ];\n",
                    feat = escape(feature),
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);

                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{v}\" ];\n",
                        v = escape(value),
                    );
                    info.push(edge);
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


#[inline]
fn write_tabs<W: fmt::Write>(f: &mut W, depth: usize) -> fmt::Result {
    (0..depth).try_for_each(|_| f.write_char('\t'))
}


#[inline]
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
