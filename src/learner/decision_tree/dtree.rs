use crate::{Label, Learner, Result, Sample};
use crate::sample::label::count_labels;


use super::{
    criterion::best_feature,
    majority::*,
    node::Node,
    value_index::FeatureValueIndex,
    dtree_classifier::DecisionTreeClassifier,
};


use std::collections::BTreeMap;


/// Generates a `DecisionTreeClassifier` by the ID3 algorithm.
/// Use [`DecisionTreeBuilder`](super::DecisionTreeBuilder)
/// to change the tie-breaking rule.
///
/// # Example
/// ```no_run
/// use miniclassifiers::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("train.txt")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new()
///     .seed(777)
///     .build();
/// let f = tree.produce(&sample).unwrap();
/// println!("{f}");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionTree {
    tie_break: TieBreak,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`] with the given tie-breaking rule.
    #[inline]
    pub(super) fn from_components(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }


    /// Returns the tie-breaking rule of the majority vote.
    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}


impl Learner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree (ID3)"
    }


    /// This method computes as follows;
    /// 1. collect the values of each feature over the whole sample,
    /// 2. grow the tree from the root, splitting on the feature
    ///     of maximal information gain.
    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        let (n_sample, n_feature) = sample.shape();
        let index = FeatureValueIndex::new(sample);
        let mut majority = Majority::new(self.tie_break);

        let (yes, no) = count_labels(sample.target());
        let default = majority.mode(yes, no);

        let rows = (0..n_sample).collect::<Vec<_>>();
        let attributes = (0..n_feature).collect::<Vec<_>>();

        let root = Id3 { sample, index: &index, majority: &mut majority, }
            .grow(rows, &attributes[..], default);

        Ok(DecisionTreeClassifier::from_components(root, index))
    }
}


/// State shared by the recursive calls of ID3.
struct Id3<'a> {
    sample: &'a Sample,
    index: &'a FeatureValueIndex,
    majority: &'a mut Majority,
}


impl Id3<'_> {
    /// Grows the subtree for the examples `rows`
    /// using the features in `attributes`.
    /// `default` is the label of an empty partition.
    fn grow(&mut self, rows: Vec<usize>, attributes: &[usize], default: Label)
        -> Node
    {
        if rows.is_empty() {
            return Node::leaf(default);
        }

        let sample = self.sample;
        let target = sample.target();
        let (yes, no) = count_labels(rows.iter().map(|&i| &target[i]));

        // Pure partition.
        if no == 0 {
            return Node::leaf(Label::Yes);
        }
        if yes == 0 {
            return Node::leaf(Label::No);
        }

        let Some(best) = best_feature(sample, &rows[..], attributes)
        else {
            // No feature left.
            return Node::leaf(self.majority.mode(yes, no));
        };


        let rest = attributes.iter()
            .copied()
            .filter(|&feature| feature != best)
            .collect::<Vec<_>>();


        // Every recorded value gets a child,
        // even if no example in `rows` takes it.
        let examples = sample.examples();
        let index = self.index;
        let mut children = BTreeMap::new();
        for value in index.values(best) {
            let sub_rows = rows.iter()
                .copied()
                .filter(|&i| examples[i][best] == *value)
                .collect::<Vec<_>>();

            let (sub_yes, sub_no) = count_labels(
                sub_rows.iter().map(|&i| &target[i])
            );
            let sub_default = self.majority.mode(sub_yes, sub_no);

            let child = self.grow(sub_rows, &rest[..], sub_default);
            children.insert(value.clone(), child);
        }


        Node::branch(index.name(best).to_string(), best, children, default)
    }
}
