use rayon::prelude::*;

use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Error, Label, Result};


/// k-nearest neighbors classifier over categorical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnClassifier {
    k: usize,
    n_feature: usize,
    examples: Vec<Vec<String>>,
    target: Vec<Label>,
}


impl KnnClassifier {
    #[inline]
    pub(super) fn from_components(
        k: usize,
        n_feature: usize,
        examples: Vec<Vec<String>>,
        target: Vec<Label>,
    ) -> Self
    {
        Self { k, n_feature, examples, target }
    }


    /// Returns the labels of the `k` nearest training examples,
    /// closest first.
    /// Training examples at the same distance keep the training order.
    pub fn neighbors<S>(&self, example: &[S]) -> Result<Vec<Label>>
        where S: AsRef<str> + Sync
    {
        if example.len() != self.n_feature {
            return Err(Error::ShapeMismatch {
                expected: self.n_feature,
                got: example.len(),
            });
        }

        let mut distances = self.examples.par_iter()
            .zip(&self.target[..])
            .map(|(x, &y)| (hamming_distance(example, x), y))
            .collect::<Vec<_>>();

        // `sort_by_key` is stable.
        distances.sort_by_key(|&(d, _)| d);

        let labels = distances.into_iter()
            .take(self.k)
            .map(|(_, y)| y)
            .collect();
        Ok(labels)
    }
}


impl Classifier for KnnClassifier {
    fn predict<S>(&self, example: &[S]) -> Result<Label>
        where S: AsRef<str>
    {
        let example = example.iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>();
        let (yes, no) = self.neighbors(&example[..])?
            .into_iter()
            .fold((0, 0), |(yes, no), y| match y {
                Label::Yes => (yes + 1, no),
                Label::No => (yes, no + 1),
            });

        // `yes` wins ties.
        let label = if yes >= no { Label::Yes } else { Label::No };
        Ok(label)
    }
}


/// Returns the number of positions at which `a` and `b` differ.
/// Only the common prefix is compared.
#[inline]
pub fn hamming_distance<S, T>(a: &[S], b: &[T]) -> usize
    where S: AsRef<str>,
          T: AsRef<str>,
{
    a.iter()
        .zip(b)
        .filter(|(x, y)| x.as_ref() != y.as_ref())
        .count()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn hamming_counts_differences() {
        assert_eq!(hamming_distance(&["a", "b", "c"], &["a", "x", "y"]), 2);
        assert_eq!(hamming_distance(&["a"], &["a"]), 0);
    }

    #[test]
    fn nearest_first_and_stable() {
        let examples = strings(&[
            &["a", "b"],
            &["x", "y"],
            &["a", "y"],
            &["a", "b"],
        ]);
        let target = vec![Label::No, Label::No, Label::Yes, Label::Yes];
        let f = KnnClassifier::from_components(3, 2, examples, target);

        let labels = f.neighbors(&["a", "b"]).unwrap();
        assert_eq!(labels, vec![Label::No, Label::Yes, Label::Yes]);
        assert_eq!(f.predict(&["a", "b"]).unwrap(), Label::Yes);
    }

    #[test]
    fn yes_wins_ties() {
        let examples = strings(&[&["a"], &["b"]]);
        let target = vec![Label::No, Label::Yes];
        let f = KnnClassifier::from_components(2, 1, examples, target);
        assert_eq!(f.predict(&["c"]).unwrap(), Label::Yes);
    }

    #[test]
    fn k_larger_than_sample_uses_all() {
        let examples = strings(&[&["a"], &["b"], &["b"]]);
        let target = vec![Label::Yes, Label::No, Label::No];
        let f = KnnClassifier::from_components(10, 1, examples, target);
        assert_eq!(f.predict(&["a"]).unwrap(), Label::No);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let examples = strings(&[&["a", "b"]]);
        let f = KnnClassifier::from_components(1, 2, examples, vec![Label::Yes]);
        assert!(matches!(
            f.predict(&["a"]),
            Err(Error::ShapeMismatch { expected: 2, got: 1 })
        ));
    }
}
