//! For every feature, its column position and
//! the sorted set of values observed in training.
use serde::{Serialize, Deserialize};

use std::collections::BTreeSet;

use crate::Sample;


/// The values observed for a single feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureValues {
    /// Feature name.
    pub name: String,
    /// Column position of the feature.
    pub index: usize,
    /// Distinct values, sorted lexicographically.
    pub values: Vec<String>,
}


/// Feature-value index computed once from the whole training sample.
/// Child partitions of the tree share this index,
/// so a node always gets a child for every observed value
/// even if its own partition lacks some of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureValueIndex {
    columns: Vec<FeatureValues>,
}


impl FeatureValueIndex {
    /// Collects the distinct values of each column of `sample`.
    pub fn new(sample: &Sample) -> Self {
        let columns = sample.features()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let values = sample.examples()
                    .iter()
                    .map(|example| example[index].as_str())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>();

                FeatureValues { name: name.clone(), index, values }
            })
            .collect();

        Self { columns }
    }


    /// Returns the column position and the sorted values
    /// of the feature named `name`.
    pub fn get<S: AsRef<str>>(&self, name: S) -> Option<(usize, &[String])> {
        let name = name.as_ref();
        self.columns.iter()
            .find(|col| col.name == name)
            .map(|col| (col.index, &col.values[..]))
    }


    /// Returns the sorted values of the `index`-th feature.
    #[inline]
    pub fn values(&self, index: usize) -> &[String] {
        &self.columns[index].values[..]
    }


    /// Returns the name of the `index`-th feature.
    #[inline]
    pub fn name(&self, index: usize) -> &str {
        &self.columns[index].name
    }


    /// Returns the number of features.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }


    /// Returns `true` if there is no feature.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }


    /// Iterates over the features in column order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureValues> {
        self.columns.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_sorted_and_distinct() {
        let bytes = b"\
            color\tsize\tclass\n\
            red\tS\tyes\n\
            blue\tL\tno\n\
            red\tM\tyes\n\
            green\tS\tno\n";
        let sample = Sample::from_reader(&bytes[..], true).unwrap();
        let index = FeatureValueIndex::new(&sample);

        assert_eq!(index.len(), 2);
        let (i, values) = index.get("color").unwrap();
        assert_eq!(i, 0);
        assert_eq!(values, &["blue", "green", "red"]);
        assert_eq!(index.values(1), &["L", "M", "S"]);
        assert_eq!(index.name(1), "size");
        assert!(index.get("class").is_none());
    }
}
