use rayon::prelude::*;

use serde::{
    Serialize,
    Deserialize,
};

use std::collections::BTreeMap;

use crate::{Label, Sample};


/// Conditional probabilities `P(value | yes)` and `P(value | no)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    /// `P(value | yes)`.
    pub yes: f64,
    /// `P(value | no)`.
    pub no: f64,
}


/// The conditional probabilities of every value of a single feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalTable {
    pub(super) feature: String,
    pub(super) table: BTreeMap<String, Conditional>,
}


impl ConditionalTable {
    /// Returns the feature name.
    #[inline]
    pub fn feature(&self) -> &str {
        &self.feature
    }


    /// Returns the conditional probabilities of `value`,
    /// or `None` if `value` was never observed.
    #[inline]
    pub fn get<S: AsRef<str>>(&self, value: S) -> Option<Conditional> {
        self.table.get(value.as_ref()).copied()
    }


    /// Counts the `feature`-th column of `sample`
    /// and divides by the class totals `n_yes` and `n_no`.
    /// Both totals must be positive.
    fn from_column(sample: &Sample, feature: usize, n_yes: usize, n_no: usize)
        -> Self
    {
        let mut counter: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        sample.examples()
            .iter()
            .zip(sample.target())
            .for_each(|(x, y)| {
                let cnt = counter.entry(x[feature].as_str())
                    .or_insert((0, 0));
                match y {
                    Label::Yes => cnt.0 += 1,
                    Label::No => cnt.1 += 1,
                }
            });

        let table = counter.into_iter()
            .map(|(value, (yes, no))| {
                let cond = Conditional {
                    yes: yes as f64 / n_yes as f64,
                    no: no as f64 / n_no as f64,
                };
                (value.to_string(), cond)
            })
            .collect();

        let feature = sample.features()[feature].clone();
        Self { feature, table }
    }
}


/// Builds a table for every feature of `sample`.
pub(super) fn conditional_tables(sample: &Sample, n_yes: usize, n_no: usize)
    -> Vec<ConditionalTable>
{
    let n_feature = sample.features().len();
    (0..n_feature).into_par_iter()
        .map(|j| ConditionalTable::from_column(sample, j, n_yes, n_no))
        .collect::<Vec<_>>()
}
