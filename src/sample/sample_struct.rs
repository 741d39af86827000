use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::label::Label;
use crate::{Error, Result};


/// Name given to the label column when the file has no header.
const DEFAULT_TARGET: &str = "class";


/// Struct `Sample` holds a batch of categorical examples
/// together with their `yes`/`no` labels.
///
/// Every example has exactly one value per feature,
/// stored in feature-index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) features: Vec<String>,
    pub(super) target_name: String,
    pub(super) examples: Vec<Vec<String>>,
    pub(super) target: Vec<Label>,
}


impl Sample {
    /// Construct a new `Sample` from feature names, examples, and labels.
    /// Returns `Error::ShapeMismatch` if the lengths disagree.
    pub fn new(
        features: Vec<String>,
        examples: Vec<Vec<String>>,
        target: Vec<Label>,
    ) -> Result<Self>
    {
        if examples.len() != target.len() {
            return Err(Error::ShapeMismatch {
                expected: examples.len(),
                got: target.len(),
            });
        }
        let n_feature = features.len();
        if let Some(x) = examples.iter().find(|x| x.len() != n_feature) {
            return Err(Error::ShapeMismatch {
                expected: n_feature,
                got: x.len(),
            });
        }

        let target_name = DEFAULT_TARGET.to_string();
        Ok(Self { features, target_name, examples, target })
    }


    /// Read a tab-separated file to `Sample` type.
    /// The first line of the file is the header.
    pub fn from_tsv<P>(file: P) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), true)
    }


    /// Read tab-separated rows from `reader`.
    /// Each row consists of the feature values followed by the label.
    /// If `has_header` is `false`, dummy feature names are generated.
    pub fn from_reader<R>(reader: R, has_header: bool) -> Result<Self>
        where R: BufRead,
    {
        let mut lines = reader.lines().enumerate();

        let mut header: Option<Vec<String>> = None;
        if has_header {
            match lines.next() {
                Some((_, line)) => {
                    let line = line?;
                    let names = split_row(&line)
                        .map(str::to_string)
                        .collect::<Vec<_>>();
                    header = Some(names);
                },
                None => {
                    return Err(Error::parse(1, "missing header line"));
                },
            }
        }

        let mut examples = Vec::new();
        let mut target = Vec::new();

        for (i, line) in lines {
            let line = line?;
            let lineno = i + 1;
            if line.trim().is_empty() { continue; }

            let mut words = split_row(&line)
                .map(str::to_string)
                .collect::<Vec<_>>();

            // if the header does not exist,
            // construct a dummy header from the first row.
            let n_column = header.get_or_insert_with(|| {
                    dummy_header(words.len())
                })
                .len();

            if words.len() != n_column {
                return Err(Error::parse(
                    lineno,
                    format!(
                        "expected {n_column} columns, got {}",
                        words.len()
                    ),
                ));
            }
            if n_column < 2 {
                return Err(Error::parse(
                    lineno,
                    "a row needs at least one feature and a label",
                ));
            }

            let label = words.pop()
                .ok_or_else(|| Error::parse(lineno, "empty row"))?;
            target.push(Label::parse_at(&label, lineno)?);
            examples.push(words);
        }

        let mut features = header.unwrap_or_default();
        let target_name = features.pop()
            .unwrap_or_else(|| DEFAULT_TARGET.to_string());

        Ok(Self { features, target_name, examples, target })
    }


    /// Returns the feature names (the label column excluded).
    #[inline]
    pub fn features(&self) -> &[String] {
        &self.features[..]
    }


    /// Returns the name of the label column.
    #[inline]
    pub fn target_name(&self) -> &str {
        &self.target_name
    }


    /// Returns the examples.
    #[inline]
    pub fn examples(&self) -> &[Vec<String>] {
        &self.examples[..]
    }


    /// Returns the labels.
    #[inline]
    pub fn target(&self) -> &[Label] {
        &self.target[..]
    }


    /// Returns the pair of the number of examples and features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.features.len())
    }


    /// Returns `true` if the sample has no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }


    /// Returns the column position of the feature named `name`.
    pub fn feature_index<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        let name = name.as_ref();
        self.features.iter().position(|f| f == name)
    }


    /// Returns the `idx`-th example and its label.
    #[inline]
    pub fn at(&self, idx: usize) -> (&[String], Label) {
        (&self.examples[idx][..], self.target[idx])
    }


    /// Split `self` into two samples.
    /// The rows `ix[start..end]` form the test sample and
    /// the remaining rows, in order, form the training sample.
    pub fn split<T>(&self, ix: T, start: usize, end: usize)
        -> (Sample, Sample)
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        let end = end.min(ix.len());
        let start = start.min(end);

        let test = self.subset(&ix[start..end]);
        let train_ix = ix[..start].iter()
            .chain(&ix[end..])
            .copied()
            .collect::<Vec<_>>();
        let train = self.subset(&train_ix);

        (train, test)
    }


    /// Returns a new `Sample` consisting of the given rows.
    pub(crate) fn subset(&self, rows: &[usize]) -> Sample {
        let examples = rows.iter()
            .map(|&i| self.examples[i].clone())
            .collect();
        let target = rows.iter()
            .map(|&i| self.target[i])
            .collect();

        Self {
            features: self.features.clone(),
            target_name: self.target_name.clone(),
            examples,
            target,
        }
    }
}


/// Splits a line by tabs.
#[inline]
fn split_row(line: &str) -> impl Iterator<Item = &str> {
    line.trim_end_matches(['\r', '\n']).split('\t')
}


/// Generates the names `Feat. [1]`, ..., plus the label column.
fn dummy_header(n_column: usize) -> Vec<String> {
    let n_feature = n_column.saturating_sub(1);
    let mut names = (1..=n_feature)
        .map(|i| format!("Feat. [{i}]"))
        .collect::<Vec<_>>();
    names.push(DEFAULT_TARGET.to_string());
    names
}
