use rand::prelude::*;
use colored::Colorize;

use crate::{Classifier, Error, Learner, Result, Sample};
use super::accuracy::{truncate, format_accuracy};

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test sample for cross validation.
///
/// The sample is cut into `n_folds` contiguous chunks of
/// `ceil(n_sample / n_folds)` examples each (the last one may be shorter);
/// the `i`-th pair tests on the `i`-th chunk and trains on the rest.
/// # Example
/// ```no_run
/// use miniclassifiers::prelude::*;
/// use miniclassifiers::CrossValidation;
///
/// let sample = SampleReader::default()
///     .file("train.txt")
///     .read()
///     .unwrap();
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true);
/// for (train, test) in cv {
///     let f = DecisionTree::default().produce(&train).unwrap();
///     let acc = f.accuracy(&test).unwrap();
///     println!("[test: {acc}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 0, "The number of folds must be positive.");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the size of each test chunk.
    #[inline]
    fn chunk_size(&self) -> usize {
        self.ix.len().div_ceil(self.n_folds)
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let size = self.chunk_size();
        let (start, end) = (i * size, (i + 1) * size);
        self.sample.split(&self.ix, start, end)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}


/// The accuracies collected by [`cross_validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidationReport {
    /// Truncated test accuracy of each fold.
    pub fold_accuracies: Vec<f64>,
    /// Truncated mean of `fold_accuracies`.
    pub average: f64,
}


/// Runs `n_folds`-fold cross validation of `learner` on `sample`
/// over contiguous chunks.
/// An empty test chunk makes the whole run fail with `Error::NoData`.
pub fn cross_validate<L>(
    learner: &L,
    sample: &Sample,
    n_folds: usize,
    verbose: bool,
) -> Result<CrossValidationReport>
    where L: Learner,
          L::Hypothesis: Sync,
{
    if n_folds == 0 {
        return Err(Error::InvalidParameter(
            "the number of folds must be positive".to_string()
        ));
    }
    if verbose {
        println!("{}", format!("  {}", learner.name()).bold().cyan());
    }

    let fold_accuracies = CrossValidation::new(sample)
        .n_folds(n_folds)
        .verbose(verbose)
        .map(|(train, test)| -> Result<f64> {
            let f = learner.produce(&train)?;
            let acc = f.accuracy(&test)?;
            if verbose {
                let acc = format_accuracy(acc);
                println!("{:>20}", format!("[ACC {acc}]").bold().blue());
            }
            Ok(acc)
        })
        .collect::<Result<Vec<f64>>>()?;

    let average = fold_accuracies.iter().sum::<f64>()
        / fold_accuracies.len() as f64;
    let average = truncate(average);

    Ok(CrossValidationReport { fold_accuracies, average })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ten_rows() -> Sample {
        let mut bytes = b"a\tclass\n".to_vec();
        for i in 0..10 {
            let label = if i % 2 == 0 { "yes" } else { "no" };
            bytes.extend(format!("{i}\t{label}\n").bytes());
        }
        Sample::from_reader(&bytes[..], true).unwrap()
    }

    #[test]
    fn contiguous_chunks() {
        let sample = ten_rows();
        let folds = CrossValidation::new(&sample).collect::<Vec<_>>();
        assert_eq!(folds.len(), 5);

        for (i, (train, test)) in folds.iter().enumerate() {
            assert_eq!(test.shape().0, 2);
            assert_eq!(train.shape().0, 8);
            let first = &test.examples()[0][0];
            assert_eq!(first, &(2 * i).to_string());
        }
    }

    #[test]
    fn last_chunk_may_be_short() {
        let sample = ten_rows();
        let sizes = CrossValidation::new(&sample)
            .n_folds(3)
            .map(|(_, test)| test.shape().0)
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let sample = ten_rows();
        let mut seen = CrossValidation::new(&sample)
            .seed(777)
            .shuffle()
            .flat_map(|(_, test)| test.examples().to_vec())
            .map(|x| x[0].parse::<usize>().unwrap())
            .collect::<Vec<_>>();
        seen.sort();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }
}
