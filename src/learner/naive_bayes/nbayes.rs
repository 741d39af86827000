use crate::{Error, Learner, Result, Sample};
use crate::sample::label::count_labels;

use super::probability::conditional_tables;
use super::nbayes_classifier::*;


/// A factory that produces a `NBayesClassifier`
/// from frequency counts of categorical values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NBayes;


impl NBayes {
    /// Initializes the NBayes instance.
    pub fn init() -> Self {
        Self
    }
}


impl Learner for NBayes {
    type Hypothesis = NBayesClassifier;


    fn name(&self) -> &str {
        "Naive Bayes"
    }


    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        let n_sample = sample.shape().0;
        if n_sample == 0 {
            return Err(Error::NoData(
                "Naive Bayes needs at least one training example".to_string()
            ));
        }

        let (n_yes, n_no) = count_labels(sample.target());
        if n_yes == 0 || n_no == 0 {
            let missing = if n_yes == 0 { "yes" } else { "no" };
            return Err(Error::ProbabilityUndefined(format!(
                "no training example is labeled `{missing}`"
            )));
        }

        let prior_yes = n_yes as f64 / n_sample as f64;
        let prior_no = n_no as f64 / n_sample as f64;

        let tables = conditional_tables(sample, n_yes, n_no);

        Ok(NBayesClassifier { prior_yes, prior_no, tables, })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_is_no_data() {
        let sample = Sample::from_reader(&b"a\tclass\n"[..], true).unwrap();
        assert!(matches!(NBayes::init().produce(&sample), Err(Error::NoData(_))));
    }

    #[test]
    fn single_class_is_undefined() {
        let sample = Sample::from_reader(&b"a\tclass\nx\tyes\ny\tyes\n"[..], true)
            .unwrap();
        assert!(matches!(
            NBayes::init().produce(&sample),
            Err(Error::ProbabilityUndefined(_))
        ));
    }
}
