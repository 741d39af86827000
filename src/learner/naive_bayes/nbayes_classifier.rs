use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Error, Label, Result};

use super::probability::ConditionalTable;


/// Naive Bayes classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NBayesClassifier {
    pub(super) prior_yes: f64,
    pub(super) prior_no: f64, // equals to `1.0 - prior_yes`

    pub(super) tables: Vec<ConditionalTable>,
}


impl NBayesClassifier {
    /// Returns the priors `(P(yes), P(no))`.
    #[inline]
    pub fn priors(&self) -> (f64, f64) {
        (self.prior_yes, self.prior_no)
    }


    /// Returns the conditional table of each feature.
    #[inline]
    pub fn tables(&self) -> &[ConditionalTable] {
        &self.tables[..]
    }


    /// Computes the normalized posterior probabilities
    /// `(P(yes | x), P(no | x))` of the given example.
    pub fn probabilities<S>(&self, example: &[S]) -> Result<(f64, f64)>
        where S: AsRef<str>
    {
        let n_feature = self.tables.len();
        if example.len() != n_feature {
            return Err(Error::ShapeMismatch {
                expected: n_feature,
                got: example.len(),
            });
        }

        let mut cond_yes = 1.0_f64;
        let mut cond_no = 1.0_f64;
        for (table, value) in self.tables.iter().zip(example) {
            let value = value.as_ref();
            let cond = table.get(value)
                .ok_or_else(|| Error::UnknownValue {
                    feature: table.feature().to_string(),
                    value: value.to_string(),
                })?;
            cond_yes *= cond.yes;
            cond_no *= cond.no;
        }

        let joint_yes = self.prior_yes * cond_yes;
        let joint_no = self.prior_no * cond_no;
        let evidence = joint_yes + joint_no;
        if evidence <= 0.0 {
            return Err(Error::ProbabilityUndefined(
                "both classes have zero likelihood".to_string()
            ));
        }

        Ok((joint_yes / evidence, joint_no / evidence))
    }
}


impl Classifier for NBayesClassifier {
    fn predict<S>(&self, example: &[S]) -> Result<Label>
        where S: AsRef<str>
    {
        let (p_yes, p_no) = self.probabilities(example)?;
        let label = if p_yes > p_no { Label::Yes } else { Label::No };
        Ok(label)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Learner, NBayes, Sample};

    fn trained(bytes: &[u8]) -> NBayesClassifier {
        let sample = Sample::from_reader(bytes, true).unwrap();
        NBayes::init().produce(&sample).unwrap()
    }

    #[test]
    fn posterior_sums_to_one() {
        let f = trained(b"\
            a\tb\tclass\n\
            x\tp\tyes\n\
            x\tq\tyes\n\
            y\tp\tno\n\
            x\tp\tno\n");
        let (p, n) = f.probabilities(&["x", "p"]).unwrap();
        assert!((p + n - 1.0).abs() < 1e-12);
        // P(yes)P(x|yes)P(p|yes) = 1/2 * 1 * 1/2,
        // P(no)P(x|no)P(p|no) = 1/2 * 1/2 * 1.
        assert!((p - 0.5).abs() < 1e-12, "got {p}");
        assert_eq!(f.predict(&["x", "p"]).unwrap(), Label::No);
        assert_eq!(f.predict(&["x", "q"]).unwrap(), Label::Yes);
    }

    #[test]
    fn unseen_value_is_reported() {
        let f = trained(b"a\tclass\nx\tyes\ny\tno\n");
        assert!(matches!(
            f.predict(&["z"]),
            Err(Error::UnknownValue { .. })
        ));
    }

    #[test]
    fn zero_likelihood_for_both_classes() {
        // `y` only occurs with `yes`, `q` only with `no`.
        let f = trained(b"\
            a\tb\tclass\n\
            y\tp\tyes\n\
            x\tq\tno\n");
        assert!(matches!(
            f.predict(&["y", "q"]),
            Err(Error::ProbabilityUndefined(_))
        ));
    }
}
