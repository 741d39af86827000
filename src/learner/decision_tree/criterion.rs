//! Entropy and information gain for binary labels.
use rayon::prelude::*;

use std::collections::BTreeMap;

use crate::{Label, Sample};


/// Binary Shannon entropy (in bits) of a partition
/// with `yes` positive and `no` negative examples.
/// Returns exactly `0` if either count is zero.
#[inline]
pub fn entropy(yes: usize, no: usize) -> f64 {
    if yes == 0 || no == 0 { return 0.0; }

    let total = (yes + no) as f64;
    let p = yes as f64 / total;
    let q = no as f64 / total;

    -p * p.log2() - q * q.log2()
}


/// Returns the information gain of splitting
/// the examples `rows` of `sample` on the `feature`-th column.
pub fn information_gain(sample: &Sample, rows: &[usize], feature: usize)
    -> f64
{
    if rows.is_empty() { return 0.0; }

    let examples = sample.examples();
    let target = sample.target();

    let mut total = (0_usize, 0_usize);
    let mut counter: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for &i in rows {
        let cnt = counter.entry(examples[i][feature].as_str())
            .or_insert((0, 0));
        match target[i] {
            Label::Yes => { cnt.0 += 1; total.0 += 1; },
            Label::No => { cnt.1 += 1; total.1 += 1; },
        }
    }

    let n_rows = rows.len() as f64;
    let weighted = counter.values()
        .map(|&(yes, no)| {
            let weight = (yes + no) as f64 / n_rows;
            weight * entropy(yes, no)
        })
        .sum::<f64>();

    entropy(total.0, total.1) - weighted
}


/// Returns the feature in `attributes` that maximizes
/// the information gain over `rows`.
/// On exact ties, the first one in `attributes` wins.
/// Returns `None` if `attributes` is empty.
pub fn best_feature(sample: &Sample, rows: &[usize], attributes: &[usize])
    -> Option<usize>
{
    let gains = attributes.par_iter()
        .map(|&feature| information_gain(sample, rows, feature))
        .collect::<Vec<f64>>();

    attributes.iter()
        .copied()
        .zip(gains)
        .fold(None, |best: Option<(usize, f64)>, (feature, gain)| {
            match best {
                Some((_, best_gain)) if best_gain >= gain => best,
                _ => Some((feature, gain)),
            }
        })
        .map(|(feature, _)| feature)
}


#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn training_examples(bytes: &[u8]) -> Sample {
        Sample::from_reader(bytes, true).unwrap()
    }

    #[test]
    fn entropy_of_pure_partition_is_zero() {
        for n in 0..10 {
            assert_eq!(entropy(0, n), 0.0);
            assert_eq!(entropy(n, 0), 0.0);
        }
    }

    #[test]
    fn entropy_of_balanced_partition_is_one() {
        for n in 1..10 {
            assert_eq!(entropy(n, n), 1.0);
        }
    }

    #[test]
    fn entropy_is_symmetric_and_bounded() {
        let e = entropy(3, 5);
        assert!((e - entropy(5, 3)).abs() < TOLERANCE);
        assert!(0.0 < e && e < 1.0, "got {e}");
    }

    #[test]
    fn gain_of_perfect_split_is_full_entropy() {
        let sample = training_examples(b"\
            a\tb\tclass\n\
            x\tp\tyes\n\
            y\tp\tno\n\
            x\tq\tyes\n\
            y\tq\tno\n");
        let rows = (0..4).collect::<Vec<_>>();

        let gain_a = information_gain(&sample, &rows, 0);
        let gain_b = information_gain(&sample, &rows, 1);
        assert!((gain_a - 1.0).abs() < TOLERANCE, "got {gain_a}");
        assert!(gain_b.abs() < TOLERANCE, "got {gain_b}");
        assert_eq!(best_feature(&sample, &rows, &[0, 1]), Some(0));
        assert_eq!(best_feature(&sample, &rows, &[1]), Some(1));
    }

    #[test]
    fn gain_is_never_negative() {
        let sample = training_examples(b"\
            a\tb\tc\tclass\n\
            x\tp\tu\tyes\n\
            y\tp\tv\tno\n\
            x\tq\tu\tno\n\
            y\tq\tw\tyes\n\
            x\tp\tw\tyes\n\
            z\tq\tv\tno\n\
            z\tp\tu\tyes\n");
        let all = (0..7).collect::<Vec<_>>();
        let subsets = [&all[..], &all[..3], &all[2..6], &all[5..]];
        for rows in subsets {
            for feature in 0..3 {
                let gain = information_gain(&sample, rows, feature);
                assert!(gain >= -TOLERANCE, "negative gain {gain}");
            }
        }
    }

    #[test]
    fn ties_pick_the_first_attribute() {
        // Both columns are identical copies.
        let sample = training_examples(b"\
            a\tb\tclass\n\
            x\tx\tyes\n\
            y\ty\tno\n");
        let rows = [0, 1];
        assert_eq!(best_feature(&sample, &rows, &[0, 1]), Some(0));
        assert_eq!(best_feature(&sample, &rows, &[1, 0]), Some(1));
        assert_eq!(best_feature(&sample, &rows, &[]), None);
    }
}
