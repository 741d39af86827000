use miniclassifiers::prelude::*;
use miniclassifiers::{cross_validate, CrossValidation};
use miniclassifiers::research::truncate;

mod common;
use common::*;


#[test]
fn tennis_folds() {
    let sample = tennis();
    let sizes = CrossValidation::new(&sample)
        .map(|(train, test)| (train.shape().0, test.shape().0))
        .collect::<Vec<_>>();
    assert_eq!(sizes, vec![(11, 3), (11, 3), (11, 3), (11, 3), (12, 2)]);
}


#[test]
fn average_of_fold_accuracies() {
    let sample = tennis();
    let dtree = DecisionTree::default();
    let knn = Knn::new(3).unwrap();

    for report in [
        cross_validate(&dtree, &sample, 5, false).unwrap(),
        cross_validate(&knn, &sample, 5, false).unwrap(),
    ] {
        assert_eq!(report.fold_accuracies.len(), 5);
        assert!(report.fold_accuracies.iter().all(|&a| (0.0..=1.0).contains(&a)));

        let mean = report.fold_accuracies.iter().sum::<f64>() / 5.0;
        assert_eq!(report.average, truncate(mean));
    }
}


#[test]
fn cross_validation_is_deterministic() {
    let sample = tennis();
    let learner = DecisionTreeBuilder::new().seed(7).build();
    let a = cross_validate(&learner, &sample, 5, false).unwrap();
    let b = cross_validate(&learner, &sample, 5, false).unwrap();
    assert_eq!(a, b);
}


#[test]
fn invalid_folds() {
    assert!(matches!(
        cross_validate(&DecisionTree::default(), &tennis(), 0, false),
        Err(Error::InvalidParameter(_))
    ));

    // 6 examples in chunks of 2 leave the 4th and 5th folds empty.
    let small = sample(b"\
        a\tclass\n\
        x\tyes\n\
        y\tno\n\
        x\tyes\n\
        y\tno\n\
        x\tyes\n\
        y\tno\n");
    assert!(matches!(
        cross_validate(&DecisionTree::default(), &small, 5, false),
        Err(Error::NoData(_))
    ));
}
