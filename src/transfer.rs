//! Multitask transfer demonstration: one dataset, two tasks, one shared
//! L1/L2-regularized logistic-regression model.

use crate::dataset::Matrix;
use crate::error::Result;
use crate::features::DenseFeatures;
use crate::labels::BinaryLabels;
use crate::tasks::{Task, TaskGroup};
use crate::trainer::{self, Capability, MultitaskCapability, MultitaskRegressor};

/// Train a multitask L1/L2-regularized logistic regression over two tasks
/// built from one training set, and return task 0's predictions for the
/// combined feature set.
///
/// `_fm_test` is accepted for parity with related demonstrations and is not
/// consumed here. Returns `Ok(None)` when the trainer capability is not
/// compiled in; the skip is reported on stdout, not as an error.
pub fn transfer_multitask_l12_logistic_regression(
    fm_train: &Matrix,
    _fm_test: &Matrix,
    label_train: &[f64],
) -> Result<Option<Vec<f64>>> {
    let combined = fm_train.hstack(fm_train)?;

    let mut stacked_labels = label_train.to_vec();
    stacked_labels.extend_from_slice(label_train);

    // The stacked block is read back as vectors of the original feature
    // width, so the duplicated columns double the vector count.
    let features = DenseFeatures::from_flat(combined.into_flat(), fm_train.n_cols())?;
    let labels = BinaryLabels::new(stacked_labels)?;

    let n_vectors = features.num_vectors();
    let task_one = Task::new(0, n_vectors / 2)?;
    let task_two = Task::new(n_vectors / 2, n_vectors)?;
    let mut task_group = TaskGroup::new();
    task_group.append_task(task_one);
    task_group.append_task(task_two);

    let factory = match trainer::multitask_l12_logistic_regression() {
        Capability::Available(factory) => factory,
        Capability::Unavailable => {
            println!("{} not available", trainer::L12_LOGISTIC_REGRESSION);
            return Ok(None);
        }
    };

    let mut mtlr = factory.create(0.1, 0.1, task_group);
    mtlr.set_tolerance(1e-2);
    mtlr.set_max_iter(10);
    mtlr.train(&features, &labels)?;
    mtlr.set_current_task(0)?;
    let out = mtlr.apply_regression(&features)?.into_labels();

    Ok(Some(out))
}

#[cfg(test)]
use crate::dataset::parse_matrix;

#[cfg(feature = "l12-solver")]
#[test]
fn returns_one_prediction_per_combined_vector() {
    // 4 samples x 3 features and 4 labels: the combined set holds 8
    // vectors, tasks [0, 4) and [4, 8), and 8 predictions come back.
    let fm_train = parse_matrix("1 2 3\n4 5 6\n7 8 9\n10 11 12\n").unwrap();
    let fm_test = parse_matrix("0 0 0\n1 1 1\n").unwrap();
    let label_train = [-1.0, 1.0, -1.0, 1.0];

    let out = transfer_multitask_l12_logistic_regression(&fm_train, &fm_test, &label_train)
        .unwrap()
        .expect("solver compiled in");

    assert_eq!(out.len(), 8);
    assert!(out.iter().all(|v| v.is_finite()));
}

#[cfg(feature = "l12-solver")]
#[test]
fn test_matrix_is_not_consumed() {
    let fm_train = parse_matrix("1 0\n0 1\n1 1\n0 0\n").unwrap();
    // deliberately mismatched width; must not matter
    let fm_test = parse_matrix("5 5 5\n").unwrap();
    let label_train = [1.0, -1.0, 1.0, -1.0];

    let out = transfer_multitask_l12_logistic_regression(&fm_train, &fm_test, &label_train)
        .unwrap()
        .expect("solver compiled in");
    assert_eq!(out.len(), 8);
}

#[cfg(feature = "l12-solver")]
#[test]
fn propagates_label_errors() {
    let fm_train = parse_matrix("1 2\n3 4\n").unwrap();
    let label_train = [1.0, 3.0];

    match transfer_multitask_l12_logistic_regression(&fm_train, &fm_train, &label_train) {
        Err(crate::error::Error::InvalidLabel(v)) => assert_eq!(v, 3.0),
        other => panic!("unexpected: {:?}", other),
    }
}

#[cfg(not(feature = "l12-solver"))]
#[test]
fn skips_without_solver() {
    let fm_train = parse_matrix("1 2\n3 4\n").unwrap();
    let label_train = [-1.0, 1.0];

    let out =
        transfer_multitask_l12_logistic_regression(&fm_train, &fm_train, &label_train).unwrap();
    assert!(out.is_none());
}
