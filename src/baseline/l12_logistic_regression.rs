//! Implementation of a naive multitask L1/L2-regularized logistic regression.
//!
//! One weight vector and bias per task, fitted jointly by batch gradient
//! descent on the logistic loss for -1/+1 labels. The tasks are coupled
//! through an L1/L2 penalty on the per-feature weight rows across tasks
//! (weighted by `rho1`) next to a plain squared-norm penalty (`rho2`).
//! This is a reference backend, not a fast one.

use crate::error::{Error, Result};
use crate::features::DenseFeatures;
use crate::labels::{BinaryLabels, RegressionLabels};
use crate::tasks::TaskGroup;
use crate::trainer::MultitaskRegressor;

const LEARNING_RATE: f64 = 0.1;

/// A naive multitask logistic-regression trainer.
#[derive(Debug)]
pub struct MultitaskL12LogisticRegression {
    rho1: f64,
    rho2: f64,
    task_group: TaskGroup,
    tolerance: f64,
    max_iter: usize,
    current_task: usize,
    model: Option<Model>,
}

#[derive(Debug)]
struct Model {
    dim: usize,
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl MultitaskL12LogisticRegression {
    pub fn new(rho1: f64, rho2: f64, task_group: TaskGroup) -> Self {
        MultitaskL12LogisticRegression {
            rho1,
            rho2,
            task_group,
            tolerance: 1e-3,
            max_iter: 1000,
            current_task: 0,
            model: None,
        }
    }

    fn fit(&self, features: &DenseFeatures, labels: &BinaryLabels) -> Model {
        let dim = features.dim();
        let num_tasks = self.task_group.num_tasks();

        let mut weights = vec![vec![0.0; dim]; num_tasks];
        let mut biases = vec![0.0; num_tasks];

        for sweep in 0..self.max_iter {
            // L1/L2 coupling: per-feature weight rows taken across tasks.
            let mut row_norms = vec![0.0; dim];
            for j in 0..dim {
                let sq: f64 = weights.iter().map(|w| w[j] * w[j]).sum();
                row_norms[j] = sq.sqrt();
            }

            let mut max_update = 0.0f64;

            for (t, task) in self.task_group.iter().enumerate() {
                if task.is_empty() {
                    continue;
                }

                let mut grad_w = vec![0.0; dim];
                let mut grad_b = 0.0;

                for i in task.indices() {
                    let x = features.vector(i);
                    let y = labels.get(i);
                    let margin = y * (dot(&weights[t], x) + biases[t]);
                    // d/df log(1 + exp(-y f)) = -y * sigmoid(-y f)
                    let slope = -y / (1.0 + margin.exp());
                    for (g, &xj) in grad_w.iter_mut().zip(x) {
                        *g += slope * xj;
                    }
                    grad_b += slope;
                }

                let scale = 1.0 / task.len() as f64;
                for (j, g) in grad_w.iter_mut().enumerate() {
                    *g *= scale;
                    *g += 2.0 * self.rho2 * weights[t][j];
                    if row_norms[j] > 0.0 {
                        *g += self.rho1 * weights[t][j] / row_norms[j];
                    }
                }
                grad_b *= scale;

                for (j, g) in grad_w.iter().enumerate() {
                    let step = LEARNING_RATE * g;
                    weights[t][j] -= step;
                    max_update = max_update.max(step.abs());
                }
                let step = LEARNING_RATE * grad_b;
                biases[t] -= step;
                max_update = max_update.max(step.abs());
            }

            debug!("sweep {}: max update {:e}", sweep, max_update);

            if max_update < self.tolerance {
                break;
            }
        }

        Model {
            dim,
            weights,
            biases,
        }
    }
}

impl MultitaskRegressor for MultitaskL12LogisticRegression {
    fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    fn set_max_iter(&mut self, max_iter: usize) {
        self.max_iter = max_iter;
    }

    fn train(&mut self, features: &DenseFeatures, labels: &BinaryLabels) -> Result<()> {
        let n = features.num_vectors();
        if labels.len() != n {
            return Err(Error::LabelCount {
                vectors: n,
                labels: labels.len(),
            });
        }
        if !self.task_group.is_partition_of(n) {
            return Err(Error::NotAPartition { num_vectors: n });
        }

        self.model = Some(self.fit(features, labels));
        Ok(())
    }

    fn set_current_task(&mut self, task: usize) -> Result<()> {
        if task >= self.task_group.num_tasks() {
            return Err(Error::InvalidTask {
                index: task,
                num_tasks: self.task_group.num_tasks(),
            });
        }
        self.current_task = task;
        Ok(())
    }

    fn apply_regression(&self, features: &DenseFeatures) -> Result<RegressionLabels> {
        let model = self.model.as_ref().ok_or(Error::NotTrained)?;
        if features.dim() != model.dim {
            return Err(Error::DimensionMismatch {
                expected: model.dim,
                found: features.dim(),
            });
        }

        let w = &model.weights[self.current_task];
        let b = model.biases[self.current_task];

        let out = (0..features.num_vectors())
            .map(|i| dot(w, features.vector(i)) + b)
            .collect();

        Ok(RegressionLabels::new(out))
    }
}

fn dot(w: &[f64], x: &[f64]) -> f64 {
    w.iter().zip(x).map(|(wj, xj)| wj * xj).sum()
}

#[cfg(test)]
use crate::tasks::Task;

// Two well-separated clusters, interleaved so that both halves of the
// vector range contain samples of each cluster.
#[cfg(test)]
fn two_cluster_features() -> DenseFeatures {
    let data = vec![
        -2.1, -1.8, //
        -1.7, -2.3, //
        2.0, 1.7, //
        1.8, 2.2, //
        -2.4, -2.0, //
        -1.9, -1.6, //
        2.3, 1.9, //
        1.6, 2.4, //
    ];
    DenseFeatures::from_flat(data, 2).unwrap()
}

#[cfg(test)]
fn two_cluster_labels() -> BinaryLabels {
    BinaryLabels::new(vec![-1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0]).unwrap()
}

#[test]
fn separates_two_clusters() {
    use crate::measure::{MeasureAccumulator, PredictiveAccuracy};

    let features = two_cluster_features();
    let labels = two_cluster_labels();

    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 8).unwrap());

    let mut mtlr = MultitaskL12LogisticRegression::new(0.01, 0.01, group);
    mtlr.set_tolerance(1e-6);
    mtlr.set_max_iter(500);
    mtlr.train(&features, &labels).unwrap();
    mtlr.set_current_task(0).unwrap();

    let out = mtlr.apply_regression(&features).unwrap();
    assert_eq!(out.len(), 8);

    let mut accuracy = PredictiveAccuracy::new();
    accuracy.update(labels.values().iter().cloned(), out.values().iter().cloned());
    assert_eq!(accuracy.result(), 1.0);
}

#[test]
fn tasks_fit_independent_labelings() {
    // Same vectors in both halves, opposite labels: the two tasks must end
    // up with models of opposite sign.
    let features = two_cluster_features();
    let labels =
        BinaryLabels::new(vec![-1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0]).unwrap();
    // task 0: cluster labels as-is; task 1: flipped

    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 4).unwrap());
    group.append_task(Task::new(4, 8).unwrap());

    let mut mtlr = MultitaskL12LogisticRegression::new(0.01, 0.01, group);
    mtlr.set_tolerance(1e-6);
    mtlr.set_max_iter(500);
    mtlr.train(&features, &labels).unwrap();

    let probe = DenseFeatures::from_flat(vec![2.0, 2.0], 2).unwrap();

    mtlr.set_current_task(0).unwrap();
    let first = mtlr.apply_regression(&probe).unwrap().into_labels()[0];
    mtlr.set_current_task(1).unwrap();
    let second = mtlr.apply_regression(&probe).unwrap().into_labels()[0];

    assert!(first * second < 0.0, "{} vs {}", first, second);
}

#[test]
fn rejects_label_count_mismatch() {
    let features = two_cluster_features();
    let labels = BinaryLabels::new(vec![-1.0, 1.0]).unwrap();

    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 8).unwrap());

    let mut mtlr = MultitaskL12LogisticRegression::new(0.1, 0.1, group);
    match mtlr.train(&features, &labels) {
        Err(Error::LabelCount {
            vectors: 8,
            labels: 2,
        }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn rejects_non_partition_group() {
    let features = two_cluster_features();
    let labels = two_cluster_labels();

    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 4).unwrap());
    group.append_task(Task::new(5, 8).unwrap());

    let mut mtlr = MultitaskL12LogisticRegression::new(0.1, 0.1, group);
    match mtlr.train(&features, &labels) {
        Err(Error::NotAPartition { num_vectors: 8 }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn apply_requires_training() {
    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 8).unwrap());
    let mtlr = MultitaskL12LogisticRegression::new(0.1, 0.1, group);

    match mtlr.apply_regression(&two_cluster_features()) {
        Err(Error::NotTrained) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn apply_requires_matching_dimension() {
    let features = two_cluster_features();
    let labels = two_cluster_labels();

    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 8).unwrap());

    let mut mtlr = MultitaskL12LogisticRegression::new(0.1, 0.1, group);
    mtlr.train(&features, &labels).unwrap();

    let wide = DenseFeatures::from_flat(vec![1.0, 2.0, 3.0], 3).unwrap();
    match mtlr.apply_regression(&wide) {
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 3,
        }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn rejects_out_of_range_task() {
    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 8).unwrap());
    let mut mtlr = MultitaskL12LogisticRegression::new(0.1, 0.1, group);

    match mtlr.set_current_task(1) {
        Err(Error::InvalidTask {
            index: 1,
            num_tasks: 1,
        }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}
