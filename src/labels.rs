//! Label containers for training targets and trainer output.

use crate::error::{Error, Result};

/// Two-class training labels, stored as -1/+1.
///
/// Zero is accepted on input and normalized to -1; any other value besides
/// -1 and +1 is rejected.
#[derive(Debug, Clone)]
pub struct BinaryLabels {
    values: Vec<f64>,
}

impl BinaryLabels {
    pub fn new(raw: Vec<f64>) -> Result<Self> {
        let mut values = raw;
        for v in values.iter_mut() {
            if *v == 0.0 {
                *v = -1.0;
            } else if *v != -1.0 && *v != 1.0 {
                return Err(Error::InvalidLabel(*v));
            }
        }
        Ok(BinaryLabels { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Real-valued output of applying a model in regression mode.
#[derive(Debug, Clone)]
pub struct RegressionLabels {
    values: Vec<f64>,
}

impl RegressionLabels {
    pub fn new(values: Vec<f64>) -> Self {
        RegressionLabels { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_labels(self) -> Vec<f64> {
        self.values
    }
}

#[test]
fn binary_labels_accept_plus_minus_one() {
    let y = BinaryLabels::new(vec![-1.0, 1.0, 1.0, -1.0]).unwrap();
    assert_eq!(y.len(), 4);
    assert_eq!(y.get(1), 1.0);
}

#[test]
fn binary_labels_normalize_zero() {
    let y = BinaryLabels::new(vec![0.0, 1.0]).unwrap();
    assert_eq!(y.values(), &[-1.0, 1.0]);
}

#[test]
fn binary_labels_reject_other_values() {
    match BinaryLabels::new(vec![-1.0, 2.0]) {
        Err(Error::InvalidLabel(v)) => assert_eq!(v, 2.0),
        other => panic!("unexpected: {:?}", other),
    }
}
