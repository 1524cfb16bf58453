//! Multitask learning demonstrations against a pluggable trainer backend.
//!
//! The crate splits along the same seam as the system it reproduces: glue
//! code (dataset loading, task partitions, the demonstration runner) on one
//! side, and the multitask trainer on the other, reached only through the
//! capability interface in [`trainer`]. The naive in-crate solver behind
//! the `l12-solver` feature stands in for the trainer; without it, runners
//! report the capability as unavailable and skip.

#[macro_use]
extern crate log;
extern crate num_traits;

#[cfg(feature = "l12-solver")]
pub mod baseline;
mod dataset;
mod error;
mod features;
mod labels;
mod measure;
mod tasks;
pub mod trainer;
mod transfer;

pub use crate::dataset::{load_labels, load_matrix, parse_labels, parse_matrix, Matrix};
pub use crate::error::{Error, Result};
pub use crate::features::DenseFeatures;
pub use crate::labels::{BinaryLabels, RegressionLabels};
pub use crate::measure::{PredictiveAccuracy, RootMeanSquaredError};
pub use crate::tasks::{Task, TaskGroup};
pub use crate::trainer::Capability;
pub use crate::transfer::transfer_multitask_l12_logistic_regression;

/// Traits that most users want in scope.
pub mod prelude {
    pub use crate::measure::MeasureAccumulator;
    pub use crate::trainer::{MultitaskCapability, MultitaskRegressor};
}
