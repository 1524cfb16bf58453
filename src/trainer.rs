//! The trainer capability seam.
//!
//! Multitask trainers are consumed strictly through [`MultitaskRegressor`];
//! whether a concrete trainer exists is resolved once into a
//! [`Capability`], and callers take the skip branch on
//! [`Capability::Unavailable`] instead of failing.

use crate::error::Result;
use crate::features::DenseFeatures;
use crate::labels::{BinaryLabels, RegressionLabels};
use crate::tasks::TaskGroup;

/// Printable name of the multitask logistic-regression capability.
pub const L12_LOGISTIC_REGRESSION: &str = "MultitaskL12LogisticRegression";

/// A trainable multitask model applied in regression mode.
pub trait MultitaskRegressor {
    /// Convergence tolerance for the trainer's internal stopping rule.
    fn set_tolerance(&mut self, tolerance: f64);

    /// Iteration cap for the trainer's internal stopping rule.
    fn set_max_iter(&mut self, max_iter: usize);

    /// Fit the model jointly over all tasks. Blocks until done.
    fn train(&mut self, features: &DenseFeatures, labels: &BinaryLabels) -> Result<()>;

    /// Select which task's coefficients subsequent applications use.
    fn set_current_task(&mut self, task: usize) -> Result<()>;

    /// Apply the current task's model to every vector in `features`.
    fn apply_regression(&self, features: &DenseFeatures) -> Result<RegressionLabels>;
}

/// Factory for a multitask trainer implementation.
pub trait MultitaskCapability {
    fn name(&self) -> &'static str;

    /// Construct a trainer from the L1 weight, L2 weight, and task group.
    fn create(&self, rho1: f64, rho2: f64, tasks: TaskGroup) -> Box<dyn MultitaskRegressor>;
}

/// Outcome of probing for a trainer capability, resolved once at startup.
pub enum Capability {
    Available(Box<dyn MultitaskCapability>),
    Unavailable,
}

impl Capability {
    pub fn is_available(&self) -> bool {
        match self {
            Capability::Available(_) => true,
            Capability::Unavailable => false,
        }
    }
}

/// Resolve the `MultitaskL12LogisticRegression` capability.
#[cfg(feature = "l12-solver")]
pub fn multitask_l12_logistic_regression() -> Capability {
    struct Factory;

    impl MultitaskCapability for Factory {
        fn name(&self) -> &'static str {
            L12_LOGISTIC_REGRESSION
        }

        fn create(&self, rho1: f64, rho2: f64, tasks: TaskGroup) -> Box<dyn MultitaskRegressor> {
            Box::new(crate::baseline::MultitaskL12LogisticRegression::new(
                rho1, rho2, tasks,
            ))
        }
    }

    Capability::Available(Box::new(Factory))
}

/// Resolve the `MultitaskL12LogisticRegression` capability.
#[cfg(not(feature = "l12-solver"))]
pub fn multitask_l12_logistic_regression() -> Capability {
    Capability::Unavailable
}

#[cfg(feature = "l12-solver")]
#[test]
fn capability_resolves_when_solver_is_compiled_in() {
    let cap = multitask_l12_logistic_regression();
    assert!(cap.is_available());
    if let Capability::Available(factory) = cap {
        assert_eq!(factory.name(), L12_LOGISTIC_REGRESSION);
    }
}

#[cfg(not(feature = "l12-solver"))]
#[test]
fn capability_unavailable_without_solver() {
    assert!(!multitask_l12_logistic_regression().is_available());
}
