//! Implementation of a simple in-crate trainer backend, used for testing and
//! demonstration.

mod l12_logistic_regression;

pub use self::l12_logistic_regression::MultitaskL12LogisticRegression;
