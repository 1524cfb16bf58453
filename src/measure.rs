//! Measure accumulators summarize how well predictions match known labels.

use std::marker::PhantomData;

use num_traits::AsPrimitive;

/// Trait implemented by performance measures
pub trait MeasureAccumulator<T> {
    /// initialize new measure
    fn new() -> Self;

    /// update with one prediction
    fn update_one(&mut self, known: &T, pred: &T);

    /// get resulting performance
    fn result(&self) -> f64;

    /// update with multiple predictions
    fn update<I: Iterator<Item = T>>(&mut self, known: I, predicted: I) {
        for (k, p) in known.zip(predicted) {
            self.update_one(&k, &p)
        }
    }
}

/// Sign agreement between two-class labels and real-valued scores.
///
/// A prediction counts as correct when it falls on the known label's side
/// of zero; a score of exactly zero counts as wrong for either class.
#[derive(Debug)]
pub struct PredictiveAccuracy<T> {
    n_correct: usize,
    n_wrong: usize,
    _t: PhantomData<T>,
}

impl<T> MeasureAccumulator<T> for PredictiveAccuracy<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        PredictiveAccuracy {
            n_correct: 0,
            n_wrong: 0,
            _t: PhantomData,
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        if known.as_() * pred.as_() > 0.0 {
            self.n_correct += 1;
        } else {
            self.n_wrong += 1;
        }
    }

    fn result(&self) -> f64 {
        self.n_correct as f64 / (self.n_correct + self.n_wrong) as f64
    }
}

/// Root Mean Squared Error
#[derive(Debug)]
pub struct RootMeanSquaredError<T> {
    sum_of_squares: f64,
    n: usize,
    _t: PhantomData<T>,
}

impl<T> MeasureAccumulator<T> for RootMeanSquaredError<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        RootMeanSquaredError {
            sum_of_squares: 0.0,
            n: 0,
            _t: PhantomData,
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        let diff = known.as_() - pred.as_();
        self.sum_of_squares += diff * diff;
        self.n += 1;
    }

    fn result(&self) -> f64 {
        (self.sum_of_squares / self.n as f64).sqrt()
    }
}

#[test]
fn sign_agreement() {
    let known = vec![-1.0, -1.0, 1.0, 1.0];
    let scores = vec![-0.7, 0.2, 1.9, 0.4];

    let mut acc = PredictiveAccuracy::new();
    acc.update(known.into_iter(), scores.into_iter());
    assert_eq!(acc.result(), 0.75);
}

#[test]
fn rmse() {
    let known = vec![1.0, 2.0, 3.0];
    let pred = vec![1.0, 2.0, 5.0];

    let mut rmse = RootMeanSquaredError::new();
    rmse.update(known.into_iter(), pred.into_iter());
    let expected = (4.0f64 / 3.0).sqrt();
    assert!((rmse.result() - expected).abs() < 1e-12);
}
