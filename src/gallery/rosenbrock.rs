//! The chained Rosenbrock function
//! `sum_i (a - x_i)^2 + b (x_{i+1} - x_i^2)^2` with `a = 1`, `b = 100`.
//!
//! The global minimum is zero at `(1, ..., 1)`, at the end of a long curved
//! valley that makes it a classic stress test for gradient methods.
use std::convert::Infallible;

use ndarray::prelude::*;

use super::Benchmark;
use crate::problem::{Problem, Real};

const A: f64 = 1.0;
const B: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rosenbrock {
    n: usize,
}

/// The Rosenbrock function in `n` dimensions.
///
/// # Panics
///
/// If `n < 2`.
pub fn rosenbrock(n: usize) -> Rosenbrock {
    assert!(n >= 2, "the Rosenbrock function needs at least two parameters");
    Rosenbrock { n }
}

impl<T: Real> Problem<T> for Rosenbrock {
    type Error = Infallible;

    fn parameter_count(&self) -> usize {
        self.n
    }

    fn gradient_evaluation(
        &self,
        x: ArrayView1<T>,
        mut grad: ArrayViewMut1<T>,
    ) -> Result<T, Infallible> {
        assert_eq!(x.len(), self.n);
        assert_eq!(grad.len(), self.n);
        let a = T::from_constant(A);
        let b = T::from_constant(B);
        let two = T::from_constant(2.0);
        let four = T::from_constant(4.0);
        let n = self.n;

        let t1 = a - x[0];
        let mut t2 = x[1] - x[0] * x[0];
        grad[0] = -two * t1 - four * b * t2 * x[0];
        let mut value = t1 * t1 + b * t2 * t2;
        for i in 1..n - 1 {
            let t1 = a - x[i];
            let t0 = t2;
            t2 = x[i + 1] - x[i] * x[i];
            grad[i] = two * b * t0 - two * t1 - four * b * t2 * x[i];
            value += t1 * t1 + b * t2 * t2;
        }
        grad[n - 1] = two * b * t2;
        Ok(value)
    }
}

impl<T: Real> Benchmark<T> for Rosenbrock {
    fn value(&self, x: ArrayView1<T>) -> T {
        assert_eq!(x.len(), self.n);
        let a = T::from_constant(A);
        let b = T::from_constant(B);
        x.windows(2).into_iter().fold(T::zero(), |acc, w| {
            let t1 = a - w[0];
            let t2 = w[1] - w[0] * w[0];
            acc + t1 * t1 + b * t2 * t2
        })
    }

    fn search_box(&self, _i: usize) -> (T, T) {
        (T::from_constant(-2.048), T::from_constant(2.048))
    }
}
