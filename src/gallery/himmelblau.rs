//! Himmelblau's function `(x^2 + y - 11)^2 + (x + y^2 - 7)^2`.
//!
//! Four minima with value zero, one of them at `(3, 2)`, and a local maximum
//! near `(-0.2708, -0.9230)`.
use std::convert::Infallible;

use ndarray::prelude::*;

use super::Benchmark;
use crate::problem::{Problem, Real};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Himmelblau;

pub fn himmelblau() -> Himmelblau {
    Himmelblau
}

impl Himmelblau {
    #[inline]
    fn residuals<T: Real>(x: ArrayView1<T>) -> (T, T) {
        assert_eq!(x.len(), 2);
        let u = x[0] * x[0] + x[1] - T::from_constant(11.0);
        let v = x[0] + x[1] * x[1] - T::from_constant(7.0);
        (u, v)
    }
}

impl<T: Real> Problem<T> for Himmelblau {
    type Error = Infallible;

    fn parameter_count(&self) -> usize {
        2
    }

    fn gradient_evaluation(
        &self,
        x: ArrayView1<T>,
        mut grad: ArrayViewMut1<T>,
    ) -> Result<T, Infallible> {
        assert_eq!(grad.len(), 2);
        let (u, v) = Self::residuals(x);
        let two = T::from_constant(2.0);
        let four = T::from_constant(4.0);
        grad[0] = four * u * x[0] + two * v;
        grad[1] = two * u + four * v * x[1];
        Ok(u * u + v * v)
    }
}

impl<T: Real> Benchmark<T> for Himmelblau {
    fn value(&self, x: ArrayView1<T>) -> T {
        let (u, v) = Self::residuals(x);
        u * u + v * v
    }

    fn search_box(&self, _i: usize) -> (T, T) {
        (T::from_constant(-5.0), T::from_constant(5.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use crate::utils::approx_fprime;

    #[test]
    fn stationary_at_three_two() {
        let mut grad = Array1::<f64>::zeros(2);
        let value = himmelblau()
            .gradient_evaluation(arr1(&[3.0, 2.0]).view(), grad.view_mut())
            .unwrap();
        assert_eq!(value, 0.0);
        assert!(approx_eq!(f64, grad[0], 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, grad[1], 0.0, epsilon = 1e-12));
    }

    #[test]
    fn gradient_matches_forward_differences() {
        let problem = himmelblau();
        let eps = Array1::<f64>::from_elem(2, 1e-7);
        for x in &[[0.0, 0.0], [1.0, -2.5], [-3.7, 3.1], [4.2, 0.3]] {
            let x = arr1(x);
            let mut grad = Array1::<f64>::zeros(2);
            let value = problem.gradient_evaluation(x.view(), grad.view_mut()).unwrap();
            let numeric = approx_fprime(x.view(), |x| problem.value(x), eps.view());

            assert_eq!(value, problem.value(x.view()));
            for k in 0..2 {
                let tolerance = 1e-4 * (1.0 + grad[k].abs());
                assert!(approx_eq!(f64, grad[k], numeric[k], epsilon = tolerance));
            }
        }
    }
}
