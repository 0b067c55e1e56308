//! Separable quadratic bowl `1/2 sum_i w_i (x_i - c_i)^2`.
use std::convert::Infallible;

use ndarray::prelude::*;
use ndarray::Zip;

use super::Benchmark;
use crate::problem::{Problem, Real};

/// Half-width of the search box around the center.
const HALF_WIDTH: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic<T: Real> {
    center: Array1<T>,
    weights: Array1<T>,
}

/// A quadratic bowl with its minimum at `center` and curvature `weights[i]`
/// along coordinate `i`. Strictly convex if every weight is positive.
///
/// # Panics
///
/// If `center` and `weights` differ in length or are empty.
pub fn quadratic<T: Real>(center: Array1<T>, weights: Array1<T>) -> Quadratic<T> {
    assert_eq!(center.len(), weights.len());
    assert!(!center.is_empty(), "a quadratic needs at least one parameter");
    Quadratic { center, weights }
}

impl<T: Real> Quadratic<T> {
    pub fn center(&self) -> ArrayView1<'_, T> {
        self.center.view()
    }

    pub fn weights(&self) -> ArrayView1<'_, T> {
        self.weights.view()
    }
}

impl<T: Real> Problem<T> for Quadratic<T> {
    type Error = Infallible;

    fn parameter_count(&self) -> usize {
        self.center.len()
    }

    fn gradient_evaluation(
        &self,
        x: ArrayView1<T>,
        mut grad: ArrayViewMut1<T>,
    ) -> Result<T, Infallible> {
        assert_eq!(x.len(), self.center.len());
        assert_eq!(grad.len(), self.center.len());
        let half = T::from_constant(0.5);
        let mut value = T::zero();
        Zip::from(&mut grad)
            .and(&x)
            .and(&self.center)
            .and(&self.weights)
            .for_each(|g, &xi, &ci, &wi| {
                let d = xi - ci;
                *g = wi * d;
                value += half * wi * d * d;
            });
        Ok(value)
    }
}

impl<T: Real> Benchmark<T> for Quadratic<T> {
    fn value(&self, x: ArrayView1<T>) -> T {
        let half = T::from_constant(0.5);
        let d = &x - &self.center;
        half * (&d * &d).dot(&self.weights)
    }

    fn search_box(&self, i: usize) -> (T, T) {
        let half_width = T::from_constant(HALF_WIDTH);
        (self.center[i] - half_width, self.center[i] + half_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn gradient_is_weighted_offset() {
        let problem = quadratic(arr1(&[1.0, -2.0]), arr1(&[1.0, 4.0]));
        let mut grad = Array1::<f64>::zeros(2);
        let value = problem
            .gradient_evaluation(arr1(&[3.0, 0.0]).view(), grad.view_mut())
            .unwrap();
        assert_eq!(grad, arr1(&[2.0, 8.0]));
        assert!(approx_eq!(f64, value, 10.0, ulps = 2));
        assert!(approx_eq!(f64, problem.value(arr1(&[3.0, 0.0]).view()), 10.0, ulps = 2));
    }

    #[test]
    #[should_panic]
    fn gradient_rejects_mismatched_length() {
        let problem = quadratic(arr1(&[0.0, 0.0]), arr1(&[1.0, 1.0]));
        let mut grad = Array1::<f64>::zeros(3);
        let _ = problem.gradient_evaluation(arr1(&[1.0, 1.0, 1.0]).view(), grad.view_mut());
    }
}
