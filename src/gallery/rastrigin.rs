//! Rastrigin's function `10 n + sum_i (x_i^2 - 10 cos(2 pi x_i))`.
//!
//! Highly multimodal, with a regular lattice of local minima around the global
//! minimum zero at the origin. A gradient method only finds the minimum of
//! the basin it starts in.
use std::convert::Infallible;
use std::f64::consts::PI;

use ndarray::prelude::*;
use ndarray::Zip;

use super::Benchmark;
use crate::problem::{Problem, Real};

const A: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rastrigin {
    n: usize,
}

/// Rastrigin's function in `n` dimensions.
///
/// # Panics
///
/// If `n == 0`.
pub fn rastrigin(n: usize) -> Rastrigin {
    assert!(n >= 1, "Rastrigin's function needs at least one parameter");
    Rastrigin { n }
}

impl<T: Real> Problem<T> for Rastrigin {
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
        let two = T::from_constant(2.0);
        let omega = T::from_constant(2.0 * PI);

        let mut value = a * T::from_constant(self.n as f64);
        Zip::from(&mut grad).and(&x).for_each(|g, &xi| {
            let (sin, cos) = (omega * xi).sin_cos();
            *g = two * xi + a * omega * sin;
            value += xi * xi - a * cos;
        });
        Ok(value)
    }
}

impl<T: Real> Benchmark<T> for Rastrigin {
    fn value(&self, x: ArrayView1<T>) -> T {
        assert_eq!(x.len(), self.n);
        let a = T::from_constant(A);
        let omega = T::from_constant(2.0 * PI);
        x.iter().fold(a * T::from_constant(self.n as f64), |acc, &xi| {
            acc + xi * xi - a * (omega * xi).cos()
        })
    }

    fn search_box(&self, _i: usize) -> (T, T) {
        (T::from_constant(-5.12), T::from_constant(5.12))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::approx_fprime;
    use float_cmp::approx_eq;

    #[test]
    fn zero_at_origin() {
        let problem = rastrigin(3);
        let mut grad = Array1::<f64>::zeros(3);
        let value = problem
            .gradient_evaluation(Array1::<f64>::zeros(3).view(), grad.view_mut())
            .unwrap();
        assert_eq!(value, 0.0f64);
        assert_eq!(grad, Array1::<f64>::zeros(3));
    }

    #[test]
    fn gradient_matches_forward_differences() {
        let problem = rastrigin(3);
        let x = arr1(&[0.3, -1.7, 2.45]);
        let mut grad = Array1::<f64>::zeros(3);
        let value = problem.gradient_evaluation(x.view(), grad.view_mut()).unwrap();
        let eps = Array1::<f64>::from_elem(3, 1e-7);
        let numeric = approx_fprime(x.view(), |x| problem.value(x), eps.view());

        assert!(approx_eq!(f64, value, problem.value(x.view()), epsilon = 1e-10));
        for k in 0..3 {
            let tolerance = 1e-4 * (1.0 + grad[k].abs());
            assert!(approx_eq!(f64, grad[k], numeric[k], epsilon = tolerance));
        }
    }

    #[test]
    fn single_precision() {
        let value: f32 = rastrigin(2).value(arr1(&[1.0f32, 0.0]).view());
        assert!(approx_eq!(f32, value, 1.0, epsilon = 1e-4));
    }
}
