//! Benchmark problems with known minima, for testing and demonstrating minimizers.
//!
//! Every problem is created by a factory function and owned by the caller.
//! Besides the [`Problem`] contract each one offers a plain evaluation without
//! gradient and a recommended search box, which is what
//! [`sample_grid`] uses to tabulate two-dimensional problems for plotting.

mod himmelblau;
mod quadratic;
mod rastrigin;
mod rosenbrock;

pub use self::himmelblau::{himmelblau, Himmelblau};
pub use self::quadratic::{quadratic, Quadratic};
pub use self::rastrigin::{rastrigin, Rastrigin};
pub use self::rosenbrock::{rosenbrock, Rosenbrock};

use ndarray::prelude::*;

use crate::problem::{Problem, Real};

/// A problem that can also be evaluated without its gradient.
pub trait Benchmark<T: Real>: Problem<T> {
    /// The objective value at `x`.
    fn value(&self, x: ArrayView1<T>) -> T;

    /// Lower and upper bound of the region of interest along coordinate `i`.
    fn search_box(&self, i: usize) -> (T, T);
}

/// Samples a two-dimensional benchmark on a `resolution` x `resolution`
/// regular grid spanning its search box.
///
/// Returns one row `(x, y, value)` per grid point, `y` running fastest.
///
/// # Panics
///
/// If the benchmark is not two-dimensional or `resolution < 2`.
pub fn sample_grid<T, B>(benchmark: &B, resolution: usize) -> Array2<T>
where
    T: Real,
    B: Benchmark<T> + ?Sized,
{
    assert_eq!(benchmark.parameter_count(), 2, "only 2d benchmarks can be gridded");
    assert!(resolution >= 2, "a grid needs at least two samples per axis");

    let axis = |i: usize| {
        let (lo, hi) = benchmark.search_box(i);
        Array1::linspace(lo, hi, resolution)
    };
    let (xs, ys) = (axis(0), axis(1));

    let mut samples = Array2::zeros((resolution * resolution, 3));
    let mut point = Array1::zeros(2);
    for (k, mut row) in samples.outer_iter_mut().enumerate() {
        point[0] = xs[k / resolution];
        point[1] = ys[k % resolution];
        row[0] = point[0];
        row[1] = point[1];
        row[2] = benchmark.value(point.view());
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn grid_spans_the_search_box() {
        let problem = himmelblau();
        let grid: Array2<f64> = sample_grid(&problem, 11);

        assert_eq!(grid.dim(), (121, 3));
        let corner = problem.value(arr1(&[-5.0, -5.0]).view());
        assert_eq!(grid.row(0).to_vec(), vec![-5.0, -5.0, corner]);
        assert!(approx_eq!(f64, grid[[1, 1]], -4.0, ulps = 4));
        assert!(approx_eq!(f64, grid[[11, 0]], -4.0, ulps = 4));
        assert_eq!(grid[[120, 0]], 5.0);
        assert_eq!(grid[[120, 1]], 5.0);
        // (3, 2) lies on the grid
        let at_min = grid
            .outer_iter()
            .find(|row| {
                approx_eq!(f64, row[0], 3.0, ulps = 4) && approx_eq!(f64, row[1], 2.0, ulps = 4)
            })
            .unwrap();
        assert!(approx_eq!(f64, at_min[2], 0.0, epsilon = 1e-12));
    }

    #[test]
    #[should_panic]
    fn grid_rejects_higher_dimensions() {
        sample_grid::<f64, _>(&rastrigin(3), 10);
    }
}
