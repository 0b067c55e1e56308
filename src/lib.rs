//! Unconstrained local minimization of differentiable functions by gradient
//! descent with the two-point step size of Barzilai and Borwein.
//!
//! Implement [`Problem`] for your objective (value and gradient in one call),
//! bind it to an [`Optimizer`] and call [`Optimizer::minimize`] with a start
//! point. The point is refined in place; the returned [`OptimResult`] tells
//! whether the run converged, ran out of iterations or stalled.
//!
//! ```
//! # extern crate descent;
//! # extern crate ndarray;
//! # use ndarray::prelude::*;
//! # use descent::{gallery, Optimizer, Status};
//! let mut optimizer = Optimizer::new(gallery::rosenbrock(2));
//! let mut x = arr1(&[-1.2f64, 1.0]);
//! let res = optimizer.minimize(x.view_mut(), None).unwrap();
//!
//! assert_eq!(res.status, Status::Converged);
//! assert!((x[0] - 1.0).abs() < 1e-2 && (x[1] - 1.0).abs() < 1e-2);
//! ```
//!
//! The [`gallery`] holds a few classic benchmark problems.

pub mod gallery;
pub mod utils;
pub mod vector;

mod error;
mod minimizer;
mod problem;

pub use error::{BoxError, ConfigError, Error};
pub use minimizer::{OptimResult, Status};
pub use problem::{Problem, Real};
pub use vector::{
    Curvature, GradientDescent, GradientDescentBuilder, Observer, Optimizer, Pair, StallPolicy,
    State,
};
