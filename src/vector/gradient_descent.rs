//! Gradient descent with the adaptive step size of Barzilai and Borwein.
//!
//! A single plain gradient step of fixed size bootstraps the method. From then
//! on every iteration evaluates the gradient at the current candidate, derives
//! the step size from the last two (point, gradient) pairs, rolls the pairs and
//! steps against the gradient of the newly previous pair. Iteration stops when
//! the norm of the applied step drops to `precision` or the iteration budget
//! is spent.
//!
//! # Use case
//!
//! The method needs the gradient but no line search and no matrix storage, so
//! an iteration costs one gradient evaluation and a few passes over the
//! buffers. It is not monotone: the objective may increase from one iteration
//! to the next.
//!
//! # Examples
//!
//! ```
//! # extern crate descent;
//! # extern crate ndarray;
//! # use ndarray::prelude::*;
//! # use descent::{gallery, GradientDescentBuilder, Optimizer, Status};
//! let config = GradientDescentBuilder::<f64>::default()
//!     .max_iter(500)
//!     .build()
//!     .unwrap();
//! let mut optimizer = Optimizer::with_config(gallery::himmelblau(), config);
//! let mut x = arr1(&[1.0, 1.0]);
//! let res = optimizer.minimize(x.view_mut(), None).unwrap();
//! assert_eq!(res.status, Status::Converged);
//! println!("minimum near {}", x);
//! ```
use std::time::Instant;

use derive_builder::Builder;
use log::{debug, info, warn};
use ndarray::prelude::*;

use crate::error::{BoxError, ConfigError, Error};
use crate::minimizer::{OptimResult, Status};
use crate::problem::{Problem, Real};
use crate::vector::state::State;
use crate::vector::step::{apply_step, secant_step, Curvature, StallPolicy};

/// Callback invoked once per completed iteration. Returning an error aborts the run.
pub type Observer<'a, T> = &'a mut dyn FnMut(&State<T>) -> Result<(), BoxError>;

/// Settings of the Barzilai-Borwein gradient descent.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate", error = "ConfigError"))]
pub struct GradientDescent<T: Real> {
    /// Size of the plain gradient step that bootstraps the method.
    #[builder(default = "T::from_constant(1e-3)")]
    pub initial_step: T,

    /// Norm of the applied step at or below which the run has converged.
    /// Smaller is more precise.
    #[builder(default = "T::from_constant(1e-5)")]
    pub precision: T,

    /// The maximum number of iterations after the bootstrap step.
    #[builder(default = "100")]
    pub max_iter: usize,

    /// Treatment of negative secant curvature.
    #[builder(default = "Curvature::Absolute")]
    pub curvature: Curvature,

    /// Reaction to a degenerate step size computation.
    #[builder(default = "StallPolicy::Halt")]
    pub stall_policy: StallPolicy,

    /// `<y, y>` at or below this value counts as degenerate.
    #[builder(default = "T::min_positive_value()")]
    pub min_denominator: T,
}

impl<T: Real> GradientDescentBuilder<T> {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(step) = self.initial_step {
            if !step.is_finite() || step <= T::zero() {
                return Err(ConfigError::InitialStep);
            }
        }
        if let Some(precision) = self.precision {
            if !precision.is_finite() || precision < T::zero() {
                return Err(ConfigError::Precision);
            }
        }
        if let Some(min) = self.min_denominator {
            if !min.is_finite() || min < T::zero() {
                return Err(ConfigError::MinDenominator);
            }
        }
        Ok(())
    }
}

impl<T: Real> Default for GradientDescent<T> {
    fn default() -> Self {
        GradientDescent {
            initial_step: T::from_constant(1e-3),
            precision: T::from_constant(1e-5),
            max_iter: 100,
            curvature: Curvature::Absolute,
            stall_policy: StallPolicy::Halt,
            min_denominator: T::min_positive_value(),
        }
    }
}

/// A minimizer bound to one problem. Owns the buffers of the iteration, which
/// are allocated once here and reused by every call to `minimize`.
#[derive(Debug)]
pub struct Optimizer<T: Real, P: Problem<T>> {
    problem: P,
    config: GradientDescent<T>,
    state: State<T>,
}

impl<T: Real, P: Problem<T>> Optimizer<T, P> {
    /// Binds a problem using the default settings.
    pub fn new(problem: P) -> Self {
        Self::with_config(problem, GradientDescent::default())
    }

    pub fn with_config(problem: P, config: GradientDescent<T>) -> Self {
        let n = problem.parameter_count();
        Optimizer {
            problem,
            config,
            state: State::new(n),
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.problem.parameter_count()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &GradientDescent<T> {
        &self.config
    }

    /// State left behind by the last run.
    pub fn state(&self) -> &State<T> {
        &self.state
    }

    /// Consumes the optimizer and hands back the problem.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Searches for a local minimum starting from `start`, which is
    /// overwritten with the final iterate.
    ///
    /// The observer, if any, is called after every completed iteration.
    ///
    /// A step whose norm is not finite ends the run as [`Status::Stalled`].
    /// If that happens on the bootstrap step `start` keeps its value.
    ///
    /// # Panics
    ///
    /// If `start.len()` differs from the parameter count of the problem.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem fails to evaluate a point or the
    /// observer returns an error. `start` is left untouched in that case.
    pub fn minimize(
        &mut self,
        mut start: ArrayViewMut1<T>,
        mut observer: Option<Observer<'_, T>>,
    ) -> Result<OptimResult<T>, Error> {
        assert_eq!(
            start.len(),
            self.parameter_count(),
            "start point has {} parameters, the problem expects {}",
            start.len(),
            self.parameter_count()
        );
        let clock = Instant::now();
        let config = &self.config;
        let problem = &self.problem;
        let state = &mut self.state;
        let mut f_evals = 0;

        state.iterations = 0;
        state.step = config.initial_step;
        let (previous, current) = state.split_mut();
        previous.x.assign(&start);
        let value = evaluate(problem, &mut f_evals, previous.x.view(), previous.grad.view_mut())?;
        let error = apply_step(previous, current, config.initial_step);
        state.value = value;
        state.error = error;
        debug!(
            "bootstrap: value {} error {} step {}",
            state.value, state.error, state.step
        );

        if !state.error.is_finite() {
            warn!("non-finite bootstrap step, halting with the start point untouched");
            return Ok(OptimResult {
                runtime: clock.elapsed(),
                f_evals,
                iterations: 0,
                minimum_value: state.value,
                error: state.error,
                step: state.step,
                status: Status::Stalled,
            });
        }
        if state.error <= config.precision {
            info!("converged at the bootstrap step, error {}", state.error);
            return Ok(OptimResult {
                runtime: clock.elapsed(),
                f_evals,
                iterations: 0,
                minimum_value: state.value,
                error: state.error,
                step: state.step,
                status: Status::Converged,
            });
        }

        let mut status = Status::MaxIters;
        let mut overflowed = false;
        while state.iterations < config.max_iter && state.error > config.precision {
            let (previous, current) = state.split_mut();
            let value = evaluate(problem, &mut f_evals, current.x.view(), current.grad.view_mut())?;
            let step = secant_step(previous, current, config.curvature, config.min_denominator);
            state.value = value;
            let step = match (step, config.stall_policy) {
                (Some(step), _) => step,
                (None, StallPolicy::Halt) => {
                    warn!(
                        "degenerate step size after {} iterations, halting",
                        state.iterations
                    );
                    status = Status::Stalled;
                    break;
                }
                (None, StallPolicy::InitialStep) => {
                    warn!("degenerate step size, falling back to the initial step");
                    config.initial_step
                }
                (None, StallPolicy::PreviousStep) => {
                    warn!("degenerate step size, reusing the previous step");
                    state.step
                }
            };

            state.roll();
            let (previous, current) = state.split_mut();
            let error = apply_step(previous, current, step);
            state.error = error;
            state.step = step;
            state.iterations += 1;
            debug!(
                "iter {}: value {} error {} step {}",
                state.iterations, state.value, state.error, step
            );
            if !error.is_finite() {
                warn!(
                    "non-finite step after {} iterations, halting",
                    state.iterations
                );
                status = Status::Stalled;
                overflowed = true;
                break;
            }

            if let Some(observe) = observer.as_deref_mut() {
                observe(state).map_err(Error::Observer)?;
            }
        }
        if status != Status::Stalled && state.error <= config.precision {
            status = Status::Converged;
        }

        // an overflowing candidate is dropped in favor of the last evaluated point
        if overflowed {
            start.assign(&state.previous().x);
        } else {
            start.assign(&state.current().x);
        }
        info!(
            "finished with {:?} after {} iterations, value {} error {}",
            status, state.iterations, state.value, state.error
        );
        Ok(OptimResult {
            runtime: clock.elapsed(),
            f_evals,
            iterations: state.iterations,
            minimum_value: state.value,
            error: state.error,
            step: state.step,
            status,
        })
    }

    /// Convenience wrapper around [`minimize`](Optimizer::minimize) for slices and arrays.
    pub fn minimize_slice(
        &mut self,
        start: &mut [T],
        observer: Option<Observer<'_, T>>,
    ) -> Result<OptimResult<T>, Error> {
        self.minimize(ArrayViewMut1::from(start), observer)
    }
}

/// Evaluates the problem, counting the call and boxing its error.
#[inline]
fn evaluate<T: Real, P: Problem<T>>(
    problem: &P,
    f_evals: &mut usize,
    x: ArrayView1<T>,
    grad: ArrayViewMut1<T>,
) -> Result<T, Error> {
    *f_evals += 1;
    problem
        .gradient_evaluation(x, grad)
        .map_err(|e| Error::Problem(Box::new(e)))
}
