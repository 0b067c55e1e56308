//! Types shared by every run of a minimizer: the termination status and the
//! summary returned to the caller.
use std::time::Duration;

/// Minimizer states at the end of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The norm of the last step dropped to the configured precision.
    Converged,
    /// The iteration budget was spent before converging.
    MaxIters,
    /// The step size could not be computed and the run was halted.
    Stalled,
}

impl Status {
    /// Whether the run ended by convergence.
    pub fn is_converged(&self) -> bool {
        *self == Status::Converged
    }
}

/// A minimization result, storing various details of the run.
///
/// The final parameters are not part of the result; they are written back
/// into the buffer the run started from.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimResult<T> {
    /// The runtime of the minimization according to the system clock.
    pub runtime: Duration,
    /// The number of gradient evaluations performed.
    pub f_evals: usize,
    /// The number of iterations run after the bootstrap step.
    pub iterations: usize,
    /// The objective value at the last evaluated point. The returned point is
    /// one step further and was not evaluated.
    pub minimum_value: T,
    /// The norm of the last applied step.
    pub error: T,
    /// The last step size.
    pub step: T,
    /// Why the run stopped.
    pub status: Status,
}
