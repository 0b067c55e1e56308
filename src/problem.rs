//! The capability an objective function must expose to be minimized.
use ndarray::{ArrayView1, ArrayViewMut1, NdFloat};
use num_traits::FromPrimitive;

/// Scalar type shared by every point, gradient and tolerance of a run.
pub trait Real: NdFloat + FromPrimitive {
    /// Converts an `f64` literal into this type, rounding to the nearest
    /// representable value. Yields NaN if the type cannot represent it at all.
    #[inline]
    fn from_constant(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }
}

impl<T: NdFloat + FromPrimitive> Real for T {}

/// A differentiable objective over a fixed-dimension real vector space.
///
/// Implementations must be pure: evaluating the same point twice gives the
/// same value and gradient, and no state retained between calls may affect
/// the result. This is what makes it safe to share one problem between
/// several optimizers.
///
/// # Examples
///
/// ```
/// # extern crate descent;
/// # extern crate ndarray;
/// # use std::convert::Infallible;
/// # use ndarray::{ArrayView1, ArrayViewMut1};
/// # use descent::Problem;
/// /// f(x) = x . x
/// struct Sphere(usize);
///
/// impl Problem<f64> for Sphere {
///     type Error = Infallible;
///
///     fn parameter_count(&self) -> usize {
///         self.0
///     }
///
///     fn gradient_evaluation(
///         &self,
///         x: ArrayView1<f64>,
///         mut grad: ArrayViewMut1<f64>,
///     ) -> Result<f64, Infallible> {
///         grad.assign(&(&x * 2.0));
///         Ok(x.dot(&x))
///     }
/// }
/// ```
pub trait Problem<T: Real> {
    /// Failure raised by an evaluation, e.g. a point outside the domain.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Dimension of the domain. Must not change over the lifetime of the problem.
    fn parameter_count(&self) -> usize;

    /// Writes the gradient at `x` into `grad` and returns the objective value at `x`.
    ///
    /// Both views have length `parameter_count()`; anything else is a bug in
    /// the caller and may panic.
    fn gradient_evaluation(
        &self,
        x: ArrayView1<T>,
        grad: ArrayViewMut1<T>,
    ) -> Result<T, Self::Error>;
}

impl<'a, T: Real, P: Problem<T> + ?Sized> Problem<T> for &'a P {
    type Error = P::Error;

    fn parameter_count(&self) -> usize {
        (**self).parameter_count()
    }

    fn gradient_evaluation(
        &self,
        x: ArrayView1<T>,
        grad: ArrayViewMut1<T>,
    ) -> Result<T, Self::Error> {
        (**self).gradient_evaluation(x, grad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_round_to_target_type() {
        assert_eq!(f64::from_constant(1e-5), 1e-5);
        assert_eq!(f32::from_constant(1e-3), 1e-3f32);
        assert_eq!(f32::from_constant(1e300), f32::INFINITY);
    }
}
