//! Two-point secant step size of Barzilai and Borwein.
//!
//! J. Barzilai, J. M. Borwein. Two-Point Step Size Gradient Methods.
//! IMA Journal of Numerical Analysis, 8(1), 1988, pp 141--148
//!
//! With `s = x1 - x0` and `y = g1 - g0` the step is `<s, y> / <y, y>`, an
//! estimate of the inverse curvature along the last move. Only the two most
//! recent (point, gradient) pairs are needed.
use ndarray::Zip;

use crate::problem::Real;
use crate::vector::state::Pair;

/// How the sign of the secant curvature `<s, y>` enters the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curvature {
    /// Use `|<s, y>| / <y, y>`. A region of negative curvature still produces
    /// a descent step.
    Absolute,
    /// Use `<s, y> / <y, y>` as is. The step points uphill wherever `<s, y> < 0`,
    /// which can drive the iterates to maxima or saddle points.
    Signed,
}

/// What to do when the secant step cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallPolicy {
    /// Stop and report [`Status::Stalled`](crate::Status::Stalled).
    Halt,
    /// Take a step of the configured initial size.
    InitialStep,
    /// Repeat the previously applied step size.
    PreviousStep,
}

/// Computes the secant step from the previous and the current pair.
///
/// Returns `None` if `<y, y>` is not finite or not larger than
/// `min_denominator`, or if the resulting step is not finite.
pub(crate) fn secant_step<T: Real>(
    previous: &Pair<T>,
    current: &Pair<T>,
    curvature: Curvature,
    min_denominator: T,
) -> Option<T> {
    let mut sy = T::zero();
    let mut yy = T::zero();
    Zip::from(&current.x)
        .and(&previous.x)
        .and(&current.grad)
        .and(&previous.grad)
        .for_each(|&x1, &x0, &g1, &g0| {
            let y = g1 - g0;
            sy += (x1 - x0) * y;
            yy += y * y;
        });

    if !yy.is_finite() || yy <= min_denominator {
        return None;
    }
    let sy = match curvature {
        Curvature::Absolute => sy.abs(),
        Curvature::Signed => sy,
    };
    let step = sy / yy;
    if step.is_finite() {
        Some(step)
    } else {
        None
    }
}

/// Writes `current.x = previous.x - step * previous.grad` and returns the norm
/// of the applied displacement.
pub(crate) fn apply_step<T: Real>(previous: &Pair<T>, current: &mut Pair<T>, step: T) -> T {
    let mut sum = T::zero();
    Zip::from(&mut current.x)
        .and(&previous.x)
        .and(&previous.grad)
        .for_each(|x1, &x0, &g0| {
            let t = step * g0;
            *x1 = x0 - t;
            sum += t * t;
        });
    sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use ndarray::prelude::*;

    fn pair(x: &[f64], grad: &[f64]) -> Pair<f64> {
        Pair {
            x: arr1(x),
            grad: arr1(grad),
        }
    }

    #[test]
    fn secant_step_recovers_inverse_curvature_of_a_quadratic() {
        // f(x) = 2 x.x, gradient 4 x
        let previous = pair(&[1.0, -1.0], &[4.0, -4.0]);
        let current = pair(&[0.5, 0.25], &[2.0, 1.0]);
        let step = secant_step(&previous, &current, Curvature::Signed, 0.0).unwrap();
        assert!(approx_eq!(f64, step, 0.25, ulps = 2));
    }

    #[test]
    fn negative_curvature_is_reflected_unless_signed() {
        // gradient decreases while moving forward
        let previous = pair(&[0.0], &[1.0]);
        let current = pair(&[1.0], &[0.5]);
        let signed = secant_step(&previous, &current, Curvature::Signed, 0.0).unwrap();
        let absolute = secant_step(&previous, &current, Curvature::Absolute, 0.0).unwrap();
        assert!(approx_eq!(f64, signed, -2.0, ulps = 2));
        assert!(approx_eq!(f64, absolute, 2.0, ulps = 2));
    }

    #[test]
    fn identical_gradients_are_degenerate() {
        let previous = pair(&[0.0, 1.0], &[3.0, 3.0]);
        let current = pair(&[1.0, 2.0], &[3.0, 3.0]);
        assert_eq!(
            secant_step(&previous, &current, Curvature::Absolute, f64::MIN_POSITIVE),
            None
        );
    }

    #[test]
    fn tiny_denominator_below_threshold_is_degenerate() {
        let previous = pair(&[0.0], &[1.0]);
        let current = pair(&[1.0], &[1.0 + 1e-10]);
        assert_eq!(secant_step(&previous, &current, Curvature::Absolute, 1e-12), None);
        assert!(secant_step(&previous, &current, Curvature::Absolute, 0.0).is_some());
    }

    #[test]
    fn non_finite_gradients_are_degenerate() {
        let previous = pair(&[0.0], &[1.0]);
        let current = pair(&[1.0], &[f64::NAN]);
        assert_eq!(secant_step(&previous, &current, Curvature::Signed, 0.0), None);
    }

    #[test]
    fn apply_step_moves_against_gradient() {
        let previous = pair(&[1.0, 2.0], &[3.0, 4.0]);
        let mut current = pair(&[0.0, 0.0], &[0.0, 0.0]);
        let error = apply_step(&previous, &mut current, 0.5);
        assert_eq!(current.x, arr1(&[-0.5, 0.0]));
        assert!(approx_eq!(f64, error, 2.5, ulps = 2));
    }
}
