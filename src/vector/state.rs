//! Buffers of the gradient descent optimizer and the read-only view handed to observers.
//!
//! The optimizer keeps two (point, gradient) pairs. One of them holds the
//! previous iterate, the other one the current candidate. Rolling the state
//! swaps their roles by toggling an index; buffers are never moved or
//! reallocated.
use ndarray::prelude::*;

use crate::problem::Real;

/// A point together with the gradient evaluated there.
#[derive(Debug, Clone)]
pub struct Pair<T: Real> {
    pub(crate) x: Array1<T>,
    pub(crate) grad: Array1<T>,
}

impl<T: Real> Pair<T> {
    fn zeros(n: usize) -> Self {
        Pair {
            x: Array1::zeros(n),
            grad: Array1::zeros(n),
        }
    }

    /// The point.
    pub fn x(&self) -> ArrayView1<'_, T> {
        self.x.view()
    }

    /// The gradient at [`x`](Pair::x). Stale for a candidate that was not evaluated yet.
    pub fn gradient(&self) -> ArrayView1<'_, T> {
        self.grad.view()
    }
}

/// The two pairs, addressed by a toggling index.
#[derive(Debug, Clone)]
struct PingPong<T: Real> {
    slots: [Pair<T>; 2],
    current: usize,
}

impl<T: Real> PingPong<T> {
    fn new(n: usize) -> Self {
        PingPong {
            slots: [Pair::zeros(n), Pair::zeros(n)],
            current: 1,
        }
    }

    #[inline]
    fn previous(&self) -> &Pair<T> {
        &self.slots[1 - self.current]
    }

    #[inline]
    fn current(&self) -> &Pair<T> {
        &self.slots[self.current]
    }

    /// Borrows both pairs at once, previous first.
    #[inline]
    fn split_mut(&mut self) -> (&mut Pair<T>, &mut Pair<T>) {
        let (first, second) = self.slots.split_at_mut(1);
        if self.current == 1 {
            (&mut first[0], &mut second[0])
        } else {
            (&mut second[0], &mut first[0])
        }
    }

    /// The current pair becomes the previous one, the old previous pair is free
    /// to receive the next candidate.
    #[inline]
    fn roll(&mut self) {
        self.current = 1 - self.current;
    }
}

/// The optimizer state as seen by observers.
#[derive(Debug, Clone)]
pub struct State<T: Real> {
    pairs: PingPong<T>,
    pub(crate) value: T,
    pub(crate) error: T,
    pub(crate) step: T,
    pub(crate) iterations: usize,
}

impl<T: Real> State<T> {
    pub(crate) fn new(n: usize) -> Self {
        State {
            pairs: PingPong::new(n),
            value: T::zero(),
            error: T::zero(),
            step: T::zero(),
            iterations: 0,
        }
    }

    /// Length of every buffer.
    pub fn parameter_count(&self) -> usize {
        self.pairs.current().x.len()
    }

    /// The last evaluated iterate and its gradient.
    pub fn previous(&self) -> &Pair<T> {
        self.pairs.previous()
    }

    /// The candidate produced by the last step. Its gradient is evaluated at the
    /// start of the next iteration.
    pub fn current(&self) -> &Pair<T> {
        self.pairs.current()
    }

    /// Objective value of the last evaluation.
    pub fn value(&self) -> T {
        self.value
    }

    /// Euclidean norm of the last applied step.
    pub fn error(&self) -> T {
        self.error
    }

    /// Last step size.
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of completed main-loop iterations, the one being reported included.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub(crate) fn split_mut(&mut self) -> (&mut Pair<T>, &mut Pair<T>) {
        self.pairs.split_mut()
    }

    pub(crate) fn roll(&mut self) {
        self.pairs.roll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_swaps_roles_without_copying() {
        let mut state = State::<f64>::new(3);
        {
            let (previous, current) = state.split_mut();
            previous.x.mapv_inplace(|_| 1.0);
            current.x.mapv_inplace(|_| 2.0);
        }
        state.roll();
        assert_eq!(state.previous().x(), arr1(&[2.0, 2.0, 2.0]));
        assert_eq!(state.current().x(), arr1(&[1.0, 1.0, 1.0]));

        state.roll();
        assert_eq!(state.previous().x(), arr1(&[1.0, 1.0, 1.0]));
        assert_eq!(state.parameter_count(), 3);
    }

    #[test]
    fn split_hands_out_previous_first() {
        let mut state = State::<f32>::new(2);
        state.roll();
        {
            let (previous, current) = state.split_mut();
            previous.grad.mapv_inplace(|_| 5.0);
            current.grad.mapv_inplace(|_| 7.0);
        }
        assert_eq!(state.previous().gradient(), arr1(&[5.0f32, 5.0]));
        assert_eq!(state.current().gradient(), arr1(&[7.0f32, 7.0]));
    }
}
