//! Algorithms that search for local minima of functions along multiple dimensions.

mod gradient_descent;
mod state;
mod step;

pub use self::gradient_descent::{GradientDescent, GradientDescentBuilder, Observer, Optimizer};
pub use self::state::{Pair, State};
pub use self::step::{Curvature, StallPolicy};
