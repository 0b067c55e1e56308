extern crate descent;
extern crate ndarray;

use descent::{gallery, BoxError, Optimizer, State};
use ndarray::prelude::*;

fn main() {
    let mut optimizer = Optimizer::new(gallery::rosenbrock(2));
    let mut x = arr1(&[-1.2, 1.0]);

    let mut trace = |state: &State<f64>| -> Result<(), BoxError> {
        println!(
            "{:>3}\t{:.6e}\t{:.3e}\t{}",
            state.iterations(),
            state.value(),
            state.error(),
            state.current().x()
        );
        Ok(())
    };
    match optimizer.minimize(x.view_mut(), Some(&mut trace)) {
        Ok(res) => {
            println!("{:?}", res.status);
            println!("{:?}", x);
        }
        Err(e) => eprintln!("minimization failed: {}", e),
    }
}
