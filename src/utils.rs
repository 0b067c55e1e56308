use ndarray::prelude::*;

use crate::problem::Real;

/// Forward-difference approximation of the gradient of `func` at `xk`,
/// stepping `epsilon[k]` along coordinate `k`.
pub fn approx_fprime<T, F>(xk: ArrayView1<T>, func: F, epsilon: ArrayView1<T>) -> Array1<T>
where
    T: Real,
    F: Fn(ArrayView1<T>) -> T,
{
    assert_eq!(xk.len(), epsilon.len());
    let f0 = func(xk);
    let mut grad = Array1::<T>::zeros(xk.len());
    let mut x = xk.to_owned();
    for k in 0..xk.len() {
        x[k] = xk[k] + epsilon[k];
        grad[k] = (func(x.view()) - f0) / epsilon[k];
        x[k] = xk[k];
    }
    grad
}

#[cfg(test)]
mod tests {

    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn gradient() {
        let function = |x: ArrayView1<f64>| 1.0 * x[0].powi(2) + 200. * x[1].powi(2);
        let x = arr1(&[1.0, 1.0]);
        let eps_ar = arr1(&[1e-7, 14.14 * 1e-7]);
        let res = approx_fprime(x.view(), function, eps_ar.view());

        assert!(approx_eq!(f64, res[0], 2.0, epsilon = 1e-4));
        assert!(approx_eq!(f64, res[1], 400.0, epsilon = 1e-3));
    }
}
