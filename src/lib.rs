//! The `ndarray-primal-dual` crate provides a forward-backward based
//! primal-dual splitting method for minimizing functions of an `ndarray`
//! of the form
//!
//! ```math
//! f(x) + g(x) + h(Lx)
//! ```
//!
//! with $`f`$ smooth, $`g`$ and $`h`$ non-smooth but prox-friendly, and
//! $`L`$ a bounded linear operator that never has to be inverted.
//!
//! It includes:
//! - step size selection from the smoothness constant of $`f`$
//! - plain (relaxed) and accelerated updates
//! - the split `initialize` / `iterate` / `finalize` interface for
//!   external drivers, and a self-contained solver loop
//!
//! Configuration mistakes are reported as
//! [`ConfigurationError`](error::ConfigurationError); diagnostics go to
//! the `log` facade.
//!
//! ```no_run
//! use ndarray::prelude::*;
//! use ndarray_primal_dual::linop::LinearMap;
//! use ndarray_primal_dual::prox::{fb_primal_dual, NonSmoothTerm, Parameters, SmoothTerm};
//!
//! // 1D total variation denoising: 1/2 |x - y|^2 + mu |Dx|_1
//! let y = array![1., 1.2, 4., 3.8, 0.];
//! let mu = 0.5;
//! let d = Array2::from_shape_fn((4, 5), |(i, j)| {
//!     if j == i { -1. } else if j == i + 1 { 1. } else { 0. }
//! });
//! let f: SmoothTerm<f64> = SmoothTerm::new(|x| &x - &y, 1.);
//! let tv: NonSmoothTerm<f64> = NonSmoothTerm::from_prox(move |z: ArrayView1<f64>, t: f64| {
//!     z.mapv(|e| e.signum() * (e.abs() - mu * t).max(0.))
//! })
//! .with_operator(LinearMap::from_operator(&d));
//! let terms = [NonSmoothTerm::zero(), tv];
//! let params = Parameters::default().with_nu(4.).with_lambda(1.);
//!
//! let x = fb_primal_dual(&f, &terms, y.view(), &params, 500, |_, _, _| false)
//!     .expect("valid configuration");
//! println!("{}", x);
//! ```

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

#[cfg(test)]
extern crate intel_mkl_src;

pub mod error;
pub mod linop;
pub mod prox;
