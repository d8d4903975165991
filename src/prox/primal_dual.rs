//! Forward-Backward based Primal-Dual splitting

use log::{debug, trace};
use ndarray::prelude::*;
use ndarray::NdFloat;

use super::{Method, Momentum, NonSmoothTerm, Parameters, SmoothTerm, Splitting, StepSizes};
use crate::error::Result;
use crate::linop::LinearMap;

/// Everything the primal-dual recurrence carries from one iteration to
/// the next.
///
/// Built by [`initialize`], advanced by [`iterate`], owned by whoever
/// drives the loop.
#[derive(Clone, Debug)]
pub struct PrimalDualState<S> {
    steps: StepSizes<S>,
    momentum: Momentum<S>,
    splitting: Splitting,
    dual: Array1<S>,
    primal_candidate: Array1<S>,
    dual_candidate: Array1<S>,
    last_weight: Option<S>,
}

impl<S: NdFloat> PrimalDualState<S> {
    /// Primal step $`\tau`$
    pub fn tau(&self) -> S {
        self.steps.tau
    }

    /// Dual step $`\sigma`$
    pub fn sigma(&self) -> S {
        self.steps.sigma
    }

    pub fn method(&self) -> Method {
        self.momentum.method()
    }

    /// Extrapolation counter $`t_n`$ of the accelerated method
    pub fn momentum_counter(&self) -> Option<S> {
        self.momentum.counter()
    }

    pub fn splitting(&self) -> Splitting {
        self.splitting
    }

    /// Dual variable $`v_n`$
    pub fn dual(&self) -> ArrayView1<'_, S> {
        self.dual.view()
    }

    /// $`p_n`$ of the last iteration
    pub fn primal_candidate(&self) -> ArrayView1<'_, S> {
        self.primal_candidate.view()
    }

    /// $`q_n`$ of the last iteration
    pub fn dual_candidate(&self) -> ArrayView1<'_, S> {
        self.dual_candidate.view()
    }

    /// Weight applied by the last iteration, `None` before the first.
    pub fn last_weight(&self) -> Option<S> {
        self.last_weight
    }
}

/// Set up the primal-dual splitting for
/// ```math
/// \min_x f(x) + g(x) + h(Lx)
/// ```
/// where `smooth` is $`f`$ and `terms` holds $`g`$ and $`h`$ in any
/// order; at most one of them may carry $`L`$.
///
/// Returns the starting point, the state with $`v_0 = L x_0`$, and a
/// copy of `params` with `absolute_tolerance` and `report_dual` set.
/// Nothing is built if the configuration is rejected.
pub fn initialize<S: NdFloat>(
    x0: ArrayView1<S>,
    smooth: &SmoothTerm<'_, S>,
    terms: &[NonSmoothTerm<'_, S>],
    params: &Parameters<S>,
) -> Result<(Array1<S>, PrimalDualState<S>, Parameters<S>)> {
    let splitting = Splitting::new(terms)?;
    let steps = StepSizes::select(smooth.beta(), params)?;
    debug!(
        "primal-dual splitting: primal term {}, dual term {}, tau = {}, sigma = {}, method = {}",
        splitting.primal(), splitting.dual(), steps.tau, steps.sigma, params.method
    );

    let dual = forward(splitting.operator(terms)?, x0);
    let state = PrimalDualState {
        steps,
        momentum: Momentum::new(params.method),
        splitting,
        primal_candidate: x0.to_owned(),
        dual_candidate: dual.clone(),
        dual,
        last_weight: None,
    };
    let params = Parameters {
        absolute_tolerance: true,
        report_dual: true,
        ..params.clone()
    };
    Ok((x0.to_owned(), state, params))
}

/// One iteration of the Forward-Backward based Primal-Dual method
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// p_n &= \mathrm{prox}_{\tau g}\left( x_n - \tau (\nabla f(x_n) + L^H v_n) \right) \\
/// q_n &= \mathrm{prox}_{\sigma h^*}\left( v_n + \sigma L (2 p_n - x_n) \right) \\
/// x_{n+1} &= x_n + w_n (p_n - x_n) \\
/// v_{n+1} &= v_n + w_n (q_n - v_n)
/// \end{aligned}
/// ```
/// with $`w_n`$ from [`Momentum`]. `x` and the dual variable in `state`
/// are updated in place and always belong to the same iteration.
///
/// Fails when `terms` is not the pair `state` was initialized with, or
/// when the plain method has no usable `lambda`. Neither `x` nor
/// `state` is touched then.
///
/// References
/// ----------
/// \[C13\]: [ Condat L,
///             "A Primal–Dual Splitting Method for Convex Optimization Involving
///             Lipschitzian, Proximable and Linear Composite Terms",
///             J Optim Theory Appl 158, 460–479 (2013) ](https://doi.org/10.1007/s10957-012-0245-9)
pub fn iterate<S: NdFloat>(
    smooth: &SmoothTerm<'_, S>,
    terms: &[NonSmoothTerm<'_, S>],
    x: &mut Array1<S>,
    state: &mut PrimalDualState<S>,
    params: &Parameters<S>,
) -> Result<()> {
    let (primal, dual) = state.splitting.sides(terms)?;
    let operator = state.splitting.operator(terms)?;
    let weight = state.momentum.weight(params.lambda)?;
    let StepSizes { tau, sigma } = state.steps;

    // forward-backward step on the primal variable
    let mut point = smooth.gradient(x.view()) + &adjoint(operator, state.dual.view());
    point.mapv_inplace(|d| -tau * d);
    point += &*x;
    state.primal_candidate = primal.prox(point.view(), tau);

    // proximal step on the dual variable at the over-relaxed point 2p - x
    let two = S::one() + S::one();
    let relaxed = &state.primal_candidate * two - &*x;
    let mut point = forward(operator, relaxed.view());
    point.mapv_inplace(|d| sigma * d);
    point += &state.dual;
    state.dual_candidate = dual.prox_adjoint(point.view(), sigma);

    blend(x, &state.primal_candidate, weight);
    blend(&mut state.dual, &state.dual_candidate, weight);
    state.last_weight = Some(weight);
    trace!("primal-dual weight = {}", weight);
    Ok(())
}

/// Nothing to post-process, the iterate is the solution.
pub fn finalize<S>(x: Array1<S>) -> Array1<S> {
    x
}

/// Forward-Backward based Primal-Dual method
///
/// Minimizes $`f(x) + g(x) + h(Lx)`$ by running [`initialize`] and
/// then at most `maxiter` calls of [`iterate`].
///
/// Parameters
/// ----------
/// - __smooth:__    smooth term $`f`$, use [`SmoothTerm::none`] if there is none
/// - __terms:__     the two non-smooth terms, at most one composed with $`L`$
/// - __x0:__        initial guess
/// - __params:__    step size and momentum configuration
/// - __maxiter:__   number of iterations
/// - __callback:__  user-defined function to be evaluated with three arguments (x, v, iter),
///                   where v is the dual variable.
///                   It is evaluated at (x0, Lx0, 0) and then after each iteration.
///                   If it returns True, the function terminates early.
pub fn fb_primal_dual<S: NdFloat>(
    smooth: &SmoothTerm<'_, S>,
    terms: &[NonSmoothTerm<'_, S>],
    x0: ArrayView1<S>,
    params: &Parameters<S>,
    maxiter: usize,
    mut callback: impl FnMut(ArrayView1<S>, ArrayView1<S>, usize) -> bool,
) -> Result<Array1<S>> {
    let (mut x, mut state, params) = initialize(x0, smooth, terms, params)?;

    if callback(x.view(), state.dual(), 0) {
        return Ok(finalize(x));
    }
    for iter in 1..=maxiter {
        iterate(smooth, terms, &mut x, &mut state, &params)?;
        if callback(x.view(), state.dual(), iter) {
            break;
        }
    }
    Ok(finalize(x))
}

/// $`Lx`$, identity when there is no operator
fn forward<S: NdFloat>(operator: Option<&LinearMap<'_, S>>, x: ArrayView1<S>) -> Array1<S> {
    match operator {
        Some(op) => op.apply(x),
        None => x.to_owned(),
    }
}

/// $`L^H y`$, identity when there is no operator
fn adjoint<S: NdFloat>(operator: Option<&LinearMap<'_, S>>, y: ArrayView1<S>) -> Array1<S> {
    match operator {
        Some(op) => op.apply_adjoint(y),
        None => y.to_owned(),
    }
}

/// $`x \leftarrow x + w (p - x)`$
fn blend<S: NdFloat>(x: &mut Array1<S>, candidate: &Array1<S>, weight: S) {
    x.zip_mut_with(candidate, |xi, &pi| *xi = *xi + weight * (pi - *xi));
}


#[allow(non_snake_case)]
#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use test::Bencher;

    #[bench]
    fn iterate_total_variation(b: &mut Bencher) {
        let n = 256;
        let y = Array1::from_shape_fn(n, |i| if i < n / 2 { 1. } else { -1. });
        let D = Array2::from_shape_fn((n - 1, n), |(i, j)| {
            if j == i {
                -1.
            } else if j == i + 1 {
                1.
            } else {
                0.
            }
        });
        let f: SmoothTerm<f64> = SmoothTerm::new(|x| &x - &y, 1.);
        let terms: [NonSmoothTerm<f64>; 2] = [
            NonSmoothTerm::zero(),
            NonSmoothTerm::new(
                |x: ArrayView1<f64>, t: f64| x.mapv(|e| e.signum() * (e.abs() - 0.1 * t).max(0.)),
                |z: ArrayView1<f64>, _| z.mapv(|e| e.max(-0.1).min(0.1)),
            )
            .with_operator(LinearMap::from_operator(&D)),
        ];
        let params = Parameters::default().with_nu(4.).with_lambda(1.);
        let (mut x, mut state, params) = initialize(y.view(), &f, &terms, &params).unwrap();
        b.iter(|| iterate(&f, &terms, &mut x, &mut state, &params).unwrap());
    }
}
