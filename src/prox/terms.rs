//! Problem terms handed to the primal-dual splitting
//!
//! The solver never looks inside a term. It only evaluates the
//! gradient of the smooth part and the proximal maps of the two
//! non-smooth parts, so every term is a bundle of closures.

use std::fmt;
use std::rc::Rc;

use ndarray::prelude::*;
use ndarray::NdFloat;

use crate::linop::LinearMap;

type Gradient<'a, S> = Box<dyn Fn(ArrayView1<S>) -> Array1<S> + 'a>;
type Prox<'a, S> = Rc<dyn Fn(ArrayView1<S>, S) -> Array1<S> + 'a>;

/// Smooth convex term $`f`$ with a $`\beta`$-Lipschitz gradient
pub struct SmoothTerm<'a, S> {
    grad: Gradient<'a, S>,
    beta: S,
}

impl<'a, S> SmoothTerm<'a, S>
where
    S: 'a + NdFloat,
{
    /// Parameters
    /// ----------
    /// - __grad:__  function that computes the gradient $`\nabla f(x)`$
    /// - __beta:__  Lipschitz constant of that gradient
    pub fn new(grad: impl Fn(ArrayView1<S>) -> Array1<S> + 'a, beta: S) -> Self {
        SmoothTerm {
            grad: Box::new(grad),
            beta,
        }
    }

    /// $`f = 0`$: zero gradient and $`\beta = 0`$
    #[must_use]
    pub fn none() -> Self {
        Self::new(|x| Array1::zeros(x.raw_dim()), S::zero())
    }

    #[inline]
    pub fn gradient(&self, x: ArrayView1<S>) -> Array1<S> {
        (self.grad)(x)
    }

    #[inline]
    pub fn beta(&self) -> S {
        self.beta
    }
}

impl<'a, S: fmt::Debug> fmt::Debug for SmoothTerm<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothTerm")
            .field("beta", &self.beta)
            .finish()
    }
}

/// Non-smooth convex term $`h`$, optionally composed with a linear map
///
/// Carries $`\mathrm{prox}_{t h}`$ for the primal side and
/// $`\mathrm{prox}_{\sigma h^*}`$ (the prox of the Fenchel conjugate)
/// for the dual side. Which one the solver uses depends on where the
/// term ends up, see [`Splitting`](super::Splitting).
pub struct NonSmoothTerm<'a, S> {
    prox: Prox<'a, S>,
    prox_adjoint: Prox<'a, S>,
    operator: Option<LinearMap<'a, S>>,
}

impl<'a, S> NonSmoothTerm<'a, S>
where
    S: 'a + NdFloat,
{
    /// Parameters
    /// ----------
    /// - __prox:__          $`(x, t) \mapsto \mathrm{prox}_{t h}(x)`$
    /// - __prox_adjoint:__  $`(z, \sigma) \mapsto \mathrm{prox}_{\sigma h^*}(z)`$
    pub fn new(
        prox: impl Fn(ArrayView1<S>, S) -> Array1<S> + 'a,
        prox_adjoint: impl Fn(ArrayView1<S>, S) -> Array1<S> + 'a,
    ) -> Self {
        NonSmoothTerm {
            prox: Rc::new(prox),
            prox_adjoint: Rc::new(prox_adjoint),
            operator: None,
        }
    }

    /// Derive the conjugate prox from the Moreau decomposition
    /// ```math
    /// \mathrm{prox}_{\sigma h^*}(z) = z - \sigma \, \mathrm{prox}_{h/\sigma}(z/\sigma)
    /// ```
    pub fn from_prox(prox: impl Fn(ArrayView1<S>, S) -> Array1<S> + 'a) -> Self {
        let prox: Prox<'a, S> = Rc::new(prox);
        let inner = Rc::clone(&prox);
        Self::new(
            move |x, step| prox(x, step),
            move |z, sigma| {
                let scaled = &z / sigma;
                let p = inner(scaled.view(), S::one() / sigma);
                &z - &(p * sigma)
            },
        )
    }

    /// $`h = 0`$: the prox is the identity and the conjugate prox
    /// projects onto $`\{0\}`$
    #[must_use]
    pub fn zero() -> Self {
        Self::new(|x, _| x.to_owned(), |z, _| Array1::zeros(z.raw_dim()))
    }

    /// Compose the term with $`L`$, i.e. the term becomes $`h(Lx)`$.
    pub fn with_operator(mut self, operator: LinearMap<'a, S>) -> Self {
        self.operator = Some(operator);
        self
    }

    #[inline]
    pub fn prox(&self, x: ArrayView1<S>, step: S) -> Array1<S> {
        (self.prox)(x, step)
    }

    #[inline]
    pub fn prox_adjoint(&self, z: ArrayView1<S>, step: S) -> Array1<S> {
        (self.prox_adjoint)(z, step)
    }
}

impl<'a, S> NonSmoothTerm<'a, S> {
    pub fn operator(&self) -> Option<&LinearMap<'a, S>> {
        self.operator.as_ref()
    }
}

impl<'a, S> fmt::Debug for NonSmoothTerm<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonSmoothTerm")
            .field("operator", &self.operator)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn moreau_conjugate_of_l1_is_clamp() {
        // h = |.|_1, h* is the indicator of the unit l-inf ball
        let h: NonSmoothTerm<f64> = NonSmoothTerm::from_prox(|x: ArrayView1<f64>, t: f64| {
            x.mapv(|e| e.signum() * (e.abs() - t).max(0.))
        });
        let z = array![3., -0.25, -2., 0.5];
        for &sigma in &[0.1, 1., 4.] {
            assert_abs_diff_eq!(
                h.prox_adjoint(z.view(), sigma),
                array![1., -0.25, -1., 0.5],
                epsilon = 1e-12
            );
        }
        assert_abs_diff_eq!(h.prox(z.view(), 1.), array![2., 0., -1., 0.]);
    }

    #[test]
    fn moreau_conjugate_of_quadratic() {
        // h(z) = 1/2 |z - y|^2, prox_{s h*}(z) = (z - s y) / (1 + s)
        let y = array![1., -2.];
        let h: NonSmoothTerm<f64> =
            NonSmoothTerm::from_prox(|z: ArrayView1<f64>, t: f64| (&z + &(&y * t)) / (1. + t));
        let z = array![0.5, 3.];
        let sigma = 0.5;
        assert_abs_diff_eq!(
            h.prox_adjoint(z.view(), sigma),
            (&z - &(&y * sigma)) / (1. + sigma),
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_terms() {
        let f: SmoothTerm<f64> = SmoothTerm::none();
        let h: NonSmoothTerm<f64> = NonSmoothTerm::zero();
        let x = array![1., 2., 3.];

        assert!(f.beta() == 0.);
        assert!(f.gradient(x.view()) == Array1::<f64>::zeros(3));
        assert!(h.prox(x.view(), 0.5) == x);
        assert!(h.prox_adjoint(x.view(), 0.5) == Array1::<f64>::zeros(3));
        assert!(h.operator().is_none());
        assert!(h.with_operator(LinearMap::identity()).operator().is_some());
    }
}
