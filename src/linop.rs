//! Abstract Linear Operators and Adjoints
//! building upon ndarray_linalg::operator
//!
//! The splitting only ever needs an operator $`L`$ and its adjoint
//! $`L^H`$ applied to vectors, so both are carried together in a
//! [`LinearMap`]. Anything implementing
//! [`LinearOperator`] and [`Adjoint`] (dense matrices) converts into
//! one with [`LinearMap::from_operator`], real self-adjoint operators
//! such as a [`Diagonal`] with [`LinearMap::self_adjoint`].

use std::fmt;

use ndarray::prelude::*;
use ndarray::Data;
pub use ndarray_linalg::diagonal::Diagonal;
pub use ndarray_linalg::operator::LinearOperator;
use ndarray_linalg::Scalar;
use num_traits::Float;

pub trait Adjoint<'a> {
    type Output;
    fn adj(&'a self) -> Self::Output;
}

impl<'a, A, S> Adjoint<'a> for ArrayBase<S, Ix2>
where
    A: 'a + Float,
    S: Data<Elem = A>,
{
    type Output = ArrayView<'a, A, Ix2>;

    fn adj(&'a self) -> Self::Output {
        self.t()
    }
}

type VectorMap<'a, S> = Box<dyn Fn(ArrayView1<S>) -> Array1<S> + 'a>;

/// A linear map $`L`$ together with its adjoint $`L^H`$
pub struct LinearMap<'a, S> {
    forward: VectorMap<'a, S>,
    adjoint: VectorMap<'a, S>,
}

impl<'a, S> LinearMap<'a, S>
where
    S: 'a + Clone,
{
    /// Build from a pair of closures computing $`Lx`$ and $`L^H y`$.
    ///
    /// The closures are trusted to be adjoint to each other.
    pub fn new(
        forward: impl Fn(ArrayView1<S>) -> Array1<S> + 'a,
        adjoint: impl Fn(ArrayView1<S>) -> Array1<S> + 'a,
    ) -> Self {
        LinearMap {
            forward: Box::new(forward),
            adjoint: Box::new(adjoint),
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new(|x| x.to_owned(), |y| y.to_owned())
    }

    /// Borrow an operator that knows its own adjoint, e.g. an `Array2`.
    pub fn from_operator<R, Q>(op: &'a R) -> Self
    where
        S: Scalar,
        R: LinearOperator<Elem = S> + Adjoint<'a, Output = Q>,
        Q: LinearOperator<Elem = S>,
    {
        Self::new(move |x| op.apply(&x), move |y| op.adj().apply(&y))
    }

    /// Borrow an operator with $`L^H = L`$, e.g. a real [`Diagonal`].
    pub fn self_adjoint<R>(op: &'a R) -> Self
    where
        S: Scalar,
        R: LinearOperator<Elem = S>,
    {
        Self::new(move |x| op.apply(&x), move |y| op.apply(&y))
    }

    /// $`Lx`$
    #[inline]
    pub fn apply(&self, x: ArrayView1<S>) -> Array1<S> {
        (self.forward)(x)
    }

    /// $`L^H y`$
    #[inline]
    pub fn apply_adjoint(&self, y: ArrayView1<S>) -> Array1<S> {
        (self.adjoint)(y)
    }
}

impl<'a, S> fmt::Debug for LinearMap<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinearMap { .. }")
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray_linalg::diagonal::AsDiagonal;
    #[test]
    fn ndarray_adj() {
        let A = array![[1., 2.], [3., 4.]];
        let B = array![[1., 3.], [2., 4.]];
        assert!(A.adj() == B);
        assert!(A.adj().adj() == A);
    }

    #[test]
    fn diagonal_map() {
        let d = array![1., 2., 3., 4.];
        let D = d.as_diagonal();
        let L = LinearMap::self_adjoint(&D);
        assert!(L.apply(array![1., 1., 1., 1.].view()) == d);
        assert!(L.apply_adjoint(array![1., 1., 1., 1.].view()) == d);
    }

    #[test]
    fn identity_map() {
        let I: LinearMap<f64> = LinearMap::identity();
        let d = array![1., 2., 3., 4.];

        assert!(I.apply(d.view()) == d);
        assert!(I.apply_adjoint(d.view()) == d);
    }

    #[test]
    fn matrix_map_is_adjoint() {
        let A = array![[1., 2., 0.], [0., 3., 4.]];
        let L = LinearMap::from_operator(&A);
        let x = array![1., -1., 2.];
        let y = array![0.5, 2.];

        assert!(L.apply(x.view()) == array![-1., 5.]);
        assert!(L.apply_adjoint(y.view()) == array![0.5, 7., 8.]);
        // <Lx, y> == <x, L^H y>
        let lhs = L.apply(x.view()).dot(&y);
        let rhs = x.dot(&L.apply_adjoint(y.view()));
        assert!(lhs == rhs);
    }

    #[test]
    fn closure_map() {
        let L: LinearMap<f64> =
            LinearMap::new(|x: ArrayView1<f64>| &x * 3., |y: ArrayView1<f64>| &y * 3.);
        let d = array![1., 2.];
        assert!(L.apply(d.view()) == array![3., 6.]);
        assert!(L.apply_adjoint(d.view()) == array![3., 6.]);
    }
}
