//! Assignment of the two non-smooth terms to the primal and dual side

use super::NonSmoothTerm;
use crate::error::{ConfigurationError, Result};
use crate::linop::LinearMap;

/// Which non-smooth term is handled by a primal prox and which by a
/// conjugate (dual) prox.
///
/// The term composed with a linear map always goes to the dual side,
/// so the map is never inverted. Without a linear map the first term
/// is primal and the second dual, and $`L`$ is the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Splitting {
    primal: usize,
    dual: usize,
}

impl Splitting {
    /// Fails unless there are exactly two terms, at most one of them
    /// carrying a linear map.
    pub fn new<S>(terms: &[NonSmoothTerm<'_, S>]) -> Result<Self> {
        match terms {
            [first, second] => match (first.operator(), second.operator()) {
                (Some(_), Some(_)) => Err(ConfigurationError::MultipleOperators),
                (Some(_), None) => Ok(Splitting { primal: 1, dual: 0 }),
                _ => Ok(Splitting { primal: 0, dual: 1 }),
            },
            _ => Err(ConfigurationError::TermCount { found: terms.len() }),
        }
    }

    /// Index of the term handled by a primal prox
    pub fn primal(&self) -> usize {
        self.primal
    }

    /// Index of the term handled by a conjugate prox
    pub fn dual(&self) -> usize {
        self.dual
    }

    /// The (primal, dual) terms of `terms`.
    ///
    /// Fails unless `terms` has the two entries this splitting was made for.
    pub fn sides<'t, 'a, S>(
        &self,
        terms: &'t [NonSmoothTerm<'a, S>],
    ) -> Result<(&'t NonSmoothTerm<'a, S>, &'t NonSmoothTerm<'a, S>)> {
        match terms {
            [_, _] => Ok((&terms[self.primal], &terms[self.dual])),
            _ => Err(ConfigurationError::TermCount { found: terms.len() }),
        }
    }

    /// The linear map of the dual-side term, `None` meaning identity.
    pub fn operator<'t, 'a, S>(
        &self,
        terms: &'t [NonSmoothTerm<'a, S>],
    ) -> Result<Option<&'t LinearMap<'a, S>>> {
        let (_, dual) = self.sides(terms)?;
        Ok(dual.operator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::prelude::*;

    fn scale(c: f64) -> LinearMap<'static, f64> {
        LinearMap::new(move |x: ArrayView1<f64>| &x * c, move |y: ArrayView1<f64>| &y * c)
    }

    #[test]
    fn no_operator_keeps_order() {
        let terms: [NonSmoothTerm<f64>; 2] = [NonSmoothTerm::zero(), NonSmoothTerm::zero()];
        let split = Splitting::new(&terms).unwrap();
        assert_eq!(split, Splitting { primal: 0, dual: 1 });
        assert!(split.operator(&terms).unwrap().is_none());
    }

    #[test]
    fn operator_goes_to_dual_side() {
        let terms = [
            NonSmoothTerm::zero().with_operator(scale(2.)),
            NonSmoothTerm::zero(),
        ];
        let split = Splitting::new(&terms).unwrap();
        assert_eq!(split, Splitting { primal: 1, dual: 0 });

        let terms = [
            NonSmoothTerm::zero(),
            NonSmoothTerm::zero().with_operator(scale(2.)),
        ];
        let split = Splitting::new(&terms).unwrap();
        assert_eq!(split, Splitting { primal: 0, dual: 1 });
        let x = array![1., 2.];
        assert!(split.operator(&terms).unwrap().unwrap().apply(x.view()) == array![2., 4.]);
    }

    #[test]
    fn repeated_splitting_agrees() {
        let terms = [
            NonSmoothTerm::zero().with_operator(scale(3.)),
            NonSmoothTerm::zero(),
        ];
        let x = array![1., -1.];
        let first = Splitting::new(&terms).unwrap();
        let lx = first.operator(&terms).unwrap().unwrap().apply(x.view());
        for _ in 0..3 {
            let again = Splitting::new(&terms).unwrap();
            assert_eq!(again, first);
            assert!(again.operator(&terms).unwrap().unwrap().apply(x.view()) == lx);
        }
    }

    #[test]
    fn term_count() {
        let three: Vec<NonSmoothTerm<f64>> = (0..3).map(|_| NonSmoothTerm::zero()).collect();
        assert_eq!(
            Splitting::new(&three),
            Err(ConfigurationError::TermCount { found: 3 })
        );
        assert_eq!(
            Splitting::new(&three[..1]),
            Err(ConfigurationError::TermCount { found: 1 })
        );
    }

    #[test]
    fn lookup_needs_both_terms() {
        let terms = [
            NonSmoothTerm::zero(),
            NonSmoothTerm::zero().with_operator(scale(2.)),
        ];
        let split = Splitting::new(&terms).unwrap();
        assert_eq!(split.primal(), 0);
        assert_eq!(split.dual(), 1);
        assert!(split.sides(&terms).is_ok());
        assert_eq!(
            split.operator(&terms[..1]).err(),
            Some(ConfigurationError::TermCount { found: 1 })
        );
        assert_eq!(
            split.sides(&terms[..0]).err(),
            Some(ConfigurationError::TermCount { found: 0 })
        );
    }

    #[test]
    fn two_operators() {
        let terms = [
            NonSmoothTerm::zero().with_operator(scale(2.)),
            NonSmoothTerm::zero().with_operator(scale(3.)),
        ];
        assert_eq!(
            Splitting::new(&terms),
            Err(ConfigurationError::MultipleOperators)
        );
    }
}
