//! Relaxation and extrapolation weights

use ndarray::NdFloat;

use super::stepsize::positive;
use super::Method;
use crate::error::{ConfigurationError, Result};

/// Weight $`w`$ blending each iterate with its prox candidate,
/// $`x \leftarrow x + w (p - x)`$.
///
/// - `Plain` returns the fixed relaxation $`\lambda`$.
/// - `Accelerated` runs the classical extrapolation sequence
///   ```math
///   t_{n+1} = \frac{1 + \sqrt{1 + 4 t_n^2}}{2}, \qquad
///   w_n = \frac{t_n - 1}{t_{n+1}}
///   ```
///   from $`t_0 = 1`$, so the first weight is $`0`$ and the weights
///   increase towards $`1`$.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Momentum<S> {
    Plain,
    Accelerated { t: S },
}

impl<S: NdFloat> Momentum<S> {
    #[must_use]
    pub fn new(method: Method) -> Self {
        match method {
            Method::Plain => Momentum::Plain,
            Method::Accelerated => Momentum::Accelerated { t: S::one() },
        }
    }

    /// Weight for the next update; advances the sequence when accelerated.
    ///
    /// `lambda` is only read by `Plain`, which fails without it or when
    /// it is not a finite positive number.
    pub fn weight(&mut self, lambda: Option<S>) -> Result<S> {
        match self {
            Momentum::Plain => {
                let lambda = lambda.ok_or(ConfigurationError::MissingLambda)?;
                positive("lambda", lambda)?;
                Ok(lambda)
            }
            Momentum::Accelerated { t } => {
                let one = S::one();
                let two = one + one;
                let four = two + two;
                let t_next = (one + (one + four * *t * *t).sqrt()) / two;
                let weight = (*t - one) / t_next; // "nesterov" momentum
                *t = t_next;
                Ok(weight)
            }
        }
    }

    /// Current $`t_n`$, `None` for the plain method.
    pub fn counter(&self) -> Option<S> {
        match *self {
            Momentum::Plain => None,
            Momentum::Accelerated { t } => Some(t),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Momentum::Plain => Method::Plain,
            Momentum::Accelerated { .. } => Method::Accelerated,
        }
    }
}
