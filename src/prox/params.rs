//! Solver parameters

use std::fmt;
use std::str::FromStr;

use ndarray::NdFloat;

use crate::error::ConfigurationError;

/// Momentum policy applied to the primal and dual updates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Fixed relaxation by `lambda`
    Plain,
    /// Nesterov-style extrapolation, see [`Momentum`](super::Momentum)
    Accelerated,
}

impl Default for Method {
    fn default() -> Self {
        Method::Plain
    }
}

impl FromStr for Method {
    type Err = ConfigurationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "plain" => Ok(Method::Plain),
            "accelerated" => Ok(Method::Accelerated),
            _ => Err(ConfigurationError::UnknownMethod(tag.to_owned())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Plain => f.write_str("plain"),
            Method::Accelerated => f.write_str("accelerated"),
        }
    }
}

/// Configuration of the primal-dual splitting.
///
/// [`initialize`](super::initialize) returns a copy with
/// `absolute_tolerance` and `report_dual` switched on; a driver running
/// its own stopping test is expected to honor both.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters<S> {
    /// Automatic step size rescaling. Only `false` is supported.
    pub rescale: bool,
    /// Trade-off between the primal and dual steps, usually $`\|L\|^2`$.
    pub nu: S,
    pub method: Method,
    /// Pinned primal step $`\tau`$.
    pub tau: Option<S>,
    /// Pinned dual step $`\sigma`$.
    pub sigma: Option<S>,
    /// Relaxation constant, required by [`Method::Plain`].
    pub lambda: Option<S>,
    /// Stopping tolerances are absolute rather than relative.
    pub absolute_tolerance: bool,
    /// The dual variable is reported alongside the solution.
    pub report_dual: bool,
}

impl<S: NdFloat> Default for Parameters<S> {
    fn default() -> Self {
        Parameters {
            rescale: false,
            nu: S::one(),
            method: Method::Plain,
            tau: None,
            sigma: None,
            lambda: None,
            absolute_tolerance: false,
            report_dual: false,
        }
    }
}

impl<S: NdFloat> Parameters<S> {
    pub fn with_nu(mut self, nu: S) -> Self {
        self.nu = nu;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_tau(mut self, tau: S) -> Self {
        self.tau = Some(tau);
        self
    }

    pub fn with_sigma(mut self, sigma: S) -> Self {
        self.sigma = Some(sigma);
        self
    }

    pub fn with_lambda(mut self, lambda: S) -> Self {
        self.lambda = Some(lambda);
        self
    }

    pub fn with_rescale(mut self, rescale: bool) -> Self {
        self.rescale = rescale;
        self
    }
}
