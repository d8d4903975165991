//! Primal and dual step sizes

use ndarray::NdFloat;

use super::Parameters;
use crate::error::{ConfigurationError, Result};

/// Primal step $`\tau`$ and dual step $`\sigma`$
///
/// The steps balance each other through $`\beta`$ and the trade-off
/// constant $`\nu`$ so that the combined forward-backward and proximal
/// steps stay non-expansive:
/// ```math
/// \frac{1}{\tau} - \sigma \nu \geq \frac{\beta}{2}
/// ```
/// With $`\nu = \|L\|^2`$ this is the usual primal-dual step condition.
///
/// | pinned      | derived                                       |
/// |-------------|-----------------------------------------------|
/// | none        | $`\tau = 1/\beta`$, $`\sigma = \beta/(2\nu)`$ |
/// | $`\tau`$    | $`\sigma = (1/\tau - \beta/2)/\nu`$           |
/// | $`\sigma`$  | $`\tau = 1/(\sigma\nu + \beta/2)`$            |
/// | both        | nothing, taken as given                       |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSizes<S> {
    pub tau: S,
    pub sigma: S,
}

impl<S: NdFloat> StepSizes<S> {
    /// Derive the steps for a smooth term with curvature bound `beta`.
    ///
    /// Fails if rescaling is requested, if $`\nu \leq 0`$, if a single
    /// pinned step is not a finite positive number, if the pinned
    /// $`\tau`$ is too large for any non-negative $`\sigma`$, or if
    /// nothing is pinned and $`\beta = 0`$.
    /// Both steps pinned are not checked at all.
    pub fn select(beta: S, params: &Parameters<S>) -> Result<Self> {
        if params.rescale {
            return Err(ConfigurationError::RescaleUnsupported);
        }
        let nu = params.nu;
        if !(nu > S::zero()) {
            return Err(ConfigurationError::NonPositive {
                name: "nu",
                value: as_f64(nu),
            });
        }
        let two = S::one() + S::one();

        let (tau, sigma) = match (params.tau, params.sigma) {
            (None, None) => {
                if !(beta > S::zero()) {
                    return Err(ConfigurationError::MissingCurvature {
                        beta: as_f64(beta),
                    });
                }
                (S::one() / beta, beta / (two * nu))
            }
            (Some(tau), None) => {
                positive("tau", tau)?;
                let sigma = (S::one() / tau - beta / two) / nu;
                if sigma < S::zero() {
                    return Err(ConfigurationError::StepTooLarge {
                        tau: as_f64(tau),
                        sigma: as_f64(sigma),
                    });
                }
                (tau, sigma)
            }
            (None, Some(sigma)) => {
                positive("sigma", sigma)?;
                (S::one() / (sigma * nu + beta / two), sigma)
            }
            (Some(tau), Some(sigma)) => (tau, sigma),
        };
        Ok(StepSizes { tau, sigma })
    }
}

/// Rejects zero, negative, infinite and NaN values of `name`.
pub(crate) fn positive<S: NdFloat>(name: &'static str, value: S) -> Result<()> {
    if value > S::zero() && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::NonPositive {
            name,
            value: as_f64(value),
        })
    }
}

fn as_f64<S: NdFloat>(value: S) -> f64 {
    value.to_f64().unwrap_or(std::f64::NAN)
}
