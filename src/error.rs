//! Errors raised while configuring or running the primal-dual solver

use thiserror::Error;

/// Invalid solver configuration.
///
/// Every variant is a caller error detected either by
/// [`initialize`](crate::prox::initialize) or by the first
/// [`iterate`](crate::prox::iterate) call that needs the offending value.
/// None of them are transient, so the solver never retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The splitting handles exactly two non-smooth terms.
    #[error("expected exactly 2 non-smooth terms, found {found}")]
    TermCount { found: usize },

    /// Both non-smooth terms were given a linear operator.
    #[error("at most one non-smooth term may carry a linear operator")]
    MultipleOperators,

    /// Automatic step size rescaling is not implemented.
    #[error("step size rescaling is not implemented")]
    RescaleUnsupported,

    /// The pinned primal step leaves no room for a non-negative dual step.
    #[error("step size too large: tau = {tau} gives a negative dual step sigma = {sigma}")]
    StepTooLarge { tau: f64, sigma: f64 },

    /// Neither step was pinned and there is no curvature bound to derive them from.
    #[error("curvature bound must be positive when neither tau nor sigma is given (beta = {beta})")]
    MissingCurvature { beta: f64 },

    /// A scalar parameter that must be strictly positive was not.
    #[error("parameter `{name}` must be positive, found {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// The method tag names no known momentum policy.
    #[error("unknown method `{0}`, expected `plain` or `accelerated`")]
    UnknownMethod(String),

    /// The plain method needs a relaxation constant.
    #[error("the plain method requires `lambda`")]
    MissingLambda,
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
