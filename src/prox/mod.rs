//! Minimization for Composite Functions consisting of
//! L-smooth _f_ and two non-smooth prox-friendly _g_ and _h_,
//! one of them possibly composed with a linear operator
//!
//! ```math
//! \min_x f(x) + g(x) + h(Lx)
//! ```
//!
//! This includes total variation denoising and other analysis-sparsity
//! objectives, as well as smooth constrained methods, as a projection
//! is the proximal operator of a constraint set.
//!
//! The solver is split the way an outer driver consumes it:
//! [`initialize`] once, [`iterate`] until the driver's stopping test
//! fires, [`finalize`] at the end. [`fb_primal_dual`] bundles the three
//! with a fixed iteration budget.

mod terms;
pub use terms::*;

mod params;
pub use params::*;

mod splitting;
pub use splitting::*;

mod stepsize;
pub use stepsize::*;

mod momentum;
pub use momentum::*;

mod primal_dual;
pub use primal_dual::*;
