//! Numerical quadrature (integration) methods.
//!
//! This module provides methods for numerically computing definite integrals
//! of a scalar function over a finite interval.
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`midpoint`] | Quick estimates, open rule | O(h²) |
//! | [`trapezoid`] | Smooth functions, uniform grid | O(h²) |
//! | [`simpson`] | Smooth functions, uniform grid | O(h⁴) |
//! | [`fixed_quad`] | Smooth functions | Exact for polynomials up to degree 2m-1 |
//! | [`quad`] | General functions | Adaptive to specified tolerance |
//! | [`romberg`] | Smooth functions | High precision via extrapolation |
//! | [`step_doubling`] | Certifying a tolerance for any estimator | Driven by the estimator |
//!
//! # Choosing a Method
//!
//! - **Fixed sample budget**: Use [`midpoint`], [`trapezoid`], or [`simpson`]
//! - **Smooth functions**: Use [`fixed_quad`] for efficiency or [`romberg`]
//!   for high precision
//! - **Unknown behavior**: Use [`quad`], which subdivides adaptively and
//!   reports its own error estimate
//! - **Certifying a target accuracy**: Wrap any of the above in
//!   [`step_doubling`]

mod adaptive;
mod gauss;
mod midpoint;
mod refine;
mod romberg;
mod simpson;
mod trapezoid;

pub use adaptive::{quad, QuadOptions};
pub use gauss::{fixed_quad, GaussLegendre};
pub use midpoint::midpoint;
pub use refine::{step_doubling, RefineOptions, RefineStep, Refinement};
pub use romberg::{romberg, RombergOptions};
pub use simpson::simpson;
pub use trapezoid::trapezoid;

/// An integral estimate with self-reported diagnostics.
///
/// Returned by the methods that track their own error ([`quad`], [`romberg`]).
#[derive(Debug, Clone)]
pub struct Estimate {
    /// Computed integral value
    pub value: f64,
    /// Estimated absolute error
    pub error: f64,
    /// Number of function evaluations
    pub neval: usize,
    /// Whether the requested tolerance was reached
    pub converged: bool,
}
