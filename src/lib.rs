//! Classical numerical quadrature and convergence experiments.
//!
//! `quadr` implements the classical definite-integral rules (midpoint,
//! trapezoidal, Simpson, Gauss-Legendre, Romberg, adaptive Gauss-Kronrod),
//! uses them to compute the period of a quartic-potential anharmonic
//! oscillator, and provides pure-function convergence studies of rule
//! error across order and sample count.
//!
//! # Modules
//!
//! - [`quadrature`]: the rules themselves, plus step-doubling refinement
//!   for certifying a target accuracy
//! - [`oscillator`]: the oscillator period T(a) = √8 ∫₀ᵃ dx/√(a⁴ − x⁴),
//!   including the singularity-removing x = a·sin²θ substitution
//! - [`convergence`]: error matrices over (rule, k, N) for heatmap-style
//!   studies, with plotting left to consumers
//!
//! # Example
//!
//! ```
//! use quadr::oscillator::period;
//! use quadr::quadrature::{simpson, romberg, RombergOptions};
//!
//! // Simpson is exact for cubics
//! let integral = simpson(|x| x * x * x, 0.0, 1.0, 2).unwrap();
//! assert!((integral - 0.25).abs() < 1e-14);
//!
//! // Romberg refines trapezoidal estimates until the diagonal settles
//! let est = romberg(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &RombergOptions::default()).unwrap();
//! assert!((est.value - 2.0).abs() < 1e-8);
//!
//! // Oscillator period at amplitude 2
//! let t = period(2.0).unwrap();
//! assert!((t.value - 1.8540746773013719).abs() < 1e-6);
//! ```

pub mod convergence;
pub mod error;
pub mod oscillator;
pub mod quadrature;

pub use error::{QuadError, QuadResult};
