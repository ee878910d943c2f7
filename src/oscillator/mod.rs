//! Period of an anharmonic oscillator.
//!
//! A unit-mass particle in the quartic potential V(x) = x⁴ released from
//! rest at amplitude `a` oscillates with period
//!
//! ```text
//! T(a) = √8 ∫₀ᵃ dx / √(a⁴ − x⁴)
//! ```
//!
//! The integrand diverges at the turning point x = a, so naive fixed-grid
//! quadrature loses precision near the endpoint. The substitution
//! x = a·sin²θ maps the integral to a finite, smooth one over [0, π/2],
//! which every endpoint-sampling method here uses. The raw form is kept for
//! [`period_fixed`], whose Gauss-Legendre nodes never touch the endpoint.
//!
//! Unlike the harmonic oscillator, the period depends on amplitude:
//! T(a) ∝ 1/a.

use log::debug;
use std::f64::consts::FRAC_PI_2;

use crate::error::{QuadError, QuadResult};
use crate::quadrature::{
    fixed_quad, quad, romberg, step_doubling, Estimate, QuadOptions, RefineOptions, Refinement,
    RombergOptions,
};

/// The quartic potential V(x) = x⁴.
fn potential(x: f64) -> f64 {
    let x2 = x * x;
    x2 * x2
}

/// Raw period integrand 1 / √(V(a) − V(x)).
///
/// Singular at the turning point x = a. Safe to sample on [0, a) only;
/// prefer [`theta_integrand`] for rules that evaluate endpoints.
pub fn period_integrand(x: f64, a: f64) -> f64 {
    1.0 / (potential(a) - potential(x)).sqrt()
}

/// Period integrand after the substitution x = a·sin²θ.
///
/// The Jacobian is dx/dθ = 2a·sinθ·cosθ. Writing s = sinθ, the factor
/// 1 − s⁸ under the root splits as cos²θ·(1 + s²)(1 + s⁴), so the cosθ in
/// the Jacobian cancels exactly and the result
///
/// ```text
/// g(θ) = 2·sinθ / (a·√((1 + sin²θ)(1 + sin⁴θ)))
/// ```
///
/// is finite and smooth on all of [0, π/2], with g(0) = 0 and
/// g(π/2) = 1/a.
///
/// # Example
///
/// ```
/// use quadr::oscillator::theta_integrand;
///
/// // Finite at both endpoints for any a > 0
/// assert_eq!(theta_integrand(0.0, 2.0), 0.0);
/// let end = theta_integrand(std::f64::consts::FRAC_PI_2, 2.0);
/// assert!((end - 0.5).abs() < 1e-14);
/// ```
pub fn theta_integrand(theta: f64, a: f64) -> f64 {
    let s = theta.sin();
    let s2 = s * s;
    2.0 * s / (a * ((1.0 + s2) * (1.0 + s2 * s2)).sqrt())
}

fn check_amplitude(a: f64, context: &str) -> QuadResult<()> {
    if !a.is_finite() || a < 0.0 {
        return Err(QuadError::InvalidParameter {
            parameter: "a".to_string(),
            message: format!("{}: amplitude must be finite and non-negative (got {})", context, a),
        });
    }
    Ok(())
}

/// Compute the oscillation period by adaptive quadrature.
///
/// Integrates the substituted form over [0, π/2] with [`quad`] and scales
/// by √8. The returned [`Estimate`] carries the self-reported error of the
/// underlying quadrature, also scaled.
///
/// A zero amplitude short-circuits to a period of 0: there is no motion,
/// and the raw integrand would divide by zero.
///
/// # Errors
///
/// Returns an error if `a` is negative or not finite.
///
/// # Example
///
/// ```
/// use quadr::oscillator::period;
///
/// let est = period(1.0).unwrap();
/// // Known value: T(1) = √8 · ϖ/2 where ϖ is the lemniscate constant
/// assert!((est.value - 3.7081493546027437).abs() < 1e-8);
/// ```
pub fn period(a: f64) -> QuadResult<Estimate> {
    check_amplitude(a, "period")?;

    if a == 0.0 {
        return Ok(Estimate {
            value: 0.0,
            error: 0.0,
            neval: 0,
            converged: true,
        });
    }

    let prefactor = 8.0_f64.sqrt();
    let est = quad(
        |theta| theta_integrand(theta, a),
        0.0,
        FRAC_PI_2,
        &QuadOptions::default(),
    )?;

    Ok(Estimate {
        value: prefactor * est.value,
        error: prefactor * est.error,
        neval: est.neval,
        converged: est.converged,
    })
}

/// Compute the period with an `m`-point Gauss-Legendre rule on the raw
/// integrand.
///
/// The Gauss nodes are strictly interior, so the singularity at x = a is
/// never evaluated; convergence in `m` is slow compared to the substituted
/// form but monotone, which is what the step-doubling study measures.
///
/// # Errors
///
/// Returns an error if `a` is negative or not finite, or if `m == 0`.
pub fn period_fixed(a: f64, m: usize) -> QuadResult<f64> {
    check_amplitude(a, "period_fixed")?;

    if a == 0.0 {
        // Still validate m so the degenerate case keeps the same contract
        if m == 0 {
            return Err(QuadError::InvalidParameter {
                parameter: "m".to_string(),
                message: "need at least 1 quadrature point".to_string(),
            });
        }
        return Ok(0.0);
    }

    let integral = fixed_quad(|x| period_integrand(x, a), 0.0, a, m)?;
    Ok(8.0_f64.sqrt() * integral)
}

/// Compute the period by Romberg integration of the substituted form.
///
/// `options.max_levels` plays the role of the refinement depth (`divmax`):
/// a shallow depth returns early with `converged: false` and a larger
/// reported error.
///
/// # Errors
///
/// Returns an error if `a` is negative or not finite, or if the options are
/// invalid.
///
/// # Example
///
/// ```
/// use quadr::oscillator::period_romberg;
/// use quadr::quadrature::RombergOptions;
///
/// let est = period_romberg(2.0, &RombergOptions::default()).unwrap();
/// assert!(est.converged);
/// assert!((est.value - 1.8540746773013719).abs() < 1e-7);
/// ```
pub fn period_romberg(a: f64, options: &RombergOptions) -> QuadResult<Estimate> {
    check_amplitude(a, "period_romberg")?;

    if a == 0.0 {
        return Ok(Estimate {
            value: 0.0,
            error: 0.0,
            neval: 0,
            converged: true,
        });
    }

    let prefactor = 8.0_f64.sqrt();
    let est = romberg(|theta| theta_integrand(theta, a), 0.0, FRAC_PI_2, options)?;

    Ok(Estimate {
        value: prefactor * est.value,
        error: prefactor * est.error,
        neval: est.neval,
        converged: est.converged,
    })
}

/// Find the smallest Gauss-Legendre point count certifying the period to a
/// tolerance.
///
/// Runs [`step_doubling`] over [`period_fixed`] starting at 2 points; the
/// certified count is the first `m` with |T(2m) − T(m)| below `tol`. The
/// full convergence table is available in the returned
/// [`Refinement::history`].
///
/// # Errors
///
/// Returns [`QuadError::DidNotConverge`] if the proxy never drops below
/// `tol` within `max_doublings` doublings, and parameter errors as for
/// [`period_fixed`].
///
/// # Example
///
/// ```
/// use quadr::oscillator::minimum_nodes;
///
/// let refinement = minimum_nodes(2.0, 1e-4, 12).unwrap();
/// assert!(refinement.converged);
/// assert!((refinement.value - 1.8540746773013719).abs() < 1e-3);
/// ```
pub fn minimum_nodes(a: f64, tol: f64, max_doublings: usize) -> QuadResult<Refinement> {
    let options = RefineOptions { tol, max_doublings };
    let refinement = step_doubling(|m| period_fixed(a, m), 2, &options)?;

    if !refinement.converged {
        return Err(QuadError::DidNotConverge {
            iterations: max_doublings,
            tolerance: tol,
            context: "minimum_nodes".to_string(),
        });
    }

    debug!(
        "minimum_nodes: a = {}, certified m = {} with T = {:.6}",
        a, refinement.n, refinement.value
    );
    Ok(refinement)
}

/// Compute the period over a slice of amplitudes.
///
/// Zero amplitudes short-circuit to 0 like [`period`].
///
/// # Errors
///
/// Returns an error on the first invalid amplitude.
pub fn period_sweep(amplitudes: &[f64]) -> QuadResult<Vec<f64>> {
    amplitudes
        .iter()
        .map(|&a| period(a).map(|est| est.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // T(a) = sqrt(8) * (ϖ/2) / a with ϖ/2 = 1.3110287771460599
    const T1: f64 = 3.7081493546027437;
    const T2: f64 = 1.8540746773013719;

    #[test]
    fn test_theta_integrand_finite_everywhere() {
        for &a in &[0.5, 1.0, 2.0, 5.0] {
            // Endpoints exactly
            assert_eq!(theta_integrand(0.0, a), 0.0);
            assert_relative_eq!(theta_integrand(FRAC_PI_2, a), 1.0 / a, epsilon = 1e-14);

            // Dense sampling including points hugging both endpoints
            for i in 0..=1000 {
                let theta = FRAC_PI_2 * i as f64 / 1000.0;
                let g = theta_integrand(theta, a);
                assert!(g.is_finite(), "a = {}, theta = {}", a, theta);
            }
            assert!(theta_integrand(1e-12, a).is_finite());
            assert!(theta_integrand(FRAC_PI_2 - 1e-12, a).is_finite());
        }
    }

    #[test]
    fn test_theta_integrand_continuous_near_endpoints() {
        // No jump between the endpoint value and its neighborhood
        let a = 2.0;
        let near_end = theta_integrand(FRAC_PI_2 - 1e-7, a);
        assert!((near_end - 1.0 / a).abs() < 1e-6);
        let near_zero = theta_integrand(1e-7, a);
        assert!(near_zero.abs() < 1e-6);
    }

    #[test]
    fn test_period_known_values() {
        let est = period(1.0).unwrap();
        assert!(est.converged);
        assert_relative_eq!(est.value, T1, epsilon = 1e-7);

        let est = period(2.0).unwrap();
        assert_relative_eq!(est.value, T2, epsilon = 1e-7);
    }

    #[test]
    fn test_period_scales_inversely_with_amplitude() {
        // T(a) = T(1) / a for the quartic potential
        let t1 = period(1.0).unwrap().value;
        let t4 = period(4.0).unwrap().value;
        assert_relative_eq!(t4, t1 / 4.0, epsilon = 1e-7);
    }

    #[test]
    fn test_period_zero_amplitude() {
        let est = period(0.0).unwrap();
        assert_eq!(est.value, 0.0);
        assert!(est.converged);
        assert_eq!(period_fixed(0.0, 8).unwrap(), 0.0);
        assert_eq!(period_romberg(0.0, &RombergOptions::default()).unwrap().value, 0.0);
    }

    #[test]
    fn test_period_invalid_amplitude() {
        assert!(period(-1.0).is_err());
        assert!(period(f64::NAN).is_err());
        assert!(period_fixed(-2.0, 8).is_err());
        assert!(period_fixed(1.0, 0).is_err());
        assert!(period_fixed(0.0, 0).is_err());
    }

    #[test]
    fn test_period_romberg_matches_adaptive() {
        let adaptive = period(2.0).unwrap();
        let romberg = period_romberg(2.0, &RombergOptions::default()).unwrap();
        assert!(romberg.converged);
        assert_relative_eq!(adaptive.value, romberg.value, epsilon = 1e-7);
    }

    #[test]
    fn test_period_romberg_shallow_depth() {
        let options = RombergOptions {
            rtol: 1e-14,
            atol: 1e-14,
            max_levels: 3,
        };
        let est = period_romberg(2.0, &options).unwrap();
        assert!(!est.converged);
        // Still in the right ballpark
        assert!((est.value - T2).abs() < 0.1);
    }

    #[test]
    fn test_period_fixed_improves_with_points() {
        // Raw singular integrand: slow but monotone improvement in m
        let coarse = (period_fixed(2.0, 8).unwrap() - T2).abs();
        let fine = (period_fixed(2.0, 256).unwrap() - T2).abs();
        assert!(fine < coarse, "coarse = {:.3e}, fine = {:.3e}", coarse, fine);
        assert!(fine < 1e-2);
    }

    #[test]
    fn test_minimum_nodes_converges() {
        let refinement = minimum_nodes(2.0, 1e-3, 15).unwrap();
        assert!(refinement.converged);
        assert!((refinement.value - T2).abs() < 1e-2);
    }

    #[test]
    fn test_minimum_nodes_reports_failure() {
        let result = minimum_nodes(2.0, 1e-12, 2);
        assert!(matches!(result, Err(QuadError::DidNotConverge { .. })));
    }

    #[test]
    fn test_period_sweep() {
        let periods = period_sweep(&[0.0, 0.5, 1.0, 2.0]).unwrap();
        assert_eq!(periods[0], 0.0);
        // Larger amplitude, shorter period
        assert!(periods[1] > periods[2]);
        assert!(periods[2] > periods[3]);
        assert_relative_eq!(periods[2], T1, epsilon = 1e-7);
    }
}
