//! Adaptive Gauss-Kronrod quadrature.
//!
//! Subdivides the integration interval wherever the local error estimate is
//! largest until the total self-reported error meets the requested tolerance.

use log::trace;

use crate::error::{QuadError, QuadResult};
use crate::quadrature::Estimate;

/// Options for adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QuadOptions {
    /// Relative tolerance (default: 1e-8)
    pub rtol: f64,
    /// Absolute tolerance (default: 1e-8)
    pub atol: f64,
    /// Maximum number of subdivisions (default: 50)
    pub limit: usize,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-8,
            atol: 1e-8,
            limit: 50,
        }
    }
}

/// One subinterval with its local estimate and error.
#[derive(Debug, Clone, Copy)]
struct Panel {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Adaptive Gauss-Kronrod quadrature.
///
/// Uses the G7-K15 rule (7-point Gauss embedded in a 15-point Kronrod
/// extension) on each subinterval. The difference between the two embedded
/// estimates serves as the local error; the panel with the largest error is
/// split at its midpoint until the summed error meets
/// `atol + rtol * |integral|` or the subdivision limit is reached.
///
/// Kronrod nodes are strictly interior, so integrands that are singular at
/// an endpoint of `[a, b]` are never evaluated there.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `options` - Tolerances and subdivision limit
///
/// # Returns
///
/// An [`Estimate`] with the integral, self-reported error, and diagnostics.
/// If the limit is reached first, the best estimate is returned with
/// `converged: false`.
///
/// # Errors
///
/// Returns an error if `a >= b` or `options.limit == 0`.
///
/// # Example
///
/// ```
/// use quadr::quadrature::{quad, QuadOptions};
///
/// // Integrate sin(x) from 0 to pi (exact = 2)
/// let est = quad(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &QuadOptions::default()).unwrap();
/// assert!((est.value - 2.0).abs() < 1e-10);
/// assert!(est.converged);
/// ```
pub fn quad<F>(f: F, a: f64, b: f64, options: &QuadOptions) -> QuadResult<Estimate>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadError::InvalidInterval {
            a,
            b,
            context: "quad".to_string(),
        });
    }

    if options.limit == 0 {
        return Err(QuadError::InvalidParameter {
            parameter: "limit".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    let mut neval = 0;

    let (value, error) = gauss_kronrod_15(&f, a, b);
    neval += 15;

    let mut panels = vec![Panel { a, b, value, error }];
    let mut total_value = value;
    let mut total_error = error;

    for subdivision in 0..options.limit {
        let tolerance = options.atol + options.rtol * total_value.abs();
        if total_error <= tolerance {
            return Ok(Estimate {
                value: total_value,
                error: total_error,
                neval,
                converged: true,
            });
        }

        // Split the panel with the largest local error
        let worst = panels
            .iter()
            .enumerate()
            .max_by(|x, y| x.1.error.partial_cmp(&y.1.error).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        let panel = panels.swap_remove(worst);

        let mid = (panel.a + panel.b) / 2.0;
        let (left_value, left_error) = gauss_kronrod_15(&f, panel.a, mid);
        let (right_value, right_error) = gauss_kronrod_15(&f, mid, panel.b);
        neval += 30;

        trace!(
            "quad: subdivision {} at [{:.6}, {:.6}], local error {:.3e} -> {:.3e}",
            subdivision,
            panel.a,
            panel.b,
            panel.error,
            left_error + right_error
        );

        total_value = total_value - panel.value + left_value + right_value;
        total_error = total_error - panel.error + left_error + right_error;

        panels.push(Panel {
            a: panel.a,
            b: mid,
            value: left_value,
            error: left_error,
        });
        panels.push(Panel {
            a: mid,
            b: panel.b,
            value: right_value,
            error: right_error,
        });
    }

    Ok(Estimate {
        value: total_value,
        error: total_error,
        neval,
        converged: false,
    })
}

/// G7-K15 rule on one interval. Returns (integral, error estimate).
fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    // 15 Kronrod nodes on [-1, 1]; every second one is a Gauss node
    const XGK: [f64; 15] = [
        -0.9914553711208126,
        -0.9491079123427585,
        -0.8648644233597691,
        -0.7415311855993944,
        -0.5860872354676911,
        -0.4058451513773972,
        -0.2077849550078985,
        0.0,
        0.2077849550078985,
        0.4058451513773972,
        0.5860872354676911,
        0.7415311855993944,
        0.8648644233597691,
        0.9491079123427585,
        0.9914553711208126,
    ];

    const WGK: [f64; 15] = [
        0.022935322010529224,
        0.06309209262997856,
        0.10479001032225018,
        0.14065325971552592,
        0.16900472663926790,
        0.19035057806478540,
        0.20443294007529889,
        0.20948214108472782,
        0.20443294007529889,
        0.19035057806478540,
        0.16900472663926790,
        0.14065325971552592,
        0.10479001032225018,
        0.06309209262997856,
        0.022935322010529224,
    ];

    // Weights of the embedded 7-point Gauss rule (odd-indexed nodes)
    const WG: [f64; 7] = [
        0.12948496616886970,
        0.27970539148927664,
        0.38183005050511890,
        0.41795918367346940,
        0.38183005050511890,
        0.27970539148927664,
        0.12948496616886970,
    ];

    let mid = (a + b) / 2.0;
    let half_width = (b - a) / 2.0;

    let mut fvals = [0.0; 15];
    for (i, &x) in XGK.iter().enumerate() {
        fvals[i] = f(mid + half_width * x);
    }

    let mut kronrod = 0.0;
    for (i, &fv) in fvals.iter().enumerate() {
        kronrod += WGK[i] * fv;
    }
    kronrod *= half_width;

    let mut gauss = 0.0;
    for (i, &w) in WG.iter().enumerate() {
        gauss += w * fvals[2 * i + 1];
    }
    gauss *= half_width;

    (kronrod, (kronrod - gauss).abs())
}
