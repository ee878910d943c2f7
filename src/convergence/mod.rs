//! Empirical convergence studies of the quadrature rules.
//!
//! Everything here is a pure function from experiment parameters (rule,
//! polynomial order or steepness k, sample count N) to an error value, so
//! a plotting frontend can consume the matrices without the experiment
//! knowing anything about rendering.

use crate::error::QuadResult;
use crate::quadrature::{fixed_quad, midpoint, simpson, trapezoid};

/// Which quadrature rule an experiment exercises.
///
/// | Rule | Order | Exact for degree |
/// |------|-------|------------------|
/// | Midpoint | O(h²) | <= 1 |
/// | Trapezoid | O(h²) | <= 1 |
/// | Simpson | O(h⁴) | <= 3 |
/// | GaussLegendre | spectral | <= 2m-1 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Composite midpoint rule
    Midpoint,
    /// Composite trapezoidal rule
    Trapezoid,
    /// Composite Simpson 1/3 rule
    Simpson,
    /// Gauss-Legendre with `n` points
    GaussLegendre,
}

impl Rule {
    /// Human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Midpoint => "midpoint",
            Self::Trapezoid => "trapezoidal",
            Self::Simpson => "Simpson",
            Self::GaussLegendre => "Gauss-Legendre",
        }
    }

    /// Normalize a sweep's raw sample count for this rule.
    ///
    /// Simpson only accepts even counts, so odd values round up. A sweep
    /// over N up to 10⁵ would be absurd as a Gauss point count (and the
    /// node solve is O(m²)), so Gauss-Legendre caps at 64 points, already
    /// exact for every polynomial a study here throws at it.
    pub fn effective_n(&self, n: usize) -> usize {
        match self {
            Self::Simpson => {
                if n % 2 == 1 {
                    n + 1
                } else {
                    n.max(2)
                }
            }
            Self::GaussLegendre => n.clamp(1, 64),
            _ => n,
        }
    }

    /// Apply this rule to `f` over `[a, b]` with `n` subintervals (or
    /// points, for Gauss-Legendre).
    ///
    /// The count is passed through as-is; sweeps should normalize with
    /// [`Rule::effective_n`] first.
    pub fn apply<F>(&self, f: F, a: f64, b: f64, n: usize) -> QuadResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Midpoint => midpoint(f, a, b, n),
            Self::Trapezoid => trapezoid(f, a, b, n),
            Self::Simpson => simpson(f, a, b, n),
            Self::GaussLegendre => fixed_quad(f, a, b, n),
        }
    }
}

/// Symmetric relative error between a true value and an estimate.
///
/// Defined as `2|t − e| / |t + e|`, which goes to 0 as the estimate
/// converges and treats over- and under-estimates alike. Falls back to the
/// absolute difference when `t + e` vanishes.
pub fn relative_error(truth: f64, estimate: f64) -> f64 {
    let denom = (truth + estimate).abs();
    if denom == 0.0 {
        (truth - estimate).abs()
    } else {
        2.0 * (truth - estimate).abs() / denom
    }
}

/// Error of a rule on the monomial x^k over [0, 1].
///
/// The exact integral is 1 / (k + 1). The raw count `n` is normalized with
/// [`Rule::effective_n`].
///
/// # Example
///
/// ```
/// use quadr::convergence::{monomial_error, Rule};
///
/// // Trapezoid is exact for k <= 1
/// let err = monomial_error(1, 7, Rule::Trapezoid).unwrap();
/// assert!(err < 1e-14);
///
/// // ... but not for k = 2
/// let err = monomial_error(2, 7, Rule::Trapezoid).unwrap();
/// assert!(err > 1e-6);
/// ```
pub fn monomial_error(k: u32, n: usize, rule: Rule) -> QuadResult<f64> {
    let truth = 1.0 / (k + 1) as f64;
    let estimate = rule.apply(|x| x.powi(k as i32), 0.0, 1.0, rule.effective_n(n))?;
    Ok(relative_error(truth, estimate))
}

/// The Fermi-Dirac step function 1 / (1 + e^(−kx)).
///
/// For large `k` this approaches a unit step at x = 0, which stresses the
/// rules far more than any polynomial.
pub fn fermi_dirac(x: f64, k: f64) -> f64 {
    1.0 / (1.0 + (-k * x).exp())
}

/// Numerically stable log(1 + e^z).
fn softplus(z: f64) -> f64 {
    if z > 30.0 {
        z
    } else {
        z.exp().ln_1p()
    }
}

/// Closed-form integral of the Fermi-Dirac function over [a, b].
///
/// Equals `(ln(1 + e^(kb)) − ln(1 + e^(ka))) / k`, or `(b − a) / 2` in the
/// k → 0 limit where the integrand is the constant 1/2.
pub fn fermi_dirac_integral(a: f64, b: f64, k: f64) -> f64 {
    if k == 0.0 {
        return (b - a) / 2.0;
    }
    (softplus(k * b) - softplus(k * a)) / k
}

/// Error of a rule on the Fermi-Dirac function over [a, b].
pub fn fermi_dirac_error(a: f64, b: f64, k: f64, n: usize, rule: Rule) -> QuadResult<f64> {
    let truth = fermi_dirac_integral(a, b, k);
    let estimate = rule.apply(|x| fermi_dirac(x, k), a, b, rule.effective_n(n))?;
    Ok(relative_error(truth, estimate))
}

/// Build the k × N error matrix for one rule and integrand family.
///
/// `integrand(x, k)` is the family member for parameter `k`, and
/// `truth(k)` its exact integral over `[a, b]`. Row `i` holds the errors
/// of `k_values[i]` across all of `n_values`. Plotting the matrix (as a
/// heatmap or otherwise) is the caller's business.
///
/// # Example
///
/// ```
/// use quadr::convergence::{error_matrix, Rule};
///
/// // Monomial family x^k on [0, 1]
/// let matrix = error_matrix(
///     Rule::Trapezoid,
///     0.0,
///     1.0,
///     &[0.0, 1.0, 2.0],
///     &[10, 100],
///     |x, k| x.powf(k),
///     |k| 1.0 / (k + 1.0),
/// ).unwrap();
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix[0].len(), 2);
/// ```
pub fn error_matrix<F, G>(
    rule: Rule,
    a: f64,
    b: f64,
    k_values: &[f64],
    n_values: &[usize],
    integrand: F,
    truth: G,
) -> QuadResult<Vec<Vec<f64>>>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64) -> f64,
{
    let mut matrix = Vec::with_capacity(k_values.len());

    for &k in k_values {
        let exact = truth(k);
        let mut row = Vec::with_capacity(n_values.len());
        for &n in n_values {
            let estimate = rule.apply(|x| integrand(x, k), a, b, rule.effective_n(n))?;
            row.push(relative_error(exact, estimate));
        }
        matrix.push(row);
    }

    Ok(matrix)
}
