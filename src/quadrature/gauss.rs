//! Gauss-Legendre quadrature.
//!
//! An m-point Gauss-Legendre rule samples the integrand at the roots of the
//! Legendre polynomial P_m on [-1, 1] and exactly integrates polynomials of
//! degree 2m-1. Because the nodes are strictly interior, the rule also
//! tolerates integrands that blow up at the interval endpoints.

use crate::error::{QuadError, QuadResult};

/// Gauss-Legendre quadrature rule.
///
/// Stores nodes (abscissae) and weights on the canonical interval [-1, 1].
/// The nodes are the roots of the Legendre polynomial of matching order.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    /// Quadrature nodes on [-1, 1], in ascending order
    pub nodes: Vec<f64>,
    /// Quadrature weights, matching `nodes`
    pub weights: Vec<f64>,
}

impl GaussLegendre {
    /// Create an `m`-point Gauss-Legendre rule.
    ///
    /// Nodes are found by Newton iteration on the Legendre three-term
    /// recurrence, starting from Chebyshev-node initial guesses. Symmetry
    /// about zero means only half the roots need to be computed.
    ///
    /// # Errors
    ///
    /// Returns an error if `m == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadr::quadrature::GaussLegendre;
    ///
    /// let rule = GaussLegendre::new(5).unwrap();
    /// assert_eq!(rule.nodes.len(), 5);
    ///
    /// // Weights always sum to the length of [-1, 1]
    /// let total: f64 = rule.weights.iter().sum();
    /// assert!((total - 2.0).abs() < 1e-12);
    /// ```
    pub fn new(m: usize) -> QuadResult<Self> {
        if m == 0 {
            return Err(QuadError::InvalidParameter {
                parameter: "m".to_string(),
                message: "need at least 1 quadrature point".to_string(),
            });
        }

        let eps = 1e-15;
        let max_iter = 100;

        let mut nodes = vec![0.0; m];
        let mut weights = vec![0.0; m];

        // Only the non-negative roots are computed; the rest follow by symmetry.
        let half = m.div_ceil(2);

        for i in 0..half {
            // Chebyshev-node initial guess for the i-th largest root
            let mut x = ((4 * i + 3) as f64 / (4 * m + 2) as f64 * std::f64::consts::PI).cos();

            for _ in 0..max_iter {
                let (p, dp) = legendre_eval(m, x);
                let dx = p / dp;
                x -= dx;
                if dx.abs() < eps {
                    break;
                }
            }

            let (_, dp) = legendre_eval(m, x);
            let w = 2.0 / ((1.0 - x * x) * dp * dp);

            // i-th largest root goes at the top, its mirror at the bottom
            nodes[m - 1 - i] = x;
            weights[m - 1 - i] = w;
            if i != m - 1 - i {
                nodes[i] = -x;
                weights[i] = w;
            }
        }

        Ok(Self { nodes, weights })
    }

    /// Integrate a function over `[a, b]`.
    ///
    /// Affinely maps the canonical nodes from [-1, 1] to `[a, b]` and
    /// returns the weighted sum scaled by `(b - a) / 2`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadr::quadrature::GaussLegendre;
    ///
    /// let rule = GaussLegendre::new(5).unwrap();
    /// let result = rule.integrate(|x| x * x, 0.0, 1.0);
    /// assert!((result - 1.0 / 3.0).abs() < 1e-14);
    /// ```
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mid = (a + b) / 2.0;
        let half_width = (b - a) / 2.0;

        let mut sum = 0.0;
        for (&node, &weight) in self.nodes.iter().zip(&self.weights) {
            sum += weight * f(mid + half_width * node);
        }

        sum * half_width
    }
}

/// Evaluate the Legendre polynomial P_m(x) and its derivative.
///
/// Uses the three-term recurrence
/// `(k+1) P_{k+1} = (2k+1) x P_k - k P_{k-1}`.
fn legendre_eval(m: usize, x: f64) -> (f64, f64) {
    if m == 0 {
        return (1.0, 0.0);
    }

    let mut p_prev = 1.0;
    let mut p = x;
    let mut dp_prev = 0.0;
    let mut dp = 1.0;

    for k in 1..m {
        let k = k as f64;

        let p_next = ((2.0 * k + 1.0) * x * p - k * p_prev) / (k + 1.0);
        let dp_next = ((2.0 * k + 1.0) * (p + x * dp) - k * dp_prev) / (k + 1.0);

        p_prev = p;
        p = p_next;
        dp_prev = dp;
        dp = dp_next;
    }

    (p, dp)
}

/// Fixed-order Gauss-Legendre quadrature.
///
/// Integrates `f` over `[a, b]` with an `m`-point rule. Exact for
/// polynomials of degree up to `2m - 1`.
///
/// # Errors
///
/// Returns an error if `a >= b` or `m == 0`.
///
/// # Example
///
/// ```
/// use quadr::quadrature::fixed_quad;
///
/// // Integrate x^4 from 0 to 1 (exact = 0.2); a 5-point rule is exact
/// // for degree <= 9
/// let result = fixed_quad(|x| x.powi(4), 0.0, 1.0, 5).unwrap();
/// assert!((result - 0.2).abs() < 1e-14);
/// ```
pub fn fixed_quad<F>(f: F, a: f64, b: f64, m: usize) -> QuadResult<f64>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadError::InvalidInterval {
            a,
            b,
            context: "fixed_quad".to_string(),
        });
    }

    let rule = GaussLegendre::new(m)?;
    Ok(rule.integrate(f, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_known_low_order_nodes() {
        // Classical values: m = 2 has nodes at ±1/sqrt(3), weights 1
        let rule = GaussLegendre::new(2).unwrap();
        let x = 1.0 / 3.0_f64.sqrt();
        assert!((rule.nodes[0] + x).abs() < 1e-14);
        assert!((rule.nodes[1] - x).abs() < 1e-14);
        assert!((rule.weights[0] - 1.0).abs() < 1e-14);
        assert!((rule.weights[1] - 1.0).abs() < 1e-14);

        // m = 3: nodes ±sqrt(3/5), 0; weights 5/9, 8/9, 5/9
        let rule = GaussLegendre::new(3).unwrap();
        let x = (3.0_f64 / 5.0).sqrt();
        assert!((rule.nodes[0] + x).abs() < 1e-14);
        assert!(rule.nodes[1].abs() < 1e-14);
        assert!((rule.nodes[2] - x).abs() < 1e-14);
        assert!((rule.weights[0] - 5.0 / 9.0).abs() < 1e-14);
        assert!((rule.weights[1] - 8.0 / 9.0).abs() < 1e-14);
    }

    #[test]
    fn test_single_point_rule() {
        // m = 1 degenerates to the midpoint rule on [-1, 1]
        let rule = GaussLegendre::new(1).unwrap();
        assert!(rule.nodes[0].abs() < 1e-14);
        assert!((rule.weights[0] - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_polynomial_exactness() {
        // An m-point rule integrates x^k exactly for k <= 2m - 1.
        // On [-1, 1] the exact integral is 0 for odd k, 2/(k+1) for even k.
        for m in 1..=12 {
            let rule = GaussLegendre::new(m).unwrap();
            for k in 0..=(2 * m - 1) {
                let result = rule.integrate(|x| x.powi(k as i32), -1.0, 1.0);
                let exact = if k % 2 == 1 { 0.0 } else { 2.0 / (k + 1) as f64 };
                assert!(
                    (result - exact).abs() < 1e-12,
                    "m = {}, k = {}: got {}, expected {}",
                    m,
                    k,
                    result,
                    exact
                );
            }
        }
    }

    #[test]
    fn test_exactness_on_mapped_interval() {
        // Affine mapping preserves polynomial exactness on any [a, b]
        let rule = GaussLegendre::new(4).unwrap();
        // x^7 from 1 to 3: x^8/8 => (6561 - 1)/8 = 820
        let result = rule.integrate(|x| x.powi(7), 1.0, 3.0);
        assert!((result - 820.0).abs() < 1e-9, "result = {}", result);
    }

    #[test]
    fn test_weights_sum_and_symmetry() {
        for m in 1..=20 {
            let rule = GaussLegendre::new(m).unwrap();
            let total: f64 = rule.weights.iter().sum();
            assert!((total - 2.0).abs() < 1e-12, "m = {}, sum = {}", m, total);

            for i in 0..m / 2 {
                assert!((rule.nodes[i] + rule.nodes[m - 1 - i]).abs() < 1e-12);
                assert!((rule.weights[i] - rule.weights[m - 1 - i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_fixed_quad_smooth() {
        // Integrate cos(x) from 0 to pi/2 = 1
        let result = fixed_quad(|x: f64| x.cos(), 0.0, PI / 2.0, 10).unwrap();
        assert!((result - 1.0).abs() < 1e-12);

        // Integrate exp(x) from 0 to 1 = e - 1
        let result = fixed_quad(|x: f64| x.exp(), 0.0, 1.0, 10).unwrap();
        assert!((result - (std::f64::consts::E - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_quad_errors() {
        assert!(fixed_quad(|x| x, 1.0, 0.0, 5).is_err());
        assert!(fixed_quad(|x| x, 0.0, 1.0, 0).is_err());
    }
}
