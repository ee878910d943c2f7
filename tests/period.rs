//! End-to-end study of the quartic oscillator period at amplitude 2.
//!
//! Doubles the Gauss-Legendre point count from 2 upward and certifies the
//! period to an absolute tolerance of 1e-4, checking the whole convergence
//! table on the way.

use quadr::oscillator::{minimum_nodes, period, period_romberg};
use quadr::quadrature::RombergOptions;

// T(2) = sqrt(8) * (ϖ/2) / 2, with ϖ the lemniscate constant
const T2: f64 = 1.8540746773013719;

#[test]
fn step_doubling_certifies_period_at_amplitude_two() {
    // The proxy halves per doubling on the raw singular integrand, so the
    // 1e-4 crossing lands at N = 4096; 12 doublings reach it from 2
    let refinement = minimum_nodes(2.0, 1e-4, 12).expect("tolerance reachable by N = 4096");

    assert!(refinement.converged);
    // The proxy is still ~3e-4 at N = 1024 and ~1.5e-4 at N = 2048; the
    // first count below 1e-4 is 4096, with a 2x margin on either side
    assert_eq!(refinement.n, 4096);

    // The proxy sequence is strictly decreasing across all doublings
    for pair in refinement.history.windows(2) {
        assert!(
            pair[1].error < pair[0].error,
            "proxy rose between N = {} ({:.3e}) and N = {} ({:.3e})",
            pair[0].n,
            pair[0].error,
            pair[1].n,
            pair[1].error
        );
    }

    // Only the final proxy crosses the tolerance
    let (last, earlier) = refinement.history.split_last().unwrap();
    assert!(last.error < 1e-4);
    for step in earlier {
        assert!(step.error >= 1e-4, "crossed early at N = {}", step.n);
    }

    // The certified estimate agrees with the known period
    assert!(
        (refinement.value - T2).abs() < 1e-3,
        "T = {}, expected {}",
        refinement.value,
        T2
    );

    println!(
        "minimum N = {}, period estimate = {:.10}",
        refinement.n, refinement.value
    );
}

#[test]
fn all_three_period_routes_agree() {
    let adaptive = period(2.0).unwrap();
    let romberg = period_romberg(2.0, &RombergOptions::default()).unwrap();
    let certified = minimum_nodes(2.0, 1e-4, 12).unwrap();

    assert!(adaptive.converged);
    assert!(romberg.converged);

    assert!((adaptive.value - T2).abs() < 1e-7);
    assert!((romberg.value - T2).abs() < 1e-7);
    // The raw-integrand Gauss route is the crudest of the three
    assert!((certified.value - adaptive.value).abs() < 1e-3);
}
