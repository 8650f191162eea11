//! Kepler-equation solver and anomaly conversions.
//!
//! Newton-Raphson on f(E) = E − e·sin E − M, seeded at E = M. The solver is
//! deliberately simple: near-circular orbits short-circuit, and hitting the
//! iteration cap returns the best estimate rather than an error — for the
//! eccentricities this crate handles (e < 1) the cap is effectively
//! unreachable at the default tolerance.

use tracing::debug;

/// Default convergence tolerance on the Kepler-equation residual (radians).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Default Newton-Raphson iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Below this eccentricity the orbit is treated as circular and E = M.
pub const CIRCULAR_ECCENTRICITY_CUTOFF: f64 = 1e-6;

/// Solve Kepler's equation M = E − e·sin E for the eccentric anomaly E.
///
/// # Arguments
/// * `mean_anomaly` - Mean anomaly M in radians
/// * `eccentricity` - Orbital eccentricity (0 ≤ e < 1)
///
/// # Returns
/// Eccentric anomaly E in radians
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    solve_kepler_with(
        mean_anomaly,
        eccentricity,
        DEFAULT_TOLERANCE,
        DEFAULT_MAX_ITERATIONS,
    )
}

/// [`solve_kepler`] with an explicit tolerance and iteration cap.
///
/// Each iteration checks the residual before stepping, so a seed that already
/// satisfies the tolerance is returned untouched. If the cap runs out the
/// current estimate is returned and the residual is logged at debug level.
pub fn solve_kepler_with(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> f64 {
    if eccentricity < CIRCULAR_ECCENTRICITY_CUTOFF {
        return mean_anomaly;
    }

    let mut e_anomaly = mean_anomaly;
    for _ in 0..max_iterations {
        let f = e_anomaly - eccentricity * e_anomaly.sin() - mean_anomaly;
        if f.abs() < tolerance {
            return e_anomaly;
        }
        let f_prime = 1.0 - eccentricity * e_anomaly.cos();
        e_anomaly -= f / f_prime;
    }

    let residual = e_anomaly - eccentricity * e_anomaly.sin() - mean_anomaly;
    debug!(
        "Kepler solver hit the iteration cap: M={:.6}, e={:.4}, residual={:.3e}",
        mean_anomaly, eccentricity, residual
    );
    e_anomaly
}

/// True anomaly from eccentric anomaly.
///
/// ν = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2)); atan2 keeps the full
/// quadrant coverage a plain atan would lose.
#[inline]
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half_e = eccentric_anomaly / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half_e.sin();
    let x = (1.0 - eccentricity).sqrt() * half_e.cos();
    2.0 * y.atan2(x)
}

/// Focal distance at a true anomaly: r = a(1−e²)/(1+e·cos ν).
#[inline]
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, true_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * true_anomaly.cos())
}
