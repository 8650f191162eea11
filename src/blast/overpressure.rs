//! Hopkinson-Cranz scaled distance and the Kingery-Bulmash overpressure table.
//!
//! Blast effects at different yields collapse onto one curve when distance is
//! normalized by the cube root of yield. The curve itself is carried here as
//! nine discrete bins; lookups are a linear first-match scan over half-open
//! [min, max) intervals.
//!
//! # Reference
//! - Kingery, C.N. & Bulmash, G. (1984), BRL technical report ARBRL-TR-02555

/// One bin of the overpressure curve: scaled-distance range → peak psi.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverpressureBin {
    /// Inclusive lower edge of the scaled-distance range (m/MT^⅓)
    pub min_scaled_distance: f64,
    /// Exclusive upper edge of the scaled-distance range (m/MT^⅓)
    pub max_scaled_distance: f64,
    /// Peak overpressure across the bin (psi)
    pub overpressure_psi: f64,
}

impl OverpressureBin {
    const fn new(min: f64, max: f64, psi: f64) -> Self {
        Self {
            min_scaled_distance: min,
            max_scaled_distance: max,
            overpressure_psi: psi,
        }
    }

    /// Half-open containment test: min ≤ Z < max.
    #[inline]
    pub fn contains(&self, scaled_distance: f64) -> bool {
        self.min_scaled_distance <= scaled_distance && scaled_distance < self.max_scaled_distance
    }
}

/// Kingery-Bulmash curve binned over scaled distance, ascending, covering
/// [0, ∞) without gaps or overlap. Peak psi decreases monotonically.
pub const OVERPRESSURE_TABLE: [OverpressureBin; 9] = [
    OverpressureBin::new(0.0, 10.0, 100.0),
    OverpressureBin::new(10.0, 20.0, 50.0),
    OverpressureBin::new(20.0, 30.0, 20.0),
    OverpressureBin::new(30.0, 50.0, 10.0),
    OverpressureBin::new(50.0, 80.0, 5.0),
    OverpressureBin::new(80.0, 150.0, 2.0),
    OverpressureBin::new(150.0, 300.0, 1.0),
    OverpressureBin::new(300.0, 600.0, 0.5),
    OverpressureBin::new(600.0, f64::INFINITY, 0.1),
];

/// Scaled distance used when no table bin satisfies a threshold query.
const DEFAULT_SCALED_DISTANCE: f64 = 5.0;

/// Hopkinson-Cranz scaled distance, Z = R / W^(1/3).
///
/// Returns infinity for non-positive yields: zero explosive energy puts every
/// physical distance beyond the end of the curve.
#[inline]
pub fn scaled_distance(radius_m: f64, yield_megatons: f64) -> f64 {
    if yield_megatons <= 0.0 {
        return f64::INFINITY;
    }
    radius_m / yield_megatons.cbrt()
}

/// Invert the scaling: R = Z · W^(1/3).
#[inline]
pub fn radius_from_scaled_distance(scaled_distance: f64, yield_megatons: f64) -> f64 {
    scaled_distance * yield_megatons.cbrt()
}

/// Peak overpressure at a scaled distance, by first-match table scan.
///
/// Falls through to 0.0 psi only for inputs outside [0, ∞) — negative or NaN
/// scaled distances match no bin.
pub fn overpressure_psi(scaled_distance: f64) -> f64 {
    for bin in &OVERPRESSURE_TABLE {
        if bin.contains(scaled_distance) {
            return bin.overpressure_psi;
        }
    }
    0.0
}

/// Ground radius at which overpressure first drops to the target level.
///
/// Scans for the first bin whose psi ≤ target and converts that bin's
/// midpoint back to a radius. This is a deliberately coarse inverse — bin
/// midpoint, no interpolation — good to roughly a factor of the bin width.
/// Thresholds below the table's smallest psi fall back to a fixed near-field
/// scaled distance.
pub fn radius_for_overpressure(target_psi: f64, yield_megatons: f64) -> f64 {
    let z = OVERPRESSURE_TABLE
        .iter()
        .find(|bin| bin.overpressure_psi <= target_psi)
        .map(midpoint)
        .unwrap_or(DEFAULT_SCALED_DISTANCE);

    radius_from_scaled_distance(z, yield_megatons)
}

/// Midpoint Z of a bin; the open-ended last bin never qualifies as a midpoint
/// source for the standard thresholds, but keep the arithmetic total anyway.
fn midpoint(bin: &OverpressureBin) -> f64 {
    (bin.min_scaled_distance + bin.max_scaled_distance) / 2.0
}
