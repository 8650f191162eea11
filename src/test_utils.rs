//! Test utilities for impact-physics and orbital-propagation tests.
//!
//! Provides fixtures for representative impactors and orbits, and assertions
//! for physical invariants shared across test modules.

use crate::blast::DamageRadii;
use crate::orbit::OrbitalElements;
use crate::types::{AU_KM, GM_SUN_KM3_S2, ImpactorParameters};

/// Fixtures for representative impactors and orbits.
pub mod fixtures {
    use super::*;

    /// 50 m stony asteroid at 20 km/s: the small reference scenario
    /// (~9.4 MT, city-threatening).
    pub fn small_stony() -> ImpactorParameters {
        ImpactorParameters::stony(50.0, 20_000.0, 3000.0).unwrap()
    }

    /// 1 km stony asteroid at 20 km/s: the regional-catastrophe scenario.
    pub fn kilometer_stony() -> ImpactorParameters {
        ImpactorParameters::stony(1000.0, 20_000.0, 3000.0).unwrap()
    }

    /// Default impactor hardened to monolithic-rock strength, so entry
    /// survives deep enough to ground.
    pub fn ground_impactor() -> ImpactorParameters {
        ImpactorParameters {
            strength_pa: 1e8,
            ..Default::default()
        }
    }

    /// Default impactor weakened to rubble-pile strength: fragments high.
    pub fn airburst_impactor() -> ImpactorParameters {
        ImpactorParameters {
            strength_pa: 1e5,
            ..Default::default()
        }
    }

    /// Circular heliocentric orbit at 1 AU.
    pub fn circular_one_au() -> OrbitalElements {
        OrbitalElements::circular(AU_KM).unwrap()
    }

    /// Eros-like elliptical orbit: a = 1.458 AU, e = 0.223, i ≈ 10.8°.
    pub fn eros_like_orbit() -> OrbitalElements {
        OrbitalElements::from_au(1.458, 0.223, 0.1885, 5.28, 3.11, 0.64).unwrap()
    }
}

/// Assertions for physical invariants.
pub mod assertions {
    use super::*;

    /// Specific orbital energy a bound heliocentric orbit must hold.
    ///
    /// E = -μ/2a, independent of position along the orbit.
    pub fn vis_viva_energy(semi_major_axis: f64) -> f64 {
        -GM_SUN_KM3_S2 / (2.0 * semi_major_axis)
    }

    /// Specific angular momentum magnitude the elements imply.
    ///
    /// |h| = sqrt(μ · a(1−e²)), conserved around the orbit.
    pub fn angular_momentum_magnitude(elements: &OrbitalElements) -> f64 {
        let p = elements.semi_major_axis * (1.0 - elements.eccentricity * elements.eccentricity);
        (GM_SUN_KM3_S2 * p).sqrt()
    }

    /// Assert that the named rings all exist and grow strictly outward.
    ///
    /// # Panics
    /// Panics if a ring is missing or the ordering is violated.
    pub fn assert_rings_ordered(radii: &DamageRadii, ordered_keys: &[&str]) {
        for pair in ordered_keys.windows(2) {
            let inner = radii
                .get(pair[0])
                .unwrap_or_else(|| panic!("missing ring {}", pair[0]));
            let outer = radii
                .get(pair[1])
                .unwrap_or_else(|| panic!("missing ring {}", pair[1]));
            assert!(
                inner < outer,
                "ring {} ({inner} m) should sit inside {} ({outer} m)",
                pair[0],
                pair[1],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::{breakup_altitude, is_airburst};
    use crate::blast::overpressure_radii;
    use crate::kinematics::ImpactEnergy;
    use approx::assert_relative_eq;

    #[test]
    fn test_stony_fixtures_carry_reference_energies() {
        let small = ImpactEnergy::from_impactor(&fixtures::small_stony());
        assert_relative_eq!(small.energy_megatons, 9.3857, max_relative = 1e-4);

        let kilometer = ImpactEnergy::from_impactor(&fixtures::kilometer_stony());
        assert_relative_eq!(kilometer.energy_megatons, 75_085.87, max_relative = 1e-4);
    }

    #[test]
    fn test_ground_and_airburst_fixtures_diverge() {
        let grounded = fixtures::ground_impactor();
        let z = breakup_altitude(grounded.velocity_m_s, grounded.strength_pa).unwrap();
        assert!(!is_airburst(z));

        let lofted = fixtures::airburst_impactor();
        let z = breakup_altitude(lofted.velocity_m_s, lofted.strength_pa).unwrap();
        assert!(is_airburst(z));
    }

    #[test]
    fn test_vis_viva_energy_at_one_au() {
        assert_relative_eq!(
            assertions::vis_viva_energy(AU_KM),
            -443.522,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_rings_ordered_accepts_overpressure_family() {
        use crate::blast::keys;
        let radii = overpressure_radii(10.0);
        assertions::assert_rings_ordered(
            &radii,
            &[
                keys::R_100_PSI,
                keys::R_20_PSI,
                keys::R_5_PSI,
                keys::R_1_PSI,
                keys::R_0_5_PSI,
            ],
        );
    }

    #[test]
    #[should_panic(expected = "missing ring")]
    fn test_rings_ordered_rejects_missing_key() {
        assertions::assert_rings_ordered(&DamageRadii::new(), &["a", "b"]);
    }
}
