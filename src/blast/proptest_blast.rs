//! Property-based tests for blast scaling and damage-radius assembly.
//!
//! These tests verify ordering and scaling invariants across a wide range of
//! yields and distances.

use proptest::prelude::*;

use super::overpressure::{
    overpressure_psi, radius_for_overpressure, radius_from_scaled_distance, scaled_distance,
};
use super::{crater_damage_radii, damage_radii, keys, overpressure_radii};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Overpressure never increases with scaled distance.
    #[test]
    fn prop_overpressure_monotone_in_distance(
        near in 0.0f64..1000.0,
        gap in 0.0f64..1000.0,
    ) {
        let far = near + gap;
        prop_assert!(
            overpressure_psi(far) <= overpressure_psi(near),
            "psi grew with distance: {} psi at Z={}, {} psi at Z={}",
            overpressure_psi(far), far, overpressure_psi(near), near
        );
    }

    /// Scaled distance and its inverse round-trip for positive yields.
    #[test]
    fn prop_scaled_distance_round_trip(
        radius_m in 1.0f64..1.0e7,
        yield_mt in 1.0e-6f64..1.0e4,
    ) {
        let z = scaled_distance(radius_m, yield_mt);
        let back = radius_from_scaled_distance(z, yield_mt);
        prop_assert!(
            ((back - radius_m) / radius_m).abs() < 1e-10,
            "round trip drifted: {} m -> Z={} -> {} m",
            radius_m, z, back
        );
    }

    /// A weaker overpressure threshold always lies at least as far out.
    #[test]
    fn prop_threshold_radius_ordering(
        yield_mt in 1.0e-6f64..1.0e4,
    ) {
        let r_strong = radius_for_overpressure(20.0, yield_mt);
        let r_weak = radius_for_overpressure(1.0, yield_mt);
        prop_assert!(
            r_strong <= r_weak,
            "20 psi ring ({} m) outside 1 psi ring ({} m) at {} MT",
            r_strong, r_weak, yield_mt
        );
    }

    /// Threshold radii follow cube-root yield scaling exactly.
    #[test]
    fn prop_cube_root_yield_scaling(
        yield_mt in 1.0e-3f64..1.0e3,
        factor in 1.0f64..100.0,
    ) {
        let base = radius_for_overpressure(5.0, yield_mt);
        let scaled = radius_for_overpressure(5.0, yield_mt * factor);
        let expected_ratio = factor.cbrt();
        prop_assert!(
            (scaled / base - expected_ratio).abs() < 1e-9,
            "ratio {} differs from cbrt({}) = {}",
            scaled / base, factor, expected_ratio
        );
    }

    /// Crater rings keep their fixed ordering for any positive crater.
    #[test]
    fn prop_crater_rings_ordered(crater_diameter_m in 1.0f64..1.0e6) {
        let radii = crater_damage_radii(crater_diameter_m);
        let ordered = [
            keys::CRATER_RADIUS,
            keys::SEVERE_DAMAGE,
            keys::MODERATE_DAMAGE,
            keys::THERMAL_IGNITION,
            keys::LIGHT_DAMAGE,
        ];
        for pair in ordered.windows(2) {
            prop_assert!(radii.get(pair[0]).unwrap() < radii.get(pair[1]).unwrap());
        }
    }

    /// The ground-impact map contains the airburst map for the same yield.
    #[test]
    fn prop_ground_map_contains_airburst_map(
        crater_diameter_m in 1.0f64..1.0e6,
        yield_mt in 1.0e-6f64..1.0e4,
    ) {
        let ground = damage_radii(false, crater_diameter_m, yield_mt);
        let airburst = damage_radii(true, crater_diameter_m, yield_mt);

        prop_assert_eq!(airburst.len(), 5);
        prop_assert_eq!(ground.len(), 10);
        for (key, radius) in airburst.iter() {
            prop_assert_eq!(ground.get(key), Some(radius));
        }
    }

    /// Every reported radius is finite and non-negative for sane inputs.
    #[test]
    fn prop_radii_finite_and_non_negative(
        crater_diameter_m in 0.0f64..1.0e6,
        yield_mt in 1.0e-9f64..1.0e4,
    ) {
        let all = damage_radii(false, crater_diameter_m, yield_mt);
        for (key, radius) in all.iter() {
            prop_assert!(
                radius.is_finite() && radius >= 0.0,
                "{} = {} is not a usable radius",
                key, radius
            );
        }
    }

    /// Overpressure rings and crater rings never collide on key names.
    #[test]
    fn prop_ring_families_disjoint(yield_mt in 1.0e-6f64..1.0e4) {
        let crater = crater_damage_radii(1000.0);
        let blast = overpressure_radii(yield_mt);
        for (key, _) in blast.iter() {
            prop_assert!(crater.get(key).is_none(), "key {} appears in both families", key);
        }
    }
}
