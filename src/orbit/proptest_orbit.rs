//! Property-based tests for orbital propagation.
//!
//! These tests verify conservation laws and geometric invariants across a
//! wide range of orbital elements.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::solve_kepler;
use super::{OrbitalElements, propagate, propagate_trajectory};
use crate::test_utils::{assertions, fixtures};
use crate::types::{AU_KM, GM_SUN_KM3_S2};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solved eccentric anomaly satisfies Kepler's equation within the
    /// solver tolerance.
    #[test]
    fn prop_kepler_solution_satisfies_equation(
        mean_anomaly in 0.0f64..TAU,
        eccentricity in 0.0f64..0.95,
    ) {
        let e_anom = solve_kepler(mean_anomaly, eccentricity);
        let m_check = e_anom - eccentricity * e_anom.sin();
        prop_assert!(
            (m_check - mean_anomaly).abs() < 1e-6,
            "Kepler equation violated for M={}, e={}: recovered M={}",
            mean_anomaly, eccentricity, m_check
        );
    }

    /// Circular orbits keep a constant radius at every time offset.
    #[test]
    fn prop_circular_radius_constant(
        a_au in 0.1f64..50.0,
        dt in 0.0f64..1e9,
    ) {
        let a = a_au * AU_KM;
        let elements = OrbitalElements::circular(a).unwrap();
        let state = propagate(&elements, dt);
        prop_assert!(
            ((state.radius() - a) / a).abs() < 1e-9,
            "circular radius drifted: a={} km, r={} km at dt={}",
            a, state.radius(), dt
        );
    }

    /// Orbital radius never leaves the periapsis-apoapsis band.
    #[test]
    fn prop_radius_stays_between_apsides(
        a_au in 0.3f64..10.0,
        eccentricity in 0.0f64..0.9,
        inclination in 0.0f64..TAU,
        node in 0.0f64..TAU,
        periapsis_arg in 0.0f64..TAU,
        mean_anomaly in 0.0f64..TAU,
        dt in 0.0f64..1e9,
    ) {
        let elements = OrbitalElements::from_au(
            a_au, eccentricity, inclination, node, periapsis_arg, mean_anomaly,
        ).unwrap();
        let radius = propagate(&elements, dt).radius();

        let a = elements.semi_major_axis;
        let lower = a * (1.0 - eccentricity) * (1.0 - 1e-9);
        let upper = a * (1.0 + eccentricity) * (1.0 + 1e-9);
        prop_assert!(
            (lower..=upper).contains(&radius),
            "r={} km outside [{}, {}] for e={}",
            radius, lower, upper, eccentricity
        );
    }

    /// Specific orbital energy equals the vis-viva value −μ/2a everywhere.
    #[test]
    fn prop_energy_matches_vis_viva(
        a_au in 0.3f64..10.0,
        eccentricity in 0.0f64..0.9,
        inclination in 0.0f64..TAU,
        mean_anomaly in 0.0f64..TAU,
        dt in 0.0f64..1e9,
    ) {
        let elements = OrbitalElements::from_au(
            a_au, eccentricity, inclination, 0.0, 0.0, mean_anomaly,
        ).unwrap();
        let state = propagate(&elements, dt);

        let expected = assertions::vis_viva_energy(elements.semi_major_axis);
        let drift = ((state.specific_energy(GM_SUN_KM3_S2) - expected) / expected).abs();
        prop_assert!(
            drift < 1e-9,
            "energy drift {} for a={} AU, e={}",
            drift, a_au, eccentricity
        );
    }

    /// Specific angular momentum magnitude equals √(μ·a(1−e²)) everywhere.
    #[test]
    fn prop_angular_momentum_magnitude(
        a_au in 0.3f64..10.0,
        eccentricity in 0.0f64..0.9,
        node in 0.0f64..TAU,
        periapsis_arg in 0.0f64..TAU,
        dt in 0.0f64..1e9,
    ) {
        let elements = OrbitalElements::from_au(
            a_au, eccentricity, 0.4, node, periapsis_arg, 0.0,
        ).unwrap();
        let state = propagate(&elements, dt);

        let expected = assertions::angular_momentum_magnitude(&elements);
        let h = state.angular_momentum().length();
        prop_assert!(
            ((h - expected) / expected).abs() < 1e-9,
            "angular momentum {} differs from {}",
            h, expected
        );
    }

    /// Frame rotations change direction only, never radius or speed.
    #[test]
    fn prop_rotations_preserve_magnitudes(
        a_au in 0.3f64..10.0,
        eccentricity in 0.0f64..0.9,
        inclination in 0.0f64..TAU,
        node in 0.0f64..TAU,
        periapsis_arg in 0.0f64..TAU,
        mean_anomaly in 0.0f64..TAU,
    ) {
        let rotated = OrbitalElements::from_au(
            a_au, eccentricity, inclination, node, periapsis_arg, mean_anomaly,
        ).unwrap();
        let aligned = OrbitalElements::from_au(
            a_au, eccentricity, 0.0, 0.0, 0.0, mean_anomaly,
        ).unwrap();

        let rotated_state = propagate(&rotated, 0.0);
        let aligned_state = propagate(&aligned, 0.0);

        prop_assert!(
            ((rotated_state.radius() - aligned_state.radius()) / aligned_state.radius()).abs() < 1e-9
        );
        prop_assert!(
            ((rotated_state.speed() - aligned_state.speed()) / aligned_state.speed()).abs() < 1e-9
        );
    }

    /// Trajectory sampling returns one state per offset, in input order.
    #[test]
    fn prop_trajectory_order_and_length(
        offsets in prop::collection::vec(0.0f64..1e9, 0..20),
    ) {
        let elements = OrbitalElements::default();
        let states = propagate_trajectory(&elements, &offsets);

        prop_assert_eq!(states.len(), offsets.len());
        for (state, &dt) in states.iter().zip(offsets.iter()) {
            prop_assert_eq!(*state, propagate(&elements, dt));
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_eros_like_fixture_holds_conservation_laws() {
        let elements = fixtures::eros_like_orbit();
        let state = propagate(&elements, 4.2e7);

        let expected_energy = assertions::vis_viva_energy(elements.semi_major_axis);
        let energy_drift =
            ((state.specific_energy(GM_SUN_KM3_S2) - expected_energy) / expected_energy).abs();
        assert!(energy_drift < 1e-9, "energy drift {}", energy_drift);

        let expected_h = assertions::angular_momentum_magnitude(&elements);
        let h = state.angular_momentum().length();
        assert!(((h - expected_h) / expected_h).abs() < 1e-9);
    }

    #[test]
    fn test_one_au_fixture_is_bound() {
        let state = propagate(&fixtures::circular_one_au(), 0.0);
        assert!(
            state.specific_energy(GM_SUN_KM3_S2) < 0.0,
            "a bound heliocentric orbit must have negative specific energy"
        );
    }
}
