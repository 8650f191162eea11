//! Keplerian orbital elements and analytic state-vector propagation.
//!
//! Heliocentric by default; distances in km, velocities in km/s, angles in
//! radians. Propagation is closed-form: advance the mean anomaly by n·Δt,
//! solve Kepler's equation, evaluate the perifocal state, rotate into the
//! inertial frame. No integration, so arbitrary time offsets cost the same.

pub mod kepler;

#[cfg(test)]
mod proptest_orbit;

use std::f64::consts::TAU;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, Result};
use crate::types::{AU_KM, GM_SUN_KM3_S2};

/// Classical orbital elements.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in km
    #[serde(default = "defaults::semi_major_axis")]
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    #[serde(default = "defaults::eccentricity")]
    pub eccentricity: f64,
    /// Inclination in radians
    #[serde(default)]
    pub inclination: f64,
    /// Longitude of the ascending node in radians
    #[serde(default)]
    pub longitude_of_ascending_node: f64,
    /// Argument of periapsis in radians
    #[serde(default)]
    pub argument_of_periapsis: f64,
    /// Mean anomaly at epoch in radians
    #[serde(default)]
    pub mean_anomaly: f64,
}

/// Wire defaults: a generic near-Earth orbit.
mod defaults {
    pub fn semi_major_axis() -> f64 {
        1.5e8
    }
    pub fn eccentricity() -> f64 {
        0.1
    }
}

impl Default for OrbitalElements {
    fn default() -> Self {
        Self {
            semi_major_axis: defaults::semi_major_axis(),
            eccentricity: defaults::eccentricity(),
            inclination: 0.0,
            longitude_of_ascending_node: 0.0,
            argument_of_periapsis: 0.0,
            mean_anomaly: 0.0,
        }
    }
}

impl OrbitalElements {
    /// Validated elements.
    ///
    /// # Arguments
    /// * `semi_major_axis` - Semi-major axis in km
    /// * `eccentricity` - Eccentricity, elliptical range [0, 1)
    /// * `inclination` - Inclination in radians
    /// * `longitude_of_ascending_node` - Node longitude in radians
    /// * `argument_of_periapsis` - Periapsis argument in radians
    /// * `mean_anomaly` - Mean anomaly at epoch in radians
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
        mean_anomaly: f64,
    ) -> Result<Self> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(ImpactError::NonPositiveSemiMajorAxis(semi_major_axis));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ImpactError::EccentricityOutOfRange(eccentricity));
        }
        Ok(Self {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            mean_anomaly,
        })
    }

    /// Validated elements with the semi-major axis given in AU.
    pub fn from_au(
        semi_major_axis_au: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
        mean_anomaly: f64,
    ) -> Result<Self> {
        Self::new(
            semi_major_axis_au * AU_KM,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            mean_anomaly,
        )
    }

    /// A circular, uninclined orbit at the given radius.
    pub fn circular(semi_major_axis: f64) -> Result<Self> {
        Self::new(semi_major_axis, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Mean motion n = √(μ/a³) in rad/s.
    pub fn mean_motion(&self, mu: f64) -> f64 {
        (mu / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Orbital period in seconds.
    pub fn period(&self, mu: f64) -> f64 {
        TAU / self.mean_motion(mu)
    }
}

/// Instantaneous position (km) and velocity (km/s) relative to the
/// central body. The triples serialize as `[x, y, z]` arrays.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StateVector {
    pub position: DVec3,
    pub velocity: DVec3,
}

impl StateVector {
    /// Distance from the central body in km.
    pub fn radius(&self) -> f64 {
        self.position.length()
    }

    /// Speed in km/s.
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Specific orbital energy v²/2 − μ/r in km²/s².
    pub fn specific_energy(&self, mu: f64) -> f64 {
        self.velocity.length_squared() / 2.0 - mu / self.position.length()
    }

    /// Specific angular momentum r × v in km²/s.
    pub fn angular_momentum(&self) -> DVec3 {
        self.position.cross(self.velocity)
    }
}

/// Perifocal → inertial rotation: argument of periapsis about z, inclination
/// about x, node longitude about z, applied in that order.
fn perifocal_to_inertial(elements: &OrbitalElements) -> DMat3 {
    DMat3::from_rotation_z(elements.longitude_of_ascending_node)
        * DMat3::from_rotation_x(elements.inclination)
        * DMat3::from_rotation_z(elements.argument_of_periapsis)
}

/// State vector at a given mean anomaly.
fn state_at_mean_anomaly(elements: &OrbitalElements, mean_anomaly: f64, mu: f64) -> StateVector {
    let e = elements.eccentricity;
    let a = elements.semi_major_axis;

    let eccentric_anomaly = kepler::solve_kepler(mean_anomaly, e);
    let nu = kepler::true_anomaly(eccentric_anomaly, e);
    let r = kepler::orbital_radius(a, e, nu);

    // Perifocal frame: x toward periapsis, z along the orbit normal.
    let position = DVec3::new(r * nu.cos(), r * nu.sin(), 0.0);

    let semi_latus_rectum = a * (1.0 - e * e);
    let v_scale = (mu / semi_latus_rectum).sqrt();
    let velocity = DVec3::new(-v_scale * nu.sin(), v_scale * (e + nu.cos()), 0.0);

    let rotation = perifocal_to_inertial(elements);
    StateVector {
        position: rotation * position,
        velocity: rotation * velocity,
    }
}

/// Propagate heliocentric elements by `dt` seconds from epoch.
pub fn propagate(elements: &OrbitalElements, dt: f64) -> StateVector {
    propagate_about(elements, dt, GM_SUN_KM3_S2)
}

/// Propagate about an arbitrary central body.
///
/// # Arguments
/// * `elements` - Orbital elements at epoch
/// * `dt` - Time offset from epoch in seconds
/// * `mu` - Gravitational parameter of the central body in km³/s²
pub fn propagate_about(elements: &OrbitalElements, dt: f64, mu: f64) -> StateVector {
    let mean_anomaly = elements.mean_anomaly + elements.mean_motion(mu) * dt;
    state_at_mean_anomaly(elements, mean_anomaly, mu)
}

/// One heliocentric state per time offset, in input order.
pub fn propagate_trajectory(elements: &OrbitalElements, offsets: &[f64]) -> Vec<StateVector> {
    offsets.iter().map(|&dt| propagate(elements, dt)).collect()
}

/// Evenly spaced sample offsets covering `[0, time_span]` inclusive.
///
/// Zero steps give an empty set; one step samples the epoch only.
pub fn sample_times(time_span: f64, time_steps: usize) -> Vec<f64> {
    match time_steps {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..time_steps)
            .map(|step| step as f64 / (time_steps - 1) as f64 * time_span)
            .collect(),
    }
}
