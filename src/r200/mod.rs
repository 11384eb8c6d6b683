// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The angular size of a galaxy cluster's R200.
//!
//! R200 is the radius within which the mean density of a cluster is 200 times
//! the critical density. It is estimated from the cluster's velocity dispersion
//! with the scaling relation
//!
//! R200 = 2.02 (sigma / 1000 km/s) / sqrt(OmL + Om0 (1 + z)^3) (H0 / 70) Mpc
//!
//! and converted to an angle with the angular diameter distance of the
//! fiducial [FlatLambdaCdm] cosmology. The redshift is the low-redshift Doppler
//! approximation z = v / 3e5.
//!
//! None of the functions here validate their inputs except
//! [try_compute_r200_deg]; NaNs and infinities propagate as usual. In
//! particular, a recession velocity of 0 puts the cluster at an angular
//! diameter distance of 0, and the angular radius is infinite (or NaN if the
//! velocity dispersion is also 0).

mod error;

pub use error::R200Error;

use log::debug;
use serde::Serialize;

use crate::{
    constants::{
        FIDUCIAL_H0, FIDUCIAL_OM0, FIDUCIAL_OML, R200_COEFFICIENT_MPC, R200_REFERENCE_H0,
        R200_SIGMA_SCALE_KM_S, RAD_TO_DEG, SPEED_OF_LIGHT_APPROX_KM_S,
    },
    cosmology::FlatLambdaCdm,
};

/// Everything derived while getting a cluster's angular R200.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct R200 {
    /// z = v / 3e5
    pub redshift: f64,

    /// The physical R200 \[Mpc\]
    pub r200_mpc: f64,

    /// The angular diameter distance to the cluster \[Mpc\]
    pub angular_diameter_distance_mpc: f64,

    /// The angular R200 \[degrees\]
    pub r200_deg: f64,
}

impl R200 {
    /// Derive R200 for a cluster with the given recession velocity \[km/s\] and
    /// velocity dispersion \[km/s\].
    pub fn new(recession_velocity: f64, velocity_dispersion: f64) -> R200 {
        let redshift = redshift_from_velocity(recession_velocity);
        let r200_mpc = r200_mpc(velocity_dispersion, redshift);
        let angular_diameter_distance_mpc =
            FlatLambdaCdm::FIDUCIAL.angular_diameter_distance_mpc(redshift);
        let r200_deg = r200_mpc / angular_diameter_distance_mpc * RAD_TO_DEG;
        debug!(
            "v = {recession_velocity} km/s, sigma = {velocity_dispersion} km/s: z = {redshift}, R200 = {r200_mpc} Mpc, d_A = {angular_diameter_distance_mpc} Mpc, R200 = {r200_deg} deg"
        );

        R200 {
            redshift,
            r200_mpc,
            angular_diameter_distance_mpc,
            r200_deg,
        }
    }
}

/// The angular R200 \[degrees\] of a cluster with the given recession velocity
/// \[km/s\] and velocity dispersion \[km/s\].
///
/// # Examples
///
/// `assert_abs_diff_eq!(compute_r200_deg(30000.0, 1000.0), 0.29018, epsilon = 1e-3);`
pub fn compute_r200_deg(recession_velocity: f64, velocity_dispersion: f64) -> f64 {
    R200::new(recession_velocity, velocity_dispersion).r200_deg
}

/// Like [compute_r200_deg], but inputs that can't describe a real cluster are
/// rejected instead of producing NaN or infinity.
pub fn try_compute_r200_deg(
    recession_velocity: f64,
    velocity_dispersion: f64,
) -> Result<f64, R200Error> {
    if !recession_velocity.is_finite() {
        return Err(R200Error::NonFinite {
            name: "recession velocity",
            value: recession_velocity,
        });
    }
    if !velocity_dispersion.is_finite() {
        return Err(R200Error::NonFinite {
            name: "velocity dispersion",
            value: velocity_dispersion,
        });
    }
    if recession_velocity <= 0.0 {
        return Err(R200Error::NonPositiveRecessionVelocity(recession_velocity));
    }
    if velocity_dispersion < 0.0 {
        return Err(R200Error::NegativeVelocityDispersion(velocity_dispersion));
    }

    Ok(compute_r200_deg(recession_velocity, velocity_dispersion))
}

/// Convert a recession velocity \[km/s\] to a redshift with z = v / 3e5. This is
/// only good at low redshift, but it's the convention the R200 values are
/// defined with.
pub fn redshift_from_velocity(recession_velocity: f64) -> f64 {
    recession_velocity / SPEED_OF_LIGHT_APPROX_KM_S
}

/// The physical R200 \[Mpc\] of a cluster with velocity dispersion
/// `velocity_dispersion` \[km/s\] at redshift `redshift`.
pub fn r200_mpc(velocity_dispersion: f64, redshift: f64) -> f64 {
    let zp1 = 1.0 + redshift;
    R200_COEFFICIENT_MPC * (velocity_dispersion / R200_SIGMA_SCALE_KM_S)
        / (FIDUCIAL_OML + FIDUCIAL_OM0 * zp1 * zp1 * zp1).sqrt()
        * (FIDUCIAL_H0 / R200_REFERENCE_H0)
}
