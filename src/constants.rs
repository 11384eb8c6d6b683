// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Nothing in this crate is
configurable at runtime; the cosmology and the R200 scaling relation are fixed
here.
 */

use std::f64::consts::PI;

/// The speed of light used to turn a recession velocity into a redshift
/// \[km/s\]. This is deliberately the rounded value; z = v / 3e5.
pub const SPEED_OF_LIGHT_APPROX_KM_S: f64 = 3e5;

/// Speed of light \[km/s\]. Used for the Hubble distance.
pub const VEL_C_KM_S: f64 = 299_792.458;

/// Hubble constant of the fiducial cosmology \[km/s/Mpc\]
pub const FIDUCIAL_H0: f64 = 70.0;
/// Matter density fraction of the fiducial cosmology.
pub const FIDUCIAL_OM0: f64 = 0.3;
/// Dark-energy density fraction used by the R200 scaling relation. The
/// fiducial cosmology is flat, so this is also 1 - [FIDUCIAL_OM0].
pub const FIDUCIAL_OML: f64 = 0.7;

/// R200 \[Mpc\] of a cluster with a velocity dispersion of
/// [R200_SIGMA_SCALE_KM_S] at z = 0 when H0 = [R200_REFERENCE_H0].
pub const R200_COEFFICIENT_MPC: f64 = 2.02;
/// The velocity dispersion the R200 coefficient is normalised to \[km/s\]
pub const R200_SIGMA_SCALE_KM_S: f64 = 1000.0;
/// The Hubble constant the R200 coefficient is normalised to \[km/s/Mpc\]
pub const R200_REFERENCE_H0: f64 = 70.0;

/// Radians to degrees (180 / PI).
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// Quadrature settings for the cosmological distance integrals.

/// Relative tolerance requested from the adaptive quadrature.
pub(crate) const QUAD_REL_TOL: f64 = 1e-10;
/// The adaptive quadrature will not split a panel more than this many times.
pub(crate) const QUAD_MAX_DEPTH: u32 = 48;
