// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat Lambda-CDM background cosmology.
//!
//! Only the fiducial parameters (H0 = 70 km/s/Mpc, Om0 = 0.3) are available.
//! Radiation is ignored, i.e. the CMB temperature is taken to be 0 K.


use log::trace;

use crate::{
    constants::{FIDUCIAL_H0, FIDUCIAL_OM0, QUAD_REL_TOL, VEL_C_KM_S},
    math::integrate_simpson,
};

/// A spatially-flat universe containing matter and a cosmological constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatLambdaCdm {
    /// Hubble constant \[km/s/Mpc\]
    h0: f64,

    /// Matter density fraction at z = 0.
    om0: f64,
}

impl FlatLambdaCdm {
    /// H0 = 70 km/s/Mpc, Om0 = 0.3, OmL = 0.7.
    pub const FIDUCIAL: FlatLambdaCdm = FlatLambdaCdm {
        h0: FIDUCIAL_H0,
        om0: FIDUCIAL_OM0,
    };

    /// Hubble constant \[km/s/Mpc\]
    pub fn h0(&self) -> f64 {
        self.h0
    }

    /// Matter density fraction at z = 0.
    pub fn om0(&self) -> f64 {
        self.om0
    }

    /// Dark-energy density fraction at z = 0. The universe is flat, so this is
    /// everything that isn't matter.
    pub fn ode0(&self) -> f64 {
        1.0 - self.om0
    }

    /// The dimensionless Hubble parameter E(z) = H(z) / H0.
    pub fn efunc(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        (self.om0 * zp1 * zp1 * zp1 + self.ode0()).sqrt()
    }

    /// 1 / E(z); the integrand of the line-of-sight comoving distance.
    pub fn inv_efunc(&self, z: f64) -> f64 {
        self.efunc(z).recip()
    }

    /// The Hubble distance c / H0 \[Mpc\]
    pub fn hubble_distance_mpc(&self) -> f64 {
        VEL_C_KM_S / self.h0
    }

    /// The line-of-sight comoving distance to redshift `z` \[Mpc\]. This is also
    /// the transverse comoving distance, as there is no curvature.
    pub fn comoving_distance_mpc(&self, z: f64) -> f64 {
        let d_c = self.hubble_distance_mpc() * self.line_of_sight_integral(z);
        trace!("Comoving distance to z = {z}: {d_c} Mpc");
        d_c
    }

    /// The angular diameter distance to redshift `z` \[Mpc\]. This is 0 at
    /// z = 0.
    pub fn angular_diameter_distance_mpc(&self, z: f64) -> f64 {
        self.comoving_distance_mpc(z) / (1.0 + z)
    }

    /// The luminosity distance to redshift `z` \[Mpc\].
    pub fn luminosity_distance_mpc(&self, z: f64) -> f64 {
        self.comoving_distance_mpc(z) * (1.0 + z)
    }

    /// The integral of 1 / E(z') from 0 to `z`.
    ///
    /// 1 / E falls off like (1 + z)^-1.5, so beyond z = 1 the range is
    /// integrated in pieces over which 1 + z doubles. Each piece then gets a
    /// tolerance relative to its own size.
    fn line_of_sight_integral(&self, z: f64) -> f64 {
        let inv_efunc = |zz: f64| self.inv_efunc(zz);
        // NaN, infinity and negative redshifts all take this path too.
        if !z.is_finite() || z <= 1.0 {
            return integrate_simpson(inv_efunc, 0.0, z, QUAD_REL_TOL);
        }

        let mut integral = 0.0;
        let mut lower = 0.0;
        while lower < z {
            let upper = (2.0 * lower + 1.0).min(z);
            integral += integrate_simpson(inv_efunc, lower, upper, QUAD_REL_TOL);
            lower = upper;
        }
        integral
    }
}

impl Default for FlatLambdaCdm {
    fn default() -> Self {
        Self::FIDUCIAL
    }
}
