// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Angular R200 radii of galaxy clusters.

Given a cluster's recession velocity and velocity dispersion (both km/s),
[compute_r200_deg] gives the angle on the sky \[degrees\] subtended by its R200
in a flat Lambda-CDM universe with H0 = 70 km/s/Mpc and Om0 = 0.3.
 */

pub mod constants;
pub mod cosmology;
mod math;
pub mod r200;

// Re-exports.
pub use constants::*;
pub use cosmology::FlatLambdaCdm;
pub use r200::{compute_r200_deg, try_compute_r200_deg, R200Error, R200};
