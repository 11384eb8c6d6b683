// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from checked R200 calculations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum R200Error {
    #[error("The {name} must be a finite number, but got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error(
        "The recession velocity must be positive (a redshift of 0 puts the cluster at no distance), but got {0} km/s"
    )]
    NonPositiveRecessionVelocity(f64),

    #[error("The velocity dispersion cannot be negative, but got {0} km/s")]
    NegativeVelocityDispersion(f64),
}
