// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests against the crate's public interface only.

use std::thread;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use cluster_r200::{
    compute_r200_deg, try_compute_r200_deg, FlatLambdaCdm, R200Error, R200, RAD_TO_DEG,
    SPEED_OF_LIGHT_APPROX_KM_S,
};

#[test]
fn test_coma_like_cluster() {
    // Roughly Coma: v ~ 6925 km/s, sigma ~ 1000 km/s.
    let r200_deg = compute_r200_deg(6925.0, 1000.0);
    assert!(r200_deg.is_finite());
    // Well over a degree on the sky.
    assert!(r200_deg > 1.0 && r200_deg < 2.0, "{r200_deg}");
}

#[test]
fn test_intermediates_are_consistent() {
    let v = 45000.0;
    let sigma = 750.0;
    let r200 = R200::new(v, sigma);

    assert_abs_diff_eq!(r200.redshift, v / SPEED_OF_LIGHT_APPROX_KM_S);
    assert_relative_eq!(
        r200.angular_diameter_distance_mpc,
        FlatLambdaCdm::FIDUCIAL.angular_diameter_distance_mpc(r200.redshift),
        max_relative = 1e-15
    );
    assert_relative_eq!(
        r200.r200_deg,
        r200.r200_mpc / r200.angular_diameter_distance_mpc * RAD_TO_DEG,
        max_relative = 1e-15
    );
    assert_abs_diff_eq!(compute_r200_deg(v, sigma), r200.r200_deg);
}

#[test]
fn test_checked_and_unchecked_agree() {
    for (v, sigma) in [(1500.0, 250.0), (30000.0, 1000.0), (120000.0, 1400.0)] {
        let checked = try_compute_r200_deg(v, sigma);
        assert!(checked.is_ok(), "{:?}", checked.unwrap_err());
        assert_abs_diff_eq!(checked.unwrap(), compute_r200_deg(v, sigma));
    }

    assert!(matches!(
        try_compute_r200_deg(0.0, 500.0),
        Err(R200Error::NonPositiveRecessionVelocity(_))
    ));
}

#[test]
fn test_parallel_calls() {
    let expected = compute_r200_deg(30000.0, 1000.0);
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| compute_r200_deg(30000.0, 1000.0)))
        .collect();
    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result, expected);
    }
}
