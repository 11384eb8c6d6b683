// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use cluster_r200::R200;

#[test]
fn test_r200_to_json() {
    let r200 = R200::new(30000.0, 1000.0);
    let json = serde_json::to_value(r200).unwrap();

    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["redshift"].as_f64(), Some(r200.redshift));
    assert_eq!(obj["r200_mpc"].as_f64(), Some(r200.r200_mpc));
    assert_eq!(
        obj["angular_diameter_distance_mpc"].as_f64(),
        Some(r200.angular_diameter_distance_mpc)
    );
    assert_eq!(obj["r200_deg"].as_f64(), Some(r200.r200_deg));
}

#[test]
fn test_non_finite_r200_to_json() {
    // serde_json writes non-finite floats as null.
    let r200 = R200::new(0.0, 1000.0);
    let json = serde_json::to_value(r200).unwrap();
    assert!(json["r200_deg"].is_null());
    assert_eq!(json["angular_diameter_distance_mpc"].as_f64(), Some(0.0));
}
