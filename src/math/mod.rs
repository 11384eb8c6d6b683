// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use log::warn;

use crate::constants::QUAD_MAX_DEPTH;

/// Integrate `f` from `a` to `b` with adaptive Simpson quadrature.
///
/// Each panel is split until the two-half estimate agrees with the whole-panel
/// estimate to within `rel_tol` (relative to the magnitude of the first,
/// coarse estimate of the whole integral). If a panel still hasn't converged
/// after [QUAD_MAX_DEPTH] splits, its best estimate is used and a warning is
/// logged.
///
/// Swapping the limits negates the result, and `a == b` gives exactly 0. A
/// non-finite integrand anywhere in the range makes the result NaN (or
/// infinite); nothing is checked.
///
/// The tolerance comes from the coarse estimate, so the range shouldn't be so
/// wide that the integrand's midpoint and endpoint values are unrepresentative;
/// split such ranges up and integrate the pieces separately.
///
/// # Examples
///
/// `assert_abs_diff_eq!(integrate_simpson(|x| x * x, 0.0, 3.0, 1e-10), 9.0);`
pub(crate) fn integrate_simpson<F>(f: F, a: f64, b: f64, rel_tol: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let quad = adaptive_simpson(f, a, b, rel_tol, QUAD_MAX_DEPTH);
    if quad.hit_depth_limit {
        warn!(
            "Adaptive quadrature over [{a}, {b}] hit its depth limit ({QUAD_MAX_DEPTH}); the result may be inaccurate"
        );
    }
    quad.value
}

/// The result of an adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quadrature {
    pub(crate) value: f64,

    /// Did any panel stop splitting without converging?
    pub(crate) hit_depth_limit: bool,
}

/// [integrate_simpson] without the logging, and with the depth limit supplied.
pub(crate) fn adaptive_simpson<F>(
    f: F,
    a: f64,
    b: f64,
    rel_tol: f64,
    max_depth: u32,
) -> Quadrature
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return Quadrature {
            value: 0.0,
            hit_depth_limit: false,
        };
    }
    if b < a {
        let quad = adaptive_simpson(f, b, a, rel_tol, max_depth);
        return Quadrature {
            value: -quad.value,
            ..quad
        };
    }

    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = simpson(a, b, fa, fm, fb);
    // Guard against a zero-valued first estimate making the tolerance 0.
    let tol = if whole == 0.0 {
        rel_tol
    } else {
        rel_tol * whole.abs()
    };

    let mut hit_depth_limit = false;
    let value = adaptive_step(
        &f,
        Panel {
            a,
            b,
            fa,
            fm,
            fb,
            whole,
        },
        tol,
        max_depth,
        &mut hit_depth_limit,
    );
    Quadrature {
        value,
        hit_depth_limit,
    }
}

/// A Simpson panel with its already-evaluated endpoints and midpoint.
#[derive(Clone, Copy)]
struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
}

#[inline]
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn adaptive_step<F>(f: &F, p: Panel, tol: f64, depth: u32, hit_depth_limit: &mut bool) -> f64
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (p.a + p.b);
    let lm = 0.5 * (p.a + m);
    let rm = 0.5 * (m + p.b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(p.a, m, p.fa, flm, p.fm);
    let right = simpson(m, p.b, p.fm, frm, p.fb);
    let delta = left + right - p.whole;

    // A NaN delta fails this comparison as well as the next; let it out rather
    // than recursing all the way down.
    if delta.is_nan() {
        return left + right;
    }
    if delta.abs() <= 15.0 * tol {
        // Richardson extrapolation.
        return left + right + delta / 15.0;
    }
    if depth == 0 {
        *hit_depth_limit = true;
        return left + right + delta / 15.0;
    }

    adaptive_step(
        f,
        Panel {
            a: p.a,
            b: m,
            fa: p.fa,
            fm: flm,
            fb: p.fm,
            whole: left,
        },
        0.5 * tol,
        depth - 1,
        hit_depth_limit,
    ) + adaptive_step(
        f,
        Panel {
            a: m,
            b: p.b,
            fa: p.fm,
            fm: frm,
            fb: p.fb,
            whole: right,
        },
        0.5 * tol,
        depth - 1,
        hit_depth_limit,
    )
}
