/*
 * Copyright © 2026, the SkyRec project contributors. All rights reserved.
 *
 * The “SkyRec” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! cubic interpolation of scalar time series, over both open (linear) and periodic
//! (angular) domains. The circular variants remove the modulo wrap before interpolating
//! so that a heading crossing the +/-180 (or 0/360) boundary does not produce phase
//! artifacts. See http://paulbourke.net/miscellaneous/interpolation/ for the Hermite
//! basis used here.

use crate::sgn;

/// interpolates between `y1` and `y2` with support values `y0` and `y3` using a cubic
/// Hermite spline.
///
/// `mu` is the interpolation factor in [0.0, 1.0] between `y1` and `y2`;
/// `tension` is 1 for high, 0 for normal and -1 for low curvature;
/// positive `bias` weighs towards the first segment, negative towards the second.
pub fn hermite (y0: f64, y1: f64, y2: f64, y3: f64, mu: f64, tension: f64, bias: f64)->f64 {
    let mu2 = mu * mu;
    let mu3 = mu2 * mu;

    let mut m0 = (y1 - y0) * (1.0 + bias) * (1.0 - tension) / 2.0;
    m0        += (y2 - y1) * (1.0 - bias) * (1.0 - tension) / 2.0;
    let mut m1 = (y2 - y1) * (1.0 + bias) * (1.0 - tension) / 2.0;
    m1        += (y3 - y2) * (1.0 - bias) * (1.0 - tension) / 2.0;

    let a0 =  2.0 * mu3 - 3.0 * mu2 + 1.0;
    let a1 =        mu3 - 2.0 * mu2 + mu;
    let a2 =        mu3 -       mu2;
    let a3 = -2.0 * mu3 + 3.0 * mu2;

    a0 * y1 + a1 * m0 + a2 * m1 + a3 * y2
}

/// four point Catmull-Rom spline, an alternative interpolation kernel with fixed tangents
pub fn catmull_rom (y0: f64, y1: f64, y2: f64, y3: f64, mu: f64)->f64 {
    let mu2 = mu * mu;

    let a0 = -0.5 * y0 + 1.5 * y1 - 1.5 * y2 + 0.5 * y3;
    let a1 = y0 - 2.5 * y1 + 2.0 * y2 - 0.5 * y3;
    let a2 = -0.5 * y0 + 0.5 * y2;
    let a3 = y1;

    a0 * mu * mu2 + a1 * mu2 + a2 * mu + a3
}

/// plain linear interpolation between `p1` and `p2`
#[inline]
pub fn linear (p1: f64, p2: f64, mu: f64)->f64 {
    p1 + mu * (p2 - p1)
}

/// unwraps the raw value `y1` from a "+/- modulo 180" domain (values in [-180, 180[)
/// against the *already unwrapped* previous value `y0`:
///
/// - same sign, or unwrapped difference <= 180: `y1` passes through unchanged
/// - signs differ and the difference exceeds 180: `y1` is reflected across the modulo
///   boundary, `sgn(y0) * (360 - |y1|)`
///
/// This removes the modulo operation from a sample series, e.g. 165, 175, -175, -165
/// becomes 165, 175, 185, 195, which is then suitable for interpolation. Note that the
/// unwrap is inherently sequential: each value must be unwrapped against the previous
/// *unwrapped* value, so a series has to be processed as an in-order scan.
///
/// | y0  | 10 | 160 | 170 | -20 | -170 |
/// |-----|----|-----|-----|-----|------|
/// | y1  | 20 | 170 | -20 | -10 |  20  |
/// | y1' | 20 | 170 | 340 | -10 | -340 |
pub fn unwrap_180 (y0: f64, y1: f64)->f64 {
    let s0 = sgn(y0);
    if sgn(y1) != s0 {
        let diff = (y1 - y0).abs();
        if diff > 180.0 {
            s0 * (360.0 - y1.abs())
        } else {
            y1
        }
    } else {
        y1
    }
}

/// Hermite interpolation of circular values in [-180, 180[. The sample points are
/// unwrapped in order before interpolating and the result is re-wrapped into the
/// [-180, 180[ domain.
pub fn hermite_180 (y0: f64, y1: f64, y2: f64, y3: f64, mu: f64, tension: f64, bias: f64)->f64 {
    let y1n = unwrap_180( y0, y1);
    let y2n = unwrap_180( y1n, y2);
    let y3n = unwrap_180( y2n, y3);

    let v = hermite( y0, y1n, y2n, y3n, mu, tension, bias);
    if v < -180.0 { v + 360.0 } else if v >= 180.0 { v - 360.0 } else { v }
}

/// Hermite interpolation of circular values in [0, 360[ (e.g. compass headings),
/// the same algorithm as [`hermite_180`] on a shifted domain
pub fn hermite_360 (y0: f64, y1: f64, y2: f64, y3: f64, mu: f64, tension: f64, bias: f64)->f64 {
    hermite_180( y0 - 180.0, y1 - 180.0, y2 - 180.0, y3 - 180.0, mu, tension, bias) + 180.0
}
