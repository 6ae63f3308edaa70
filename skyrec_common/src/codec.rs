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

//! quantization of normalized simulator values into compact fixed-width codes, used for
//! the persisted and wire representations of lever positions and similar control values.
//! All functions here are pure and total - they do not validate or clamp their inputs
//! (callers pre-clamp), which keeps the per-sample hot path branch-free. The encode/decode
//! formulas are the bit-exact contract the protocol marshaling layer packs against.

/// the minimal position value, built from the signed 16bit *magnitude* so that the range
/// is symmetric around 0.0 (note this means code 0 does not map to value 0.0 exactly)
pub const POSITION_MIN_16: f64 = -(i16::MAX as f64);
/// the maximum position value (symmetric counterpart of [`POSITION_MIN_16`])
pub const POSITION_MAX_16: f64 = i16::MAX as f64;
/// the number of values for position codes
pub const POSITION_RANGE_16: f64 = POSITION_MAX_16 - POSITION_MIN_16;

/// the minimal percent value
pub const PERCENT_MIN_8: f64 = u8::MIN as f64;
/// the maximum percent value
pub const PERCENT_MAX_8: f64 = u8::MAX as f64;
/// the number of values for percent codes
pub const PERCENT_RANGE_8: f64 = PERCENT_MAX_8;

/// maps a normalized position value in [-1.0, 1.0] to a discrete, signed 16bit code.
/// Values outside [-1.0, 1.0] produce codes outside the declared range - callers
/// are responsible for pre-clamping.
#[inline]
pub fn from_normalized_position (position: f64)->i16 {
    (POSITION_MIN_16 + ((position + 1.0) * POSITION_RANGE_16) / 2.0).round() as i16
}

/// maps a discrete signed 16bit position code back onto a normalized value in [-1.0, 1.0]
#[inline]
pub fn to_normalized_position (position16: i16)->f64 {
    2.0 * (position16 as f64 - POSITION_MIN_16) / POSITION_RANGE_16 - 1.0
}

/// maps a percent value in [0.0, 100.0] to a discrete, unsigned 8bit code (no clamping)
#[inline]
pub fn from_percent (percent: f64)->u8 {
    (percent * PERCENT_RANGE_8 / 100.0).round() as u8
}

/// maps a discrete unsigned 8bit percent code back onto a value in [0.0, 100.0]
#[inline]
pub fn to_percent (percent8: u8)->f64 {
    100.0 * (percent8 as f64) / PERCENT_RANGE_8
}
