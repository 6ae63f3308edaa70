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

use std::fmt::Debug;
use uom::si::f64::{Length, Velocity};
use uom::si::length::{meter, kilometer, foot, nautical_mile};
use uom::si::velocity::{meter_per_second, foot_per_second, knot};
use serde::{Serialize, Deserialize, ser::Serializer, de::Deserializer};

#[inline]
pub fn meters (len: f64)-> Length { Length::new::<meter>(len) }

#[inline]
pub fn kilometers (len: f64)-> Length { Length::new::<kilometer>(len) }

#[inline]
pub fn feet (len: f64)-> Length { Length::new::<foot>(len) }

#[inline]
pub fn nautical_miles (len: f64)-> Length { Length::new::<nautical_mile>(len) }

#[inline]
pub fn meters_per_second (v: f64)-> Velocity { Velocity::new::<meter_per_second>(v) }

#[inline]
pub fn feet_per_second (v: f64)-> Velocity { Velocity::new::<foot_per_second>(v) }

#[inline]
pub fn knots (v: f64)-> Velocity { Velocity::new::<knot>(v) }

//--- serialization support

pub fn ser_length_as_meters<S: Serializer> (length: &Length, s: S) -> Result<S::Ok, S::Error> {
    let len: f64 = length.get::<meter>();
    s.serialize_f64(len)
}

pub fn de_length_from_meters<'a,D> (deserializer: D) -> Result<Length,D::Error> where D: Deserializer<'a> {
    let v: f64 = f64::deserialize(deserializer)?;
    Ok( Length::new::<meter>(v) )
}
