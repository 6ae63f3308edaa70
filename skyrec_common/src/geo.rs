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

//! geometries and track kinematics on the earth surface. Distances between recorded
//! positions use the [geo](https://docs.rs/geo/latest/geo/index.html) crate; the
//! projection of synthesized positions uses explicit great-circle math on a sphere whose
//! effective radius includes the aircraft altitude. We employ the Rust new type pattern
//! over `geo::Point` to pin the geodetic degree semantics of our coordinates.

use std::fmt;
use serde::{Serialize, Deserialize};
use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};

use geo::{Coord, Distance, Point};
use geo::algorithm::line_measures::metric_spaces::{Haversine, Geodesic};

use uom::si::f64::{Length, Velocity};
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

use crate::{sin, cos, asin, atan, atan2, sgn, deg, rad};
use crate::angle::{normalize_90, normalize_180, normalize_360, Latitude, Longitude};
use crate::geo_constants::{EQUATORIAL_EARTH_RADIUS, DEFAULT_DISTANCE_THRESHOLD};

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat (lon: Longitude, lat: Latitude) -> Self {
        GeoPoint( Point::new( lon.degrees(), lat.degrees()))
    }
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn longitude (&self) -> Longitude { Longitude::from_degrees( self.0.x()) }
    pub fn latitude (&self) -> Latitude { Latitude::from_degrees( self.0.y()) }

    pub fn longitude_degrees (&self) -> f64 { self.0.x() }
    pub fn latitude_degrees (&self) -> f64 { self.0.y() }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }

    /// the great-circle distance to `other` on the mean earth sphere
    pub fn haversine_distance (&self, other: &GeoPoint) -> Length {
        let dist = Haversine.distance( self.0, other.0);
        Length::new::<meter>(dist)
    }

    /// the geodesic distance to `other` on the WGS84 ellipsoid
    pub fn geodesic_distance (&self, other: &GeoPoint) -> Length {
        let dist = Geodesic.distance( self.0, other.0);
        Length::new::<meter>(dist)
    }

    /// true if `other` is within `threshold` of this point (e.g. for waypoint comparison)
    pub fn is_same_waypoint (&self, other: &GeoPoint, threshold: Length) -> bool {
        self.geodesic_distance( other) < threshold
    }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(), self.0.y())
    }
}

impl SerializeTrait for GeoPoint {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude_degrees())?;
        state.serialize_field("lat", &self.latitude_degrees())?;
        state.end()
    }
}

// we accept the field names used by our own serialization ("lon","lat") - positions
// serialized by `geo` types ("x","y") have the same coordinate order
impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: serde::Deserializer<'de> {
        #[derive(Deserialize)]
        struct LonLat {
            #[serde(alias = "x", alias = "longitude")]
            lon: f64,
            #[serde(alias = "y", alias = "latitude")]
            lat: f64,
        }
        let ll = LonLat::deserialize( deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat))
    }
}

/* #endregion GeoPoint */

/* #region track kinematics ***************************************************************************************/

/// the initial great-circle bearing [degrees, 0..360[ to get from `start` to `end`
pub fn initial_bearing (start: &GeoPoint, end: &GeoPoint) -> f64 {
    let phi1 = rad( start.latitude_degrees());
    let phi2 = rad( end.latitude_degrees());
    let d_lambda = rad( end.longitude_degrees() - start.longitude_degrees());

    let theta = atan2( sin(d_lambda) * cos(phi2),
                       cos(phi1) * sin(phi2) - sin(phi1) * cos(phi2) * cos(d_lambda));
    normalize_360( deg(theta))
}

/// the destination point at the given `bearing` [degrees] and great-circle `distance`
/// from `origin`, on a sphere of radius [`EQUATORIAL_EARTH_RADIUS`] plus `altitude` [meters].
///
///   sin(phi2)      = sin(phi1)*cos(d) + cos(phi1)*sin(d)*cos(theta)
///   tan(d_lambda)  = sin(theta)*sin(d)*cos(phi1) / (cos(d) - sin(phi1)*sin(phi2))
///
/// The trigonometric identities are total, so there are no failure modes; callers take
/// `bearing` modulo 360 if it is out of range (not enforced here).
pub fn destination (origin: &GeoPoint, altitude: f64, bearing: f64, distance: Length) -> GeoPoint {
    let phi1 = rad( origin.latitude_degrees());
    let lambda1 = rad( origin.longitude_degrees());
    let theta = rad( bearing);
    let delta = distance.get::<meter>() / (EQUATORIAL_EARTH_RADIUS + altitude); // angular distance

    let phi2 = asin( sin(phi1) * cos(delta) + cos(phi1) * sin(delta) * cos(theta));
    let lambda2 = lambda1 + atan2( sin(theta) * sin(delta) * cos(phi1),
                                   cos(delta) - sin(phi1) * sin(phi2));

    GeoPoint::from_lon_lat_degrees( deg(lambda2), deg(phi2))
}

/// the geodesic distance between `start` and `end` and the speed it takes to travel
/// that distance between the given timestamps [milliseconds]
pub fn distance_and_speed (start: &GeoPoint, start_millis: i64, end: &GeoPoint, end_millis: i64) -> (Length, Velocity) {
    let distance = start.geodesic_distance( end);
    let dt = (end_millis - start_millis) as f64 / 1000.0;
    let speed = Velocity::new::<meter_per_second>( distance.get::<meter>() / dt);
    (distance, speed)
}

/// approximates the pitch angle [degrees, -90..90] from the triangle formed by the
/// travelled `distance` and the orthogonal `delta_altitude` (both [meters]).
///
/// A stationary aircraft (distance 0) is reported as level - the measured altitude of
/// an aircraft standing on the ground fluctuates slightly, and a +/-90 pitch would
/// not reflect reality.
pub fn approximate_pitch (distance: Length, delta_altitude: f64) -> f64 {
    let dist = distance.get::<meter>();
    if delta_altitude.abs() > f64::EPSILON && dist > 0.0 {
        deg( atan( delta_altitude / dist))
    } else {
        0.0
    }
}

/// the shortest heading change [degrees, -180..180] to get from `current_heading` to
/// `target_heading` (both [0..360[). Negative values are a clockwise ("right") turn,
/// positive values an anti-clockwise ("left") turn. An exact 180 degree turn goes
/// right if the current heading is smaller than the target heading, in analogy to how
/// `interpolate::hermite_360` resolves 180 degree turns.
pub fn heading_change (current_heading: f64, target_heading: f64) -> f64 {
    // the denormalized heading is always >= target_heading
    let denormalized_heading = if current_heading >= target_heading { current_heading } else { current_heading + 360.0 };

    // left turn, always in [0, 360[
    let mut change = denormalized_heading - target_heading;

    if (change - 180.0).abs() < 1e-9 {
        change = if current_heading < target_heading { -180.0 } else { 180.0 };
    } else if change > 180.0 {
        change = -360.0 + change; // take the smaller right turn
    }
    change
}

/// approximates the bank angle [degrees] required for the given `heading_change`.
/// The result is capped at `max_bank_angle`, which is reached for heading changes of
/// `max_bank_angle_for_heading_change` degrees; negative values are "right turns".
pub fn bank_angle (heading_change: f64, max_bank_angle_for_heading_change: f64, max_bank_angle: f64) -> f64 {
    ((heading_change.abs() / max_bank_angle_for_heading_change) * max_bank_angle).min( max_bank_angle) * sgn(heading_change)
}

/* #endregion track kinematics */
