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

use std::f64::consts::PI;
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

use skyrec_common::geo::*;
use skyrec_common::geo_constants::EQUATORIAL_EARTH_RADIUS;
use skyrec_common::uom::meters;

// run with "cargo test test_geo -- --nocapture"

#[test]
fn test_geopoint_serde() {
    let p = GeoPoint::from_lon_lat_degrees( -122.0, 37.0);
    let s = serde_json::to_string( &p).unwrap();
    println!("serialized GeoPoint: '{}'", s);
    assert_eq!( s, r#"{"lon":-122.0,"lat":37.0}"#);

    let p1: GeoPoint = serde_json::from_str( &s).unwrap();
    assert_eq!( p, p1);

    // alternative field names
    let p2: GeoPoint = serde_json::from_str( r#"{ "x": -122.0, "y": 37.0 }"#).unwrap();
    assert_eq!( p, p2);
    let p3: GeoPoint = serde_json::from_str( r#"{ "longitude": -122.0, "latitude": 37.0 }"#).unwrap();
    assert_eq!( p, p3);
}

#[test]
fn test_quarter_circle_projection() {
    // a quarter great-circle east along the equator ends at 90 deg longitude
    let origin = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
    let dist = meters( EQUATORIAL_EARTH_RADIUS * PI / 2.0);

    let dest = destination( &origin, 0.0, 90.0, dist);
    println!("quarter circle east: {}", dest);
    assert!( (dest.longitude_degrees() - 90.0).abs() < 1e-6);
    assert!( dest.latitude_degrees().abs() < 1e-6);
}

#[test]
fn test_initial_bearing() {
    let origin = GeoPoint::from_lon_lat_degrees( 8.0, 47.0);

    let north = GeoPoint::from_lon_lat_degrees( 8.0, 48.0);
    assert!( initial_bearing( &origin, &north).abs() < 1e-9);

    let east = GeoPoint::from_lon_lat_degrees( 9.0, 47.0);
    let bearing = initial_bearing( &origin, &east);
    println!("east bearing at 47N: {}", bearing);
    assert!( bearing > 89.0 && bearing < 91.0); // great circle, slightly north of due east

    let equator_east = initial_bearing( &GeoPoint::from_lon_lat_degrees( 0.0, 0.0),
                                        &GeoPoint::from_lon_lat_degrees( 1.0, 0.0));
    assert!( (equator_east - 90.0).abs() < 1e-9);
}

#[test]
fn test_bearing_projection_roundtrip() {
    let origin = GeoPoint::from_lon_lat_degrees( 8.55, 47.46);
    let dest = destination( &origin, 0.0, 37.0, meters( 5000.0));

    let bearing = initial_bearing( &origin, &dest);
    assert!( (bearing - 37.0).abs() < 0.1);

    let dist = origin.haversine_distance( &dest);
    assert!( (dist.get::<meter>() - 5000.0).abs() < 50.0); // spherical radii differ slightly
}

#[test]
fn test_distance_and_speed() {
    // 0.01 deg along the equator is about 1113.2 m
    let start = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
    let end = GeoPoint::from_lon_lat_degrees( 0.01, 0.0);

    let (distance, speed) = distance_and_speed( &start, 0, &end, 10_000);
    println!("distance: {}m, speed: {}m/s", distance.get::<meter>(), speed.get::<meter_per_second>());
    assert!( (distance.get::<meter>() - 1113.2).abs() < 1.0);
    assert!( (speed.get::<meter_per_second>() - 111.32).abs() < 0.1);
}

#[test]
fn test_approximate_pitch() {
    assert_eq!( approximate_pitch( meters( 100.0), 0.0), 0.0);
    assert_eq!( approximate_pitch( meters( 0.0), 100.0), 0.0); // stationary is level

    let pitch = approximate_pitch( meters( 100.0), 100.0);
    assert!( (pitch - 45.0).abs() < 1e-9);

    let pitch = approximate_pitch( meters( 100.0), -100.0);
    assert!( (pitch + 45.0).abs() < 1e-9);
}

#[test]
fn test_heading_change() {
    // negative is a right turn, positive a left turn
    assert!( (heading_change( 350.0, 10.0) + 20.0).abs() < 1e-9);
    assert!( (heading_change( 10.0, 350.0) - 20.0).abs() < 1e-9);
    assert!( (heading_change( 90.0, 90.0)).abs() < 1e-9);
    assert!( (heading_change( 0.0, 90.0) + 90.0).abs() < 1e-9);

    // exact 180 turns right if the current heading is smaller
    assert!( (heading_change( 10.0, 190.0) + 180.0).abs() < 1e-9);
    assert!( (heading_change( 190.0, 10.0) - 180.0).abs() < 1e-9);
}

#[test]
fn test_bank_angle() {
    assert_eq!( bank_angle( 0.0, 45.0, 25.0), 0.0);

    let bank = bank_angle( -20.0, 45.0, 25.0);
    assert!( (bank + 20.0 / 45.0 * 25.0).abs() < 1e-9);

    // capped at the max bank angle
    assert_eq!( bank_angle( 90.0, 45.0, 25.0), 25.0);
    assert_eq!( bank_angle( -90.0, 45.0, 25.0), -25.0);
}
