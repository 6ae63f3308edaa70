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

use uom::si::length::meter;

use skyrec_common::datetime::EpochMillis;
use skyrec_common::geo::GeoPoint;
use skyrec_flight::*;
use skyrec_flight::analytics::*;

// run with "cargo test test_full_flight_detection -- --nocapture" to see the detector diagnostics
fn init_tracing () {
    let _ = tracing_subscriber::fmt().with_max_level( tracing::Level::DEBUG).try_init();
}

// samples every 5 seconds, moving east along 47N, one per altitude entry
fn track_with_profile (altitudes: &[f64])->FlightTrack {
    let mut track = FlightTrack::new();
    for (i, &alt) in altitudes.iter().enumerate() {
        let position = GeoPoint::from_lon_lat_degrees( 8.0 + (i as f64) * 0.0005, 47.0);
        track.push_sample( TrackSample::at_position( EpochMillis::new( (i as i64) * 5000), position, alt)).unwrap();
    }
    track
}

// 60s taxi, 300s climb at 600 ft/min, 60s cruise
fn takeoff_profile ()->Vec<f64> {
    let mut alts = vec![1500.0; 12];
    for i in 1..=60 { alts.push( 1500.0 + (i as f64) * 50.0) }
    alts.extend( vec![4500.0; 12]);
    alts
}

// 60s cruise, 300s descent at 600 ft/min, 60s ground roll
fn landing_profile ()->Vec<f64> {
    let mut alts = vec![4500.0; 12];
    for i in 1..=60 { alts.push( 4500.0 - (i as f64) * 50.0) }
    alts.extend( vec![1500.0; 12]);
    alts
}

#[test]
fn test_takeoff_detection() {
    let track = track_with_profile( &takeoff_profile());
    let windows = detect_procedures( &track);

    assert_eq!( windows.len(), 1);
    let w = windows[0];
    assert_eq!( w.kind, ProcedureKind::TakeOff);
    assert_eq!( w.begin, EpochMillis::new( 0));
    // the climb ends at sample 71 (12 taxi + 60 climb samples, zero-based)
    assert_eq!( w.end, EpochMillis::new( 71 * 5000));
    assert!( w.contains( EpochMillis::new( 100_000)));
    assert!( !w.contains( w.end));
}

#[test]
fn test_landing_detection() {
    let track = track_with_profile( &landing_profile());
    let windows = detect_procedures( &track);

    assert_eq!( windows.len(), 1);
    let w = windows[0];
    assert_eq!( w.kind, ProcedureKind::Landing);
    // the descent starts at sample 11
    assert_eq!( w.begin, EpochMillis::new( 11 * 5000));
    // half-open window just past the end of the track
    assert_eq!( w.end, EpochMillis::new( 83 * 5000 + 1));
    assert!( w.contains( track.last_sample().unwrap().timestamp));
}

#[test]
fn test_full_flight_detection() {
    init_tracing();
    let mut alts = takeoff_profile();
    alts.extend( vec![4500.0; 24]);
    for i in 1..=60 { alts.push( 4500.0 - (i as f64) * 50.0) }
    alts.extend( vec![1500.0; 12]);

    let track = track_with_profile( &alts);
    let windows = detect_procedures( &track);

    assert_eq!( windows.len(), 2);
    assert_eq!( windows[0].kind, ProcedureKind::TakeOff);
    assert_eq!( windows[1].kind, ProcedureKind::Landing);
    assert!( windows[0].end <= windows[1].begin);
}

#[test]
fn test_no_detection() {
    // level flight yields no windows
    let track = track_with_profile( &vec![4500.0; 50]);
    assert!( detect_procedures( &track).is_empty());

    // a short altitude blip is not a sustained trend
    let mut alts = vec![1500.0; 20];
    alts[10] = 1600.0;
    let track = track_with_profile( &alts);
    assert!( detect_procedures( &track).is_empty());

    // degenerate tracks
    assert!( detect_procedures( &FlightTrack::new()).is_empty());
    assert!( detect_procedures( &track_with_profile( &[1500.0])).is_empty());
}

#[test]
fn test_first_movement() {
    let mut track = FlightTrack::new();
    let parked = GeoPoint::from_lon_lat_degrees( 8.0, 47.0);
    for i in 0..3 {
        track.push_sample( TrackSample::at_position( EpochMillis::new( i * 5000), parked, 1500.0)).unwrap();
    }
    // about 75m east of the parking position
    let moved = GeoPoint::from_lon_lat_degrees( 8.001, 47.0);
    track.push_sample( TrackSample::at_position( EpochMillis::new( 15_000), moved, 1500.0)).unwrap();

    let (timestamp, heading) = first_movement( &track).unwrap();
    assert_eq!( timestamp, EpochMillis::new( 10_000));
    assert!( (heading - 90.0).abs() < 1.0);

    // a parked aircraft never moves
    let mut parked_track = FlightTrack::new();
    for i in 0..3 {
        parked_track.push_sample( TrackSample::at_position( EpochMillis::new( i * 5000), parked, 1500.0)).unwrap();
    }
    assert!( first_movement( &parked_track).is_none());
}

#[test]
fn test_closest_sample() {
    let track = track_with_profile( &vec![1500.0; 20]);

    let target = GeoPoint::from_lon_lat_degrees( 8.0 + 5.0 * 0.0005, 47.0);
    let (index, distance) = closest_sample( &track, &target).unwrap();
    assert_eq!( index, 5);
    assert!( distance.get::<meter>() < 1.0);

    assert!( closest_sample( &FlightTrack::new(), &target).is_none());
}
