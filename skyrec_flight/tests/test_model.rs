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

use chrono::{DateTime, Utc};

use skyrec_common::datetime::{EpochMillis, TimeOffsetSync};
use skyrec_common::geo::GeoPoint;
use skyrec_flight::*;
use skyrec_flight::errors::SkyrecFlightError;

fn sample (millis: i64)->TrackSample {
    TrackSample::at_position( EpochMillis::new( millis), GeoPoint::from_lon_lat_degrees( 8.0, 47.0), 1500.0)
}

#[test]
fn test_push_sample_monotonic() {
    let mut track = FlightTrack::new();
    track.push_sample( sample( 0)).unwrap();
    track.push_sample( sample( 1000)).unwrap();

    let result = track.push_sample( sample( 1000));
    assert!( matches!( result, Err( SkyrecFlightError::NonMonotonicTimestamp {..})));

    let result = track.push_sample( sample( 500));
    assert!( result.is_err());
    assert_eq!( track.len(), 2);
}

#[test]
fn test_default_attitude() {
    let mut s = sample( 0);
    assert!( s.has_default_attitude());

    s.heading = 90.0;
    assert!( !s.has_default_attitude());
}

#[test]
fn test_upsert() {
    let mut events: Vec<EngineEvent> = Vec::new();

    upsert( &mut events, EngineEvent::new( EpochMillis::new( 0), 1.0, 1.0, 100.0));
    upsert( &mut events, EngineEvent::new( EpochMillis::new( 1000), 0.86, 0.8, 85.0));
    assert_eq!( events.len(), 2);

    // same timestamp replaces
    upsert( &mut events, EngineEvent::new( EpochMillis::new( 0), 0.5, 0.5, 50.0));
    assert_eq!( events.len(), 2);
    assert_eq!( events[0].throttle, 0.5);
}

#[test]
fn test_upsert_last_and_sort() {
    let mut events: Vec<EngineEvent> = Vec::new();

    upsert_last( &mut events, EngineEvent::new( EpochMillis::new( 2000), 0.86, 0.8, 85.0));
    upsert_last( &mut events, EngineEvent::new( EpochMillis::new( 2000), 0.9, 0.8, 85.0));
    assert_eq!( events.len(), 1);
    assert_eq!( events[0].throttle, 0.9);

    events.push( EngineEvent::new( EpochMillis::new( 0), 1.0, 1.0, 100.0));
    sort_by_timestamp( &mut events);
    assert_eq!( events[0].timestamp, EpochMillis::new( 0));
    assert_eq!( events[1].timestamp, EpochMillis::new( 2000));
}

#[test]
fn test_quantized_engine_state() {
    let ev = EngineEvent::new( EpochMillis::new( 0), 1.0, -1.0, 100.0);
    let q = ev.quantized();
    assert_eq!( q.throttle, i16::MAX);
    assert_eq!( q.propeller, -i16::MAX);
    assert_eq!( q.mixture, 255);

    let restored = q.to_engine_event( EpochMillis::new( 0));
    assert_eq!( restored.throttle, 1.0);
    assert_eq!( restored.mixture, 100.0);
}

#[test]
fn test_light_state() {
    let lights = LightState::NAVIGATION | LightState::BEACON | LightState::STROBE;
    assert!( lights.contains( LightState::BEACON));
    assert!( !lights.contains( LightState::LANDING));

    let lights = lights.with( LightState::LANDING);
    assert!( lights.contains( LightState::LANDING));

    let lights = lights.without( LightState::LANDING);
    assert!( !lights.contains( LightState::LANDING));
    assert!( lights.contains( LightState::NAVIGATION | LightState::BEACON));
}

#[test]
fn test_track_json_roundtrip() {
    let mut track = FlightTrack::new();
    track.push_sample( sample( 0)).unwrap();
    track.push_sample( sample( 1000)).unwrap();
    track.engine_events.push( EngineEvent::new( EpochMillis::new( 0), 1.0, 1.0, 100.0));
    track.light_events.push( LightEvent::new( EpochMillis::new( 0), LightState::NAVIGATION | LightState::BEACON));

    let json = track.to_json().unwrap();
    let restored = FlightTrack::from_json( &json).unwrap();
    assert_eq!( track, restored);
}

#[test]
fn test_flight_info_time_offset() {
    let a = FlightInfo::new( "morning flight", "2023-02-14T10:45:00Z".parse().unwrap());
    let b = FlightInfo::new( "evening flight", "2023-02-15T11:00:00Z".parse().unwrap());

    assert_eq!( a.time_offset_to( &b, TimeOffsetSync::None), 0);
    assert_eq!( a.time_offset_to( &b, TimeOffsetSync::TimeOnly), 900_000);
    assert_eq!( a.time_offset_to( &b, TimeOffsetSync::DateAndTime), 86_400_000 + 900_000);
}
