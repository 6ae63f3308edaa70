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

//! read-only analysis of flight tracks: movement onset, nearest sample lookup and the
//! classification of take-off / landing procedure windows.
//!
//! The window classification policy: a procedure is anchored on a *sustained* vertical
//! speed trend - more than [`VERTICAL_SPEED_THRESHOLD`] ft/min (climb) or less than its
//! negative (descent) held for at least [`SUSTAIN_MILLIS`] - whose ground end lies within
//! [`GROUND_PROXIMITY`] ft of the track's first (take-off) resp. last (landing) recorded
//! altitude. The take-off window spans from the start of the track to the end of the
//! first such climb; the landing window from the start of the last such descent to just
//! past the end of the track. Both windows are half-open `[begin, end)`.

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use strum::Display;
use tracing::debug;
use uom::si::f64::Length;
use uom::si::length::meter;

use skyrec_common::datetime::EpochMillis;
use skyrec_common::geo::{GeoPoint, initial_bearing};
use skyrec_common::uom::meters;

use crate::{FlightTrack, TrackSample};

/// minimum distance between two consecutive positions to count as movement [meters]
pub const MOVEMENT_THRESHOLD: f64 = 10.0;

/// sustained climb/descent threshold [feet per minute]
pub const VERTICAL_SPEED_THRESHOLD: f64 = 300.0;

/// minimum duration of a climb/descent trend to count as sustained [milliseconds]
pub const SUSTAIN_MILLIS: i64 = 10_000;

/// maximum altitude difference to the first/last recorded sample for a trend to count
/// as starting from resp. ending on the ground [feet]
pub const GROUND_PROXIMITY: f64 = 100.0;

/// the timestamp and initial bearing of the first track segment that covers more than
/// [`MOVEMENT_THRESHOLD`], i.e. where the aircraft started to move
pub fn first_movement (track: &FlightTrack)->Option<(EpochMillis, f64)> {
    track.samples.iter().tuple_windows().find_map( |(s0,s1)| {
        let dist = s0.position.geodesic_distance( &s1.position);
        if dist.get::<meter>() > MOVEMENT_THRESHOLD {
            Some( (s0.timestamp, initial_bearing( &s0.position, &s1.position)))
        } else {
            None
        }
    })
}

/// the index of the track sample closest to `point`, together with its distance
pub fn closest_sample (track: &FlightTrack, point: &GeoPoint)->Option<(usize, Length)> {
    track.samples.iter().enumerate()
        .map( |(i,s)| (i, s.position.geodesic_distance( point)))
        .min_by( |a,b| a.1.partial_cmp( &b.1).unwrap_or( std::cmp::Ordering::Equal))
}

#[derive(Serialize,Deserialize,Debug,Display,Clone,Copy,PartialEq,Eq)]
pub enum ProcedureKind {
    TakeOff,
    Landing,
}

/// a contiguous half-open time range `[begin, end)` of the track classified as a
/// standard operational phase. Derived on demand, never persisted
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct ProcedureWindow {
    pub kind: ProcedureKind,
    pub begin: EpochMillis,
    pub end: EpochMillis,
}

impl ProcedureWindow {
    pub fn contains (&self, timestamp: EpochMillis)->bool {
        timestamp >= self.begin && timestamp < self.end
    }

    pub fn duration_millis (&self)->i64 { self.end.millis() - self.begin.millis() }
}

/// classifier state while scanning the sample series
#[derive(Debug,Clone,Copy,PartialEq)]
enum DetectionState {
    Cruise,
    TakeOffCandidate { trend_begin: EpochMillis, from_altitude: f64 },
    LandingCandidate { trend_begin: EpochMillis },
}

/// scans the track for take-off and landing procedure windows (at most one of each).
/// Tracks with fewer than two samples yield no windows
pub fn detect_procedures (track: &FlightTrack)->Vec<ProcedureWindow> {
    let mut windows: Vec<ProcedureWindow> = Vec::new();
    if track.len() < 2 { return windows }

    let samples = &track.samples;
    let first_altitude = samples[0].altitude;
    let last_altitude = samples[samples.len()-1].altitude;
    let track_begin = samples[0].timestamp;
    let track_end = samples[samples.len()-1].timestamp;

    let mut state = DetectionState::Cruise;
    let mut takeoff: Option<ProcedureWindow> = None;
    let mut landing: Option<ProcedureWindow> = None;

    for (s0,s1) in samples.iter().tuple_windows() {
        let dt = (s1.timestamp.millis() - s0.timestamp.millis()) as f64 / 60_000.0; // minutes
        if dt <= 0.0 { continue }
        let vertical_speed = (s1.altitude - s0.altitude) / dt; // ft/min

        state = match state {
            DetectionState::Cruise => {
                if vertical_speed > VERTICAL_SPEED_THRESHOLD {
                    DetectionState::TakeOffCandidate { trend_begin: s0.timestamp, from_altitude: s0.altitude }
                } else if vertical_speed < -VERTICAL_SPEED_THRESHOLD {
                    DetectionState::LandingCandidate { trend_begin: s0.timestamp }
                } else {
                    DetectionState::Cruise
                }
            }
            DetectionState::TakeOffCandidate { trend_begin, from_altitude } => {
                if vertical_speed > VERTICAL_SPEED_THRESHOLD {
                    state // climb continues
                } else {
                    // climb ended at s0
                    let sustained = s0.timestamp.millis() - trend_begin.millis() >= SUSTAIN_MILLIS;
                    let from_ground = (from_altitude - first_altitude).abs() <= GROUND_PROXIMITY;
                    if sustained && from_ground && takeoff.is_none() {
                        debug!("take-off climb {} .. {}", trend_begin, s0.timestamp);
                        takeoff = Some( ProcedureWindow { kind: ProcedureKind::TakeOff, begin: track_begin, end: s0.timestamp });
                    }
                    if vertical_speed < -VERTICAL_SPEED_THRESHOLD {
                        DetectionState::LandingCandidate { trend_begin: s0.timestamp }
                    } else {
                        DetectionState::Cruise
                    }
                }
            }
            DetectionState::LandingCandidate { trend_begin } => {
                if vertical_speed < -VERTICAL_SPEED_THRESHOLD {
                    state // descent continues
                } else {
                    // descent ended at s0
                    let sustained = s0.timestamp.millis() - trend_begin.millis() >= SUSTAIN_MILLIS;
                    let to_ground = (s0.altitude - last_altitude).abs() <= GROUND_PROXIMITY;
                    if sustained && to_ground {
                        debug!("landing descent {} .. {}", trend_begin, s0.timestamp);
                        // keep the last qualifying descent
                        landing = Some( ProcedureWindow { kind: ProcedureKind::Landing, begin: trend_begin, end: track_end.saturating_add(1) });
                    }
                    if vertical_speed > VERTICAL_SPEED_THRESHOLD {
                        DetectionState::TakeOffCandidate { trend_begin: s0.timestamp, from_altitude: s0.altitude }
                    } else {
                        DetectionState::Cruise
                    }
                }
            }
        };
    }

    // trends still open at the end of the track
    match state {
        DetectionState::TakeOffCandidate { trend_begin, from_altitude } => {
            let sustained = track_end.millis() - trend_begin.millis() >= SUSTAIN_MILLIS;
            let from_ground = (from_altitude - first_altitude).abs() <= GROUND_PROXIMITY;
            if sustained && from_ground && takeoff.is_none() {
                takeoff = Some( ProcedureWindow { kind: ProcedureKind::TakeOff, begin: track_begin, end: track_end });
            }
        }
        DetectionState::LandingCandidate { trend_begin } => {
            if track_end.millis() - trend_begin.millis() >= SUSTAIN_MILLIS {
                // a descent running into the end of the track ends on the ground by definition
                landing = Some( ProcedureWindow { kind: ProcedureKind::Landing, begin: trend_begin, end: track_end.saturating_add(1) });
            }
        }
        DetectionState::Cruise => {}
    }

    if let Some(w) = takeoff { windows.push( w) }
    if let Some(w) = landing { windows.push( w) }
    windows
}
