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

//! the flight track data model and the kinematics reconstruction passes. A [`FlightTrack`]
//! holds the dense position sample series plus sparse, timestamp-keyed event channels for
//! engine, control surface, gear handle and light states. Tracks recorded by a simulator
//! connection arrive fully populated; tracks imported from position-only formats (GPX, IGC)
//! get their missing state synthesized by [`augment::FlightAugmentation`].

use std::ops;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use skyrec_common::codec;
use skyrec_common::geo::GeoPoint;
use skyrec_common::datetime::{EpochMillis, TimeOffsetSync, time_offset_millis};

pub mod errors;
pub mod analytics;
pub mod augment;

use errors::{Result, SkyrecFlightError};

/// anything that lives on the track time axis
pub trait Timestamped {
    fn timestamp (&self)->EpochMillis;
}

/* #region samples ************************************************************************************************/

/// a single instant of recorded or synthesized flight state.
///
/// Attitude angles are in degrees (heading in [0, 360[), linear body-frame velocities in
/// feet per second, angular body-frame velocities in radians per second, altitude in feet.
/// Imported position-only samples leave the whole attitude/velocity block at its zero
/// default, which is what the reconstruction passes key off.
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct TrackSample {
    pub timestamp: EpochMillis,

    pub position: GeoPoint,
    pub altitude: f64,

    pub pitch: f64,
    pub bank: f64,
    pub heading: f64,

    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,

    pub rotation_velocity_x: f64,
    pub rotation_velocity_y: f64,
    pub rotation_velocity_z: f64,
}

impl TrackSample {
    /// a position-only sample as produced by the GPX/IGC importers
    pub fn at_position (timestamp: EpochMillis, position: GeoPoint, altitude: f64)->Self {
        TrackSample {
            timestamp, position, altitude,
            pitch: 0.0, bank: 0.0, heading: 0.0,
            velocity_x: 0.0, velocity_y: 0.0, velocity_z: 0.0,
            rotation_velocity_x: 0.0, rotation_velocity_y: 0.0, rotation_velocity_z: 0.0,
        }
    }

    /// true if the attitude/velocity block still has its import-time zero default.
    /// Used to decide which samples the reconstruction is allowed to touch - recorded
    /// values are never overwritten.
    pub fn has_default_attitude (&self)->bool {
        self.pitch == 0.0 && self.bank == 0.0 && self.heading == 0.0
            && self.velocity_x == 0.0 && self.velocity_y == 0.0 && self.velocity_z == 0.0
            && self.rotation_velocity_x == 0.0 && self.rotation_velocity_y == 0.0 && self.rotation_velocity_z == 0.0
    }

    pub fn coordinate (&self)->GeoPoint { self.position }
}

impl Timestamped for TrackSample {
    fn timestamp (&self)->EpochMillis { self.timestamp }
}

/* #endregion samples */

/* #region event channels *****************************************************************************************/

/// engine lever state. Throttle and propeller levers are normalized positions in
/// [-1.0, 1.0] (negative throttle is reverse thrust), mixture is percent [0.0, 100.0]
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct EngineEvent {
    pub timestamp: EpochMillis,
    pub throttle: f64,
    pub propeller: f64,
    pub mixture: f64,
}

impl EngineEvent {
    pub fn new (timestamp: EpochMillis, throttle: f64, propeller: f64, mixture: f64)->Self {
        EngineEvent { timestamp, throttle, propeller, mixture }
    }

    /// the quantized wire/persistence representation of the lever block
    pub fn quantized (&self)->QuantizedEngineState {
        QuantizedEngineState {
            throttle: codec::from_normalized_position( self.throttle),
            propeller: codec::from_normalized_position( self.propeller),
            mixture: codec::from_percent( self.mixture),
        }
    }
}

impl Timestamped for EngineEvent {
    fn timestamp (&self)->EpochMillis { self.timestamp }
}

/// the fixed-width codes the persistence and protocol marshaling layers pack
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub struct QuantizedEngineState {
    pub throttle: i16,
    pub propeller: i16,
    pub mixture: u8,
}

impl QuantizedEngineState {
    pub fn to_engine_event (&self, timestamp: EpochMillis)->EngineEvent {
        EngineEvent {
            timestamp,
            throttle: codec::to_normalized_position( self.throttle),
            propeller: codec::to_normalized_position( self.propeller),
            mixture: codec::to_percent( self.mixture),
        }
    }
}

/// control surface state. Flap positions are normalized [0.0, 1.0] deflections,
/// spoilers is percent [0.0, 100.0]
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct ControlEvent {
    pub timestamp: EpochMillis,
    pub flaps_handle_index: i32,
    pub leading_edge_flaps: f64,
    pub trailing_edge_flaps: f64,
    pub spoilers: f64,
}

impl ControlEvent {
    pub fn new (timestamp: EpochMillis, flaps_handle_index: i32, leading_edge_flaps: f64, trailing_edge_flaps: f64, spoilers: f64)->Self {
        ControlEvent { timestamp, flaps_handle_index, leading_edge_flaps, trailing_edge_flaps, spoilers }
    }
}

impl Timestamped for ControlEvent {
    fn timestamp (&self)->EpochMillis { self.timestamp }
}

/// lever and handle state that is not a continuous control surface position
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub struct HandleEvent {
    pub timestamp: EpochMillis,
    pub gear_down: bool,
}

impl HandleEvent {
    pub fn new (timestamp: EpochMillis, gear_down: bool)->Self {
        HandleEvent { timestamp, gear_down }
    }
}

impl Timestamped for HandleEvent {
    fn timestamp (&self)->EpochMillis { self.timestamp }
}

/// the aircraft light switches as a bit set
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub struct LightState(pub u32);

impl LightState {
    pub const NONE: LightState        = LightState(0x0);
    pub const NAVIGATION: LightState  = LightState(0x1);
    pub const BEACON: LightState      = LightState(0x2);
    pub const LANDING: LightState     = LightState(0x4);
    pub const TAXI: LightState        = LightState(0x8);
    pub const STROBE: LightState      = LightState(0x10);
    pub const PANEL: LightState       = LightState(0x20);
    pub const RECOGNITION: LightState = LightState(0x40);
    pub const WING: LightState        = LightState(0x80);
    pub const LOGO: LightState        = LightState(0x100);
    pub const CABIN: LightState       = LightState(0x200);

    pub fn contains (&self, other: LightState)->bool { (self.0 & other.0) == other.0 }

    pub fn with (&self, other: LightState)->LightState { LightState( self.0 | other.0) }
    pub fn without (&self, other: LightState)->LightState { LightState( self.0 & !other.0) }
}

impl ops::BitOr for LightState {
    type Output = LightState;
    fn bitor (self, rhs: LightState)->LightState { LightState( self.0 | rhs.0) }
}
impl ops::BitAnd for LightState {
    type Output = LightState;
    fn bitand (self, rhs: LightState)->LightState { LightState( self.0 & rhs.0) }
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub struct LightEvent {
    pub timestamp: EpochMillis,
    pub lights: LightState,
}

impl LightEvent {
    pub fn new (timestamp: EpochMillis, lights: LightState)->Self {
        LightEvent { timestamp, lights }
    }
}

impl Timestamped for LightEvent {
    fn timestamp (&self)->EpochMillis { self.timestamp }
}

/// appends `event` to `events`, or replaces an existing entry with the same timestamp.
/// The channel has to be re-sorted afterwards if events were not added in order
pub fn upsert<T> (events: &mut Vec<T>, event: T) where T: Timestamped {
    if let Some(existing) = events.iter_mut().find( |e| e.timestamp() == event.timestamp()) {
        *existing = event;
    } else {
        events.push( event);
    }
}

/// appends `event`, or replaces the last entry if it carries the same timestamp.
/// This is the fast path for channels that are only ever extended in order
pub fn upsert_last<T> (events: &mut Vec<T>, event: T) where T: Timestamped {
    match events.last_mut() {
        Some(last) if last.timestamp() == event.timestamp() => *last = event,
        _ => events.push( event),
    }
}

pub fn sort_by_timestamp<T> (events: &mut Vec<T>) where T: Timestamped {
    events.sort_by_key( |e| e.timestamp());
}

/* #endregion event channels */

/* #region flight track *******************************************************************************************/

/// the complete state series of one aircraft: dense position samples plus the sparse
/// event channels. Sample timestamps are strictly monotonic; event channels are kept
/// sorted but may carry multiple states per sample interval
#[derive(Serialize,Deserialize,Debug,Clone,Default,PartialEq)]
pub struct FlightTrack {
    pub samples: Vec<TrackSample>,
    pub engine_events: Vec<EngineEvent>,
    pub control_events: Vec<ControlEvent>,
    pub handle_events: Vec<HandleEvent>,
    pub light_events: Vec<LightEvent>,
}

impl FlightTrack {
    pub fn new ()->Self { FlightTrack::default() }

    pub fn len (&self)->usize { self.samples.len() }
    pub fn is_empty (&self)->bool { self.samples.is_empty() }

    pub fn first_sample (&self)->Option<&TrackSample> { self.samples.first() }
    pub fn last_sample (&self)->Option<&TrackSample> { self.samples.last() }

    /// appends `sample`, rejecting out-of-order or duplicate timestamps
    pub fn push_sample (&mut self, sample: TrackSample)->Result<()> {
        if let Some(last) = self.samples.last() {
            if sample.timestamp <= last.timestamp {
                return Err( SkyrecFlightError::NonMonotonicTimestamp { timestamp: sample.timestamp, last: last.timestamp });
            }
        }
        self.samples.push( sample);
        Ok(())
    }

    /// re-establishes the timestamp order of all event channels, e.g. after a
    /// reconstruction pass inserted events out of order
    pub fn sort_events (&mut self) {
        sort_by_timestamp( &mut self.engine_events);
        sort_by_timestamp( &mut self.control_events);
        sort_by_timestamp( &mut self.handle_events);
        sort_by_timestamp( &mut self.light_events);
    }

    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string( self)?)
    }

    pub fn from_json (input: &str)->Result<FlightTrack> {
        Ok( serde_json::from_str( input)?)
    }
}

/// flight-level metadata that is not part of the per-sample state
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct FlightInfo {
    pub title: String,
    pub description: String,

    /// the real (wall clock) start of the recording
    pub start_time: DateTime<Utc>,
}

impl FlightInfo {
    pub fn new (title: impl ToString, start_time: DateTime<Utc>)->Self {
        FlightInfo { title: title.to_string(), description: String::new(), start_time }
    }

    /// the offset [milliseconds] to add to this flight's track timestamps so that they
    /// align with `other` when both are replayed in formation
    pub fn time_offset_to (&self, other: &FlightInfo, sync: TimeOffsetSync)->i64 {
        time_offset_millis( sync, self.start_time, other.start_time)
    }
}

/* #endregion flight track */
