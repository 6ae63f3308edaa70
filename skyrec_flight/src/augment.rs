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

//! reconstruction of missing flight state for position-only tracks. The pass fills
//! attitude and body-frame velocity from the position derivative or from circular
//! Hermite interpolation between recorded samples, and synthesizes plausible engine,
//! control surface, gear and light event schedules for detected take-off and landing
//! procedure windows. Recorded (non-default) sample state is never overwritten, which
//! makes the pass idempotent.
//!
//! The lever values and event timings are typical for A320-like jet aircraft.

use std::ops;
use tracing::debug;
use uom::si::velocity::foot_per_second;
use uom::si::length::meter;

use skyrec_common::datetime::EpochMillis;
use skyrec_common::geo::{initial_bearing, distance_and_speed, approximate_pitch, heading_change, bank_angle};
use skyrec_common::interpolate::{hermite_180, hermite_360, linear};
use skyrec_common::uom::{feet, knots};

use crate::{FlightTrack, TrackSample, EngineEvent, ControlEvent, HandleEvent, LightEvent, LightState,
            upsert, upsert_last};
use crate::analytics::{self, ProcedureKind, ProcedureWindow};

/// estimated landing speed [knots]
const LANDING_VELOCITY: f64 = 140.0;
/// estimated landing pitch [degrees] - negative pitch means "nose points upwards"
const LANDING_PITCH: f64 = -3.0;
/// max banking angle [degrees]
const MAX_BANK_ANGLE: f64 = 25.0;
/// heading change [degrees] at which the bank angle reaches [`MAX_BANK_ANGLE`]
const MAX_BANK_HEADING_CHANGE: f64 = 45.0;

const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * 1000;

/* #region selections *********************************************************************************************/

/// selects which procedure windows of a track to synthesize
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Procedures(pub u32);

impl Procedures {
    pub const NONE: Procedures     = Procedures(0x0);
    pub const TAKE_OFF: Procedures = Procedures(0x1);
    pub const LANDING: Procedures  = Procedures(0x2);
    pub const ALL: Procedures      = Procedures(0xffff_ffff);

    pub fn is_empty (&self)->bool { self.0 == 0 }
    pub fn contains (&self, other: Procedures)->bool { (self.0 & other.0) == other.0 }
}

impl ops::BitOr for Procedures {
    type Output = Procedures;
    fn bitor (self, rhs: Procedures)->Procedures { Procedures( self.0 | rhs.0) }
}
impl ops::BitAnd for Procedures {
    type Output = Procedures;
    fn bitand (self, rhs: Procedures)->Procedures { Procedures( self.0 & rhs.0) }
}

/// selects which derived quantities to synthesize
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Aspects(pub u32);

impl Aspects {
    pub const NONE: Aspects                  = Aspects(0x0);
    pub const ATTITUDE: Aspects              = Aspects(0x1);
    pub const VELOCITY: Aspects              = Aspects(0x2);
    pub const ATTITUDE_AND_VELOCITY: Aspects = Aspects(0x3);
    pub const ENGINE: Aspects                = Aspects(0x4);
    pub const LIGHT: Aspects                 = Aspects(0x8);
    pub const ALL: Aspects                   = Aspects(0xffff_ffff);

    pub fn is_empty (&self)->bool { self.0 == 0 }
    pub fn contains (&self, other: Aspects)->bool { (self.0 & other.0) == other.0 }
    pub fn intersects (&self, other: Aspects)->bool { (self.0 & other.0) != 0 }
}

impl ops::BitOr for Aspects {
    type Output = Aspects;
    fn bitor (self, rhs: Aspects)->Aspects { Aspects( self.0 | rhs.0) }
}
impl ops::BitAnd for Aspects {
    type Output = Aspects;
    fn bitand (self, rhs: Aspects)->Aspects { Aspects( self.0 & rhs.0) }
}

/* #endregion selections */

/* #region augmentation pass **************************************************************************************/

/// the reconstruction pass over one aircraft track. Procedures select *which time
/// windows* to touch, aspects select *which fields*
pub struct FlightAugmentation {
    procedures: Procedures,
    aspects: Aspects,
}

impl FlightAugmentation {
    pub fn new (procedures: Procedures, aspects: Aspects)->Self {
        FlightAugmentation { procedures, aspects }
    }

    pub fn procedures (&self)->Procedures { self.procedures }
    pub fn set_procedures (&mut self, procedures: Procedures) { self.procedures = procedures }

    pub fn aspects (&self)->Aspects { self.aspects }
    pub fn set_aspects (&mut self, aspects: Aspects) { self.aspects = aspects }

    /// fills missing state of `track` in place. Tracks with fewer than two samples are
    /// left unchanged
    pub fn augment (&self, track: &mut FlightTrack) {
        if track.len() < 2 { return }

        if self.aspects.intersects( Aspects::ATTITUDE_AND_VELOCITY) {
            self.augment_attitude_and_velocity( track);
        }
        if !self.procedures.is_empty() {
            self.augment_procedures( track);
        }
    }

    /// fills the attitude/velocity block of all samples that still carry their
    /// import-time zero default. Samples bracketed by recorded attitude are filled by
    /// circular Hermite interpolation; tracks without any recorded attitude (pure
    /// position imports) are derived from the position derivative
    fn augment_attitude_and_velocity (&self, track: &mut FlightTrack) {
        let recorded: Vec<usize> = track.samples.iter().enumerate()
            .filter( |(_,s)| !s.has_default_attitude())
            .map( |(i,_)| i)
            .collect();

        if recorded.is_empty() {
            self.derive_from_positions( track);
        } else if recorded.len() < track.len() {
            debug!("interpolating {} of {} samples", track.len() - recorded.len(), track.len());
            self.fill_by_interpolation( track, &recorded);
        }
        // nothing left to fill if every sample has recorded attitude
    }

    /// the position derivative path: heading from the bearing to the next sample, pitch
    /// from the altitude/distance triangle, bank from the heading change, velocity from
    /// distance over time. Samples before the first movement stay level; the last sample
    /// gets typical touch-down values
    fn derive_from_positions (&self, track: &mut FlightTrack) {
        let n = track.len();
        let track_end = track.samples[n-1].timestamp;
        let (movement_ts, movement_heading) = analytics::first_movement( track).unwrap_or( (track_end, 0.0));

        let with_velocity = self.aspects.intersects( Aspects::VELOCITY);
        let with_attitude = self.aspects.intersects( Aspects::ATTITUDE);

        for i in 0..n-1 {
            let cur = track.samples[i];
            let next = track.samples[i+1];
            let previous_heading = if i > 0 { track.samples[i-1].heading } else { 0.0 };

            let (distance, speed) = distance_and_speed( &cur.position, cur.timestamp.millis(),
                                                        &next.position, next.timestamp.millis());
            let sample = &mut track.samples[i];
            if with_velocity {
                sample.velocity_x = 0.0;
                sample.velocity_y = 0.0;
                sample.velocity_z = speed.get::<foot_per_second>();
            }
            if with_attitude {
                if cur.timestamp > movement_ts {
                    let delta_altitude = feet( next.altitude - cur.altitude).get::<meter>();
                    // the simulator protocol counts positive pitch as "nose down"
                    sample.pitch = -approximate_pitch( distance, delta_altitude);
                    sample.heading = initial_bearing( &cur.position, &next.position);
                    sample.bank = if i > 0 {
                        bank_angle( heading_change( previous_heading, sample.heading), MAX_BANK_HEADING_CHANGE, MAX_BANK_ANGLE)
                    } else {
                        0.0
                    };
                } else {
                    // not yet moving - level, already pointing towards the first movement
                    sample.pitch = 0.0;
                    sample.bank = 0.0;
                    sample.heading = movement_heading;
                }
            }
        }

        // last sample: touch-down values
        let previous = track.samples[n-2];
        let last = &mut track.samples[n-1];
        if with_velocity {
            last.velocity_x = previous.velocity_x;
            last.velocity_y = previous.velocity_y;
            last.velocity_z = knots( LANDING_VELOCITY).get::<foot_per_second>();
        }
        if with_attitude {
            last.pitch = LANDING_PITCH;
            last.bank = 0.0;
            last.heading = previous.heading;
        }
    }

    /// the interpolation path: each default sample is filled from its four nearest
    /// recorded neighbors (two on each side), circular Hermite for the angles and linear
    /// for the velocities. Missing samples outside the recorded range copy the nearest
    /// recorded value; fewer than four recorded neighbors degrade to linear/nearest
    fn fill_by_interpolation (&self, track: &mut FlightTrack, recorded: &[usize]) {
        let with_velocity = self.aspects.intersects( Aspects::VELOCITY);
        let with_attitude = self.aspects.intersects( Aspects::ATTITUDE);

        for i in 0..track.len() {
            if !track.samples[i].has_default_attitude() { continue }

            // nearest recorded neighbors below and above i
            let above = recorded.partition_point( |&r| r < i);
            let below = above.checked_sub(1);

            let (i1, i2) = match (below.map(|b| recorded[b]), recorded.get(above).copied()) {
                (Some(i1), Some(i2)) => (i1, i2),
                (Some(i1), None) => { // past the last recorded sample
                    let src = track.samples[i1];
                    copy_attitude( &mut track.samples[i], &src, with_attitude, with_velocity);
                    continue;
                }
                (None, Some(i2)) => { // before the first recorded sample
                    let src = track.samples[i2];
                    copy_attitude( &mut track.samples[i], &src, with_attitude, with_velocity);
                    continue;
                }
                (None, None) => unreachable!("recorded slice is non-empty"),
            };

            // outer support points, duplicated at the ends of the recorded range
            let i0 = below.and_then( |b| b.checked_sub(1)).map( |b| recorded[b]).unwrap_or( i1);
            let i3 = recorded.get( above+1).copied().unwrap_or( i2);

            let (s0, s1, s2, s3) = (track.samples[i0], track.samples[i1], track.samples[i2], track.samples[i3]);
            let mu = (track.samples[i].timestamp.millis() - s1.timestamp.millis()) as f64
                   / (s2.timestamp.millis() - s1.timestamp.millis()) as f64;

            let sample = &mut track.samples[i];
            if with_attitude {
                sample.heading = hermite_360( s0.heading, s1.heading, s2.heading, s3.heading, mu, 0.0, 0.0);
                sample.pitch = hermite_180( s0.pitch, s1.pitch, s2.pitch, s3.pitch, mu, 0.0, 0.0);
                sample.bank = hermite_180( s0.bank, s1.bank, s2.bank, s3.bank, mu, 0.0, 0.0);
            }
            if with_velocity {
                sample.velocity_x = linear( s1.velocity_x, s2.velocity_x, mu);
                sample.velocity_y = linear( s1.velocity_y, s2.velocity_y, mu);
                sample.velocity_z = linear( s1.velocity_z, s2.velocity_z, mu);
            }
        }
    }

    /// synthesizes event schedules for the procedure windows found in the track.
    /// The synthesized take-off and landing events of very short flights can overlap
    /// out of order, hence the final re-sort
    fn augment_procedures (&self, track: &mut FlightTrack) {
        let windows = analytics::detect_procedures( track);

        for window in &windows {
            match window.kind {
                ProcedureKind::TakeOff if self.procedures.contains( Procedures::TAKE_OFF) => {
                    debug!("synthesizing take-off procedure {} .. {}", window.begin, window.end);
                    self.augment_takeoff( track);
                }
                ProcedureKind::Landing if self.procedures.contains( Procedures::LANDING) => {
                    debug!("synthesizing landing procedure {} .. {}", window.begin, window.end);
                    self.augment_landing( track);
                }
                _ => {}
            }
        }

        track.sort_events();
    }

    /// the take-off schedule, anchored at the start of the track: full thrust levers,
    /// take-off flaps, gear up shortly after rotation, all exterior lights on and then
    /// successively off during the climb
    fn augment_takeoff (&self, track: &mut FlightTrack) {
        let t0 = track.samples[0].timestamp.millis();
        let last = track.samples[track.len()-1].timestamp.millis();
        let at = |offset: i64| EpochMillis::new( (t0 + offset).min( last));

        if self.aspects.intersects( Aspects::ENGINE) {
            upsert_last( &mut track.engine_events, EngineEvent::new( at(0), 1.0, 1.0, 100.0));
            // in the (stock) A320neo 86% corresponds to the "climb" throttle detent
            upsert_last( &mut track.engine_events, EngineEvent::new( at(2*MINUTE), 0.86, 0.80, 85.0));
            upsert_last( &mut track.engine_events, EngineEvent::new( at(5*MINUTE), 0.86, 0.80, 75.0));
        }

        // take-off flaps, retracted after 30 seconds
        upsert_last( &mut track.control_events, ControlEvent::new( at(0), 1, 0.666, 0.286, 0.0));
        upsert_last( &mut track.control_events, ControlEvent::new( at(30*SECOND), 0, 0.0, 0.0, 0.0));

        // gear up shortly after lift-off
        upsert_last( &mut track.handle_events, HandleEvent::new( at(0), true));
        upsert_last( &mut track.handle_events, HandleEvent::new( at(5*SECOND), false));

        if self.aspects.intersects( Aspects::LIGHT) {
            let base = LightState::NAVIGATION | LightState::BEACON | LightState::STROBE
                     | LightState::PANEL | LightState::RECOGNITION | LightState::LOGO;
            upsert_last( &mut track.light_events, LightEvent::new( at(0), base | LightState::LANDING | LightState::WING));
            upsert_last( &mut track.light_events, LightEvent::new( at(3*MINUTE), base | LightState::WING));
            upsert_last( &mut track.light_events, LightEvent::new( at(4*MINUTE), base));
        }
    }

    /// the landing schedule, anchored at the end of the track: staged flap extension
    /// with spoiler use during the approach, gear down, landing and taxi lights on,
    /// reverse thrust and full spoilers at touch-down, plus the approach/flare pitch
    fn augment_landing (&self, track: &mut FlightTrack) {
        let t0 = track.samples[0].timestamp.millis();
        let last = track.samples[track.len()-1].timestamp.millis();
        let back = |offset: i64| EpochMillis::new( (last - offset).max( t0));

        if self.aspects.intersects( Aspects::ENGINE) {
            upsert( &mut track.engine_events, EngineEvent::new( back(5*MINUTE), 0.86, 0.60, 85.0));
            upsert( &mut track.engine_events, EngineEvent::new( back(2*MINUTE), 0.86, 0.40, 100.0));
            // reverse thrust at touch-down
            upsert( &mut track.engine_events, EngineEvent::new( back(0), -0.2, 0.0, 100.0));
        }

        // staged flap extension during the approach
        upsert( &mut track.control_events, ControlEvent::new( back(10*MINUTE), 0, 0.0, 0.0, 20.0));
        upsert( &mut track.control_events, ControlEvent::new( back(8*MINUTE), 1, 0.666, 0.286, 40.0));
        upsert( &mut track.control_events, ControlEvent::new( back(7*MINUTE), 2, 0.8157, 0.4275, 60.0));
        upsert( &mut track.control_events, ControlEvent::new( back(5*MINUTE), 3, 0.8157, 0.5725, 20.0));
        upsert( &mut track.control_events, ControlEvent::new( back(4*MINUTE), 4, 1.0, 1.0, 0.0));
        // full spoilers at touch-down
        upsert( &mut track.control_events, ControlEvent::new( back(0), 4, 1.0, 1.0, 100.0));

        upsert( &mut track.handle_events, HandleEvent::new( back(3*MINUTE), true));

        if self.aspects.intersects( Aspects::LIGHT) {
            let base = LightState::NAVIGATION | LightState::BEACON | LightState::STROBE
                     | LightState::PANEL | LightState::RECOGNITION | LightState::WING | LightState::LOGO;
            upsert( &mut track.light_events, LightEvent::new( back(8*MINUTE), base));
            upsert( &mut track.light_events, LightEvent::new( back(6*MINUTE), base | LightState::LANDING));
            upsert( &mut track.light_events, LightEvent::new( back(4*MINUTE), base | LightState::LANDING | LightState::TAXI));
        }

        // approach pitch for the last 3 minutes, flare on the final sample
        if self.aspects.intersects( Aspects::ATTITUDE) {
            let approach_begin = back(3*MINUTE);
            let n = track.len();
            track.samples[n-1].pitch = -6.0;
            for sample in track.samples[..n-1].iter_mut().rev() {
                if sample.timestamp < approach_begin { break }
                sample.pitch = -3.0;
            }
        }
    }
}

impl Default for FlightAugmentation {
    fn default ()->Self { FlightAugmentation::new( Procedures::ALL, Aspects::ALL) }
}

fn copy_attitude (dst: &mut TrackSample, src: &TrackSample, with_attitude: bool, with_velocity: bool) {
    if with_attitude {
        dst.pitch = src.pitch;
        dst.bank = src.bank;
        dst.heading = src.heading;
    }
    if with_velocity {
        dst.velocity_x = src.velocity_x;
        dst.velocity_y = src.velocity_y;
        dst.velocity_z = src.velocity_z;
    }
}

/* #endregion augmentation pass */
