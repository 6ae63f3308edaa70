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

use std::fmt;
use std::time::Duration;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Serialize, Deserialize};
use strum::Display;

/// track-relative timestamp in milliseconds since the start of the recording, or an
/// absolute point in time in milliseconds since the Unix epoch - both share the same
/// arithmetic
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis: i64)->Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64)->Self { EpochMillis(secs * 1000) }

    pub fn millis (&self)->i64 { self.0 }

    pub fn saturating_add (&self, delta: i64)->Self { EpochMillis( self.0.saturating_add(delta)) }

    /// clamps into the closed interval [lo, hi]
    pub fn clamped (&self, lo: EpochMillis, hi: EpochMillis)->Self {
        EpochMillis( self.0.max( lo.0).min( hi.0))
    }
}

impl fmt::Display for EpochMillis {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<i64> for EpochMillis {
    fn from (millis: i64)->Self { EpochMillis(millis) }
}
impl From<EpochMillis> for i64 {
    fn from (millis: EpochMillis)->Self { millis.0 }
}

// as of Rust 1.87 the min,hour Duration ctors are experimental, so we provide our own
// wrappers for the simple (no leap second) use cases
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs(n * 3600) }

#[inline] pub fn duration_millis (d: Duration)->i64 { d.as_millis() as i64 }

/// how the recording times of two flights are aligned when replaying them together
#[derive(Serialize,Deserialize,Debug,Display,Clone,Copy,PartialEq,Eq)]
pub enum TimeOffsetSync {
    /// no time alignment at all
    None,
    /// align on the full date and time difference
    DateAndTime,
    /// align on the time-of-day difference only, ignoring the dates
    TimeOnly,
}

/// the time offset [milliseconds, seconds resolution] to add to timestamps recorded at
/// `from` so that they align with a recording started at `to`, according to `sync`.
///
/// `TimeOnly` moves the `from` time-of-day onto the date of `to`, which aligns
/// recordings of the same local scenario made on different days.
pub fn time_offset_millis (sync: TimeOffsetSync, from: DateTime<Utc>, to: DateTime<Utc>)->i64 {
    match sync {
        TimeOffsetSync::None => 0,
        TimeOffsetSync::DateAndTime => {
            (to.timestamp() - from.timestamp()) * 1000
        }
        TimeOffsetSync::TimeOnly => {
            let shifted = to.date_naive().and_time( from.time()).and_utc();
            (to.timestamp() - shifted.timestamp()) * 1000
        }
    }
}
