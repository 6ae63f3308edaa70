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
use skyrec_common::datetime::*;

fn utc (s: &str)->DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn test_epoch_millis() {
    let t = EpochMillis::new( 5000);
    assert_eq!( t.millis(), 5000);
    assert_eq!( EpochMillis::from_secs( 5), t);

    assert!( EpochMillis::new( 4000) < t);
    assert_eq!( t.saturating_add( 500), EpochMillis::new( 5500));
    assert_eq!( EpochMillis::new( 9000).clamped( EpochMillis::new( 0), t), t);
}

#[test]
fn test_time_offset_none() {
    let from = utc( "2023-02-14T10:45:00Z");
    let to = utc( "2023-02-15T11:00:00Z");
    assert_eq!( time_offset_millis( TimeOffsetSync::None, from, to), 0);
}

#[test]
fn test_time_offset_date_and_time() {
    let from = utc( "2023-02-14T10:45:00Z");
    let to = utc( "2023-02-15T11:00:00Z");
    // one day plus 15 minutes
    assert_eq!( time_offset_millis( TimeOffsetSync::DateAndTime, from, to), 86_400_000 + 900_000);
}

#[test]
fn test_time_offset_time_only() {
    let from = utc( "2023-02-14T10:45:00Z");
    let to = utc( "2023-02-15T11:00:00Z");
    // the date difference is ignored, only the 15 minutes remain
    assert_eq!( time_offset_millis( TimeOffsetSync::TimeOnly, from, to), 900_000);

    // recording later in the day yields a negative offset
    let to = utc( "2023-03-01T09:45:00Z");
    assert_eq!( time_offset_millis( TimeOffsetSync::TimeOnly, from, to), -3_600_000);
}
