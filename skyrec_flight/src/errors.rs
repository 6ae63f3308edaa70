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

use thiserror::Error;
use skyrec_common::datetime::EpochMillis;

pub type Result<T> = std::result::Result<T, SkyrecFlightError>;

#[derive(Error,Debug)]
pub enum SkyrecFlightError {
    #[error("non-monotonic sample timestamp {timestamp} (last was {last})")]
    NonMonotonicTimestamp { timestamp: EpochMillis, last: EpochMillis },

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),
}
