// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decoders for the values of a yaixm document.
//!
//! A [`Position`] must be well formed, so decoding it returns a `Result`.
//! Heights and distances are decoded permissively: a malformed number decodes
//! to zero and the problem is reported as [`Decoded::warning`].

use crate::Error;

mod distance;
mod height;
mod position;

pub use distance::distance;
pub use height::height;
pub use position::Position;

pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
pub const FEET_PER_FLIGHT_LEVEL: f64 = 100.0;

/// A permissively decoded value.
///
/// The value is always usable. If the input was malformed, the value is a
/// default and `warning` tells what went wrong.
#[derive(Clone, PartialEq, Debug)]
pub struct Decoded<T> {
    pub value: T,
    pub warning: Option<Error>,
}

impl<T> Decoded<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn warn(value: T, warning: Error) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }

    /// Returns `true` if the value was decoded without a warning.
    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }

    pub fn map<U, F>(self, f: F) -> Decoded<U>
    where
        F: FnOnce(T) -> U,
    {
        Decoded {
            value: f(self.value),
            warning: self.warning,
        }
    }

    pub fn into_parts(self) -> (T, Option<Error>) {
        (self.value, self.warning)
    }
}

/// Parses a finite number or falls back to zero with a warning.
fn parse_float(field: &'static str, s: &str) -> Decoded<f64> {
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Decoded::ok(value),
        _ => Decoded::warn(
            0.0,
            Error::NotANumber {
                field,
                value: s.to_string(),
            },
        ),
    }
}
