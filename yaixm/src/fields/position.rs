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

use std::fmt;
use std::str::FromStr;

use crate::Error;

const LENGTH: usize = 16;
const SEPARATOR: usize = 7;

/// Position in degrees, minutes and seconds.
///
/// The position is written as `DDMMSSH DDDMMSSH`, e.g. `572153N 0015835W`, with
/// the latitude first and the longitude second. Both are stored as decimal
/// degrees, negative to the south and west.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Position {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

fn dms_to_decimal(degree: u32, minutes: u32, seconds: u32) -> f64 {
    degree as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}

/// Splits the decimal degrees into whole degrees, minutes and seconds.
fn decimal_to_dms(decimal: f64) -> (u32, u32, u32) {
    let seconds = (decimal.abs() * 3600.0).round() as u32;
    (seconds / 3600, seconds % 3600 / 60, seconds % 60)
}

impl FromStr for Position {
    type Err = Error;

    /// Decodes a position like `502257N 0033739W`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string isn't 16 byte long, if the latitude and
    /// longitude aren't separated by a space, if any group isn't a number or if
    /// a hemisphere is neither `N`/`S` nor `E`/`W`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();

        if b.len() != LENGTH {
            return Err(Error::InvalidLength {
                field: "Position",
                expected: LENGTH,
                actual: b.len(),
            });
        }

        if b[SEPARATOR] != b' ' {
            return Err(Error::InvalidCharacter {
                field: "Position",
                byte: b[SEPARATOR],
                expected: "a space between latitude and longitude",
            });
        }

        let lat = dms_to_decimal(
            parse_numeric!("Latitude", &b[0..2])?,
            parse_numeric!("Latitude", &b[2..4])?,
            parse_numeric!("Latitude", &b[4..6])?,
        );

        let latitude = match b[6] {
            b'N' => lat,
            b'S' => -lat,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Latitude",
                    byte,
                    expected: "N or S",
                })
            }
        };

        let lon = dms_to_decimal(
            parse_numeric!("Longitude", &b[8..11])?,
            parse_numeric!("Longitude", &b[11..13])?,
            parse_numeric!("Longitude", &b[13..15])?,
        );

        let longitude = match b[15] {
            b'E' => lon,
            b'W' => -lon,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Longitude",
                    byte,
                    expected: "E or W",
                })
            }
        };

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat_d, lat_m, lat_s) = decimal_to_dms(self.latitude);
        let (lon_d, lon_m, lon_s) = decimal_to_dms(self.longitude);
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };

        write!(
            f,
            "{lat_d:02}{lat_m:02}{lat_s:02}{ns} {lon_d:03}{lon_m:02}{lon_s:02}{ew}"
        )
    }
}
