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

use super::{parse_float, Decoded, FEET_PER_FLIGHT_LEVEL};

/// Decodes an upper or lower limit to feet.
///
/// The limit is case-insensitive and one of:
/// - `SFC` or empty for the surface, decoded as 0 ft
/// - a flight level like `FL115`, decoded as 11500 ft
/// - feet with an optional unit like `1500 ft`
///
/// A malformed number decodes to 0 ft with a warning.
pub fn height(s: &str) -> Decoded<f64> {
    let h = s.trim().to_uppercase();

    if h.is_empty() || h == "SFC" {
        return Decoded::ok(0.0);
    }

    if let Some(fl) = h.strip_prefix("FL") {
        return parse_float("Flight level", fl.trim()).map(|fl| fl * FEET_PER_FLIGHT_LEVEL);
    }

    let feet = h.strip_suffix("FT").unwrap_or(&h).trim();
    parse_float("Height", feet)
}
