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

use super::{parse_float, Decoded, NAUTICAL_MILE_IN_METER};

/// Decodes a distance like `10 nm` to meters.
///
/// A malformed number decodes to 0 m with a warning.
pub fn distance(s: &str) -> Decoded<f64> {
    let d = s.trim().to_uppercase();
    let nm = d.strip_suffix("NM").unwrap_or(&d).trim();

    parse_float("Distance", nm).map(|nm| nm * NAUTICAL_MILE_IN_METER)
}
