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

//! Rasterization of boundary arcs into polygon points.

use geo::{Bearing, Destination, Haversine};
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;

/// Bearing in degrees between two rasterized points of an arc.
pub const ARC_STEP: f64 = 10.0;

/// The direction in which an arc sweeps around its center.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Returns the great circle bearing from one point to the other in the range
/// from 0° to 360°.
pub fn bearing(from: Point, to: Point) -> f64 {
    Haversine.bearing(from, to).rem_euclid(360.0)
}

/// Approximates an arc by points on a great circle around the center.
///
/// The arc starts at `from` and ends at `to`, sweeping around the `center` in
/// the direction of the `rotation`. Points are placed at the `radius` in meters
/// every [`ARC_STEP`] degrees, starting at the bearing of `from`. The last point
/// is always `to` itself, so the last segment might be shorter.
///
/// # Examples
///
/// ```
/// use airspace::coord;
/// use airspace::geom::{rasterize_arc, Rotation};
///
/// let center = coord!(57.3094, -2.2672);
/// let from = coord!(57.3500, -2.5656);
/// let to = coord!(57.3647, -1.9764);
///
/// let points = rasterize_arc(center, 18520.0, from, to, Rotation::Clockwise);
/// assert_eq!(points.last(), Some(&to));
/// ```
pub fn rasterize_arc(
    center: Point,
    radius: f64,
    from: Point,
    to: Point,
    rotation: Rotation,
) -> Vec<Point> {
    let mut start = bearing(center, from);
    let mut end = bearing(center, to);

    // sweep monotonically from start to end
    match rotation {
        Rotation::Clockwise if end < start => end += 360.0,
        Rotation::CounterClockwise if end > start => start += 360.0,
        _ => (),
    }

    let sign = rotation.sign();
    let mut points: Vec<Point> = (0u32..)
        .map(|i| start + sign * ARC_STEP * f64::from(i))
        .take_while(|b| sign * b < sign * end)
        .map(|b| Haversine.destination(center, b, radius))
        .collect();

    trace!(
        "arc {:?} from {:.1}° to {:.1}° rasterized to {} point(s)",
        rotation,
        start,
        end,
        points.len() + 1
    );

    points.push(to);
    points
}
