// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Geometry of airspace shapes.
//!
//! Points and polygons are [geo] types in WGS84 degrees with `x` as longitude
//! and `y` as latitude. Use the [`coord!`] macro to create a point from
//! latitude and longitude.
//!
//! [`coord!`]: crate::coord

use geo::coordinate_position::{CoordPos, CoordinatePosition};

mod arc;
mod circle;

pub use arc::{bearing, rasterize_arc, Rotation, ARC_STEP};
pub use circle::Circle;

pub type Point = geo::Point<f64>;
pub type Polygon = geo::Polygon<f64>;

/// Mean earth radius in meters.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Returns `true` if the point is within the polygon.
///
/// Points on an edge or vertex of the polygon are within. The winding of the
/// ring doesn't matter and an empty polygon contains nothing.
pub fn polygon_contains(polygon: &Polygon, point: &Point) -> bool {
    polygon.coordinate_position(&point.0) != CoordPos::Outside
}
