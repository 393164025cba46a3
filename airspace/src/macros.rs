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

/// Creates a [`Point`] at the latitude and longitude in degrees.
///
/// The latitude is written first, as in aviation notation, though the point
/// stores the longitude as `x`.
///
/// ```
/// use airspace::coord;
///
/// let aberdeen = coord!(57.2019, -2.1978);
/// assert_eq!(aberdeen.x(), -2.1978);
/// ```
///
/// [`Point`]: crate::geom::Point
#[macro_export]
macro_rules! coord {
    ($latitude:expr, $longitude:expr) => {
        geo::Point::new($longitude, $latitude)
    };
}

/// Creates a [`Polygon`] from `(latitude, longitude)` pairs.
///
/// The pairs form the exterior ring, which is closed if the last pair isn't the
/// first one.
///
/// ```
/// use airspace::polygon;
///
/// let square = polygon![(53.0, 9.0), (53.0, 10.0), (54.0, 10.0), (54.0, 9.0)];
/// assert_eq!(square.exterior().0.len(), 5);
/// ```
///
/// [`Polygon`]: crate::geom::Polygon
#[macro_export]
macro_rules! polygon {
    ( $( ($lat:expr, $lon:expr) ),* $(,)? ) => {{
        geo::Polygon::new(
            geo::LineString::from(vec![ $( geo::Coord { x: $lon, y: $lat }, )* ]),
            vec![]
        )
    }};
}
