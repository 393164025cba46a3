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

use std::f64::consts::FRAC_PI_4;
use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Distance, Euclidean};

use super::{Point, MEAN_EARTH_RADIUS};

/// Circle around a center with a radius in meters.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Projects the point onto the spherical Mercator plane in meters.
fn mercator(p: Point) -> Point {
    let x = MEAN_EARTH_RADIUS * p.x().to_radians();
    let y = MEAN_EARTH_RADIUS * (FRAC_PI_4 + p.y().to_radians() / 2.0).tan().ln();
    Point::new(x, y)
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the distance in meters from the center to the point.
    ///
    /// Both points are projected onto the Mercator plane, and the planar
    /// distance is scaled to the latitude of the center. Close to the center
    /// this is the distance on the ground.
    pub fn planar_distance(&self, point: &Point) -> f64 {
        let scale = self.center.y().to_radians().cos();
        Euclidean.distance(mercator(self.center), mercator(*point)) * scale
    }

    /// Returns `true` if the point is within the radius.
    ///
    /// Points at the radius are within. A circle without radius contains
    /// nothing.
    pub fn contains(&self, point: &Point) -> bool {
        self.radius > 0.0 && self.planar_distance(point) <= self.radius
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:.0} m around ({}, {})",
            self.radius,
            self.center.y(),
            self.center.x()
        )
    }
}

#[cfg(test)]
mod tests {
    use geo::{Destination, Haversine};

    use super::*;

    // Dundee
    fn center() -> Point {
        coord!(56.4522, -3.0256)
    }

    #[test]
    fn contains_center() {
        let circle = Circle::new(center(), 1852.0);
        assert!(circle.contains(&center()));
    }

    #[test]
    fn contains_points_inside_radius() {
        let circle = Circle::new(center(), 18520.0);

        for bearing in [0.0, 45.0, 90.0, 200.0, 315.0] {
            let inside = Haversine.destination(center(), bearing, 18520.0 * 0.98);
            let outside = Haversine.destination(center(), bearing, 18520.0 * 1.02);

            assert!(circle.contains(&inside), "{bearing}° should be inside");
            assert!(!circle.contains(&outside), "{bearing}° should be outside");
        }
    }

    #[test]
    fn includes_boundary() {
        let point = coord!(56.5, -3.0);
        let distance = Circle::new(center(), 1.0).planar_distance(&point);

        assert!(Circle::new(center(), distance).contains(&point));
        assert!(!Circle::new(center(), distance - 1e-6).contains(&point));
    }

    #[test]
    fn zero_radius_contains_nothing() {
        let circle = Circle::new(center(), 0.0);
        assert!(!circle.contains(&center()));
    }
}
