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

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::class;
use crate::geom::{polygon_contains, Circle, Point, Polygon};

/// The horizontal outline of a volume.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Returns `true` if the point is within the shape or on its outline.
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            Self::Circle(circle) => circle.contains(point),
            Self::Polygon(polygon) => polygon_contains(polygon, point),
        }
    }
}

/// Volume of an airspace feature.
///
/// The volume is enclosed by its [`shape`](Self::shape) and ranges from the
/// `lower` to the `upper` limit, both in feet. The classification is the one of
/// the feature the volume belongs to.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Volume {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub class: String,
    pub sequence: u32,
    pub lower: f64,
    pub upper: f64,
    pub clearance_required: bool,
    pub danger: bool,
    pub shape: Shape,
}

impl Volume {
    pub fn contains(&self, point: &Point) -> bool {
        self.shape.contains(point)
    }
}

/// Named airspace.
///
/// A feature is sliced into [volumes](Volume) by altitude band or sequence.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub class: String,
    pub volumes: Vec<Volume>,
}

impl Feature {
    /// Returns `true` if entering the airspace requires a clearance.
    pub fn clearance_required(&self) -> bool {
        class::clearance_required(&self.class, &self.kind)
    }

    /// Returns `true` if the airspace is an advisory danger area.
    pub fn danger(&self) -> bool {
        class::danger(&self.kind)
    }
}

fn limit(f: &mut Formatter<'_>, feet: f64) -> Result {
    if feet == 0.0 {
        write!(f, "SFC")
    } else {
        write!(f, "{feet:.0} ft")
    }
}

impl Display for Volume {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.kind)?;

        if !self.class.is_empty() {
            write!(f, " (Class {})", self.class)?;
        }

        write!(f, " | ")?;
        limit(f, self.upper)?;
        write!(f, "/")?;
        limit(f, self.lower)
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {}", self.id, self.name)?;

        if !self.class.is_empty() {
            write!(f, " (Class {})", self.class)?;
        }

        write!(f, " with {} volume(s)", self.volumes.len())
    }
}
