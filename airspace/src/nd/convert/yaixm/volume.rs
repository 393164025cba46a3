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

//! Builder for the shape of a volume from yaixm boundary primitives.

use std::fmt::Display;

use geo::LineString;
use yaixm::{Arc, Boundary, Circle as CircleRecord, Position};

use super::fields::{lenient, point};
use crate::error::Error;
use crate::geom::{rasterize_arc, Circle, Point, Polygon};
use crate::nd::Shape;

/// Builder for the [`Shape`] of one geometry sequence.
///
/// The boundary primitives are added in the order of the document. Lines and
/// arcs are joined into one ring, where each arc starts at the end of the
/// primitive before it. A circle stands on its own.
#[derive(Debug)]
pub struct VolumeBuilder<'a> {
    feature: &'a str,
    seqno: u32,
    circle: Option<Circle>,
    ring: Vec<Point>,
    position: Option<Point>,
    warnings: Vec<Error>,
}

impl<'a> VolumeBuilder<'a> {
    pub fn new(feature: &'a str, seqno: u32) -> Self {
        Self {
            feature,
            seqno,
            circle: None,
            ring: Vec::new(),
            position: None,
            warnings: Vec::new(),
        }
    }

    /// Adds the next boundary primitive.
    pub fn add_boundary(&mut self, boundary: &Boundary) -> Result<(), Error> {
        match boundary {
            Boundary::Circle(circle) => self.add_circle(circle),
            Boundary::Line(line) => self.add_line(line),
            Boundary::Arc(arc) => self.add_arc(arc),
        }
    }

    /// Returns the shape with the warnings about malformed radii.
    ///
    /// A sequence without any primitive results in an empty polygon.
    pub fn build(mut self) -> (Shape, Vec<Error>) {
        let shape = match self.circle {
            Some(circle) => Shape::Circle(circle),
            None => {
                if self.ring.is_empty() {
                    self.warnings.push(Error::EmptyBoundary {
                        feature: self.feature.to_string(),
                        seqno: self.seqno,
                    });
                }

                Shape::Polygon(Polygon::new(LineString::from(self.ring), vec![]))
            }
        };

        (shape, self.warnings)
    }

    fn add_circle(&mut self, circle: &CircleRecord) -> Result<(), Error> {
        if self.circle.is_some() || !self.ring.is_empty() {
            return Err(self.invalid("circle can't be combined with other primitives"));
        }

        let centre = circle.centre().map_err(|e| self.invalid(e))?;
        let radius = lenient(circle.radius(), self.feature, "radius", &mut self.warnings);

        self.circle = Some(Circle::new(point(centre), radius));
        Ok(())
    }

    fn add_line(&mut self, line: &[String]) -> Result<(), Error> {
        self.ensure_no_circle()?;

        for s in line {
            let p = point(s.parse::<Position>().map_err(|e| self.invalid(e))?);
            self.ring.push(p);
            self.position = Some(p);
        }

        Ok(())
    }

    fn add_arc(&mut self, arc: &Arc) -> Result<(), Error> {
        self.ensure_no_circle()?;

        let from = self
            .position
            .ok_or_else(|| self.invalid("arc has no start point"))?;
        let rotation = arc.direction().map_err(|e| self.invalid(e))?;
        let centre = arc.centre().map_err(|e| self.invalid(e))?;
        let to = point(arc.to().map_err(|e| self.invalid(e))?);
        let radius = lenient(arc.radius(), self.feature, "radius", &mut self.warnings);

        self.ring.extend(rasterize_arc(
            point(centre),
            radius,
            from,
            to,
            rotation.into(),
        ));
        self.position = Some(to);

        Ok(())
    }

    fn ensure_no_circle(&self) -> Result<(), Error> {
        match self.circle {
            Some(_) => Err(self.invalid("circle can't be combined with other primitives")),
            None => Ok(()),
        }
    }

    fn invalid<E: Display>(&self, error: E) -> Error {
        Error::InvalidBoundary {
            feature: self.feature.to_string(),
            seqno: self.seqno,
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::bearing;

    fn line(points: &[&str]) -> Boundary {
        Boundary::Line(points.iter().map(|p| p.to_string()).collect())
    }

    fn arc(dir: &str, to: &str) -> Boundary {
        Boundary::Arc(Arc {
            dir: dir.to_string(),
            radius: "10 nm".to_string(),
            centre: "571834N 0021602W".to_string(),
            to: to.to_string(),
        })
    }

    fn circle(radius: &str) -> Boundary {
        Boundary::Circle(CircleRecord {
            radius: radius.to_string(),
            centre: "571834N 0021602W".to_string(),
        })
    }

    fn ring(shape: &Shape) -> &LineString {
        match shape {
            Shape::Polygon(polygon) => polygon.exterior(),
            Shape::Circle(_) => panic!("expected polygon"),
        }
    }

    #[test]
    fn builds_polygon_from_line_and_arc() {
        let mut builder = VolumeBuilder::new("aberdeen-cta", 1);
        builder
            .add_boundary(&line(&[
                "572153N 0015835W",
                "572100N 0015802W",
                "572100N 0023356W",
            ]))
            .expect("valid line");
        builder
            .add_boundary(&arc("cw", "572153N 0015835W"))
            .expect("valid arc");

        let (shape, warnings) = builder.build();
        assert!(warnings.is_empty());
        assert_eq!(ring(&shape).0.len(), 19);
    }

    #[test]
    fn arc_continues_from_previous_arc() {
        let mut builder = VolumeBuilder::new("aberdeen-cta", 1);
        builder
            .add_boundary(&line(&["572153N 0015835W"]))
            .expect("valid line");
        builder
            .add_boundary(&arc("cw", "571834N 0020400W"))
            .expect("valid arc");
        builder
            .add_boundary(&arc("cw", "571500N 0021602W"))
            .expect("valid arc");

        let (shape, _) = builder.build();
        let to = coord!(57.25, -2.267222);

        // the ring is closed, so the second arc ends just before the first point
        let coords = &ring(&shape).0;
        assert_eq!(coords.first(), coords.last());

        let end = coords[coords.len() - 2];
        assert!((end.y - to.y()).abs() < 1e-5);
        assert!((end.x - to.x()).abs() < 1e-5);

        // the second arc starts at the bearing of the first arc's end
        let centre = coord!(57.309444, -2.267222);
        let first_arc_end = coords
            .iter()
            .position(|c| (c.y - 57.309444).abs() < 1e-5 && (c.x + 2.066667).abs() < 1e-5)
            .expect("first arc ends in the ring");
        let start = Point::from(coords[first_arc_end + 1]);

        let expected = bearing(centre, Point::from(coords[first_arc_end]));
        assert!((bearing(centre, start) - expected).abs() < 0.01);
    }

    #[test]
    fn builds_circle() {
        let mut builder = VolumeBuilder::new("aberdeen-ctr", 1);
        builder.add_boundary(&circle("5 nm")).expect("valid circle");

        match builder.build() {
            (Shape::Circle(circle), warnings) => {
                assert_eq!(circle.radius, 9260.0);
                assert!(warnings.is_empty());
            }
            (shape, _) => panic!("expected circle but got {shape:?}"),
        }
    }

    #[test]
    fn keeps_malformed_radius_as_warning() {
        let mut builder = VolumeBuilder::new("aberdeen-ctr", 1);
        builder.add_boundary(&circle("five nm")).expect("valid centre");

        let (shape, warnings) = builder.build();
        assert!(matches!(shape, Shape::Circle(c) if c.radius == 0.0));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn rejects_arc_without_start() {
        let mut builder = VolumeBuilder::new("aberdeen-cta", 2);
        let err = builder.add_boundary(&arc("cw", "572153N 0015835W"));

        assert!(matches!(
            err,
            Err(Error::InvalidBoundary { seqno: 2, .. })
        ));
    }

    #[test]
    fn rejects_bad_direction() {
        let mut builder = VolumeBuilder::new("aberdeen-cta", 1);
        builder
            .add_boundary(&line(&["572153N 0015835W"]))
            .expect("valid line");

        assert!(builder.add_boundary(&arc("left", "572100N 0015802W")).is_err());
    }

    #[test]
    fn rejects_bad_position() {
        let mut builder = VolumeBuilder::new("aberdeen-cta", 1);
        assert!(builder.add_boundary(&line(&["5721N 00158W"])).is_err());
    }

    #[test]
    fn rejects_circle_with_line() {
        let mut builder = VolumeBuilder::new("aberdeen-cta", 1);
        builder
            .add_boundary(&line(&["572153N 0015835W"]))
            .expect("valid line");

        assert!(builder.add_boundary(&circle("5 nm")).is_err());
    }

    #[test]
    fn rejects_second_circle() {
        let mut builder = VolumeBuilder::new("aberdeen-ctr", 1);
        builder.add_boundary(&circle("5 nm")).expect("valid circle");

        assert!(matches!(
            builder.add_boundary(&circle("2 nm")),
            Err(Error::InvalidBoundary { seqno: 1, .. })
        ));
    }

    #[test]
    fn rejects_line_after_circle() {
        let mut builder = VolumeBuilder::new("aberdeen-ctr", 1);
        builder.add_boundary(&circle("5 nm")).expect("valid circle");

        assert!(builder.add_boundary(&line(&["572153N 0015835W"])).is_err());
    }

    #[test]
    fn empty_boundary_is_empty_polygon() {
        let (shape, warnings) = VolumeBuilder::new("aberdeen-cta", 3).build();

        assert!(ring(&shape).0.is_empty());
        assert_eq!(
            warnings,
            vec![Error::EmptyBoundary {
                feature: "aberdeen-cta".to_string(),
                seqno: 3
            }]
        );
    }
}
