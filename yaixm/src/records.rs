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

//! yaixm records.
//!
//! A [`Document`] lists [`Airspace`] records, each with one or more
//! [`Geometry`] sequences that are bounded by [`Boundary`] primitives. Missing
//! text fields are empty strings.

use std::str::FromStr;

use crate::fields::{self, Decoded, Position};
use crate::yaml::*;
use crate::Error;

/// A yaixm airspace document.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Document {
    pub airspace: Vec<Airspace>,
}

impl Document {
    /// Parses a document from YAML bytes.
    ///
    /// An empty document has no airspace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] if the data isn't YAML or doesn't follow the
    /// yaixm schema, and [`Error::InvalidVariant`] if a boundary primitive
    /// isn't exactly one of circle, line or arc.
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let doc: Option<DocumentYaml> = serde_yaml::from_slice(data)?;
        doc.map(Self::try_from)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

/// An airspace feature, e.g. a control area.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Airspace {
    pub id: String,
    pub name: String,
    /// The airspace type, e.g. `CTA` or `OTHER`.
    pub kind: String,
    /// The local type which refines the type `OTHER` and `D_OTHER`.
    pub local_type: String,
    pub control_type: String,
    pub class: String,
    pub geometry: Vec<Geometry>,
}

/// One volume of an airspace.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Geometry {
    pub id: String,
    pub name: String,
    pub class: String,
    pub seqno: String,
    pub upper: String,
    pub lower: String,
    pub boundary: Vec<Boundary>,
}

impl Geometry {
    /// Returns the upper limit in feet.
    pub fn upper(&self) -> Decoded<f64> {
        fields::height(&self.upper)
    }

    /// Returns the lower limit in feet.
    pub fn lower(&self) -> Decoded<f64> {
        fields::height(&self.lower)
    }

    /// Returns the sequence number.
    ///
    /// Only the leading digits are used, so `3a` is the sequence number 3. A
    /// missing sequence number is 0.
    pub fn sequence(&self) -> Decoded<u32> {
        let seqno = self.seqno.trim();
        if seqno.is_empty() {
            return Decoded::ok(0);
        }

        let end = seqno
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(seqno.len());

        match seqno[..end].parse() {
            Ok(n) => Decoded::ok(n),
            Err(_) => Decoded::warn(
                0,
                Error::NotANumber {
                    field: "Sequence number",
                    value: seqno.to_string(),
                },
            ),
        }
    }
}

/// A primitive of the boundary of a geometry.
#[derive(Clone, PartialEq, Debug)]
pub enum Boundary {
    Circle(Circle),
    /// Positions connected by straight lines.
    Line(Vec<String>),
    Arc(Arc),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Circle {
    pub radius: String,
    pub centre: String,
}

impl Circle {
    /// Returns the radius in meters.
    pub fn radius(&self) -> Decoded<f64> {
        fields::distance(&self.radius)
    }

    pub fn centre(&self) -> Result<Position, Error> {
        self.centre.parse()
    }
}

/// An arc around the centre, starting at the current position of the boundary.
#[derive(Clone, PartialEq, Debug)]
pub struct Arc {
    pub dir: String,
    pub radius: String,
    pub centre: String,
    pub to: String,
}

impl Arc {
    pub fn direction(&self) -> Result<Direction, Error> {
        self.dir.parse()
    }

    /// Returns the radius in meters.
    pub fn radius(&self) -> Decoded<f64> {
        fields::distance(&self.radius)
    }

    pub fn centre(&self) -> Result<Position, Error> {
        self.centre.parse()
    }

    pub fn to(&self) -> Result<Position, Error> {
        self.to.parse()
    }
}

/// The direction in which an arc is drawn.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cw" => Ok(Self::Clockwise),
            "ccw" => Ok(Self::CounterClockwise),
            dir => Err(Error::InvalidVariant {
                field: "Arc direction",
                value: dir.to_string(),
                expected: "cw or ccw",
            }),
        }
    }
}

impl TryFrom<DocumentYaml> for Document {
    type Error = Error;

    fn try_from(value: DocumentYaml) -> Result<Self, Self::Error> {
        Ok(Self {
            airspace: value
                .airspace
                .unwrap_or_default()
                .into_iter()
                .map(Airspace::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<AirspaceYaml> for Airspace {
    type Error = Error;

    fn try_from(value: AirspaceYaml) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            kind: value.kind.unwrap_or_default(),
            local_type: value.localtype.unwrap_or_default(),
            control_type: value.controltype.unwrap_or_default(),
            class: value.class.unwrap_or_default(),
            geometry: value
                .geometry
                .unwrap_or_default()
                .into_iter()
                .map(Geometry::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<GeometryYaml> for Geometry {
    type Error = Error;

    fn try_from(value: GeometryYaml) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            class: value.class.unwrap_or_default(),
            seqno: match value.seqno {
                Some(SeqnoYaml::Number(n)) => n.to_string(),
                Some(SeqnoYaml::Text(s)) => s,
                None => String::new(),
            },
            upper: value.upper.unwrap_or_default(),
            lower: value.lower.unwrap_or_default(),
            boundary: value
                .boundary
                .unwrap_or_default()
                .into_iter()
                .map(Boundary::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<BoundaryYaml> for Boundary {
    type Error = Error;

    fn try_from(value: BoundaryYaml) -> Result<Self, Self::Error> {
        match (value.circle, value.line, value.arc) {
            (Some(circle), None, None) => Ok(Self::Circle(Circle {
                radius: circle.radius,
                centre: circle.centre,
            })),
            (None, Some(line), None) => Ok(Self::Line(line)),
            (None, None, Some(arc)) => Ok(Self::Arc(Arc {
                dir: arc.dir,
                radius: arc.radius,
                centre: arc.centre,
                to: arc.to,
            })),
            (circle, line, arc) => {
                let present: Vec<&str> = [
                    circle.map(|_| "circle"),
                    line.map(|_| "line"),
                    arc.map(|_| "arc"),
                ]
                .into_iter()
                .flatten()
                .collect();

                Err(Error::InvalidVariant {
                    field: "Boundary",
                    value: present.join(", "),
                    expected: "exactly one of circle, line or arc",
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
airspace:
- name: ABERDEEN CTA
  id: aberdeen-cta
  type: CTA
  class: D
  geometry:
  - seqno: 1
    upper: FL115
    lower: 1500 ft
    boundary:
    - line:
      - 572153N 0015835W
      - 572100N 0015802W
      - 572100N 0023356W
    - arc:
        dir: cw
        radius: 10 nm
        centre: 571834N 0021602W
        to: 572153N 0015835W
- name: BRUNTINGTHORPE
  type: OTHER
  localtype: GLIDER
  geometry:
  - seqno: 2a
    upper: 2000 ft
    lower: SFC
    boundary:
    - circle:
        radius: 2 nm
        centre: 522933N 0010747W
"#;

    #[test]
    fn parses_document() {
        let doc: Document = DOC.parse().expect("document should parse");
        assert_eq!(doc.airspace.len(), 2);

        let cta = &doc.airspace[0];
        assert_eq!(cta.id, "aberdeen-cta");
        assert_eq!(cta.kind, "CTA");
        assert_eq!(cta.class, "D");
        assert_eq!(cta.geometry[0].sequence(), Decoded::ok(1));
        assert_eq!(cta.geometry[0].upper(), Decoded::ok(11500.0));
        assert_eq!(cta.geometry[0].lower(), Decoded::ok(1500.0));
        assert_eq!(cta.geometry[0].boundary.len(), 2);

        match &cta.geometry[0].boundary[1] {
            Boundary::Arc(arc) => {
                assert_eq!(arc.direction(), Ok(Direction::Clockwise));
                assert_eq!(arc.radius(), Decoded::ok(18520.0));
                assert_eq!(arc.to, "572153N 0015835W");
            }
            boundary => panic!("expected arc but got {boundary:?}"),
        }

        let glider = &doc.airspace[1];
        assert_eq!(glider.id, "");
        assert_eq!(glider.kind, "OTHER");
        assert_eq!(glider.local_type, "GLIDER");
        assert_eq!(glider.geometry[0].sequence(), Decoded::ok(2));
        assert!(matches!(glider.geometry[0].boundary[0], Boundary::Circle(_)));
    }

    #[test]
    fn empty_document_has_no_airspace() {
        assert_eq!(Document::from_slice(b""), Ok(Document::default()));
        assert_eq!(Document::from_slice(b"  \n"), Ok(Document::default()));
        assert_eq!(Document::from_slice(b"airspace: []"), Ok(Document::default()));
    }

    #[test]
    fn rejects_invalid_yaml() {
        let err = Document::from_slice(b"this is not: valid: yaml: {{{")
            .expect_err("document should not parse");
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.to_string().contains("failed to unmarshal YAML"));
    }

    #[test]
    fn rejects_ambiguous_boundary() {
        let err = Document::from_slice(
            br#"
airspace:
- name: X
  geometry:
  - boundary:
    - line: [572153N 0015835W]
      circle: {radius: 1 nm, centre: 572153N 0015835W}
"#,
        )
        .expect_err("document should not parse");

        assert_eq!(
            err,
            Error::InvalidVariant {
                field: "Boundary",
                value: "circle, line".to_string(),
                expected: "exactly one of circle, line or arc",
            }
        );
    }

    #[test]
    fn rejects_unknown_arc_direction() {
        assert!(matches!(
            "clockwise".parse::<Direction>(),
            Err(Error::InvalidVariant { .. })
        ));
        assert_eq!("ccw".parse(), Ok(Direction::CounterClockwise));
    }

    #[test]
    fn warns_on_malformed_sequence_number() {
        let geometry = Geometry {
            seqno: "x1".to_string(),
            ..Default::default()
        };
        assert_eq!(geometry.sequence().value, 0);
        assert!(!geometry.sequence().is_clean());
    }
}
