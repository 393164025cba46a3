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

//! Serde-deserializable structs that mirror the yaixm YAML structure.
//!
//! These are internal types used by the parser. Every field is optional so
//! that sparse records deserialize, and they get converted into the public
//! [records](crate::records) afterwards.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentYaml {
    #[serde(default)]
    pub airspace: Option<Vec<AirspaceYaml>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceYaml {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub localtype: Option<String>,
    #[serde(default)]
    pub controltype: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub geometry: Option<Vec<GeometryYaml>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeometryYaml {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub seqno: Option<SeqnoYaml>,
    #[serde(default)]
    pub upper: Option<String>,
    #[serde(default)]
    pub lower: Option<String>,
    #[serde(default)]
    pub boundary: Option<Vec<BoundaryYaml>>,
}

/// Sequence numbers are mostly integers but some are written like `1a`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SeqnoYaml {
    Number(i64),
    Text(String),
}

/// A boundary primitive. Exactly one of the fields should be present.
#[derive(Debug, Deserialize)]
pub(crate) struct BoundaryYaml {
    #[serde(default)]
    pub circle: Option<CircleYaml>,
    #[serde(default)]
    pub line: Option<Vec<String>>,
    #[serde(default)]
    pub arc: Option<ArcYaml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CircleYaml {
    #[serde(default)]
    pub radius: String,
    #[serde(default)]
    pub centre: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArcYaml {
    #[serde(default)]
    pub dir: String,
    #[serde(default)]
    pub radius: String,
    #[serde(default)]
    pub centre: String,
    #[serde(default)]
    pub to: String,
}
