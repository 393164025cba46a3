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

use log::debug;
use yaixm::{Airspace, Document, Geometry};

use crate::error::Error;
use crate::nd::{AirspaceData, Feature, Volume};

mod fields;
mod volume;

use fields::lenient;
use volume::VolumeBuilder;

impl AirspaceData {
    /// Creates airspace data from a yaixm document.
    ///
    /// A malformed position, arc direction or boundary aborts the decoding.
    /// Malformed limits, radii or sequence numbers are read as 0 and kept as
    /// [warnings](AirspaceData::warnings). An empty document has no features.
    pub fn try_from_yaixm(data: &[u8]) -> Result<Self, Error> {
        let document = Document::from_slice(data)?;
        let mut builder = AirspaceData::builder();

        for (index, airspace) in document.airspace.iter().enumerate() {
            let mut warnings = Vec::new();
            let f = convert_feature(index, airspace, &mut warnings)?;

            debug!("decoded {} with {} volume(s)", f.id, f.volumes.len());

            builder.add_feature(f);
            warnings.into_iter().for_each(|w| builder.add_warning(w));
        }

        Ok(builder.build())
    }
}

/// Returns the type of the airspace.
///
/// The generic types `OTHER` and `D_OTHER` are replaced by the local type,
/// which might be empty.
pub fn resolve_type(kind: &str, local_type: &str) -> String {
    match kind {
        "OTHER" | "D_OTHER" => local_type.to_string(),
        _ => kind.to_string(),
    }
}

/// Returns the identifier of a feature.
///
/// Features without an identifier get one from their name and their index in
/// the document, e.g. `drop-zone-alpha-5`. Such an identifier changes when
/// the features are reordered.
pub fn resolve_feature_id(id: &str, name: &str, index: usize) -> String {
    match id.trim() {
        "" => format!("{}-{index}", name.replace(' ', "-").to_lowercase()),
        id => id.to_string(),
    }
}

fn or_else(value: &str, fallback: &str) -> String {
    match value.trim() {
        "" => fallback.to_string(),
        _ => value.to_string(),
    }
}

fn convert_feature(
    index: usize,
    airspace: &Airspace,
    warnings: &mut Vec<Error>,
) -> Result<Feature, Error> {
    let mut feature = Feature {
        id: resolve_feature_id(&airspace.id, &airspace.name, index),
        name: airspace.name.clone(),
        kind: resolve_type(&airspace.kind, &airspace.local_type),
        class: airspace.class.clone(),
        volumes: Vec::with_capacity(airspace.geometry.len()),
    };

    for geometry in &airspace.geometry {
        let v = convert_volume(&feature, geometry, warnings)?;
        feature.volumes.push(v);
    }

    Ok(feature)
}

fn convert_volume(
    feature: &Feature,
    geometry: &Geometry,
    warnings: &mut Vec<Error>,
) -> Result<Volume, Error> {
    let sequence = lenient(geometry.sequence(), &feature.id, "seqno", warnings);
    let upper = lenient(geometry.upper(), &feature.id, "upper", warnings);
    let lower = lenient(geometry.lower(), &feature.id, "lower", warnings);

    let mut builder = VolumeBuilder::new(&feature.id, sequence);
    for boundary in &geometry.boundary {
        builder.add_boundary(boundary)?;
    }

    let (shape, mut shape_warnings) = builder.build();
    warnings.append(&mut shape_warnings);

    Ok(Volume {
        id: or_else(&geometry.id, &feature.id),
        name: or_else(&geometry.name, &feature.name),
        kind: feature.kind.clone(),
        class: or_else(&geometry.class, &feature.class),
        sequence,
        lower,
        upper,
        clearance_required: feature.clearance_required(),
        danger: feature.danger(),
        shape,
    })
}
