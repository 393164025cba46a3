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

//! Airspace Data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geom::Point;

mod airspace;
mod builder;
mod class;
mod convert;
mod store;

pub use airspace::{Feature, Shape, Volume};
pub use builder::AirspaceDataBuilder;
pub use class::{clearance_required, danger};
pub use convert::{resolve_feature_id, resolve_type};
pub use store::AirspaceStore;

/// The decoded airspace.
///
/// Holds the features in the order of the source document together with the
/// warnings about values that were read permissively. The data is never
/// changed after decoding. Use the [`AirspaceStore`] to swap in new data.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirspaceData {
    features: Vec<Feature>,
    #[cfg_attr(feature = "serde", serde(skip))]
    warnings: Vec<Error>,
}

impl AirspaceData {
    pub fn builder() -> AirspaceDataBuilder {
        AirspaceDataBuilder::new()
    }

    /// Returns an iterator over the features.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Returns the problems found while decoding, which didn't stop it.
    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    /// Returns all volumes that contain the given point.
    ///
    /// Only the horizontal shape is checked, the lower and upper limits of a
    /// volume are ignored. The volumes are returned in the order of their
    /// features.
    ///
    /// # Examples
    ///
    /// ```
    /// # use airspace::prelude::*;
    /// # fn check_airspace(data: &AirspaceData) {
    /// let volumes = data.at(&coord!(57.2019, -2.1978));
    ///
    /// for volume in volumes.iter().filter(|v| v.clearance_required) {
    ///     println!("Clearance required for {volume}");
    /// }
    /// # }
    /// ```
    pub fn at(&self, point: &Point) -> Vec<&Volume> {
        enclosing_volumes(point, &self.features)
    }
}

/// Decodes the features of a yaixm document.
///
/// This is a shorthand for [`AirspaceData::try_from_yaixm`] which drops the
/// warnings, after they were logged.
pub fn decode(data: &[u8]) -> Result<Vec<Feature>, Error> {
    AirspaceData::try_from_yaixm(data).map(AirspaceData::into_features)
}

/// Returns the volumes of all features that contain the point.
///
/// Every volume of every feature is checked. No match is not an error, but an
/// empty vector.
pub fn enclosing_volumes<'a, I>(point: &Point, features: I) -> Vec<&'a Volume>
where
    I: IntoIterator<Item = &'a Feature>,
{
    features
        .into_iter()
        .flat_map(|feature| feature.volumes.iter())
        .filter(|volume| volume.contains(point))
        .collect()
}
