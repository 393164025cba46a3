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

use log::warn;

use super::*;

/// Airspace data factory, which is used to build [airspace data].
///
/// [airspace data]: super::AirspaceData
#[derive(Default)]
pub struct AirspaceDataBuilder {
    features: Vec<Feature>,
    warnings: Vec<Error>,
}

impl AirspaceDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> AirspaceData {
        AirspaceData {
            features: self.features,
            warnings: self.warnings,
        }
    }

    pub fn add_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Adds a problem which didn't stop the decoding.
    pub fn add_warning<E>(&mut self, warning: E)
    where
        E: Into<Error>,
    {
        let warning = warning.into();
        warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }
}
