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

use std::error;
use std::fmt;

/// Airspace error.
///
/// [`InvalidYaixm`] and [`InvalidBoundary`] abort decoding. [`InvalidValue`]
/// and [`EmptyBoundary`] are collected as [warnings] while decoding goes on.
///
/// [`InvalidYaixm`]: Error::InvalidYaixm
/// [`InvalidBoundary`]: Error::InvalidBoundary
/// [`InvalidValue`]: Error::InvalidValue
/// [`EmptyBoundary`]: Error::EmptyBoundary
/// [warnings]: crate::nd::AirspaceData::warnings
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The document can't be read into yaixm records.
    InvalidYaixm { error: String },

    /// A boundary primitive of a feature can't be turned into a shape.
    InvalidBoundary {
        feature: String,
        seqno: u32,
        error: String,
    },

    /// A height, distance or sequence number is malformed and was read as 0.
    InvalidValue {
        feature: String,
        field: &'static str,
        error: String,
    },

    /// A geometry sequence has no boundary primitives.
    EmptyBoundary { feature: String, seqno: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidYaixm { error } => write!(f, "invalid yaixm document: {error}"),
            Self::InvalidBoundary {
                feature,
                seqno,
                error,
            } => write!(f, "bad boundary of {feature} (seqno {seqno}): {error}"),
            Self::InvalidValue {
                feature,
                field,
                error,
            } => write!(f, "{field} of {feature} read as 0: {error}"),
            Self::EmptyBoundary { feature, seqno } => {
                write!(f, "{feature} (seqno {seqno}) has no boundary")
            }
        }
    }
}

impl error::Error for Error {}

impl From<yaixm::Error> for Error {
    fn from(e: yaixm::Error) -> Self {
        Self::InvalidYaixm {
            error: e.to_string(),
        }
    }
}
