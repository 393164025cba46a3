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

use yaixm::{Decoded, Direction, Position};

use crate::error::Error;
use crate::geom::{Point, Rotation};

impl From<Direction> for Rotation {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Clockwise => Self::Clockwise,
            Direction::CounterClockwise => Self::CounterClockwise,
        }
    }
}

pub fn point(position: Position) -> Point {
    coord!(position.latitude, position.longitude)
}

/// Takes the decoded value and keeps a warning if it was malformed.
pub fn lenient<T>(
    decoded: Decoded<T>,
    feature: &str,
    field: &'static str,
    warnings: &mut Vec<Error>,
) -> T {
    let (value, warning) = decoded.into_parts();

    if let Some(e) = warning {
        warnings.push(Error::InvalidValue {
            feature: feature.to_string(),
            field,
            error: e.to_string(),
        });
    }

    value
}
