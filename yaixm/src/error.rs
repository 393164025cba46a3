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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The document is not valid YAML or doesn't match the yaixm schema.
    Yaml(String),
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    InvalidCharacter {
        field: &'static str,
        byte: u8,
        expected: &'static str,
    },
    InvalidVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    NotANumber {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "failed to unmarshal YAML: {e}"),
            Self::InvalidLength {
                field,
                expected,
                actual,
            } => {
                write!(f, "{field} should be {expected} byte long but is {actual}")
            }
            Self::InvalidCharacter {
                field,
                byte,
                expected,
            } => {
                write!(
                    f,
                    "{field} is \"{}\" but should be {expected}",
                    *byte as char
                )
            }
            Self::InvalidVariant {
                field,
                value,
                expected,
            } => {
                write!(f, "found \"{value}\" in {field} but should be {expected}")
            }
            Self::NotANumber { field, value } => {
                write!(f, "{field} should be a number but is \"{value}\"")
            }
        }
    }
}

impl error::Error for Error {}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e.to_string())
    }
}
