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

//! yaixm airspace document parser.
//!
//! This crate reads the YAML airspace documents published by the yaixm project
//! into [records] and provides the [fields] decoders for the aviation notation
//! used within them: positions as degrees, minutes and seconds, heights as
//! flight levels or feet and distances in nautical miles.
//!
//! The records keep the field values as written in the document. Decoding a
//! value is done on demand, so the caller can decide how to deal with a
//! malformed position or height.
//!
//! # Examples
//!
//! ```
//! use yaixm::{Boundary, Document, Position};
//!
//! # fn main() -> Result<(), yaixm::Error> {
//! let doc = Document::from_slice(br#"
//! airspace:
//! - name: ABERDEEN CTA
//!   type: CTA
//!   class: D
//!   geometry:
//!   - seqno: 1
//!     upper: FL115
//!     lower: 1500 ft
//!     boundary:
//!     - line:
//!       - 572153N 0015835W
//!       - 572100N 0015802W
//! "#)?;
//!
//! let geometry = &doc.airspace[0].geometry[0];
//! assert_eq!(geometry.upper().value, 11500.0);
//!
//! if let Boundary::Line(points) = &geometry.boundary[0] {
//!     let first: Position = points[0].parse()?;
//!     println!("{first}"); // => "572153N 0015835W"
//! }
//! #     Ok(())
//! # }
//! ```
//!
//! [records]: crate::records
//! [fields]: crate::fields

#[macro_use]
mod macros;

mod error;
mod yaml;

pub mod fields;
pub mod records;

pub use error::Error;
pub use fields::{Decoded, Position};
pub use records::*;
