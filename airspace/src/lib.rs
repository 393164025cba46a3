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

//! Airspace volumes and point containment queries.
//!
//! The airspace is read from a [yaixm] document, where each boundary is
//! written as lines, arcs and circles in aviation notation. Decoding turns
//! every airspace into a [`Feature`] with one [`Volume`] per geometry sequence.
//! Arcs are rasterized, so a volume is either a circle or a polygon.
//!
//! # Examples
//!
//! ```
//! use airspace::prelude::*;
//!
//! # fn main() -> Result<(), airspace::Error> {
//! let data = AirspaceData::try_from_yaixm(br#"
//! airspace:
//! - name: CAMBRIDGE ATZ
//!   type: ATZ
//!   geometry:
//!   - seqno: 1
//!     upper: 2000 ft
//!     lower: SFC
//!     boundary:
//!     - circle:
//!         radius: 2 nm
//!         centre: 521219N 0001030E
//! "#)?;
//!
//! let volumes = data.at(&coord!(52.2053, 0.1750));
//! assert_eq!(volumes.len(), 1);
//! assert!(volumes[0].clearance_required);
//! #     Ok(())
//! # }
//! ```
//!
//! [yaixm]: https://gitlab.com/ahsparrow/yaixm

#[macro_use]
mod macros;

mod error;

pub mod geom;
pub mod nd;
pub mod prelude;

pub use error::Error;
pub use nd::{decode, enclosing_volumes};
