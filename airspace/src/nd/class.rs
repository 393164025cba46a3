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

//! Classification of airspace by class and type.
//!
//! The lookups are case-sensitive and match the values as they are written in
//! a yaixm document.

fn is_controlled(class: &str) -> bool {
    matches!(class, "A" | "B" | "C" | "D" | "E")
}

fn is_restricted(kind: &str) -> bool {
    matches!(
        kind,
        "ATZ" | "AWY" | "CTA" | "CTR" | "MATZ" | "P" | "R" | "RAT" | "RMZ" | "TMA" | "TRA" | "TMZ"
    )
}

/// Returns `true` if an airspace of the class or type can't be entered without
/// a clearance.
pub fn clearance_required(class: &str, kind: &str) -> bool {
    is_controlled(class) || is_restricted(kind)
}

/// Returns `true` if an airspace of the type is an advisory danger area.
pub fn danger(kind: &str) -> bool {
    matches!(
        kind,
        "AIAA" | "D" | "D_OTHER" | "DZ" | "GLIDER" | "HIRTA" | "LASER" | "NOATZ" | "UL"
    )
}
