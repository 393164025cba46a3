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

/// Validate that all bytes are ASCII digits and return the unsigned value.
macro_rules! parse_numeric {
    ($field:expr, $b:expr) => {{
        let bytes: &[u8] = $b;
        if !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit) {
            Ok(bytes
                .iter()
                .fold(0u32, |acc, &byte| acc * 10 + (byte & 0x0F) as u32))
        } else {
            Err($crate::Error::NotANumber {
                field: $field,
                value: String::from_utf8_lossy(bytes).into_owned(),
            })
        }
    }};
}
