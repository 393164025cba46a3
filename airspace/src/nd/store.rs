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

use std::sync::{Arc, PoisonError, RwLock};

use log::info;

use super::AirspaceData;
use crate::error::Error;

/// Holds the current airspace data.
///
/// Readers take a [snapshot](Self::snapshot) which stays consistent while new
/// data is swapped in. Data is only ever replaced as a whole.
#[derive(Debug, Default)]
pub struct AirspaceStore {
    inner: RwLock<Arc<AirspaceData>>,
}

impl AirspaceStore {
    pub fn new(data: AirspaceData) -> Self {
        Self {
            inner: RwLock::new(Arc::new(data)),
        }
    }

    /// Returns the current airspace data.
    pub fn snapshot(&self) -> Arc<AirspaceData> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&inner)
    }

    /// Swaps in the data and returns the previous snapshot.
    pub fn replace(&self, data: AirspaceData) -> Arc<AirspaceData> {
        self.swap(Arc::new(data))
    }

    fn swap(&self, data: Arc<AirspaceData>) -> Arc<AirspaceData> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *inner, data)
    }

    /// Decodes the yaixm document and swaps in the result.
    ///
    /// If the document can't be decoded, the current data stays in place and
    /// the error is returned.
    pub fn reload(&self, data: &[u8]) -> Result<Arc<AirspaceData>, Error> {
        let data = AirspaceData::try_from_yaixm(data)?;

        info!(
            "reloaded {} airspace feature(s) with {} warning(s)",
            data.features.len(),
            data.warnings.len()
        );

        let data = Arc::new(data);
        self.swap(Arc::clone(&data));
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATZ: &[u8] = br#"
airspace:
- name: CAMBRIDGE ATZ
  type: ATZ
  geometry:
  - seqno: 1
    upper: 2000 ft
    lower: SFC
    boundary:
    - circle:
        radius: 2 nm
        centre: 521219N 0001030E
"#;

    #[test]
    fn starts_empty() {
        let store = AirspaceStore::default();
        assert_eq!(store.snapshot().features().count(), 0);
    }

    #[test]
    fn reload_swaps_data() {
        let store = AirspaceStore::default();
        let before = store.snapshot();

        let after = store.reload(ATZ).expect("document should decode");

        assert_eq!(before.features().count(), 0);
        assert_eq!(after.features().count(), 1);
        assert_eq!(store.snapshot().features().count(), 1);
    }

    #[test]
    fn failed_reload_keeps_data() {
        let store = AirspaceStore::default();
        store.reload(ATZ).expect("document should decode");

        assert!(store.reload(b"airspace: [").is_err());
        assert_eq!(store.snapshot().features().count(), 1);
    }

    #[test]
    fn reload_returns_own_data() {
        let store = AirspaceStore::default();
        let loaded = store.reload(ATZ).expect("document should decode");

        // a later swap doesn't change what the reload returned
        store.replace(AirspaceData::default());

        assert_eq!(loaded.features().count(), 1);
        assert_eq!(store.snapshot().features().count(), 0);
    }

    #[test]
    fn concurrent_reloads_keep_their_data() {
        let store = Arc::new(AirspaceStore::default());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        store.reload(ATZ).map(|d| d.features().count())
                    } else {
                        store.reload(b"airspace: []").map(|d| d.features().count())
                    }
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let count = handle
                .join()
                .expect("reload should not panic")
                .expect("document should decode");
            assert_eq!(count, if i % 2 == 0 { 1 } else { 0 });
        }
    }

    #[test]
    fn replace_returns_previous() {
        let store = AirspaceStore::default();
        store.reload(ATZ).expect("document should decode");

        let previous = store.replace(AirspaceData::default());

        assert_eq!(previous.features().count(), 1);
        assert_eq!(store.snapshot().features().count(), 0);
    }
}
