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

use std::hint::black_box;

use airspace::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const ABERDEEN_CTA: &str = r#"
- name: ABERDEEN CTA
  id: aberdeen-cta
  type: CTA
  class: D
  geometry:
  - seqno: 1
    upper: FL115
    lower: 1500 ft
    boundary:
    - line:
      - 572153N 0015835W
      - 572100N 0015802W
      - 572100N 0023356W
    - arc:
        dir: cw
        radius: 10 nm
        centre: 571834N 0021602W
        to: 572153N 0015835W
  - seqno: 2
    upper: FL115
    lower: 1500 ft
    boundary:
    - line:
      - 571522N 0015428W
      - 570845N 0015019W
    - arc:
        dir: cw
        radius: 10 nm
        centre: 570531N 0020740W
        to: 570214N 0022458W
    - line:
      - 570850N 0022913W
    - arc:
        dir: ccw
        radius: 10 nm
        centre: 571207N 0021152W
        to: 571522N 0015428W
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

/// Builds a document with the airspace repeated, similar in size to the UK
/// airspace.
fn document(copies: usize) -> Vec<u8> {
    let mut data = String::from("airspace:");
    for _ in 0..copies {
        data.push_str(ABERDEEN_CTA);
    }
    data.into_bytes()
}

fn bench_decode(c: &mut Criterion) {
    let data = document(300);
    let mut group = c.benchmark_group("decode");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("yaixm", |b| {
        b.iter(|| AirspaceData::try_from_yaixm(black_box(&data)))
    });

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let data = AirspaceData::try_from_yaixm(&document(300)).expect("document should decode");

    c.bench_function("query polygon", |b| {
        b.iter(|| data.at(black_box(&coord!(57.40, -2.27))).len())
    });

    c.bench_function("query circle", |b| {
        b.iter(|| data.at(black_box(&coord!(52.2053, 0.1750))).len())
    });

    c.bench_function("query outside", |b| {
        b.iter(|| data.at(black_box(&coord!(51.5, -0.1))).len())
    });
}

criterion_group!(benches, bench_decode, bench_query);
criterion_main!(benches);
