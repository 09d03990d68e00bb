// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use knotwork::format::parse_knt;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `format.parse_knt`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (`small`, `medium`, `large`).
fn benches_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("format.parse_knt");

    for case in [fixtures::Case::Small, fixtures::Case::Medium, fixtures::Case::Large] {
        let text = fixtures::fixture(case);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let grid = parse_knt(black_box(&text));
                black_box(grid.len())
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_parse
}
criterion_main!(benches);
