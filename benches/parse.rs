// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use thetis::markup::parse_svg_graph;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `markup.parse_svg`
// - Case IDs (the string after the `/`) must remain stable across refactors so results stay
//   comparable over time (`small`, `medium_dense`, `large_sparse`).
fn benches_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup.parse_svg");

    for case in [
        fixtures::Case::Small,
        fixtures::Case::MediumDense,
        fixtures::Case::LargeSparse,
    ] {
        let markup = fixtures::markup(case);
        group.throughput(Throughput::Elements(fixtures::edge_count(case)));
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let parsed = parse_svg_graph(black_box(&markup)).expect("parse_svg_graph");
                black_box(fixtures::checksum_graph(black_box(&parsed)))
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
