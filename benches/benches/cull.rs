// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_camera::Camera;
use corkboard_cull::Culler;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};

const VIEWPORT: Size = Size::new(1000.0, 800.0);

fn grid(count: u32) -> Vec<(u32, Rect)> {
    (0..count)
        .map(|i| {
            let x = f64::from(i % 10) * 320.0;
            let y = f64::from(i / 10) * 360.0;
            (i, Rect::new(x, y, x + 300.0, y + 280.0))
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull/compute");

    // The linear scan is expected to stay well under a frame budget up to a
    // few thousand cards.
    for count in [200_u32, 1_000, 5_000, 20_000] {
        let mut culler = Culler::new(400.0);
        culler.set_items(grid(count));
        group.throughput(Throughput::Elements(u64::from(count)));

        group.bench_with_input(BenchmarkId::new("identity", count), &culler, |b, culler| {
            b.iter(|| black_box(culler.compute(&Camera::IDENTITY, VIEWPORT)));
        });

        let zoomed_out = Camera::new(Vec2::new(200.0, 100.0), 0.1);
        group.bench_with_input(BenchmarkId::new("zoomed_out", count), &culler, |b, culler| {
            b.iter(|| black_box(culler.compute(&zoomed_out, VIEWPORT)));
        });
    }

    group.finish();
}

fn bench_pan_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull/update_while_panning");

    for count in [200_u32, 5_000] {
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            let mut culler = Culler::new(400.0);
            culler.set_items(grid(count));
            let mut camera = Camera::IDENTITY;
            b.iter(|| {
                camera = camera.pan_by(Vec2::new(-7.0, -3.0));
                black_box(culler.update(&camera, VIEWPORT));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_pan_diff);
criterion_main!(benches);
