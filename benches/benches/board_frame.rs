// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard::{Board, BoardConfig, CanvasSurface, GridFixture, PlaneSurface, Surface};
use corkboard_camera::Camera;
use corkboard_frame::FrameHost;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};

struct Host;

impl FrameHost for Host {
    fn request_frame(&mut self) {}
}

fn board<S: Surface>(surface: S) -> Board<S> {
    let config = BoardConfig::default().with_fixture(GridFixture::default());
    let mut board = Board::new(config).expect("inline board");
    board.attach(surface, &mut Host);
    board.resize(Size::new(1000.0, 800.0), &mut Host);
    board
}

/// One pan step plus the frame that paints it.
fn pan_frame<S: Surface>(board: &mut Board<S>, t: &mut f64) {
    let camera = board.target().pan_by(Vec2::new(-5.0, -2.0));
    board.set_camera(camera, &mut Host);
    *t += 16.0;
    black_box(board.on_frame(&mut Host, *t));
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("board/pan_frame");

    group.bench_function("plane", |b| {
        let mut board = board(PlaneSurface::new());
        let mut t = 0.0;
        b.iter(|| pan_frame(&mut board, &mut t));
    });

    group.bench_function("canvas", |b| {
        let mut board = board(CanvasSurface::new());
        let mut t = 0.0;
        b.iter(|| pan_frame(&mut board, &mut t));
    });

    group.bench_function("canvas_zoomed_out", |b| {
        let mut board = board(CanvasSurface::new());
        board.set_camera(Camera::new(Vec2::ZERO, 0.1), &mut Host);
        let mut t = 0.0;
        b.iter(|| pan_frame(&mut board, &mut t));
    });

    group.finish();
}

criterion_group!(benches, bench_frames);
criterion_main!(benches);
