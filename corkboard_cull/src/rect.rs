// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Culling rectangle helpers.

use corkboard_camera::Camera;
use kurbo::{Rect, Size};

/// World-space rectangle visible through `viewport`, grown by `padding` on
/// every side.
///
/// Returns `None` for a degenerate viewport, and also when the padding is
/// not finite, so callers never cull against NaN or infinite rectangles.
/// Negative padding is treated as zero.
#[must_use]
pub fn padded_world_rect(camera: &Camera, viewport: Size, padding: f64) -> Option<Rect> {
    if !padding.is_finite() {
        return None;
    }
    let padding = padding.max(0.0);
    camera
        .visible_world_rect(viewport)
        .map(|rect| rect.inflate(padding, padding))
}

/// Strict axis-aligned overlap test.
///
/// Any positive-area overlap counts; rectangles that merely share an edge do
/// not overlap.
#[must_use]
pub fn overlaps(item: &Rect, region: &Rect) -> bool {
    item.x0 < region.x1 && item.x1 > region.x0 && item.y0 < region.y1 && item.y1 > region.y0
}

#[cfg(test)]
mod tests {
    use corkboard_camera::Camera;
    use kurbo::{Rect, Size, Vec2};

    use super::{overlaps, padded_world_rect};

    #[test]
    fn identity_camera_padding() {
        let rect = padded_world_rect(&Camera::IDENTITY, Size::new(1000.0, 800.0), 400.0).unwrap();
        assert_eq!(rect, Rect::new(-400.0, -400.0, 1400.0, 1200.0));
    }

    #[test]
    fn padding_is_in_world_units() {
        let camera = Camera::new(Vec2::new(-200.0, 0.0), 2.0);
        let rect = padded_world_rect(&camera, Size::new(800.0, 600.0), 100.0).unwrap();
        assert_eq!(rect, Rect::new(0.0, -100.0, 600.0, 400.0));
    }

    #[test]
    fn degenerate_inputs_yield_none() {
        let camera = Camera::IDENTITY;
        assert!(padded_world_rect(&camera, Size::new(0.0, 800.0), 400.0).is_none());
        assert!(padded_world_rect(&camera, Size::new(1000.0, 0.0), 400.0).is_none());
        assert!(padded_world_rect(&camera, Size::new(1000.0, 800.0), f64::NAN).is_none());
    }

    #[test]
    fn negative_padding_is_clamped() {
        let rect = padded_world_rect(&Camera::IDENTITY, Size::new(10.0, 10.0), -5.0).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn overlap_is_strict() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(overlaps(&Rect::new(10.0, 10.0, 20.0, 20.0), &region));
        assert!(overlaps(&Rect::new(90.0, 90.0, 120.0, 120.0), &region));
        assert!(overlaps(&Rect::new(-50.0, -50.0, 500.0, 500.0), &region));
        assert!(!overlaps(&Rect::new(100.0, 0.0, 150.0, 50.0), &region));
        assert!(!overlaps(&Rect::new(0.0, -50.0, 50.0, 0.0), &region));
        assert!(!overlaps(&Rect::new(200.0, 200.0, 300.0, 300.0), &region));
    }
}
