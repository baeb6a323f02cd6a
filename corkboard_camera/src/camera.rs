// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::limits::ZoomLimits;

/// Pan/zoom camera mapping world space into screen space.
///
/// `offset` is the screen position of the world origin and `scale` the
/// uniform zoom factor. The camera is a plain value: operations such as
/// [`Camera::zoom_at`] and [`Camera::pan_by`] return a new camera and leave
/// `self` untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    offset: Vec2,
    scale: f64,
}

impl Camera {
    /// Camera with no pan and a scale of `1.0`.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a camera from a screen-space offset and a scale.
    ///
    /// A non-finite or non-positive scale is replaced by `1.0`, and a
    /// non-finite offset by zero, so the camera is always invertible.
    #[must_use]
    pub fn new(offset: Vec2, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        let offset = if offset.is_finite() { offset } else { Vec2::ZERO };
        Self { offset, scale }
    }

    /// Screen-space position of the world origin.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Uniform zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns this camera with its scale clamped into `limits`.
    ///
    /// The offset is left alone; use [`Camera::zoom_to`] to keep a point fixed.
    #[must_use]
    pub fn clamped(self, limits: ZoomLimits) -> Self {
        Self {
            offset: self.offset,
            scale: limits.clamp(self.scale),
        }
    }

    /// Returns this camera with a different offset.
    #[must_use]
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self::new(offset, self.scale)
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.scale,
            (pt.y - self.offset.y) / self.scale,
        )
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.offset.x,
            pt.y * self.scale + self.offset.y,
        )
    }

    /// Converts a world-space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_screen(rect.origin()),
            self.world_to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Pans by a delta in screen space.
    #[must_use]
    pub fn pan_by(self, delta: Vec2) -> Self {
        self.with_offset(self.offset + delta)
    }

    /// Multiplies the scale by `factor` while keeping the world point under
    /// `anchor` (a screen-space point) fixed.
    ///
    /// The new scale is clamped into `limits`. Non-finite or non-positive
    /// factors leave the camera unchanged.
    #[must_use]
    pub fn zoom_at(self, anchor: Point, factor: f64, limits: ZoomLimits) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }
        self.zoom_to(anchor, self.scale * factor, limits)
    }

    /// Sets the scale to `scale` (clamped into `limits`) while keeping the
    /// world point under `anchor` fixed.
    #[must_use]
    pub fn zoom_to(self, anchor: Point, scale: f64, limits: ZoomLimits) -> Self {
        if !scale.is_finite() || scale <= 0.0 {
            return self;
        }
        let new_scale = limits.clamp(scale);
        let world = self.screen_to_world(anchor);
        let offset = anchor.to_vec2() - world.to_vec2() * new_scale;
        Self::new(offset, new_scale)
    }

    /// World-to-screen transform, suitable for a 2D drawing surface.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Returns the world-space rectangle seen through a viewport of the given
    /// size (in screen pixels, origin at the top-left corner).
    ///
    /// Returns `None` when the viewport is degenerate: a zero, negative or
    /// non-finite width or height has no visible world region.
    #[must_use]
    pub fn visible_world_rect(&self, viewport: Size) -> Option<Rect> {
        if !viewport.is_finite() || viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        let min = self.screen_to_world(Point::ORIGIN);
        let max = self.screen_to_world(Point::new(viewport.width, viewport.height));
        Some(Rect::from_points(min, max))
    }

    /// Difference `target - self`, componentwise.
    #[must_use]
    pub fn delta_to(&self, target: &Self) -> CameraDelta {
        CameraDelta {
            offset: target.offset - self.offset,
            scale: target.scale - self.scale,
        }
    }

    /// Moves a fraction `ease` of the remaining distance toward `target`.
    ///
    /// `ease` is clamped into `0.0..=1.0`; `1.0` jumps straight to the target.
    #[must_use]
    pub fn approach(self, target: &Self, ease: f64) -> Self {
        let ease = if ease.is_finite() {
            ease.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let delta = self.delta_to(target);
        Self::new(
            self.offset + delta.offset * ease,
            self.scale + delta.scale * ease,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Componentwise difference between two cameras.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraDelta {
    /// Offset difference in screen pixels.
    pub offset: Vec2,
    /// Scale difference.
    pub scale: f64,
}

impl CameraDelta {
    /// Returns `true` if both offset components are below `position_epsilon`
    /// and the scale difference is below `scale_epsilon`.
    #[must_use]
    pub fn is_within(&self, position_epsilon: f64, scale_epsilon: f64) -> bool {
        self.offset.x.abs() < position_epsilon
            && self.offset.y.abs() < position_epsilon
            && self.scale.abs() < scale_epsilon
    }
}
