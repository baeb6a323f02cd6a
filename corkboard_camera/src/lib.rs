// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Camera: the pan/zoom camera of an infinite-canvas board.
//!
//! A [`Camera`] is a small value type holding a screen-space pan offset and a
//! uniform scale. It maps world space (where cards are authored) into screen
//! space (pixels of the rendering surface):
//!
//! ```text
//! screen = world * scale + offset
//! world  = (screen - offset) / scale
//! ```
//!
//! Every operation returns a new camera; callers own and persist the value.
//! This crate does not know about input events, frames, or cards. Those live in
//! `corkboard_input`, `corkboard_frame` and `corkboard_cull`.
//!
//! ## Zooming toward the cursor
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_camera::{Camera, ZoomLimits};
//!
//! let camera = Camera::IDENTITY;
//! let cursor = Point::new(100.0, 100.0);
//!
//! let zoomed = camera.zoom_at(cursor, 2.0, ZoomLimits::default());
//! assert_eq!(zoomed.scale(), 2.0);
//! assert_eq!(zoomed.offset().x, -100.0);
//!
//! // The world point under the cursor did not move.
//! assert_eq!(camera.screen_to_world(cursor), zoomed.screen_to_world(cursor));
//! ```
//!
//! ## Culling rectangle
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use corkboard_camera::Camera;
//!
//! let camera = Camera::new(Vec2::new(-50.0, 0.0), 2.0);
//! let visible = camera.visible_world_rect(Size::new(800.0, 600.0)).unwrap();
//! assert_eq!(visible.x0, 25.0);
//! assert_eq!(visible.x1, 425.0);
//!
//! // A zero-sized viewport shows nothing rather than NaN rectangles.
//! assert!(camera.visible_world_rect(Size::ZERO).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod limits;

pub use camera::{Camera, CameraDelta};
pub use limits::ZoomLimits;
