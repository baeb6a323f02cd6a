// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Cull: which cards intersect the padded viewport.
//!
//! Given a [`Camera`](corkboard_camera::Camera), a viewport size and a set of
//! world-space rectangles keyed by caller ids, a [`Culler`] computes the
//! [`VisibilitySet`] of keys whose rectangle overlaps the visible world
//! rectangle grown by a padding margin. The margin pre-mounts content just
//! outside the visible edge so fast pans do not show pop-in.
//!
//! The core concepts are:
//!
//! - [`padded_world_rect`]: the camera-inverse of the viewport, padded.
//! - [`overlaps`]: strict axis-aligned overlap; touching edges do not count.
//! - [`Backend`]: pluggable spatial storage. [`FlatVec`] is a linear scan,
//!   which is the right tool at the few-hundred to few-thousand card scale.
//! - [`Culler::update`]: recompute and return a [`VisibilityDiff`] against the
//!   previous set, so hosts only mount/unmount what changed.
//! - `worker` (with the `std` feature): the same computation on a background
//!   thread, driven by message passing.
//!
//! A degenerate viewport (zero width or height) yields an empty set.
//!
//! ## Minimal example
//!
//! ```rust
//! use corkboard_camera::Camera;
//! use corkboard_cull::Culler;
//! use kurbo::{Rect, Size};
//!
//! let mut culler = Culler::new(400.0);
//! culler.insert(1_u32, Rect::new(0.0, 0.0, 300.0, 280.0));
//! culler.insert(2_u32, Rect::new(5_000.0, 0.0, 5_300.0, 280.0));
//!
//! let diff = culler.update(&Camera::IDENTITY, Size::new(1000.0, 800.0));
//! assert_eq!(diff.shown.as_slice(), &[1]);
//! assert!(culler.visible().contains(&1));
//! assert!(!culler.visible().contains(&2));
//!
//! // Nothing changed, nothing to do.
//! assert!(culler.update(&Camera::IDENTITY, Size::new(1000.0, 800.0)).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`; the worker requires `std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod backend;
mod backends;
mod culler;
mod rect;
mod set;

#[cfg(feature = "std")]
pub mod worker;

pub use backend::Backend;
pub use backends::FlatVec;
pub use culler::{Culler, DEFAULT_PADDING};
pub use rect::{overlaps, padded_world_rect};
pub use set::{VisibilityDiff, VisibilitySet};
