// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Frame: at most one paint per animation frame.
//!
//! Hosts expose a "run once before the next repaint" primitive through the
//! [`FrameHost`] trait. A [`FrameScheduler`] sits between camera writers (the
//! input controller) and the paint step:
//!
//! - [`FrameScheduler::request_redraw`] is idempotent. However many camera
//!   changes land between two frames, the host sees a single request.
//! - [`FrameScheduler::on_frame`] is called from the host's frame callback. It
//!   advances the live camera and hands back the [`Frame`] to paint.
//!
//! Two policies are available ([`FramePolicy`]):
//!
//! - `Direct`: the live camera is the target camera.
//! - `Eased`: every frame the live camera moves a fraction of the remaining
//!   distance toward the target, and frames keep being requested until the
//!   remaining distance falls under the configured epsilons.
//!
//! [`FrameStats`] is a small frames-per-second meter fed with frame
//! timestamps.
//!
//! ## Minimal example
//!
//! ```rust
//! use corkboard_camera::Camera;
//! use corkboard_frame::{FrameHost, FramePolicy, FrameScheduler};
//! use kurbo::Vec2;
//!
//! #[derive(Default)]
//! struct Host {
//!     requests: usize,
//! }
//!
//! impl FrameHost for Host {
//!     fn request_frame(&mut self) {
//!         self.requests += 1;
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut scheduler = FrameScheduler::new(FramePolicy::Direct, Camera::IDENTITY);
//!
//! for i in 0..10 {
//!     let camera = Camera::IDENTITY.pan_by(Vec2::new(f64::from(i), 0.0));
//!     scheduler.set_target(camera, &mut host);
//! }
//! assert_eq!(host.requests, 1);
//!
//! let frame = scheduler.on_frame(&mut host).unwrap();
//! assert_eq!(frame.camera.offset().x, 9.0);
//! assert!(scheduler.on_frame(&mut host).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod policy;
mod scheduler;
mod stats;

pub use policy::{FramePolicy, FramePolicyError};
pub use scheduler::{Frame, FrameHost, FrameScheduler};
pub use stats::FrameStats;
