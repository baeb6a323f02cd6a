// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard: a headless infinite-canvas card board.
//!
//! This crate ties the workspace together:
//!
//! - [`CardStore`]: the cards (id, title, content, world position and
//!   size), with [`CardStore::add_card`] and [`CardStore::update_card_meta`]
//!   as the only mutations, and a generated [`GridFixture`] layout.
//! - [`Board`]: owns the store, an
//!   [`InputController`](corkboard_input::InputController), a
//!   [`FrameScheduler`](corkboard_frame::FrameScheduler) and a culler (inline
//!   or on a background worker, see [`CullMode`]). Hosts feed it pointer,
//!   wheel, resize and frame callbacks.
//! - [`Surface`]: where frames go. [`PlaneSurface`] keeps one transformed
//!   plane of card elements and toggles only what changed; [`CanvasSurface`]
//!   clears and redraws a display list every frame, wrapping card text with
//!   a host-provided [`TextMeasure`](text::TextMeasure).
//!
//! Every frame runs in the same order: the camera advances, the surface
//! receives the new transform, visibility is recomputed, and the surface is
//! told which cards appeared or disappeared.
//!
//! ## Minimal example
//!
//! ```rust
//! use corkboard::{Board, BoardConfig, CanvasSurface, GridFixture};
//! use corkboard_frame::FrameHost;
//! use corkboard_input::event::{PointerButton, PointerEvent, PointerId, Buttons};
//! use kurbo::{Point, Size, Vec2};
//!
//! struct Host;
//!
//! impl FrameHost for Host {
//!     fn request_frame(&mut self) {}
//! }
//!
//! let config = BoardConfig::default().with_fixture(GridFixture::default());
//! let mut board = Board::new(config).unwrap();
//! board.attach(CanvasSurface::new(), &mut Host);
//! board.resize(Size::new(1000.0, 800.0), &mut Host);
//!
//! // Drag the board 100px to the left.
//! let id = PointerId(1);
//! let down = board.on_pointer(&PointerEvent::down(id, PointerButton::Primary, Point::new(500.0, 400.0)), &mut Host);
//! assert_eq!(down.capture, Some(id));
//! board.on_pointer(&PointerEvent::moved(id, Buttons::PRIMARY, Point::new(400.0, 400.0)), &mut Host);
//!
//! let frame = board.on_frame(&mut Host, 0.0).unwrap();
//! assert_eq!(frame.camera.offset(), Vec2::new(-100.0, 0.0));
//! assert_eq!(board.surface().unwrap().drawn_cards().count(), board.visible().len());
//! ```

mod board;
mod card;
mod config;
mod store;
pub mod surface;
pub mod text;

pub use board::Board;
pub use card::{Card, CardId, CardMeta};
pub use config::{BoardConfig, CullMode};
pub use store::{CardStore, GridFixture, StoreError};
pub use surface::{CanvasSurface, PlaneSurface, Surface};
