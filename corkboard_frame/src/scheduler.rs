// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_camera::Camera;

use crate::policy::FramePolicy;

/// Host primitive that runs a callback once before the next repaint.
///
/// Implementations arrange for [`FrameScheduler::on_frame`] to be called on
/// the next animation frame (for example via `requestAnimationFrame` or a
/// winit redraw request).
pub trait FrameHost {
    /// Asks the host for one frame callback.
    fn request_frame(&mut self);
}

/// A frame ready to be painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Camera to apply to the rendering surface.
    pub camera: Camera,
    /// `true` once the live camera has reached the target.
    pub settled: bool,
    /// Number of frames produced before this one.
    pub index: u64,
}

/// Coalesces camera changes into at most one pending frame.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    policy: FramePolicy,
    live: Camera,
    target: Camera,
    pending: bool,
    frames: u64,
}

impl FrameScheduler {
    /// Creates a scheduler whose live and target cameras start at `camera`.
    #[must_use]
    pub fn new(policy: FramePolicy, camera: Camera) -> Self {
        Self {
            policy,
            live: camera,
            target: camera,
            pending: false,
            frames: 0,
        }
    }

    /// Current policy.
    #[must_use]
    pub fn policy(&self) -> FramePolicy {
        self.policy
    }

    /// Switches policy. Switching to `Direct` jumps the live camera to the target.
    pub fn set_policy(&mut self, policy: FramePolicy) {
        self.policy = policy;
        if !policy.is_eased() {
            self.live = self.target;
        }
    }

    /// Camera that was (or is about to be) painted.
    #[must_use]
    pub fn live(&self) -> Camera {
        self.live
    }

    /// Camera the live camera is moving toward.
    #[must_use]
    pub fn target(&self) -> Camera {
        self.target
    }

    /// Returns `true` while a frame request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns `true` when the live camera has reached the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.live == self.target
    }

    /// Number of frames produced so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Requests a frame unless one is already pending.
    ///
    /// Returns `true` if the host was asked for a frame by this call.
    pub fn request_redraw(&mut self, host: &mut impl FrameHost) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        host.request_frame();
        true
    }

    /// Sets the target camera and requests a frame.
    ///
    /// Under the `Direct` policy the live camera follows immediately.
    pub fn set_target(&mut self, camera: Camera, host: &mut impl FrameHost) -> bool {
        self.target = camera;
        if !self.policy.is_eased() {
            self.live = camera;
        }
        self.request_redraw(host)
    }

    /// Moves both the live and the target camera to `camera` and requests a frame.
    pub fn snap_to(&mut self, camera: Camera, host: &mut impl FrameHost) -> bool {
        self.target = camera;
        self.live = camera;
        self.request_redraw(host)
    }

    /// Drops the outstanding request; the next [`FrameScheduler::on_frame`]
    /// callback for it produces nothing.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Runs the frame step from the host's frame callback.
    ///
    /// Returns `None` when no frame was pending (a cancelled or spurious
    /// callback). Otherwise advances the live camera and returns the frame to
    /// paint; while an eased camera is still converging, the next frame is
    /// requested before returning.
    pub fn on_frame(&mut self, host: &mut impl FrameHost) -> Option<Frame> {
        if !self.pending {
            return None;
        }
        self.pending = false;

        let settled = match self.policy {
            FramePolicy::Direct => {
                self.live = self.target;
                true
            }
            FramePolicy::Eased {
                ease,
                position_epsilon,
                scale_epsilon,
            } => {
                if self
                    .live
                    .delta_to(&self.target)
                    .is_within(position_epsilon, scale_epsilon)
                {
                    self.live = self.target;
                    true
                } else {
                    self.live = self.live.approach(&self.target, ease);
                    self.request_redraw(host);
                    false
                }
            }
        };

        let frame = Frame {
            camera: self.live,
            settled,
            index: self.frames,
        };
        self.frames += 1;
        Some(frame)
    }
}
