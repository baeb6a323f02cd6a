// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel zoom speed per host platform.
//!
//! Wheel deltas reported by Windows are roughly an order of magnitude larger
//! than those on macOS and Linux trackpads, so the zoom speed differs by host.

/// Wheel zoom tuning.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum WheelProfile {
    /// Windows wheel deltas (zoom speed `0.001`).
    Windows,
    /// Other hosts (zoom speed `0.015`).
    #[default]
    Other,
    /// Explicit zoom speed.
    Custom(f64),
}

impl WheelProfile {
    /// Profile for the platform this crate was compiled for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Multiplier applied to `deltaY` before exponentiation.
    #[must_use]
    pub fn zoom_speed(self) -> f64 {
        match self {
            Self::Windows => 0.001,
            Self::Other => 0.015,
            Self::Custom(speed) => speed,
        }
    }

    /// Zoom factor for a vertical wheel delta: `exp(-delta_y * speed)`.
    ///
    /// Scrolling down (positive delta) zooms out.
    #[must_use]
    pub fn zoom_factor(self, delta_y: f64) -> f64 {
        (-delta_y * self.zoom_speed()).exp()
    }
}
