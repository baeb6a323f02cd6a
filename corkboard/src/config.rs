// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_camera::ZoomLimits;
use corkboard_cull::DEFAULT_PADDING;
use corkboard_frame::FramePolicy;
use corkboard_input::wheel::WheelProfile;

use crate::store::GridFixture;

/// Where visibility is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CullMode {
    /// On the calling thread, during the frame.
    #[default]
    Inline,
    /// On a background thread; results lag by up to one camera change.
    Worker,
}

/// Board configuration.
///
/// ```rust
/// use corkboard::{BoardConfig, CullMode, GridFixture};
/// use corkboard_frame::FramePolicy;
///
/// let config = BoardConfig::default()
///     .with_padding(800.0)
///     .with_frame_policy(FramePolicy::eased())
///     .with_cull_mode(CullMode::Worker)
///     .with_fixture(GridFixture::default());
/// assert_eq!(config.padding, 800.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    /// Allowed camera scale range.
    pub zoom_limits: ZoomLimits,
    /// Margin around the visible world rectangle used for culling.
    pub padding: f64,
    /// How the live camera follows the target camera.
    pub frame_policy: FramePolicy,
    /// Wheel-to-zoom conversion.
    pub wheel: WheelProfile,
    /// Where visibility is computed.
    pub cull_mode: CullMode,
    /// Cards to generate at construction, if any.
    pub fixture: Option<GridFixture>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::DEFAULT,
            padding: DEFAULT_PADDING,
            frame_policy: FramePolicy::default(),
            wheel: WheelProfile::current(),
            cull_mode: CullMode::default(),
            fixture: None,
        }
    }
}

impl BoardConfig {
    /// Sets the zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_limits: ZoomLimits) -> Self {
        self.zoom_limits = zoom_limits;
        self
    }

    /// Sets the culling padding. Negative or non-finite values become zero.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = if padding.is_finite() {
            padding.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Sets the frame policy.
    #[must_use]
    pub fn with_frame_policy(mut self, frame_policy: FramePolicy) -> Self {
        self.frame_policy = frame_policy;
        self
    }

    /// Sets the wheel profile.
    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelProfile) -> Self {
        self.wheel = wheel;
        self
    }

    /// Sets the cull mode.
    #[must_use]
    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    /// Generates a grid of cards at construction.
    #[must_use]
    pub fn with_fixture(mut self, fixture: GridFixture) -> Self {
        self.fixture = Some(fixture);
        self
    }
}
