// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// How the live camera follows the target camera.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FramePolicy {
    /// The live camera jumps to the target on every frame.
    #[default]
    Direct,
    /// The live camera moves `ease` of the remaining distance per frame.
    Eased {
        /// Fraction of the remaining distance covered per frame, in `(0, 1]`.
        ease: f64,
        /// Offset distance (screen pixels) under which the camera snaps.
        position_epsilon: f64,
        /// Scale distance under which the camera snaps.
        scale_epsilon: f64,
    },
}

impl FramePolicy {
    /// Default easing factor.
    pub const DEFAULT_EASE: f64 = 0.15;
    /// Default position snap distance in screen pixels.
    pub const DEFAULT_POSITION_EPSILON: f64 = 0.5;
    /// Default scale snap distance.
    pub const DEFAULT_SCALE_EPSILON: f64 = 0.001;

    /// Eased policy with the default tuning.
    #[must_use]
    pub const fn eased() -> Self {
        Self::Eased {
            ease: Self::DEFAULT_EASE,
            position_epsilon: Self::DEFAULT_POSITION_EPSILON,
            scale_epsilon: Self::DEFAULT_SCALE_EPSILON,
        }
    }

    /// Eased policy with explicit tuning.
    ///
    /// `ease` must lie in `(0, 1]` and both epsilons must be positive and
    /// finite; otherwise the policy could never settle.
    pub fn eased_with(
        ease: f64,
        position_epsilon: f64,
        scale_epsilon: f64,
    ) -> Result<Self, FramePolicyError> {
        if !(ease > 0.0 && ease <= 1.0) {
            return Err(FramePolicyError::InvalidEase(ease));
        }
        for epsilon in [position_epsilon, scale_epsilon] {
            if !(epsilon.is_finite() && epsilon > 0.0) {
                return Err(FramePolicyError::InvalidEpsilon(epsilon));
            }
        }
        Ok(Self::Eased {
            ease,
            position_epsilon,
            scale_epsilon,
        })
    }

    /// Returns `true` for the eased policy.
    #[must_use]
    pub fn is_eased(&self) -> bool {
        matches!(self, Self::Eased { .. })
    }
}

/// Error returned by [`FramePolicy::eased_with`] for tuning that never settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FramePolicyError {
    /// The easing factor is outside `(0, 1]`.
    InvalidEase(f64),
    /// A snap distance is not positive and finite.
    InvalidEpsilon(f64),
}

impl fmt::Display for FramePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEase(ease) => write!(f, "easing factor {ease} is outside (0, 1]"),
            Self::InvalidEpsilon(epsilon) => {
                write!(f, "snap distance {epsilon} is not positive and finite")
            }
        }
    }
}

impl core::error::Error for FramePolicyError {}
