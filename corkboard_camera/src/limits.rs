// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive range the camera scale is clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Default limits: `0.1 ..= 3.0`.
    pub const DEFAULT: Self = Self { min: 0.1, max: 3.0 };

    /// Creates zoom limits, normalizing the pair so that `min <= max`.
    ///
    /// Non-finite or non-positive bounds fall back to the matching bound of
    /// [`ZoomLimits::DEFAULT`].
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() && min > 0.0 {
            min
        } else {
            Self::DEFAULT.min
        };
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            Self::DEFAULT.max
        };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLimits;

    #[test]
    fn inverted_limits_are_normalized() {
        let limits = ZoomLimits::new(4.0, 0.5);
        assert_eq!(limits.min(), 0.5);
        assert_eq!(limits.max(), 4.0);
    }

    #[test]
    fn invalid_bounds_fall_back_to_defaults() {
        let limits = ZoomLimits::new(f64::NAN, -1.0);
        assert_eq!(limits, ZoomLimits::DEFAULT);
    }

    #[test]
    fn clamp_and_contains() {
        let limits = ZoomLimits::new(0.25, 3.0);
        assert_eq!(limits.clamp(0.01), 0.25);
        assert_eq!(limits.clamp(10.0), 3.0);
        assert_eq!(limits.clamp(1.5), 1.5);
        assert!(limits.contains(0.25));
        assert!(!limits.contains(3.5));
    }
}
