// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Frames-per-second meter over fixed one-second windows.
///
/// Feed it the timestamp (in milliseconds) of every painted frame; it reports
/// a new reading each time a full window has elapsed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    window_start: Option<f64>,
    frames_in_window: u32,
    fps: Option<u32>,
}

impl FrameStats {
    /// Length of one measurement window in milliseconds.
    pub const WINDOW_MS: f64 = 1000.0;

    /// Creates an empty meter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame painted at `timestamp_ms`.
    ///
    /// Returns the new reading when this frame closes a window.
    pub fn record(&mut self, timestamp_ms: f64) -> Option<u32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(timestamp_ms);
            self.frames_in_window = 0;
            return None;
        };
        self.frames_in_window += 1;
        let elapsed = timestamp_ms - start;
        if elapsed < Self::WINDOW_MS {
            return None;
        }
        let rate = f64::from(self.frames_in_window) * 1000.0 / elapsed;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "frame rates are small non-negative numbers; rounding to the nearest integer"
        )]
        let fps = (rate + 0.5) as u32;
        self.fps = Some(fps);
        self.window_start = Some(timestamp_ms);
        self.frames_in_window = 0;
        Some(fps)
    }

    /// Most recent reading, if a full window has elapsed.
    #[must_use]
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    /// Forgets all recorded frames.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
