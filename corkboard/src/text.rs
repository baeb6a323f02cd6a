// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measuring and wrapping card text for immediate-mode surfaces.

/// Font parameters a [`TextMeasure`] needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontStyle {
    /// Font size in world units.
    pub size: f64,
    /// CSS-style weight (400 regular, 600 semibold).
    pub weight: u16,
}

impl FontStyle {
    /// Card title font.
    pub const TITLE: Self = Self {
        size: 16.0,
        weight: 600,
    };

    /// Card body font.
    pub const BODY: Self = Self {
        size: 12.0,
        weight: 400,
    };
}

/// Measures the advance width of a run of text.
///
/// Hosts implement this over their text shaper (for a 2D canvas context,
/// `measureText`).
pub trait TextMeasure {
    /// Width of `text` set in `font`, in world units.
    fn measure(&self, text: &str, font: FontStyle) -> f64;
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn measure(&self, text: &str, font: FontStyle) -> f64 {
        (**self).measure(text, font)
    }
}

/// Approximate measurer: every character advances by a fixed fraction of the
/// font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Advance per character as a fraction of the font size.
    pub em_ratio: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { em_ratio: 0.55 }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str, font: FontStyle) -> f64 {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        f64::from(chars) * font.size * self.em_ratio
    }
}

const ELLIPSIS: char = '\u{2026}';

/// Greedily wraps `text` into at most `max_lines` lines no wider than
/// `max_width`.
///
/// Words are split on any whitespace, so line breaks in the source collapse
/// into spaces. A word wider than `max_width` gets a line of its own. When
/// the text does not fit, the last line is cut and ends with an ellipsis.
pub fn wrap_text(
    text: &str,
    max_width: f64,
    max_lines: usize,
    font: FontStyle,
    measure: &impl TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    if max_lines == 0 {
        return lines;
    }
    let mut words = text.split_whitespace().peekable();
    let mut line = String::new();
    while let Some(word) = words.next() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate_width = measure.measure(&line, font)
            + measure.measure(" ", font)
            + measure.measure(word, font);
        if candidate_width <= max_width {
            line.push(' ');
            line.push_str(word);
            continue;
        }
        if lines.len() + 1 == max_lines {
            // Last allowed line: keep the rest of the text and ellipsize it.
            line.push(' ');
            line.push_str(word);
            for rest in words.by_ref() {
                line.push(' ');
                line.push_str(rest);
            }
            lines.push(ellipsize(&line, max_width, font, measure));
            return lines;
        }
        lines.push(core::mem::replace(&mut line, word.to_owned()));
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Shortens `text` until it plus an ellipsis fits in `max_width`.
///
/// Returns `text` unchanged if it already fits.
pub fn ellipsize(text: &str, max_width: f64, font: FontStyle, measure: &impl TextMeasure) -> String {
    if measure.measure(text, font) <= max_width {
        return text.to_owned();
    }
    let mut cut = text.trim_end().to_owned();
    loop {
        let mut candidate = cut.clone();
        candidate.push(ELLIPSIS);
        if cut.is_empty() || measure.measure(&candidate, font) <= max_width {
            return candidate;
        }
        cut.pop();
        let trimmed = cut.trim_end().len();
        cut.truncate(trimmed);
    }
}
