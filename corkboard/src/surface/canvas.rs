// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_camera::Camera;
use kurbo::{Affine, Point, Rect, Size};

use super::{Scene, Surface};
use crate::card::{Card, CardId};
use crate::text::{FixedAdvance, FontStyle, TextMeasure, ellipsize, wrap_text};

/// One recorded drawing operation.
///
/// Commands after [`DrawCommand::SetTransform`] are in world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface (screen pixels).
    Clear {
        /// Surface size.
        size: Size,
    },
    /// Replace the current transform.
    SetTransform(Affine),
    /// Stroke grid lines every `spacing` units covering `bounds`.
    ///
    /// `bounds` starts on a multiple of `spacing`, so lines sit at fixed
    /// world positions while the camera moves.
    GridLines {
        /// Region covered by the grid, aligned to `spacing`.
        bounds: Rect,
        /// Distance between lines.
        spacing: f64,
        /// Stroke width in world units (one screen pixel).
        line_width: f64,
    },
    /// Fill and stroke a card's rectangle.
    CardRect {
        /// Card being drawn.
        id: CardId,
        /// Card bounds.
        rect: Rect,
        /// Border width in world units.
        border_width: f64,
    },
    /// Draw one line of text with its top-left corner at `origin`.
    Text {
        /// Card the text belongs to.
        id: CardId,
        /// Top-left corner of the line.
        origin: Point,
        /// Line content.
        text: String,
        /// Font used.
        font: FontStyle,
    },
}

/// Placement of text inside a card, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    /// Inner margin on every side.
    pub margin: f64,
    /// Offset of the first body line from the card's top edge.
    pub body_top: f64,
    /// Distance between body baselines.
    pub line_height: f64,
    /// Maximum number of body lines.
    pub max_lines: usize,
    /// Grid spacing behind the cards.
    pub grid_spacing: f64,
    /// Card border width in screen pixels.
    pub border_px: f64,
    /// Grid line width in screen pixels.
    pub grid_line_px: f64,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            margin: 12.0,
            body_top: 36.0,
            line_height: 16.0,
            max_lines: 6,
            grid_spacing: 50.0,
            border_px: 2.0,
            grid_line_px: 1.0,
        }
    }
}

/// Immediate-mode surface: cleared and fully redrawn every paint.
///
/// The commands of the last paint are available from
/// [`CanvasSurface::commands`] for a host to replay onto its 2D context.
#[derive(Clone, Debug)]
pub struct CanvasSurface<M = FixedAdvance> {
    measure: M,
    layout: CardLayout,
    commands: Vec<DrawCommand>,
    paints: u64,
}

impl CanvasSurface {
    /// Creates a canvas that measures text with [`FixedAdvance`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_measure(FixedAdvance::default())
    }
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasure> CanvasSurface<M> {
    /// Creates a canvas that measures text with `measure`.
    #[must_use]
    pub fn with_measure(measure: M) -> Self {
        Self {
            measure,
            layout: CardLayout::default(),
            commands: Vec::new(),
            paints: 0,
        }
    }

    /// Replaces the card layout.
    #[must_use]
    pub fn with_layout(mut self, layout: CardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Current card layout.
    #[must_use]
    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Commands recorded by the last paint.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of paints so far.
    #[must_use]
    pub fn paint_count(&self) -> u64 {
        self.paints
    }

    /// Ids of the cards drawn by the last paint, in drawing order.
    pub fn drawn_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::CardRect { id, .. } => Some(*id),
            _ => None,
        })
    }

    fn draw_card(&mut self, card: &Card, scale: f64) {
        let rect = card.bounds();
        let layout = self.layout;
        let id = card.id();
        self.commands.push(DrawCommand::CardRect {
            id,
            rect,
            border_width: layout.border_px / scale,
        });

        let inner_width = (rect.width() - 2.0 * layout.margin).max(0.0);
        let title = ellipsize(&card.title, inner_width, FontStyle::TITLE, &self.measure);
        self.commands.push(DrawCommand::Text {
            id,
            origin: Point::new(rect.x0 + layout.margin, rect.y0 + layout.margin),
            text: title,
            font: FontStyle::TITLE,
        });

        let lines = wrap_text(
            &card.content,
            inner_width,
            layout.max_lines,
            FontStyle::BODY,
            &self.measure,
        );
        let mut y = rect.y0 + layout.body_top;
        for text in lines {
            self.commands.push(DrawCommand::Text {
                id,
                origin: Point::new(rect.x0 + layout.margin, y),
                text,
                font: FontStyle::BODY,
            });
            y += layout.line_height;
        }
    }
}

/// Grid region covering `visible`, starting on a multiple of `spacing` and
/// extending one cell past the far edge.
fn grid_bounds(visible: Rect, spacing: f64) -> Rect {
    let x0 = (visible.x0 / spacing).floor() * spacing;
    let y0 = (visible.y0 / spacing).floor() * spacing;
    Rect::new(x0, y0, visible.x1 + spacing, visible.y1 + spacing)
}

impl<M: TextMeasure> Surface for CanvasSurface<M> {
    fn apply_camera(&mut self, camera: &Camera, viewport: Size) {
        self.commands.clear();
        self.paints += 1;
        self.commands.push(DrawCommand::Clear { size: viewport });
        self.commands.push(DrawCommand::SetTransform(camera.affine()));

        let spacing = self.layout.grid_spacing;
        if let Some(visible) = camera.visible_world_rect(viewport)
            && spacing > 0.0
        {
            self.commands.push(DrawCommand::GridLines {
                bounds: grid_bounds(visible, spacing),
                spacing,
                line_width: self.layout.grid_line_px / camera.scale(),
            });
        }
    }

    fn present(&mut self, scene: &Scene<'_>) {
        let scale = scene.camera.scale();
        // Store order keeps the painter's order stable across frames.
        for card in scene.cards.cards() {
            if scene.visible.contains(&card.id()) {
                self.draw_card(card, scale);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use corkboard_camera::Camera;
    use corkboard_cull::VisibilitySet;
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{CanvasSurface, DrawCommand, grid_bounds};
    use crate::store::{CardStore, GridFixture};
    use crate::surface::{Scene, Surface};
    use crate::text::FontStyle;

    #[test]
    fn grid_bounds_snap_to_spacing() {
        let bounds = grid_bounds(Rect::new(-73.0, 20.0, 500.0, 420.0), 50.0);
        assert_eq!(bounds, Rect::new(-100.0, 0.0, 550.0, 470.0));
    }

    #[test]
    fn paint_records_frame_in_order() {
        let cards = CardStore::fixture_grid(&GridFixture {
            count: 3,
            ..GridFixture::default()
        });
        let ids: Vec<_> = cards.cards().iter().map(|c| c.id()).collect();
        let visible: VisibilitySet<_> = [ids[2], ids[0]].into_iter().collect();
        let diff = visible.diff_from(&VisibilitySet::new());

        let camera = Camera::new(Vec2::new(10.0, 20.0), 2.0);
        let viewport = Size::new(800.0, 600.0);
        let mut canvas = CanvasSurface::new();
        canvas.apply_camera(&camera, viewport);
        canvas.present(&Scene {
            camera,
            viewport,
            cards: &cards,
            visible: &visible,
            diff: &diff,
        });

        let commands = canvas.commands();
        assert_eq!(commands[0], DrawCommand::Clear { size: viewport });
        assert_eq!(commands[1], DrawCommand::SetTransform(camera.affine()));
        match &commands[2] {
            DrawCommand::GridLines {
                spacing,
                line_width,
                ..
            } => {
                assert_eq!(*spacing, 50.0);
                assert_eq!(*line_width, 0.5);
            }
            other => panic!("expected grid, got {other:?}"),
        }
        assert_eq!(canvas.drawn_cards().collect::<Vec<_>>(), [ids[0], ids[2]]);

        let border = commands.iter().find_map(|c| match c {
            DrawCommand::CardRect { border_width, .. } => Some(*border_width),
            _ => None,
        });
        assert_eq!(border, Some(1.0));

        let title = commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, font, origin, .. } if *font == FontStyle::TITLE => {
                Some((text.clone(), *origin))
            }
            _ => None,
        });
        assert_eq!(title, Some(("Card 1".to_owned(), Point::new(12.0, 12.0))));
    }

    #[test]
    fn body_is_wrapped_within_the_card() {
        let cards = CardStore::fixture_grid(&GridFixture {
            count: 1,
            ..GridFixture::default()
        });
        let visible: VisibilitySet<_> = cards.geometry().map(|(id, _)| id).collect();
        let diff = visible.diff_from(&VisibilitySet::new());
        let viewport = Size::new(800.0, 600.0);
        let mut canvas = CanvasSurface::new();
        canvas.apply_camera(&Camera::IDENTITY, viewport);
        canvas.present(&Scene {
            camera: Camera::IDENTITY,
            viewport,
            cards: &cards,
            visible: &visible,
            diff: &diff,
        });

        let body: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, font, origin, .. } if *font == FontStyle::BODY => {
                    Some((text.as_str(), origin.y))
                }
                _ => None,
            })
            .collect();
        assert_eq!(body.len(), 6);
        assert_eq!(body[0].1, 36.0);
        assert_eq!(body[5].1, 36.0 + 5.0 * 16.0);
        assert!(body[5].0.ends_with('\u{2026}'));
    }

    #[test]
    fn degenerate_viewport_skips_grid() {
        let mut canvas = CanvasSurface::new();
        canvas.apply_camera(&Camera::IDENTITY, Size::ZERO);
        assert_eq!(canvas.commands().len(), 2);
        assert_eq!(canvas.paint_count(), 1);
    }
}
