//! Draw context - the drawing API consumed by the canvas renderer
//!
//! Rendering in this workspace terminates at a `DrawCommand` buffer. The
//! renderer records into a `RecordingContext`; a compositor (GPU, SVG,
//! whatever the host embeds) replays the commands. Tests inspect the buffer
//! directly via `RecordingContext::commands()`.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};
use tracing::trace;

/// Brush for filling shapes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Stroke parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
}

impl Stroke {
    pub const fn new(width: f32) -> Self {
        Self { width }
    }
}

/// Text styling for glyph and label drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            color: Color::BLACK,
        }
    }

    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub radius: f32,
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self { radius }
    }
}

/// One recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        corner_radius: CornerRadius,
        brush: Brush,
    },
    FillCircle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        stroke: Stroke,
        brush: Brush,
    },
    StrokePolyline {
        points: Vec<Point>,
        stroke: Stroke,
        brush: Brush,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// The drawing API
pub trait DrawContext {
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush);
    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush);
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush);
    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke, brush: Brush);
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

/// A `DrawContext` that records commands instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawContext for RecordingContext {
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            brush,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            brush,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke: *stroke,
            brush,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke, brush: Brush) {
        if points.len() < 2 {
            trace!("recording: degenerate polyline dropped");
            return;
        }
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
            stroke: *stroke,
            brush,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_preserves_order() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.fill_circle(Point::ZERO, 5.0, Brush::Solid(Color::WHITE));
        ctx.draw_text("x", Point::new(1.0, 2.0), &TextStyle::new(12.0));

        assert_eq!(ctx.size(), Size::new(100.0, 100.0));
        assert_eq!(ctx.commands().len(), 2);
        assert!(matches!(ctx.commands()[0], DrawCommand::FillCircle { .. }));
        assert!(matches!(ctx.commands()[1], DrawCommand::DrawText { .. }));
    }

    #[test]
    fn degenerate_polyline_is_dropped() {
        let mut ctx = RecordingContext::new(Size::ZERO);
        ctx.stroke_polyline(&[Point::ZERO], &Stroke::new(1.0), Brush::Solid(Color::BLACK));
        assert!(ctx.commands().is_empty());
    }
}
