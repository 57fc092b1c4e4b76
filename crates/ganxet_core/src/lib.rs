//! Ganxet core primitives
//!
//! Foundation types shared by the pattern model and the canvas renderer:
//!
//! - 2D geometry (`Point`, `Size`, `Rect`, `Vec2`)
//! - `Color` and brush/stroke/text styling
//! - The `DrawContext` trait and its recording implementation, which turns
//!   rendering into an inspectable `DrawCommand` buffer

pub mod color;
pub mod draw;
pub mod events;
pub mod geometry;

pub use color::Color;
pub use draw::{
    Brush, CornerRadius, DrawCommand, DrawContext, RecordingContext, Stroke, TextStyle,
};
pub use events::{Modifiers, PointerButton, PointerEvent, ScrollDelta};
pub use geometry::{Point, Rect, Size, Vec2};
