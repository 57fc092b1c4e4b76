//! The chart renderer
//!
//! One `render` call produces one [`Frame`]: the static layer (ring circles
//! and guide lines) comes from a cache keyed on ring count, spacing, and
//! guide-line count; stitch glyphs and the hover preview are recorded fresh
//! every frame; everything is composited into a single command buffer so
//! the compositor replays it in one pass.
//!
//! Commands are in pattern-local space (origin at the pattern center). The
//! frame transform carries the pan/zoom; stroke widths and text sizes are
//! pre-divided by the scale so they keep constant apparent size.

use ganxet_core::{
    Brush, Color, DrawCommand, DrawContext, Point, RecordingContext, Stroke, TextStyle, Vec2,
};
use ganxet_pattern::{PatternState, StitchRegistry};
use tracing::debug;

use crate::hit::ring_segment_at;
use crate::surface::Surface;
use crate::view::ViewTransform;

/// Visual parameters of the chart itself.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub ring_stroke: Color,
    pub guide_stroke: Color,
    /// Stroke width of rings and guides at scale 1.
    pub base_stroke_width: f32,
    /// Glyph font size at scale 1.
    pub glyph_size: f32,
    /// Alpha multiplier for the hover preview glyph.
    pub hover_alpha: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            ring_stroke: Color::from_hex(0xDDDDDD),
            guide_stroke: Color::from_hex(0xEEEEEE),
            base_stroke_width: 1.0,
            glyph_size: 20.0,
            hover_alpha: 0.5,
        }
    }
}

/// Pan/zoom a compositor applies when replaying a frame:
/// `screen = translate + local * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTransform {
    pub translate: Vec2,
    pub scale: f32,
}

/// One rendered frame. The compositor clears its target, applies the
/// transform, and replays `commands` in order.
#[derive(Clone, Debug)]
pub struct Frame {
    pub transform: FrameTransform,
    pub commands: Vec<DrawCommand>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StaticKey {
    rings: usize,
    ring_spacing: u32,
    guide_lines: u32,
}

pub struct ChartRenderer {
    registry: StitchRegistry,
    style: ChartStyle,
    surface: Surface,
    view: ViewTransform,
    static_key: Option<StaticKey>,
    static_layer: Vec<DrawCommand>,
    static_rebuilds: u64,
}

impl ChartRenderer {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            registry: StitchRegistry::default(),
            style: ChartStyle::default(),
            surface: Surface::new(width, height, device_pixel_ratio),
            view: ViewTransform::new(),
            static_key: None,
            static_layer: Vec::new(),
            static_rebuilds: 0,
        }
    }

    pub fn with_registry(mut self, registry: StitchRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn registry(&self) -> &StitchRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    /// Number of static-layer rebuilds so far (cache effectiveness probe).
    pub fn static_rebuilds(&self) -> u64 {
        self.static_rebuilds
    }

    /// Apply the host element's new layout box. Invalidates the static
    /// layer when anything changed.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        if self.surface.resize(width, height, device_pixel_ratio) {
            self.static_key = None;
        }
    }

    /// Render one frame. `hover` is the pointer position in surface-local
    /// screen coordinates, when a preview glyph is wanted.
    pub fn render(&mut self, state: &PatternState, hover: Option<Point>) -> Frame {
        let viewport = self.surface.logical();
        let spacing = state.ring_spacing() as f32;
        let extent = state.rings().len() as f32 * spacing;

        self.view.step(viewport, extent);
        let scale = self.view.scale;

        let key = StaticKey {
            rings: state.rings().len(),
            ring_spacing: state.ring_spacing(),
            guide_lines: state.guide_lines(),
        };
        if self.static_key != Some(key) {
            let mut ctx = RecordingContext::new(viewport);
            record_rings_and_guides(&mut ctx, state, &self.style, Point::ZERO);
            self.static_layer = ctx.into_commands();
            self.static_key = Some(key);
            self.static_rebuilds += 1;
            debug!(
                rings = key.rings,
                guide_lines = key.guide_lines,
                "renderer: static layer rebuilt"
            );
        }

        // Composite: static blit (widths adjusted for the current scale),
        // then fresh glyphs, hover preview on top.
        let mut commands = blit_scaled(&self.static_layer, scale);

        let mut dynamic = RecordingContext::new(viewport);
        record_glyphs(&mut dynamic, state, &self.registry, &self.style, Point::ZERO, scale);

        if let Some(screen) = hover {
            let local = self.view.screen_to_local(screen, viewport);
            if let Some(hit) = ring_segment_at(state, local) {
                if let Some(stitch_style) = self.registry.lookup(&self.view.selected_stitch) {
                    let pos = glyph_position(
                        hit.ring,
                        state.rings()[hit.ring].segments,
                        hit.segment,
                        spacing,
                        Point::ZERO,
                    );
                    let text_style = TextStyle::new(self.style.glyph_size / scale).with_color(
                        stitch_style
                            .color
                            .with_alpha(stitch_style.color.a * self.style.hover_alpha),
                    );
                    dynamic.draw_text(&stitch_style.symbol.to_string(), pos, &text_style);
                }
            }
        }
        commands.extend(dynamic.into_commands());

        let center = viewport.center();
        Frame {
            transform: FrameTransform {
                translate: Vec2::new(center.x + self.view.offset.x, center.y + self.view.offset.y),
                scale,
            },
            commands,
        }
    }
}

/// Glyph placement: mid-segment angle, mid-ring radius.
pub fn glyph_position(
    ring: usize,
    segments: u32,
    segment: usize,
    spacing: f32,
    center: Point,
) -> Point {
    let radius = (ring as f32 + 0.5) * spacing;
    let step = std::f32::consts::TAU / segments.max(1) as f32;
    let angle = segment as f32 * step + step * 0.5;
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}

/// Record ring circles and guide lines around `center` at unit scale.
pub(crate) fn record_rings_and_guides(
    ctx: &mut dyn DrawContext,
    state: &PatternState,
    style: &ChartStyle,
    center: Point,
) {
    let spacing = state.ring_spacing() as f32;
    let extent = state.rings().len() as f32 * spacing;
    let stroke = Stroke::new(style.base_stroke_width);

    let tau = std::f32::consts::TAU;
    let guide_lines = state.guide_lines().max(1);
    for g in 0..guide_lines {
        let angle = g as f32 / guide_lines as f32 * tau;
        ctx.stroke_polyline(
            &[
                center,
                Point::new(
                    center.x + angle.cos() * extent,
                    center.y + angle.sin() * extent,
                ),
            ],
            &stroke,
            Brush::Solid(style.guide_stroke),
        );
    }

    for i in 0..state.rings().len() {
        let radius = (i as f32 + 1.0) * spacing;
        ctx.stroke_circle(center, radius, &stroke, Brush::Solid(style.ring_stroke));
    }
}

/// Record every placed stitch glyph. Unknown stitch tags are skipped.
pub(crate) fn record_glyphs(
    ctx: &mut dyn DrawContext,
    state: &PatternState,
    registry: &StitchRegistry,
    style: &ChartStyle,
    center: Point,
    scale: f32,
) {
    let spacing = state.ring_spacing() as f32;
    for (ring_idx, ring) in state.rings().iter().enumerate() {
        for segment in 0..ring.segments as usize {
            let Some(stitch) = ring.point(segment) else {
                continue;
            };
            let Some(stitch_style) = registry.lookup(stitch) else {
                continue;
            };
            let pos = glyph_position(ring_idx, ring.segments, segment, spacing, center);
            let text_style =
                TextStyle::new(style.glyph_size / scale).with_color(stitch_style.color);
            ctx.draw_text(&stitch_style.symbol.to_string(), pos, &text_style);
        }
    }
}

/// Copy the cached static layer, dividing stroke widths by the current
/// scale so line weight stays constant on screen. This is the per-frame
/// "blit": one pass over an already-recorded buffer.
fn blit_scaled(layer: &[DrawCommand], scale: f32) -> Vec<DrawCommand> {
    let inv = 1.0 / scale.max(f32::EPSILON);
    layer
        .iter()
        .map(|cmd| match cmd {
            DrawCommand::StrokeCircle {
                center,
                radius,
                stroke,
                brush,
            } => DrawCommand::StrokeCircle {
                center: *center,
                radius: *radius,
                stroke: Stroke::new(stroke.width * inv),
                brush: *brush,
            },
            DrawCommand::StrokePolyline {
                points,
                stroke,
                brush,
            } => DrawCommand::StrokePolyline {
                points: points.clone(),
                stroke: Stroke::new(stroke.width * inv),
                brush: *brush,
            },
            other => other.clone(),
        })
        .collect()
}
