//! Standalone chart image export
//!
//! Renders a self-contained image of the pattern at scale 1, sized from
//! the pattern extent plus fixed padding, with a legend of the stitches in
//! use. The live view's pan/zoom/hover never leak into the export.

use anyhow::ensure;
use ganxet_core::{
    Brush, Color, CornerRadius, DrawCommand, DrawContext, Point, Rect, RecordingContext, Size,
    TextStyle,
};
use ganxet_pattern::{PatternState, StitchRegistry};
use tracing::debug;

use crate::renderer::{record_glyphs, record_rings_and_guides, ChartStyle};

const PADDING: f32 = 40.0;
const LEGEND_LINE_HEIGHT: f32 = 22.0;
const LEGEND_TEXT_SIZE: f32 = 14.0;

/// A finished export: screen-space commands, no transform to apply.
#[derive(Clone, Debug)]
pub struct ChartImage {
    pub name: String,
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

/// Render `state` as a standalone image.
pub fn export_as_image(
    state: &PatternState,
    registry: &StitchRegistry,
    name: &str,
) -> anyhow::Result<ChartImage> {
    ensure!(!name.is_empty(), "export name must not be empty");
    ensure!(
        !state.rings().is_empty(),
        "cannot export an empty pattern"
    );

    let spacing = state.ring_spacing() as f32;
    let extent = state.rings().len() as f32 * spacing;
    let chart_side = extent * 2.0 + PADDING * 2.0;
    let center = Point::new(PADDING + extent, PADDING + extent);

    let legend = legend_entries(state, registry);
    let legend_height = legend.len() as f32 * LEGEND_LINE_HEIGHT;
    let size = Size::new(chart_side, chart_side + legend_height + PADDING * 0.5);

    let style = ChartStyle::default();
    let mut ctx = RecordingContext::new(size);

    ctx.fill_rect(
        Rect::new(0.0, 0.0, size.width, size.height),
        CornerRadius::default(),
        Brush::Solid(Color::WHITE),
    );
    record_rings_and_guides(&mut ctx, state, &style, center);
    record_glyphs(&mut ctx, state, registry, &style, center, 1.0);

    let text_style = TextStyle::new(LEGEND_TEXT_SIZE).with_color(Color::BLACK);
    for (i, (symbol, desc)) in legend.iter().enumerate() {
        let y = chart_side + i as f32 * LEGEND_LINE_HEIGHT;
        ctx.draw_text(
            &format!("{symbol}  {desc}"),
            Point::new(PADDING, y),
            &text_style,
        );
    }

    debug!(name, rings = state.rings().len(), "export: image rendered");
    Ok(ChartImage {
        name: name.to_string(),
        size,
        commands: ctx.into_commands(),
    })
}

/// Symbol/description pairs for the stitches the pattern uses, in order of
/// first appearance. Unknown tags are left out, same as in rendering.
fn legend_entries(state: &PatternState, registry: &StitchRegistry) -> Vec<(char, String)> {
    let mut seen: Vec<&str> = Vec::new();
    let mut entries = Vec::new();
    for ring in state.rings() {
        for segment in 0..ring.segments as usize {
            let Some(stitch) = ring.point(segment) else {
                continue;
            };
            let base = stitch.base();
            if seen.contains(&base) {
                continue;
            }
            seen.push(base);
            if let Some(style) = registry.lookup(stitch) {
                entries.push((style.symbol, style.desc.clone()));
            }
        }
    }
    entries
}
