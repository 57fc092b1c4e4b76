//! Transient view state: zoom, pan, selected stitch
//!
//! Scale and offset ease toward their targets with a fixed per-frame
//! low-pass factor instead of snapping, so wheel zoom and drag pan feel
//! continuous. Nothing here is persisted.

use ganxet_core::{Point, Size, Vec2};
use ganxet_pattern::StitchId;

pub const MIN_SCALE: f32 = 0.3;
pub const MAX_SCALE: f32 = 3.0;

/// Wheel zoom step.
pub const ZOOM_STEP: f32 = 0.1;

/// Per-frame easing factor toward the target scale/offset.
const EASE_FACTOR: f32 = 0.2;

const SETTLE_EPS: f32 = 1e-3;

#[derive(Clone, Debug)]
pub struct ViewTransform {
    pub scale: f32,
    pub target_scale: f32,
    pub offset: Vec2,
    pub target_offset: Vec2,
    pub selected_stitch: StitchId,
}

impl ViewTransform {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            target_scale: 1.0,
            offset: Vec2::ZERO,
            target_offset: Vec2::ZERO,
            selected_stitch: StitchId::default_stitch(),
        }
    }

    /// Nudge the target zoom (wheel handler passes `±ZOOM_STEP`).
    pub fn adjust_zoom(&mut self, delta: f32) {
        self.target_scale = (self.target_scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Shift the target pan by a screen-space delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.target_offset = Vec2::new(self.target_offset.x + dx, self.target_offset.y + dy);
    }

    /// Ease back to the identity view.
    pub fn reset_view(&mut self) {
        self.target_scale = 1.0;
        self.target_offset = Vec2::ZERO;
    }

    /// Advance one frame: clamp the pan target so the pattern cannot leave
    /// the viewport neighborhood, then ease scale and offset toward their
    /// targets.
    pub fn step(&mut self, viewport: Size, pattern_radius: f32) {
        let max_x = viewport.width * 0.5 + pattern_radius * self.scale;
        let max_y = viewport.height * 0.5 + pattern_radius * self.scale;
        self.target_offset = self.target_offset.clamp_axes(max_x, max_y);

        self.scale += (self.target_scale - self.scale) * EASE_FACTOR;
        self.offset = Vec2::new(
            self.offset.x + (self.target_offset.x - self.offset.x) * EASE_FACTOR,
            self.offset.y + (self.target_offset.y - self.offset.y) * EASE_FACTOR,
        );
    }

    /// Whether the easing has converged (no further frames needed for the
    /// view alone).
    pub fn is_settled(&self) -> bool {
        (self.target_scale - self.scale).abs() < SETTLE_EPS
            && (self.target_offset.x - self.offset.x).abs() < SETTLE_EPS
            && (self.target_offset.y - self.offset.y).abs() < SETTLE_EPS
    }

    /// Map a surface-local screen point into pattern-local (center-relative,
    /// pre-scale) space. Inverse of the frame transform.
    pub fn screen_to_local(&self, screen: Point, viewport: Size) -> Point {
        let center = viewport.center();
        Point::new(
            (screen.x - center.x - self.offset.x) / self.scale,
            (screen.y - center.y - self.offset.y) / self.scale,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}
