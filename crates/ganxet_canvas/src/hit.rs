//! Polar hit-testing
//!
//! Maps a pattern-local point to the ring/segment under it. This is the
//! exact left-inverse of glyph placement: placement centers a glyph at
//! radius `(ring + 0.5) * spacing` and angle `segment * step + step / 2`,
//! and any point within a segment's angular span resolves to that segment.

use ganxet_core::Point;
use ganxet_pattern::PatternState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingSegment {
    pub ring: usize,
    pub segment: usize,
}

/// Resolve `local` (center-relative, pre-scale) to a ring/segment, or
/// `None` when the point falls outside every ring.
pub fn ring_segment_at(state: &PatternState, local: Point) -> Option<RingSegment> {
    let spacing = state.ring_spacing() as f32;
    let ring = (local.hypot() / spacing).floor() as usize;
    let segments = state.rings().get(ring)?.segments;

    let tau = std::f32::consts::TAU;
    // Normalize to [0, 2π) before dividing; atan2 returns (-π, π].
    let angle = (local.y.atan2(local.x) + tau) % tau;
    let segment = ((angle / tau) * segments as f32).floor() as u32 % segments;

    Some(RingSegment {
        ring,
        segment: segment as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_rings(n: usize) -> PatternState {
        let mut state = PatternState::new();
        for _ in 1..n {
            state.add_ring();
        }
        state
    }

    /// Glyph placement coordinates for (ring, segment).
    fn placement(state: &PatternState, ring: usize, segment: usize) -> Point {
        let spacing = state.ring_spacing() as f32;
        let radius = (ring as f32 + 0.5) * spacing;
        let step = std::f32::consts::TAU / state.rings()[ring].segments as f32;
        let angle = segment as f32 * step + step * 0.5;
        Point::new(angle.cos() * radius, angle.sin() * radius)
    }

    #[test]
    fn hit_test_is_left_inverse_of_placement() {
        let mut state = state_with_rings(3);
        state.increase_points(0, 0);
        state.increase_points(1, 0);
        state.increase_points(1, 0);

        for ring in 0..state.rings().len() {
            let segments = state.rings()[ring].segments as usize;
            for segment in 0..segments {
                let p = placement(&state, ring, segment);
                assert_eq!(
                    ring_segment_at(&state, p),
                    Some(RingSegment { ring, segment }),
                    "ring {ring} segment {segment}"
                );
            }
        }
    }

    #[test]
    fn whole_angular_span_maps_to_the_segment() {
        let state = state_with_rings(1);
        let spacing = state.ring_spacing() as f32;
        let step = std::f32::consts::TAU / 8.0;

        // Points near the leading and trailing edge of segment 3, not just
        // its center.
        for t in [0.05, 0.5, 0.95] {
            let angle = (3.0 + t) * step;
            let p = Point::new(angle.cos() * spacing * 0.5, angle.sin() * spacing * 0.5);
            assert_eq!(
                ring_segment_at(&state, p),
                Some(RingSegment { ring: 0, segment: 3 })
            );
        }
    }

    #[test]
    fn outside_every_ring_is_none() {
        let state = state_with_rings(2);
        let far = state.ring_spacing() as f32 * 10.0;
        assert_eq!(ring_segment_at(&state, Point::new(far, 0.0)), None);
    }

    #[test]
    fn center_resolves_to_ring_zero() {
        let state = state_with_rings(1);
        let hit = ring_segment_at(&state, Point::new(0.0, 0.0)).unwrap();
        assert_eq!(hit.ring, 0);
    }

    #[test]
    fn negative_angles_normalize() {
        let state = state_with_rings(1);
        // Just above the +x axis in screen space (y < 0): the last segment.
        let spacing = state.ring_spacing() as f32;
        let hit = ring_segment_at(&state, Point::new(spacing * 0.5, -0.01)).unwrap();
        assert_eq!(hit.segment, 7);
    }
}
