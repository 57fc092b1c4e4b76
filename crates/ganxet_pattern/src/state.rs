//! The editor's canonical state and its mutation operations
//!
//! One `PatternState` per editor session. All mutation goes through the
//! methods here; each mutating method ends by offering the new structure to
//! the history, which records it only if it actually changed.

use tracing::debug;

use crate::history::History;
use crate::ring::{snapshot_rings, Ring};
use crate::stitch::StitchId;

/// Baseline segment count bounds.
pub const GUIDE_LINES_RANGE: (u32, u32) = (4, 24);
/// Ring spacing bounds, logical pixels.
pub const RING_SPACING_RANGE: (u32, u32) = (30, 80);

const DEFAULT_GUIDE_LINES: u32 = 8;
const DEFAULT_RING_SPACING: u32 = 50;

#[derive(Clone, Debug)]
pub struct PatternState {
    rings: Vec<Ring>,
    guide_lines: u32,
    ring_spacing: u32,
    history: History,
}

impl PatternState {
    /// A fresh session: one ring of `guide_lines` chain stitches, recorded
    /// as history entry 0.
    pub fn new() -> Self {
        let guide_lines = DEFAULT_GUIDE_LINES;
        let rings = Self::template(guide_lines);
        let history = History::new(&rings);
        Self {
            rings,
            guide_lines,
            ring_spacing: DEFAULT_RING_SPACING,
            history,
        }
    }

    fn template(guide_lines: u32) -> Vec<Ring> {
        vec![Ring::filled(guide_lines, StitchId::default_stitch())]
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn guide_lines(&self) -> u32 {
        self.guide_lines
    }

    pub fn ring_spacing(&self) -> u32 {
        self.ring_spacing
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    /// The oldest retained snapshot.
    pub fn first_snapshot(&self) -> &[Ring] {
        self.history.first()
    }

    // ── Mutations ───────────────────────────────────────────────────────

    /// Replace the pattern with the default template.
    pub fn reset(&mut self) {
        self.rings = Self::template(self.guide_lines);
        debug!("pattern: reset to template");
        self.save_state();
    }

    /// Replace the rings wholesale (project load path). The input is
    /// deep-copied; the caller keeps ownership of its own structure.
    pub fn set_rings(&mut self, rings: &[Ring]) {
        self.rings = snapshot_rings(rings);
        debug!(rings = self.rings.len(), "pattern: rings replaced");
        self.save_state();
    }

    /// Place the given stitch at a resolved ring/segment. Out-of-range ring
    /// is a silent no-op; in-range segments grow the points vector.
    pub fn set_stitch_at(&mut self, ring: usize, segment: usize, stitch: StitchId) {
        let Some(target) = self.rings.get_mut(ring) else {
            return;
        };
        target.set_point(segment, Some(stitch));
        self.save_state();
    }

    /// Set the baseline segment count (clamped 4..=24).
    ///
    /// Ring 0 is the chain start: its segment count and points are forced to
    /// the new baseline, resetting its markers to the default stitch. A
    /// second ring, if present, follows the new count without a points reset.
    pub fn update_guide_lines(&mut self, value: u32) {
        let (lo, hi) = GUIDE_LINES_RANGE;
        let value = value.clamp(lo, hi);
        self.guide_lines = value;

        if let Some(ring0) = self.rings.first_mut() {
            *ring0 = Ring::filled(value, StitchId::default_stitch());
        }
        if let Some(ring1) = self.rings.get_mut(1) {
            ring1.segments = value;
        }
        debug!(guide_lines = value, "pattern: guide lines updated");
        self.save_state();
    }

    /// Set the ring spacing (clamped 30..=80). Pure view geometry; spacing
    /// alone never creates a history entry.
    pub fn update_ring_spacing(&mut self, value: u32) {
        let (lo, hi) = RING_SPACING_RANGE;
        self.ring_spacing = value.clamp(lo, hi);
        self.save_state();
    }

    /// Append a new outermost ring. Its segment count follows the current
    /// outermost ring (or the baseline when the pattern is empty); no
    /// markers are placed.
    pub fn add_ring(&mut self) {
        let segments = self
            .rings
            .last()
            .map(|r| r.segments)
            .unwrap_or(self.guide_lines);
        self.rings.push(Ring::empty(segments));
        debug!(rings = self.rings.len(), "pattern: ring added");
        self.save_state();
    }

    /// An increase stitch at (`ring`, `segment`): the next outward ring
    /// gains one segment. `segment` does not enter the arithmetic; the
    /// count change is global to the round. No next ring, no effect.
    pub fn increase_points(&mut self, ring: usize, _segment: usize) {
        let Some(next) = self.rings.get_mut(ring + 1) else {
            return;
        };
        next.segments += 1;
        self.save_state();
    }

    /// A decrease stitch: the next outward ring loses one segment, never
    /// dropping below the baseline.
    pub fn decrease_points(&mut self, ring: usize, _segment: usize) {
        let guide_lines = self.guide_lines;
        let Some(next) = self.rings.get_mut(ring + 1) else {
            return;
        };
        next.segments = next.segments.saturating_sub(1).max(guide_lines);
        self.save_state();
    }

    /// Restore the previous snapshot. `false` when there is nothing to
    /// undo (callers may use this to disable a button).
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(rings) => {
                self.rings = rings;
                true
            }
            None => false,
        }
    }

    /// Restore the next snapshot. `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(rings) => {
                self.rings = rings;
                true
            }
            None => false,
        }
    }

    fn save_state(&mut self) {
        self.history.record(&self.rings);
    }
}

impl Default for PatternState {
    fn default() -> Self {
        Self::new()
    }
}
