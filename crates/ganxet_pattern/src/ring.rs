//! One concentric ring of the chart
//!
//! `points` may be shorter than `segments`: segment-count increases do not
//! backfill markers, and hosts may write a marker at any in-range slot,
//! leaving earlier slots empty. An out-of-range or empty slot reads as
//! absent, never as an error.

use serde::{Deserialize, Serialize};

use crate::stitch::StitchId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    /// Number of angular divisions. Always at least 1.
    pub segments: u32,
    /// Stitch markers, indexed by segment. `None` is an empty slot.
    pub points: Vec<Option<StitchId>>,
}

impl Ring {
    /// A ring with every slot set to `stitch`.
    pub fn filled(segments: u32, stitch: StitchId) -> Self {
        let segments = segments.max(1);
        Self {
            segments,
            points: vec![Some(stitch); segments as usize],
        }
    }

    /// A ring with no markers placed yet.
    pub fn empty(segments: u32) -> Self {
        Self {
            segments: segments.max(1),
            points: Vec::new(),
        }
    }

    /// The marker at `segment`, if any.
    pub fn point(&self, segment: usize) -> Option<&StitchId> {
        self.points.get(segment).and_then(Option::as_ref)
    }

    /// Place (or clear) a marker. Out of range of the segment count is a
    /// silent no-op; the points vector grows with empty slots as needed.
    pub fn set_point(&mut self, segment: usize, stitch: Option<StitchId>) {
        if segment >= self.segments as usize {
            return;
        }
        if segment >= self.points.len() {
            self.points.resize(segment + 1, None);
        }
        self.points[segment] = stitch;
    }

    /// An independent copy sharing no storage with `self`.
    ///
    /// Written out explicitly so history snapshots can never alias live
    /// state, whatever the field types become.
    pub fn snapshot(&self) -> Ring {
        let mut points = Vec::with_capacity(self.points.len());
        for slot in &self.points {
            points.push(slot.as_ref().map(|s| StitchId::new(s.as_str())));
        }
        Ring {
            segments: self.segments,
            points,
        }
    }
}

/// Structural equality over whole ring sequences: same ring count, same
/// segment counts, same point sequences.
pub fn rings_equal(a: &[Ring], b: &[Ring]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| x.segments == y.segments && x.points == y.points)
}

/// Snapshot a whole ring sequence.
pub fn snapshot_rings(rings: &[Ring]) -> Vec<Ring> {
    rings.iter().map(Ring::snapshot).collect()
}
