//! Flat-token persistence layout
//!
//! The external serialization is a space-separated sequence of stitch tags.
//! Ring boundaries are not stored; they are re-derived from the baseline
//! segment count at load time, so the layout only round-trips patterns
//! whose rings all sit at the baseline. Empty slots are written as a
//! reserved placeholder so positions survive the trip.
//!
//! Unknown tags decode untouched. Substituting a fallback style for them is
//! the loading collaborator's call (see `StitchRegistry::fallback`).

use crate::ring::Ring;
use crate::state::GUIDE_LINES_RANGE;
use crate::stitch::StitchId;

/// Placeholder token for an empty segment slot.
pub const ABSENT_TOKEN: &str = "_";

/// Serialize rings as a flat token sequence, one token per segment slot.
pub fn encode(rings: &[Ring]) -> String {
    let mut out = Vec::new();
    for ring in rings {
        for segment in 0..ring.segments as usize {
            match ring.point(segment) {
                Some(stitch) => out.push(stitch.as_str().to_string()),
                None => out.push(ABSENT_TOKEN.to_string()),
            }
        }
    }
    out.join(" ")
}

/// Rebuild rings from a flat token sequence, chunking by `guide_lines`
/// (clamped to the model's baseline bounds). A trailing partial chunk
/// becomes a sparsely-filled final ring.
pub fn decode(text: &str, guide_lines: u32) -> Vec<Ring> {
    let (lo, hi) = GUIDE_LINES_RANGE;
    let guide_lines = guide_lines.clamp(lo, hi);
    let per_ring = guide_lines as usize;

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut rings = Vec::new();
    for chunk in tokens.chunks(per_ring) {
        let mut ring = Ring::empty(guide_lines);
        for (segment, token) in chunk.iter().enumerate() {
            // Placeholder slots are left unset; set_point pads interior
            // holes on its own, and trailing holes stay unallocated.
            if *token != ABSENT_TOKEN {
                ring.set_point(segment, Some(StitchId::new(*token)));
            }
        }
        rings.push(ring);
    }
    rings
}
