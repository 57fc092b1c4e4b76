//! Ganxet pattern model
//!
//! The canonical data model of a radial crochet chart: concentric rings of
//! angular segments, each segment holding at most one stitch marker. The
//! model is the sole owner of its data; every mutation goes through
//! [`PatternState`] methods and lands in a bounded undo/redo history.
//!
//! Failure policy: out-of-range ring/segment indices are silent no-ops,
//! unknown stitch tags flow through unharmed (renderers skip them), and
//! undo/redo report "nothing happened" as `false`. Nothing in the mutation
//! path panics or returns `Err`.

pub mod history;
pub mod ring;
pub mod state;
pub mod stitch;
pub mod tokens;

pub use history::History;
pub use ring::Ring;
pub use state::PatternState;
pub use stitch::{Modifier, RegistryError, StitchId, StitchRegistry, StitchStyle, DEFAULT_STITCH};
