//! Ganxet canvas renderer
//!
//! Canvas-first rendering of a [`ganxet_pattern::PatternState`] snapshot.
//! Output is a [`Frame`]: one composited `DrawCommand` buffer in
//! pattern-local coordinates plus the view transform (translate + scale) a
//! compositor applies when replaying it. Stroke widths and text sizes in
//! the buffer are pre-divided by the view scale, so geometry zooms while
//! apparent line weight and glyph size stay constant.
//!
//! Interaction plumbing lives here too: polar hit-testing (the exact
//! inverse of glyph placement), eased zoom/pan, frame coalescing, and
//! drag rate-limiting. Event translation from a host toolkit stays with
//! the host.

pub mod export;
pub mod hit;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod surface;
pub mod view;

pub use export::{export_as_image, ChartImage};
pub use hit::{ring_segment_at, RingSegment};
pub use input::{DragAction, DragBinding, EditorInputBindings};
pub use renderer::{ChartRenderer, ChartStyle, Frame, FrameTransform};
pub use scheduler::{DragDebouncer, FrameScheduler};
pub use surface::Surface;
pub use view::ViewTransform;
