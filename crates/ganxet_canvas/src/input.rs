//! Interaction bindings for the editor canvas.
//!
//! The canvas crate is a library, so gesture bindings must be configurable.
//! Bindings are purely data-driven: a drag either paints stitches or pans
//! the view, decided by which required-modifier mask matches first.

use ganxet_core::Modifiers;

/// A "required modifiers" mask: every `true` field must be held;
/// non-required keys are ignored.
fn matches(required: Modifiers, held: Modifiers) -> bool {
    (!required.shift || held.shift)
        && (!required.ctrl || held.ctrl)
        && (!required.alt || held.alt)
        && (!required.meta || held.meta)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAction {
    None,
    /// Drag moves the view (target offset).
    Pan,
    /// Drag paints the selected stitch through hit-testing.
    Paint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragBinding {
    pub required: Modifiers,
    pub action: DragAction,
}

/// Gesture bindings shared by editor hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorInputBindings {
    /// Checked first; a modifier-gated pan wins over painting.
    pub pan_drag: DragBinding,
    pub paint_drag: DragBinding,
}

impl EditorInputBindings {
    /// Resolve the action for the currently held modifiers.
    pub fn resolve(&self, held: Modifiers) -> DragAction {
        for binding in [self.pan_drag, self.paint_drag] {
            if binding.action != DragAction::None && matches(binding.required, held) {
                return binding.action;
            }
        }
        DragAction::None
    }
}

impl Default for EditorInputBindings {
    fn default() -> Self {
        Self {
            pan_drag: DragBinding {
                required: Modifiers {
                    shift: true,
                    ..Modifiers::NONE
                },
                action: DragAction::Pan,
            },
            paint_drag: DragBinding {
                required: Modifiers::NONE,
                action: DragAction::Paint,
            },
        }
    }
}
