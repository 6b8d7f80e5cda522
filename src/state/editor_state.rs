//! The gesture state machine of the editor canvas.
//!
//! Pointer interaction is level-triggered: while a gesture is active the
//! canvas streams live updates into the store, and the gesture ends with a
//! single history commit (or a cancel, which commits nothing).
//!
//! # State Transitions
//!
//! ```text
//!              ┌─────────────┐
//!        ┌─────►  Dropping   ├─────┐
//!        │     └─────────────┘     │
//! ┌──────┴───┐ ┌─────────────┐     │ ┌──────────┐
//! │   Idle   ├─►   Moving    ├─────┼─►   Idle   │
//! └──────┬───┘ └─────────────┘     │ └──────────┘
//!        │     ┌─────────────┐     │
//!        └─────►  Resizing   ├─────┘
//!              └─────────────┘
//! ```
//!
//! Every gesture starts from `Idle` and returns to `Idle`; gestures never
//! chain directly into each other.
use crate::element::{ElementId, ElementKind};
use serde::{Deserialize, Serialize};

/// Geometry of an element when a gesture started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureOrigin {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The possible states of the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorState {
    /// No active gesture
    #[default]
    Idle,
    /// A new element is being dragged in from the component library
    Dropping { kind: ElementKind },
    /// An element is being dragged around the canvas
    Moving { id: ElementId, origin: GestureOrigin },
    /// An element is being resized from its corner handle
    Resizing { id: ElementId, origin: GestureOrigin },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            // From Idle, we can start any gesture
            (EditorState::Idle, EditorState::Idle) => false,
            (EditorState::Idle, _) => true,

            // Every gesture finishes or cancels back to Idle
            (_, EditorState::Idle) => true,

            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Dropping { .. } => "Dropping",
            EditorState::Moving { .. } => "Moving",
            EditorState::Resizing { .. } => "Resizing",
        }
    }

    /// Returns true if no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_dropping(&self) -> bool {
        matches!(self, EditorState::Dropping { .. })
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, EditorState::Moving { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, EditorState::Resizing { .. })
    }

    /// The element targeted by a move or resize
    pub fn target(&self) -> Option<ElementId> {
        match self {
            EditorState::Moving { id, .. } | EditorState::Resizing { id, .. } => Some(*id),
            _ => None,
        }
    }
}
