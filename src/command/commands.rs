use crate::element::{Element, ElementId, ElementPatch};
use crate::page::PageSettingsPatch;
use serde::{Deserialize, Serialize};

/// Every mutation the editor store accepts.
///
/// Commands are applied one at a time through `EditorStore::dispatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Append a fully formed element and select it
    AddElement(Element),

    /// Merge fields into an element
    UpdateElement {
        id: ElementId,
        patch: ElementPatch,
    },

    /// Remove an element, clearing the selection if it pointed there
    DeleteElement(ElementId),

    /// Set or clear the current selection
    SelectElement(Option<ElementId>),

    /// Set or clear the element being dragged in from the library
    SetDraggedElement(Option<Element>),

    /// Set an absolute position (clamped, snapped when snap is on)
    MoveElement {
        id: ElementId,
        x: i32,
        y: i32,
    },

    /// Set a size (floored, snapped when snap is on)
    ResizeElement {
        id: ElementId,
        width: i32,
        height: i32,
    },

    UpdatePageSettings(PageSettingsPatch),

    SetZoom(f32),

    ToggleGrid,

    ToggleSnapToGrid,

    /// Record the current elements as a history checkpoint
    Commit,

    Undo,

    Redo,
}

impl Command {
    /// Human-readable name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement(_) => "Add Element",
            Command::UpdateElement { .. } => "Update Element",
            Command::DeleteElement(_) => "Delete Element",
            Command::SelectElement(_) => "Select Element",
            Command::SetDraggedElement(_) => "Set Dragged Element",
            Command::MoveElement { .. } => "Move Element",
            Command::ResizeElement { .. } => "Resize Element",
            Command::UpdatePageSettings(_) => "Update Page Settings",
            Command::SetZoom(_) => "Set Zoom",
            Command::ToggleGrid => "Toggle Grid",
            Command::ToggleSnapToGrid => "Toggle Snap",
            Command::Commit => "Commit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
        }
    }
}
