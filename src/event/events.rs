use crate::element::{ElementId, ElementKind};
use crate::state::EditorState;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    StateChanged {
        old: EditorState,
        new: EditorState,
    },
    ElementChanged(ElementEvent),
    SelectionChanged(SelectionEvent),
    PageSettingsChanged,
    ViewChanged {
        zoom: f32,
        grid_enabled: bool,
        snap_to_grid: bool,
    },
    HistoryChanged(HistoryEvent),
    DocumentChanged(DocumentEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementEvent {
    Added { id: ElementId, kind: ElementKind },
    Updated { id: ElementId },
    Moved { id: ElementId, x: u32, y: u32 },
    Resized { id: ElementId, width: u32, height: u32 },
    Removed { id: ElementId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Selected(ElementId),
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    Committed { cursor: usize, len: usize },
    Undone { cursor: usize },
    Redone { cursor: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    Loaded,
    Saved,
    Exported,
}

impl EditorEvent {
    /// Returns true if the event changes what would be saved
    pub fn modifies_document(&self) -> bool {
        matches!(
            self,
            EditorEvent::ElementChanged(_)
                | EditorEvent::PageSettingsChanged
                | EditorEvent::HistoryChanged(HistoryEvent::Undone { .. } | HistoryEvent::Redone { .. })
        )
    }
}
