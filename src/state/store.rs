//! The element store: single owner of the page's elements, the selection,
//! page settings and view flags.
//!
//! Every mutation is a [`Command`] applied by [`EditorStore::dispatch`]. The
//! named methods (`move_element`, `undo`, ...) are thin wrappers that build
//! the command and dispatch it. Changes are applied synchronously and then
//! announced on the store's [`EventBus`].
//!
//! References to ids that are not on the page are inert: the command is a
//! no-op and `dispatch` returns `false`.

use crate::command::{Command, History};
use crate::config::EditorConfig;
use crate::document::Document;
use crate::element::{
    Element, ElementId, ElementPatch, MIN_ELEMENT_HEIGHT, MIN_ELEMENT_WIDTH,
    constrain_dimension, constrain_position,
};
use crate::event::{
    DocumentEvent, EditorEvent, ElementEvent, EventBus, EventHandler, HistoryEvent, SelectionEvent,
};
use crate::page::{PageSettings, PageSettingsPatch};

use super::ViewSettings;

#[derive(Debug)]
pub struct EditorStore {
    document: Document,
    selected: Option<ElementId>,
    /// Candidate element being dragged in from the component library
    dragged: Option<Element>,
    history: History,
    view: ViewSettings,
    config: EditorConfig,
    event_bus: EventBus,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorStore {
    /// A store holding the starter page
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(Document::starter(), config)
    }

    pub fn with_document(mut document: Document, config: EditorConfig) -> Self {
        document.validate();
        let history = History::with_limit(document.elements(), config.history_limit);
        let view = ViewSettings::from_config(&config);
        Self {
            document,
            selected: None,
            dragged: None,
            history,
            view,
            config,
            event_bus: EventBus::new(),
        }
    }

    /// Apply one command. Returns true if the state changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        log::debug!("Dispatching {}", command.name());
        let mut events = Vec::new();
        let changed = self.apply(command, &mut events);
        for event in events {
            self.event_bus.emit(event);
        }
        changed
    }

    fn apply(&mut self, command: Command, events: &mut Vec<EditorEvent>) -> bool {
        match command {
            Command::AddElement(element) => {
                if self.document.contains(element.id) {
                    log::warn!("Element {} already exists, ignoring add", element.id);
                    return false;
                }
                let (id, kind) = (element.id, element.kind);
                self.document.push(element);
                events.push(EditorEvent::ElementChanged(ElementEvent::Added { id, kind }));
                self.set_selection(Some(id), events);
                true
            }

            Command::UpdateElement { id, patch } => {
                let changed = self
                    .document
                    .element_mut(id)
                    .is_some_and(|element| element.apply(&patch));
                if changed {
                    events.push(EditorEvent::ElementChanged(ElementEvent::Updated { id }));
                }
                changed
            }

            Command::DeleteElement(id) => {
                if self.document.remove(id).is_none() {
                    return false;
                }
                events.push(EditorEvent::ElementChanged(ElementEvent::Removed { id }));
                if self.selected == Some(id) {
                    self.set_selection(None, events);
                }
                true
            }

            Command::SelectElement(selection) => self.set_selection(selection, events),

            Command::SetDraggedElement(candidate) => {
                if self.dragged == candidate {
                    return false;
                }
                self.dragged = candidate;
                true
            }

            Command::MoveElement { id, x, y } => {
                let grid = self.snap_grid();
                let x = constrain_position(i64::from(x), grid);
                let y = constrain_position(i64::from(y), grid);
                let Some(element) = self.document.element_mut(id) else {
                    return false;
                };
                if (element.x, element.y) == (x, y) {
                    return false;
                }
                element.x = x;
                element.y = y;
                events.push(EditorEvent::ElementChanged(ElementEvent::Moved { id, x, y }));
                true
            }

            Command::ResizeElement { id, width, height } => {
                let grid = self.snap_grid();
                let width = constrain_dimension(i64::from(width), MIN_ELEMENT_WIDTH, grid);
                let height = constrain_dimension(i64::from(height), MIN_ELEMENT_HEIGHT, grid);
                let Some(element) = self.document.element_mut(id) else {
                    return false;
                };
                if (element.width, element.height) == (width, height) {
                    return false;
                }
                element.width = width;
                element.height = height;
                events.push(EditorEvent::ElementChanged(ElementEvent::Resized { id, width, height }));
                true
            }

            Command::UpdatePageSettings(patch) => {
                let changed = self.document.page_settings_mut().apply(&patch);
                if changed {
                    events.push(EditorEvent::PageSettingsChanged);
                }
                changed
            }

            Command::SetZoom(zoom) => {
                let zoom = self.config.clamp_zoom(zoom);
                if self.view.zoom == zoom {
                    return false;
                }
                self.view.zoom = zoom;
                events.push(self.view_event());
                true
            }

            Command::ToggleGrid => {
                self.view.grid_enabled = !self.view.grid_enabled;
                events.push(self.view_event());
                true
            }

            Command::ToggleSnapToGrid => {
                self.view.snap_to_grid = !self.view.snap_to_grid;
                events.push(self.view_event());
                true
            }

            Command::Commit => {
                self.history.commit(self.document.elements());
                log::info!(
                    "Committed history checkpoint {}/{}",
                    self.history.cursor() + 1,
                    self.history.len()
                );
                events.push(EditorEvent::HistoryChanged(HistoryEvent::Committed {
                    cursor: self.history.cursor(),
                    len: self.history.len(),
                }));
                true
            }

            Command::Undo => {
                let Some(snapshot) = self.history.undo() else {
                    log::debug!("Nothing to undo");
                    return false;
                };
                self.document.replace_elements(snapshot.to_vec());
                log::info!("Undo to checkpoint {}", self.history.cursor());
                events.push(EditorEvent::HistoryChanged(HistoryEvent::Undone {
                    cursor: self.history.cursor(),
                }));
                self.drop_stale_selection(events);
                true
            }

            Command::Redo => {
                let Some(snapshot) = self.history.redo() else {
                    log::debug!("Nothing to redo");
                    return false;
                };
                self.document.replace_elements(snapshot.to_vec());
                log::info!("Redo to checkpoint {}", self.history.cursor());
                events.push(EditorEvent::HistoryChanged(HistoryEvent::Redone {
                    cursor: self.history.cursor(),
                }));
                self.drop_stale_selection(events);
                true
            }
        }
    }

    fn set_selection(&mut self, selection: Option<ElementId>, events: &mut Vec<EditorEvent>) -> bool {
        if self.selected == selection {
            return false;
        }
        self.selected = selection;
        events.push(EditorEvent::SelectionChanged(match selection {
            Some(id) => SelectionEvent::Selected(id),
            None => SelectionEvent::Cleared,
        }));
        true
    }

    /// Undo/redo can remove the selected element; the selection follows it
    fn drop_stale_selection(&mut self, events: &mut Vec<EditorEvent>) {
        if let Some(id) = self.selected {
            if !self.document.contains(id) {
                self.set_selection(None, events);
            }
        }
    }

    fn view_event(&self) -> EditorEvent {
        EditorEvent::ViewChanged {
            zoom: self.view.zoom,
            grid_enabled: self.view.grid_enabled,
            snap_to_grid: self.view.snap_to_grid,
        }
    }

    /// Grid unit to snap to, if snapping is on
    fn snap_grid(&self) -> Option<u32> {
        self.view.snap_to_grid.then_some(self.config.grid_size)
    }

    /// Clamp and (when snap is on) snap a page position
    pub fn place_point(&self, x: i32, y: i32) -> (u32, u32) {
        let grid = self.snap_grid();
        (
            constrain_position(i64::from(x), grid),
            constrain_position(i64::from(y), grid),
        )
    }

    /// Replace the whole session with `document`, resetting history and selection
    pub fn load_document(&mut self, mut document: Document) {
        document.validate();
        log::info!("Loading document {} with {} elements", document.id(), document.len());
        self.history.reset(document.elements());
        self.document = document;
        self.dragged = None;
        let mut events = Vec::new();
        self.set_selection(None, &mut events);
        events.push(EditorEvent::DocumentChanged(DocumentEvent::Loaded));
        for event in events {
            self.event_bus.emit(event);
        }
    }

    pub(crate) fn restore_view(&mut self, view: ViewSettings) {
        self.view = ViewSettings {
            zoom: self.config.clamp_zoom(view.zoom),
            ..view
        };
    }

    // Command shorthands

    pub fn add_element(&mut self, element: Element) -> bool {
        self.dispatch(Command::AddElement(element))
    }

    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        self.dispatch(Command::UpdateElement { id, patch })
    }

    pub fn move_element(&mut self, id: ElementId, x: i32, y: i32) -> bool {
        self.dispatch(Command::MoveElement { id, x, y })
    }

    pub fn resize_element(&mut self, id: ElementId, width: i32, height: i32) -> bool {
        self.dispatch(Command::ResizeElement { id, width, height })
    }

    pub fn delete_element(&mut self, id: ElementId) -> bool {
        self.dispatch(Command::DeleteElement(id))
    }

    pub fn select_element(&mut self, selection: Option<ElementId>) -> bool {
        self.dispatch(Command::SelectElement(selection))
    }

    pub fn update_page_settings(&mut self, patch: PageSettingsPatch) -> bool {
        self.dispatch(Command::UpdatePageSettings(patch))
    }

    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        self.dispatch(Command::SetZoom(zoom))
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.view.zoom + self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.view.zoom - self.config.zoom_step)
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.dispatch(Command::ToggleGrid)
    }

    pub fn toggle_snap(&mut self) -> bool {
        self.dispatch(Command::ToggleSnapToGrid)
    }

    pub fn commit(&mut self) -> bool {
        self.dispatch(Command::Commit)
    }

    /// Commit only if the elements differ from the current checkpoint
    pub fn commit_if_changed(&mut self) -> bool {
        if self.history.current() == self.document.elements() {
            return false;
        }
        self.commit()
    }

    pub fn undo(&mut self) -> bool {
        self.dispatch(Command::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.dispatch(Command::Redo)
    }

    // Read access

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn elements(&self) -> &[Element] {
        self.document.elements()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.document.element(id)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// The selected element, if the selection points at one on the page
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.document.element(id))
    }

    pub fn dragged(&self) -> Option<&Element> {
        self.dragged.as_ref()
    }

    pub fn page_settings(&self) -> &PageSettings {
        self.document.page_settings()
    }

    pub fn view(&self) -> &ViewSettings {
        &self.view
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Subscribe a handler to every change applied to this store
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }
}
