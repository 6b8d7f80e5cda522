use std::cell::Cell;
use std::rc::Rc;

use eframe::egui;

use crate::config::EditorConfig;
use crate::element::{ElementId, ElementKind, KindCategory};
use crate::event::{DirtyTracker, EventLog};
use crate::panels::{central_panel, library_panel, property_panel, status_bar, toolbar};
use crate::renderer::Renderer;
use crate::state::{
    EditorContext, EditorSnapshot, EditorState, EditorStore, StatePersistence, SESSION_NAME,
};

/// How many recent events the status bar keeps around
const EVENT_LOG_CAPACITY: usize = 64;

/// An inline text edit in progress on the canvas
#[derive(Debug, Clone)]
pub(crate) struct TextEditSession {
    pub(crate) id: ElementId,
    pub(crate) buffer: String,
    pub(crate) focus_requested: bool,
}

pub struct EditorApp {
    pub(crate) context: EditorContext,
    pub(crate) renderer: Renderer,
    pub(crate) persistence: StatePersistence,
    pub(crate) library_category: KindCategory,
    /// Where the page was drawn last frame, used to map pointer drops onto it
    pub(crate) page_rect: Option<egui::Rect>,
    /// Pointer travel since the current move or resize began
    pub(crate) gesture_drag: egui::Vec2,
    pub(crate) text_edit: Option<TextEditSession>,
    pub(crate) status: Option<String>,
    pub(crate) event_log: EventLog,
    dirty: Rc<Cell<bool>>,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::with_store(EditorStore::default())
    }
}

impl EditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = EditorConfig::load_default();

        let restored = cc
            .storage
            .and_then(|storage| storage.get_string(eframe::APP_KEY))
            .and_then(|json| EditorSnapshot::decode(&json));

        let store = match restored {
            Some(snapshot) => {
                log::info!("Restoring session {}", snapshot.session_id());
                snapshot.restore(config)
            }
            None => EditorStore::new(config),
        };

        Self::with_store(store)
    }

    pub fn with_store(store: EditorStore) -> Self {
        let persistence = StatePersistence::new(store.config().state_dir.clone());

        let tracker = DirtyTracker::new();
        let dirty = tracker.handle();
        let event_log = EventLog::new(EVENT_LOG_CAPACITY);
        store.subscribe(Box::new(tracker));
        store.subscribe(Box::new(event_log.clone()));

        Self {
            context: EditorContext::new(store),
            renderer: Renderer::new(),
            persistence,
            library_category: KindCategory::Text,
            page_rect: None,
            gesture_drag: egui::Vec2::ZERO,
            text_edit: None,
            status: None,
            event_log,
            dirty,
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EditorContext {
        &mut self.context
    }

    pub fn store(&self) -> &EditorStore {
        self.context.store()
    }

    /// True when the page changed since it was last loaded or saved
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Map a screen position onto page coordinates, if it lies on the page.
    ///
    /// `anchor` is subtracted so the point lands on the candidate's center.
    pub(crate) fn page_position(&self, pointer: egui::Pos2, anchor: egui::Vec2) -> Option<(i32, i32)> {
        let page_rect = self.page_rect?;
        if !page_rect.contains(pointer) {
            return None;
        }
        let zoom = self.store().view().zoom;
        let local = (pointer - page_rect.min) / zoom - anchor;
        Some((local.x.round() as i32, local.y.round() as i32))
    }

    /// Start an inline edit of a text-like element
    pub(crate) fn begin_text_edit(&mut self, id: ElementId) {
        let Some(element) = self.store().element(id) else {
            return;
        };
        if !element.kind.accepts_text() {
            return;
        }
        self.text_edit = Some(TextEditSession {
            id,
            buffer: element.content.clone().unwrap_or_default(),
            focus_requested: false,
        });
    }

    pub(crate) fn insert_element(&mut self, kind: ElementKind, x: i32, y: i32) {
        match self.context.insert(kind, x, y) {
            Ok(Some(id)) => self.set_status(format!("Added {} {}", kind.label().to_lowercase(), id)),
            Ok(None) => {}
            Err(err) => log::warn!("Could not insert {}: {}", kind, err),
        }
    }

    pub(crate) fn delete_selected(&mut self) {
        if self.context.delete_selected() {
            self.text_edit = None;
            self.set_status("Deleted element");
        }
    }

    pub(crate) fn undo(&mut self) {
        self.text_edit = None;
        self.context.undo();
    }

    pub(crate) fn redo(&mut self) {
        self.text_edit = None;
        self.context.redo();
    }

    /// Write the session to the state directory
    pub(crate) fn save_session(&mut self) {
        match self.persistence.save_snapshot(self.store(), SESSION_NAME) {
            Ok(path) => self.set_status(format!("Saved to {}", path.display())),
            Err(err) => {
                log::error!("Failed to save session: {}", err);
                self.set_status(format!("Save failed: {}", err));
            }
        }
    }

    /// Restore the session saved in the state directory
    pub(crate) fn load_session(&mut self) {
        match self.persistence.load_snapshot(SESSION_NAME) {
            Ok(snapshot) => {
                self.text_edit = None;
                self.context.load_snapshot(snapshot);
                self.set_status("Loaded saved session");
            }
            Err(err) => {
                log::warn!("Failed to load session: {}", err);
                self.set_status(format!("Load failed: {}", err));
            }
        }
    }

    /// Export the page document as JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn export(&mut self, _ctx: &egui::Context) {
        match self.persistence.export(self.store()) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display())),
            Err(err) => {
                log::error!("Export failed: {}", err);
                self.set_status(format!("Export failed: {}", err));
            }
        }
    }

    /// Export the page document as JSON
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn export(&mut self, ctx: &egui::Context) {
        use crate::event::{DocumentEvent, EditorEvent};
        use crate::state::ExportDocument;

        match ExportDocument::from_store(self.store()).to_json() {
            Ok(json) => {
                ctx.copy_text(json);
                self.store()
                    .event_bus()
                    .emit(EditorEvent::DocumentChanged(DocumentEvent::Exported));
                self.set_status("Copied page JSON to the clipboard");
            }
            Err(err) => {
                log::error!("Export failed: {}", err);
                self.set_status(format!("Export failed: {}", err));
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Text fields keep their own undo and delete behaviour
        if ctx.wants_keyboard_input() {
            return;
        }

        let redo = ctx.input_mut(|i| {
            i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z)
                || i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y)
        });
        if redo {
            self.redo();
        } else if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.undo();
        }

        let delete = ctx.input_mut(|i| {
            i.consume_key(egui::Modifiers::NONE, egui::Key::Delete)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::Backspace)
        });
        if delete {
            self.delete_selected();
        }

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)) {
            if self.context.current_state().is_idle() {
                self.context.store_mut().select_element(None);
            } else if let Err(err) = self.context.cancel() {
                log::warn!("Could not cancel gesture: {}", err);
            }
        }
    }

    /// Outline of the library candidate under the pointer while dropping
    fn draw_drop_preview(&self, ctx: &egui::Context) {
        let EditorState::Dropping { kind } = *self.context.current_state() else {
            return;
        };
        let (Some(candidate), Some(pointer)) = (self.store().dragged(), ctx.pointer_latest_pos()) else {
            return;
        };

        let zoom = self.store().view().zoom;
        let size = egui::vec2(candidate.width as f32, candidate.height as f32) * zoom;
        let rect = egui::Rect::from_center_size(pointer, size);
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("drop_preview"),
        ));
        self.renderer.draw_candidate(&painter, rect, kind);
    }
}

impl eframe::App for EditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&EditorSnapshot::new(self.store())) {
            Ok(json) => storage.set_string(eframe::APP_KEY, json),
            Err(err) => log::error!("Failed to persist editor session: {}", err),
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        toolbar(self, ctx);
        status_bar(self, ctx);
        library_panel(self, ctx);
        property_panel(self, ctx);
        central_panel(self, ctx);

        self.draw_drop_preview(ctx);
    }
}
