//! The main context of the page editor, pairing the element store with the
//! gesture state machine and the id generator.
//!
//! The canvas talks to the store through this context:
//! - `begin_drop` / `finish_drop`: drag a new element in from the library
//! - `begin_move` / `begin_resize`: start a gesture on an existing element
//! - `update_live`: stream pointer deltas while a gesture is active
//! - `finish` / `cancel`: end the active gesture
//!
//! A gesture commits to history once, when it finishes and only if it changed
//! something. Live updates never commit.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_editor::element::ElementId;
//! use storefront_editor::state::{EditorContext, EditorStore};
//!
//! let mut context = EditorContext::new(EditorStore::default());
//! context.begin_move(ElementId(1)).unwrap();
//! context.update_live(40, 0);
//! context.finish().unwrap();
//! ```
use crate::command::Command;
use crate::document::Document;
use crate::element::{ElementId, ElementKind, ElementPatch, factory};
use crate::error::TransitionError;
use crate::event::EditorEvent;
use crate::id_generator::IdGenerator;

use super::{EditorSnapshot, EditorState, EditorStore, GestureOrigin};

#[derive(Debug)]
pub struct EditorContext {
    /// The current gesture state
    state: EditorState,
    /// The element store being edited
    store: EditorStore,
    ids: IdGenerator,
}

impl EditorContext {
    /// Creates a new context around `store`, starting in the `Idle` state.
    pub fn new(store: EditorStore) -> Self {
        let ids = IdGenerator::starting_after(store.elements());
        Self {
            state: EditorState::Idle,
            store,
            ids,
        }
    }

    /// Attempts to transition to a new state, validating the transition and
    /// emitting a `StateChanged` event.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::InvalidStateTransition` if the requested
    /// transition is not allowed from the current state.
    pub fn transition_to(&mut self, new_state: EditorState) -> Result<(), TransitionError> {
        if !self.state.can_transition_to(&new_state) {
            return Err(TransitionError::InvalidStateTransition {
                from: self.state.name(),
                to: new_state.name(),
            });
        }

        let old_state = self.state;
        self.state = new_state;

        self.store.event_bus().emit(EditorEvent::StateChanged {
            old: old_state,
            new: self.state,
        });

        Ok(())
    }

    /// Starts dragging a new element of `kind` in from the component library.
    ///
    /// The candidate gets a fresh id and the kind's default geometry and
    /// content; it is not on the page until `finish_drop` places it.
    pub fn begin_drop(&mut self, kind: ElementKind) -> Result<ElementId, TransitionError> {
        let id = self.fresh_id().ok_or(TransitionError::IdsExhausted)?;
        self.transition_to(EditorState::Dropping { kind })?;
        let candidate = factory::create(kind, id, 0, 0);
        self.store.dispatch(Command::SetDraggedElement(Some(candidate)));
        log::debug!("Dragging new {} element {}", kind, id);
        Ok(id)
    }

    /// Ends a drop. With a position the candidate is placed there (clamped,
    /// snapped when snap is on), selected and committed. Without one the
    /// candidate is discarded and the page is untouched.
    pub fn finish_drop(&mut self, position: Option<(i32, i32)>) -> Result<Option<ElementId>, TransitionError> {
        if !self.state.is_dropping() {
            return Err(TransitionError::InvalidStateTransition {
                from: self.state.name(),
                to: EditorState::Idle.name(),
            });
        }

        let candidate = self.store.dragged().cloned();
        self.store.dispatch(Command::SetDraggedElement(None));
        self.transition_to(EditorState::Idle)?;

        let (Some(mut element), Some((x, y))) = (candidate, position) else {
            log::debug!("Drop ended outside the canvas, discarding candidate");
            return Ok(None);
        };

        let (x, y) = self.store.place_point(x, y);
        element.x = x;
        element.y = y;
        let id = element.id;
        if !self.store.add_element(element) {
            return Ok(None);
        }
        self.store.commit();
        log::info!("Dropped element {} at ({}, {})", id, x, y);
        Ok(Some(id))
    }

    fn fresh_id(&mut self) -> Option<ElementId> {
        loop {
            let id = self.ids.next_id()?;
            if !self.store.document().contains(id) {
                return Some(id);
            }
        }
    }

    /// Drop a new element of `kind` straight at a page position
    pub fn insert(&mut self, kind: ElementKind, x: i32, y: i32) -> Result<Option<ElementId>, TransitionError> {
        self.begin_drop(kind)?;
        self.finish_drop(Some((x, y)))
    }

    /// Begins dragging an existing element. Selects it.
    pub fn begin_move(&mut self, id: ElementId) -> Result<(), TransitionError> {
        let origin = self.origin_of(id)?;
        self.transition_to(EditorState::Moving { id, origin })?;
        self.store.select_element(Some(id));
        Ok(())
    }

    /// Begins resizing an existing element from its corner handle.
    pub fn begin_resize(&mut self, id: ElementId) -> Result<(), TransitionError> {
        let origin = self.origin_of(id)?;
        self.transition_to(EditorState::Resizing { id, origin })?;
        Ok(())
    }

    fn origin_of(&self, id: ElementId) -> Result<GestureOrigin, TransitionError> {
        let element = self.store.element(id).ok_or(TransitionError::ElementNotFound(id))?;
        Ok(GestureOrigin {
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
        })
    }

    /// Streams the pointer offset since the gesture started.
    ///
    /// Moves or resizes the target relative to its starting geometry. Does
    /// nothing outside a move or resize. Returns true if the page changed.
    pub fn update_live(&mut self, dx: i32, dy: i32) -> bool {
        match self.state {
            EditorState::Moving { id, origin } => self.store.dispatch(Command::MoveElement {
                id,
                x: offset(origin.x, dx),
                y: offset(origin.y, dy),
            }),
            EditorState::Resizing { id, origin } => self.store.dispatch(Command::ResizeElement {
                id,
                width: offset(origin.width, dx),
                height: offset(origin.height, dy),
            }),
            _ => false,
        }
    }

    /// Ends the active gesture, committing once if it changed the page.
    ///
    /// Finishing a drop this way discards the candidate. Returns true if a
    /// checkpoint was committed.
    pub fn finish(&mut self) -> Result<bool, TransitionError> {
        match self.state {
            EditorState::Idle => Err(TransitionError::InvalidStateTransition {
                from: EditorState::Idle.name(),
                to: EditorState::Idle.name(),
            }),
            EditorState::Dropping { .. } => {
                self.finish_drop(None)?;
                Ok(false)
            }
            EditorState::Moving { id, origin } | EditorState::Resizing { id, origin } => {
                self.transition_to(EditorState::Idle)?;
                let changed = self
                    .store
                    .element(id)
                    .is_some_and(|element| {
                        (element.x, element.y, element.width, element.height)
                            != (origin.x, origin.y, origin.width, origin.height)
                    });
                if changed {
                    self.store.commit();
                }
                Ok(changed)
            }
        }
    }

    /// Abandons the active gesture without committing. The target goes back
    /// to its starting geometry; a dragged candidate is discarded.
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        match self.state {
            EditorState::Idle => Ok(()),
            EditorState::Dropping { .. } => {
                self.finish_drop(None)?;
                Ok(())
            }
            EditorState::Moving { id, origin } | EditorState::Resizing { id, origin } => {
                self.store.dispatch(Command::UpdateElement {
                    id,
                    patch: ElementPatch::default()
                        .with_position(origin.x, origin.y)
                        .with_size(origin.width, origin.height),
                });
                self.transition_to(EditorState::Idle)
            }
        }
    }

    /// Deletes the selected element as one undoable step
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.store.selected() else {
            return false;
        };
        if !self.store.delete_element(id) {
            return false;
        }
        self.store.commit();
        true
    }

    /// Replaces the page; any gesture in flight is dropped.
    pub fn load_document(&mut self, document: Document) {
        self.state = EditorState::Idle;
        self.store.load_document(document);
        self.ids = IdGenerator::starting_after(self.store.elements());
    }

    /// Replaces the page and the view with a saved session
    pub fn load_snapshot(&mut self, snapshot: EditorSnapshot) {
        let view = snapshot.view;
        self.load_document(snapshot.document);
        self.store.restore_view(view);
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    /// Gets a reference to the current gesture state.
    pub fn current_state(&self) -> &EditorState {
        &self.state
    }

    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EditorStore {
        &mut self.store
    }
}

fn offset(base: u32, delta: i32) -> i32 {
    (i64::from(base) + i64::from(delta)).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
