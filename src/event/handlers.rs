use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::event::{DocumentEvent, EditorEvent, EventHandler};

/// Tracks whether the document changed since it was last loaded or saved
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    dirty: Rc<Cell<bool>>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared handle reading the same flag
    pub fn handle(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }
}

impl EventHandler for DirtyTracker {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::DocumentChanged(DocumentEvent::Saved | DocumentEvent::Loaded) => {
                self.dirty.set(false);
            }
            event if event.modifies_document() => self.dirty.set(true),
            _ => {}
        }
    }
}

/// Keeps the most recent events, newest last
#[derive(Debug, Clone)]
pub struct EventLog {
    events: Rc<RefCell<VecDeque<EditorEvent>>>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Copy of the recorded events, oldest first
    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.borrow().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &EditorEvent) {
        let mut events = self.events.borrow_mut();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
    }
}
