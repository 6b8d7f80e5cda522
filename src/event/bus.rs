use std::cell::RefCell;
use std::fmt;

use crate::event::{EditorEvent, EventHandler};

/// Fans store events out to subscribed handlers.
///
/// Delivery is synchronous and in subscription order. A handler runs while the
/// bus is borrowed, so it must not emit on or subscribe to the same bus.
#[derive(Default)]
pub struct EventBus {
    subscribers: RefCell<Vec<Box<dyn EventHandler>>>,
}

/// A cloned store gets a silent bus. Handlers such as the dirty tracker hold
/// state tied to one session and cannot be duplicated.
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handler_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.subscribers.borrow_mut().push(handler);
    }

    pub fn emit(&self, event: EditorEvent) {
        let mut subscribers = self.subscribers.borrow_mut();
        log::trace!("Delivering {:?} to {} subscribers", event, subscribers.len());
        subscribers.iter_mut().for_each(|handler| handler.handle_event(&event));
    }

    pub fn handler_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
