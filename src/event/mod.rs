mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use handlers::{DirtyTracker, EventLog};

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

// Re-export the event types
pub use events::DocumentEvent;
pub use events::EditorEvent;
pub use events::ElementEvent;
pub use events::HistoryEvent;
pub use events::SelectionEvent;
