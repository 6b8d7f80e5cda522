mod editor_state;
pub mod context;
mod persistence;
mod store;
mod view;

pub use editor_state::{EditorState, GestureOrigin};
pub use context::EditorContext;
pub use persistence::{
    StatePersistence,
    EditorSnapshot,
    ExportDocument,
    PersistenceError,
    PersistenceResult,
    EXPORT_FILE_NAME,
    EXPORT_VERSION,
    SESSION_NAME,
};
pub use store::EditorStore;
pub use view::ViewSettings;
