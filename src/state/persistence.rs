use serde::{Serialize, Deserialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;
use super::{EditorStore, ViewSettings};
use crate::config::EditorConfig;
use crate::document::Document;
use crate::element::Element;
use crate::event::{DocumentEvent, EditorEvent};
use crate::page::PageSettings;
use crate::util::time;

/// Version tag written into exported documents
pub const EXPORT_VERSION: &str = "1.0";

/// File name of the exported document
pub const EXPORT_FILE_NAME: &str = "website-data.json";

/// Name of the session snapshot the app restores at startup
pub const SESSION_NAME: &str = "session";

/// Errors that can occur during state persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize state: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write state: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to read state file {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The downloadable page document: elements, page settings and a version tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub elements: Vec<Element>,
    pub page_settings: PageSettings,
    pub version: String,
}

impl ExportDocument {
    pub fn from_store(store: &EditorStore) -> Self {
        Self {
            elements: store.elements().to_vec(),
            page_settings: store.page_settings().clone(),
            version: EXPORT_VERSION.to_owned(),
        }
    }

    /// Pretty-printed JSON, as offered for download
    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_document(self) -> Document {
        if self.version != EXPORT_VERSION {
            log::warn!("Importing document version {} (expected {})", self.version, EXPORT_VERSION);
        }
        Document::new(self.elements, self.page_settings)
    }
}

/// Represents a snapshot of an editor session that can be serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    /// The page: elements and page settings
    pub document: Document,
    /// Zoom and grid flags
    #[serde(default)]
    pub view: ViewSettings,
    /// Timestamp of when the snapshot was taken
    #[serde(default)]
    pub timestamp: u64,
    /// Version of the application when the snapshot was taken
    #[serde(default)]
    pub version: String,
}

impl EditorSnapshot {
    /// Create a new snapshot from the current store
    pub fn new(store: &EditorStore) -> Self {
        Self {
            document: store.document().clone(),
            view: *store.view(),
            timestamp: time::timestamp_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.document.id()
    }

    /// Build a store from this snapshot. History starts over from the restored page.
    pub fn restore(self, config: EditorConfig) -> EditorStore {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Snapshot version {} differs from current version {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }

        let mut store = EditorStore::with_document(self.document, config);
        store.restore_view(self.view);
        store
    }

    /// Parse a persisted snapshot; malformed data is logged and ignored
    pub fn decode(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("Ignoring malformed editor snapshot: {}", err);
                None
            }
        }
    }
}

/// Saves and loads editor sessions as JSON files in one directory
#[derive(Debug, Clone)]
pub struct StatePersistence {
    /// Directory where state files are stored
    state_dir: PathBuf,
}

impl StatePersistence {
    /// Create a new state persistence manager
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.state_dir.join(format!("{}.json", name))
    }

    /// Save a snapshot of the current editor state
    pub fn save_snapshot(&self, store: &EditorStore, name: &str) -> PersistenceResult<PathBuf> {
        let snapshot = EditorSnapshot::new(store);
        let path = self.snapshot_path(name);

        fs::create_dir_all(&self.state_dir)?;

        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, json)?;

        log::info!("Saved session {} to {}", snapshot.session_id(), path.display());
        store.event_bus().emit(EditorEvent::DocumentChanged(DocumentEvent::Saved));
        Ok(path)
    }

    /// Load a snapshot by name
    pub fn load_snapshot(&self, name: &str) -> PersistenceResult<EditorSnapshot> {
        let path = self.snapshot_path(name);
        let json = fs::read_to_string(&path).map_err(|e| PersistenceError::ReadError {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        Ok(serde_json::from_str(&json)?)
    }

    /// Restore a named session, or start a fresh one if it is missing or unreadable
    pub fn load_or_default(&self, name: &str, config: EditorConfig) -> EditorStore {
        match self.load_snapshot(name) {
            Ok(snapshot) => {
                log::info!("Restored session {} from {}", snapshot.session_id(), name);
                snapshot.restore(config)
            }
            Err(err) => {
                log::warn!("Starting a fresh session: {}", err);
                EditorStore::new(config)
            }
        }
    }

    /// Write the export document next to the saved sessions
    pub fn export(&self, store: &EditorStore) -> PersistenceResult<PathBuf> {
        let json = ExportDocument::from_store(store).to_json()?;
        let path = self.state_dir.join(EXPORT_FILE_NAME);

        fs::create_dir_all(&self.state_dir)?;
        fs::write(&path, json)?;

        log::info!("Exported {} elements to {}", store.elements().len(), path.display());
        store.event_bus().emit(EditorEvent::DocumentChanged(DocumentEvent::Exported));
        Ok(path)
    }

    /// Read an export document back as a page
    pub fn import(&self, path: impl AsRef<Path>) -> PersistenceResult<Document> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| PersistenceError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(ExportDocument::from_json(&json)?.into_document())
    }
}
