use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::element::GRID_SIZE;

/// Tunables of the editor.
///
/// Every field has a default, so a partial JSON file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid unit used by snapping and the grid overlay
    pub grid_size: u32,
    /// Snap-to-grid state of a new session
    pub snap_to_grid: bool,
    /// Grid overlay state of a new session
    pub grid_enabled: bool,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
    /// Maximum number of history snapshots; `None` keeps all of them
    pub history_limit: Option<usize>,
    /// Where saved sessions and exports are written
    pub state_dir: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_to_grid: true,
            grid_enabled: true,
            canvas_width: 1200,
            canvas_height: 800,
            min_zoom: 0.25,
            max_zoom: 2.0,
            zoom_step: 0.25,
            history_limit: None,
            state_dir: PathBuf::from("editor_state"),
        }
    }
}

impl EditorConfig {
    /// Name of the config file looked up by [`EditorConfig::load_default`]
    pub const FILE_NAME: &'static str = "storefront_editor.json";

    /// Read a config file, falling back to defaults if it is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::debug!("No editor config at {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&json) {
            Ok(config) => {
                log::info!("Loaded editor config from {}", path.display());
                config.sanitized()
            }
            Err(err) => {
                log::warn!("Ignoring malformed editor config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load from the path in `STOREFRONT_EDITOR_CONFIG`, or [`Self::FILE_NAME`]
    pub fn load_default() -> Self {
        let path = std::env::var_os("STOREFRONT_EDITOR_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::FILE_NAME));
        Self::load(path)
    }

    /// Clamp a zoom factor into the configured range
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return 1.0_f32.clamp(self.min_zoom, self.max_zoom);
        }
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    fn sanitized(mut self) -> Self {
        if !(self.min_zoom > 0.0) {
            self.min_zoom = Self::default().min_zoom;
        }
        if !(self.max_zoom >= self.min_zoom) {
            self.max_zoom = self.min_zoom.max(Self::default().max_zoom);
        }
        if !(self.zoom_step > 0.0) {
            self.zoom_step = Self::default().zoom_step;
        }
        self.canvas_width = self.canvas_width.max(1);
        self.canvas_height = self.canvas_height.max(1);
        self
    }
}
