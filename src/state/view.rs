use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;

/// Canvas size, zoom and grid flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub zoom: f32,
    pub grid_enabled: bool,
    pub snap_to_grid: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl ViewSettings {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            zoom: 1.0,
            grid_enabled: config.grid_enabled,
            snap_to_grid: config.snap_to_grid,
        }
    }
}
