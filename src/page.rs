use serde::{Deserialize, Serialize};

/// Page-level background and typography defaults applied to the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_repeat: Option<String>,
    pub font_family: String,
    pub max_width: String,
    pub padding: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_owned(),
            background_image: None,
            background_size: None,
            background_position: None,
            background_repeat: None,
            font_family: "Inter, sans-serif".to_owned(),
            max_width: "1200px".to_owned(),
            padding: "40px".to_owned(),
        }
    }
}

impl PageSettings {
    /// Merge a partial update. Returns true if anything changed.
    pub fn apply(&mut self, patch: &PageSettingsPatch) -> bool {
        let before = self.clone();

        if let Some(color) = &patch.background_color {
            self.background_color = color.clone();
        }
        if let Some(image) = &patch.background_image {
            self.background_image = Some(image.clone());
        }
        if let Some(size) = &patch.background_size {
            self.background_size = Some(size.clone());
        }
        if let Some(position) = &patch.background_position {
            self.background_position = Some(position.clone());
        }
        if let Some(repeat) = &patch.background_repeat {
            self.background_repeat = Some(repeat.clone());
        }
        if let Some(font) = &patch.font_family {
            self.font_family = font.clone();
        }
        if let Some(max_width) = &patch.max_width {
            self.max_width = max_width.clone();
        }
        if let Some(padding) = &patch.padding {
            self.padding = padding.clone();
        }

        *self != before
    }
}

/// A partial update to [`PageSettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSettingsPatch {
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub background_size: Option<String>,
    pub background_position: Option<String>,
    pub background_repeat: Option<String>,
    pub font_family: Option<String>,
    pub max_width: Option<String>,
    pub padding: Option<String>,
}

impl PageSettingsPatch {
    pub fn background_color(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn font_family(font: impl Into<String>) -> Self {
        Self {
            font_family: Some(font.into()),
            ..Default::default()
        }
    }
}
