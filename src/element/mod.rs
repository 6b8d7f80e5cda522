use serde::{Deserialize, Serialize};

mod common;
mod kind;
mod style;

pub use common::{
    GRID_SIZE, MIN_ELEMENT_HEIGHT, MIN_ELEMENT_WIDTH, clamp_coordinate, snap_to_grid,
};
pub(crate) use common::{constrain_dimension, constrain_position};
pub use kind::{ElementKind, KindCategory};
pub use style::StyleMap;

/// Stable identifier of an element within one document session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed visual object on the page.
///
/// Field names match the exported JSON document, so `kind` is written as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub styles: StyleMap,
}

impl Element {
    pub fn new(id: ElementId, kind: ElementKind, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            width: width.max(1),
            height: height.max(1),
            content: None,
            src: None,
            alt: None,
            styles: StyleMap::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_source(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self.alt = Some(alt.into());
        self
    }

    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = styles;
        self
    }

    /// Right edge in page coordinates
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge in page coordinates
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Test if the element contains the given page position
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        x >= self.x as f32 && x <= self.right() as f32 && y >= self.y as f32 && y <= self.bottom() as f32
    }

    /// Merge a partial update into this element.
    ///
    /// Text is only taken by text-like kinds and sources only by images.
    /// Returns true if anything changed.
    pub fn apply(&mut self, patch: &ElementPatch) -> bool {
        let before = self.clone();

        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width.max(1);
        }
        if let Some(height) = patch.height {
            self.height = height.max(1);
        }
        if let Some(content) = &patch.content {
            if self.kind.accepts_text() {
                self.content = Some(content.clone());
            } else {
                log::debug!("Ignoring text for {} element {}", self.kind, self.id);
            }
        }
        if self.kind.accepts_source() {
            if let Some(src) = &patch.src {
                self.src = Some(src.clone());
            }
            if let Some(alt) = &patch.alt {
                self.alt = Some(alt.clone());
            }
        }
        self.styles.merge(&patch.styles);

        *self != before
    }
}

/// A partial update to an element. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub content: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub styles: StyleMap,
}

impl ElementPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn source(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Default::default()
        }
    }

    pub fn style(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            styles: StyleMap::new().with(key, value),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.set(key, value);
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_position(mut self, x: u32, y: u32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    const FONT_STACK: &str = "Inter, sans-serif";

    /// Default size, content and styles for a freshly dropped element
    pub fn create(kind: ElementKind, id: ElementId, x: u32, y: u32) -> Element {
        match kind {
            ElementKind::Heading => Element::new(id, kind, x, y, 400, 60)
                .with_content("Your Heading Here")
                .with_styles(StyleMap::new()
                    .with("fontSize", "36px")
                    .with("fontWeight", "bold")
                    .with("color", "#1f2937")
                    .with("fontFamily", FONT_STACK)
                    .with("lineHeight", "1.2")),
            ElementKind::Paragraph => Element::new(id, kind, x, y, 400, 80)
                .with_content("Your paragraph text goes here. Click to edit and customize.")
                .with_styles(StyleMap::new()
                    .with("fontSize", "16px")
                    .with("color", "#374151")
                    .with("fontFamily", FONT_STACK)
                    .with("lineHeight", "1.6")),
            ElementKind::Text => Element::new(id, kind, x, y, 200, 40)
                .with_content("Your text here")
                .with_styles(StyleMap::new()
                    .with("fontSize", "16px")
                    .with("color", "#1f2937")
                    .with("fontFamily", FONT_STACK)),
            ElementKind::Image => Element::new(id, kind, x, y, 300, 200)
                .with_source("", "Image")
                .with_styles(StyleMap::new().with("borderRadius", "8px")),
            ElementKind::Button => Element::new(id, kind, x, y, 150, 45)
                .with_content("Click me")
                .with_styles(StyleMap::new()
                    .with("backgroundColor", "#3b82f6")
                    .with("color", "white")
                    .with("borderRadius", "8px")
                    .with("fontSize", "16px")
                    .with("fontWeight", "600")
                    .with("textAlign", "center")
                    .with("fontFamily", FONT_STACK)
                    .with("boxShadow", "0 2px 4px rgba(59, 130, 246, 0.2)")),
            ElementKind::Container => Element::new(id, kind, x, y, 400, 200)
                .with_styles(StyleMap::new()
                    .with("backgroundColor", "#f9fafb")
                    .with("borderRadius", "12px")
                    .with("borderWidth", "2px")
                    .with("borderColor", "#e5e7eb")
                    .with("borderStyle", "dashed")),
        }
    }

    /// The sample page a new session starts with
    pub fn starter_elements() -> Vec<Element> {
        vec![
            Element::new(ElementId(1), ElementKind::Heading, 100, 80, 600, 60)
                .with_content("Welcome to Your Website")
                .with_styles(StyleMap::new()
                    .with("fontSize", "48px")
                    .with("fontWeight", "bold")
                    .with("color", "#1f2937")
                    .with("textAlign", "center")
                    .with("fontFamily", FONT_STACK)
                    .with("lineHeight", "1.2")),
            Element::new(ElementId(2), ElementKind::Paragraph, 100, 160, 600, 80)
                .with_content(
                    "Create beautiful websites with our drag-and-drop editor. \
                     Customize every element to match your vision.",
                )
                .with_styles(StyleMap::new()
                    .with("fontSize", "18px")
                    .with("color", "#6b7280")
                    .with("textAlign", "center")
                    .with("fontFamily", FONT_STACK)
                    .with("lineHeight", "1.6")),
            Element::new(ElementId(3), ElementKind::Button, 300, 260, 200, 50)
                .with_content("Get Started")
                .with_styles(StyleMap::new()
                    .with("backgroundColor", "#3b82f6")
                    .with("color", "white")
                    .with("borderRadius", "12px")
                    .with("fontSize", "16px")
                    .with("fontWeight", "600")
                    .with("textAlign", "center")
                    .with("fontFamily", FONT_STACK)),
            Element::new(ElementId(4), ElementKind::Image, 100, 340, 600, 300)
                .with_source(
                    "https://images.pexels.com/photos/3184299/pexels-photo-3184299.jpeg?auto=compress&cs=tinysrgb&w=800",
                    "Hero Image",
                )
                .with_styles(StyleMap::new().with("borderRadius", "16px")),
        ]
    }
}
