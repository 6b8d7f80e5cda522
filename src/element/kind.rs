use serde::{Deserialize, Serialize};

/// The closed set of element kinds the editor can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Heading,
    Paragraph,
    Image,
    Button,
    Container,
}

/// Groups used by the component library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindCategory {
    Text,
    Media,
    Interactive,
    Layout,
}

impl KindCategory {
    pub const ALL: [KindCategory; 4] = [
        KindCategory::Text,
        KindCategory::Media,
        KindCategory::Interactive,
        KindCategory::Layout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            KindCategory::Text => "Text",
            KindCategory::Media => "Media",
            KindCategory::Interactive => "Interactive",
            KindCategory::Layout => "Layout",
        }
    }

    /// Kinds listed under this category, in library order
    pub fn kinds(&self) -> &'static [ElementKind] {
        match self {
            KindCategory::Text => &[ElementKind::Heading, ElementKind::Paragraph, ElementKind::Text],
            KindCategory::Media => &[ElementKind::Image],
            KindCategory::Interactive => &[ElementKind::Button],
            KindCategory::Layout => &[ElementKind::Container],
        }
    }
}

impl ElementKind {
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Text,
        ElementKind::Heading,
        ElementKind::Paragraph,
        ElementKind::Image,
        ElementKind::Button,
        ElementKind::Container,
    ];

    /// Get the kind as the string used in exported documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Heading => "heading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
            ElementKind::Container => "container",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Heading => "Heading",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::Image => "Image",
            ElementKind::Button => "Button",
            ElementKind::Container => "Container",
        }
    }

    /// Short glyph shown on library tiles
    pub fn preview(&self) -> &'static str {
        match self {
            ElementKind::Text => "Aa",
            ElementKind::Heading => "H1",
            ElementKind::Paragraph => "P",
            ElementKind::Image => "IMG",
            ElementKind::Button => "BTN",
            ElementKind::Container => "[ ]",
        }
    }

    pub fn category(&self) -> KindCategory {
        match self {
            ElementKind::Text | ElementKind::Heading | ElementKind::Paragraph => KindCategory::Text,
            ElementKind::Image => KindCategory::Media,
            ElementKind::Button => KindCategory::Interactive,
            ElementKind::Container => KindCategory::Layout,
        }
    }

    /// Whether the element's text can be edited inline
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            ElementKind::Text | ElementKind::Heading | ElementKind::Paragraph | ElementKind::Button
        )
    }

    /// Whether the element carries a media source
    pub fn accepts_source(&self) -> bool {
        matches!(self, ElementKind::Image)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
