use std::collections::HashSet;

use crate::element::{Element, ElementId};
use crate::page::PageSettings;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The page being edited: its ordered elements and page settings.
///
/// Elements are kept in paint order; the last one is drawn on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    elements: Vec<Element>,
    #[serde(default)]
    page_settings: PageSettings,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new(), PageSettings::default())
    }
}

impl Document {
    pub fn new(elements: Vec<Element>, page_settings: PageSettings) -> Self {
        let mut document = Self {
            id: Uuid::new_v4(),
            elements,
            page_settings,
        };
        document.validate();
        document
    }

    /// Keep the first element for each id and lift zero sizes to 1.
    ///
    /// Returns how many elements were dropped.
    pub fn validate(&mut self) -> usize {
        let before = self.elements.len();
        let mut seen = HashSet::with_capacity(before);
        self.elements.retain(|element| {
            let first = seen.insert(element.id);
            if !first {
                log::warn!("Dropping element {} with a duplicate id", element.id);
            }
            first
        });
        for element in &mut self.elements {
            element.width = element.width.max(1);
            element.height = element.height.max(1);
        }
        before - self.elements.len()
    }

    /// A document holding the starter page
    pub fn starter() -> Self {
        Self::new(crate::element::factory::starter_elements(), PageSettings::default())
    }

    /// Session identifier of this document
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn page_settings(&self) -> &PageSettings {
        &self.page_settings
    }

    pub(crate) fn page_settings_mut(&mut self) -> &mut PageSettings {
        &mut self.page_settings
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|element| element.id == id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub(crate) fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub(crate) fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|element| element.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Replace the whole collection, as undo/redo do
    pub(crate) fn replace_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// Highest id currently on the page
    pub fn max_id(&self) -> Option<ElementId> {
        self.elements.iter().map(|element| element.id).max()
    }

    /// Topmost element under a page position
    pub fn element_at(&self, x: f32, y: f32) -> Option<&Element> {
        self.elements.iter().rev().find(|element| element.hit_test(x, y))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
