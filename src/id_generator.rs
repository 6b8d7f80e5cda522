use crate::element::{Element, ElementId};

/// Hands out element ids that are unique within one document session.
///
/// Ids only grow. Once `usize::MAX` has been handed out the generator is
/// exhausted and `next_id` returns `None`.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<usize>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdGenerator {
    /// Start past the highest id already present
    pub fn starting_after(elements: &[Element]) -> Self {
        let next = elements
            .iter()
            .map(|element| element.id.0)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self { next }
    }

    pub fn next_id(&mut self) -> Option<ElementId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(ElementId(id))
    }

    /// Make sure future ids skip past `id`
    pub fn observe(&mut self, id: ElementId) {
        self.next = match (self.next, id.0.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}
