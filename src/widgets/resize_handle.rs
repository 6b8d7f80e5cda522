use eframe::egui::{self, Color32, CursorIcon, Id, Pos2, Rect, Response, Stroke, Ui, Vec2};

use crate::element::ElementId;

const HANDLE_COLOR: Color32 = Color32::from_rgb(59, 130, 246);

/// The bottom-right resize grip drawn on the selected element
pub struct ResizeHandle {
    element_id: ElementId,
    position: Pos2,
    size: f32,
}

impl ResizeHandle {
    pub fn new(element_id: ElementId, position: Pos2, size: f32) -> Self {
        Self {
            element_id,
            position,
            size,
        }
    }

    /// Stable across frames so a drag survives the element changing size
    pub fn id(&self) -> Id {
        Id::new(("resize_handle", self.element_id.0))
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(self.size))
    }

    /// Show the resize handle and return the response
    pub fn show(&self, ui: &mut Ui) -> Response {
        let rect = self.rect();

        ui.painter().rect_filled(rect, 2.0, HANDLE_COLOR);
        ui.painter().rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::WHITE));

        ui.interact(rect, self.id(), egui::Sense::drag())
            .on_hover_cursor(CursorIcon::ResizeNwSe)
    }

    pub fn element_id(&self) -> ElementId {
        self.element_id
    }
}
