use eframe::egui;

use crate::element::ElementKind;

/// A draggable tile in the component library
pub struct ComponentTile {
    pub kind: ElementKind,
    pub active: bool,
}

impl ComponentTile {
    pub fn new(kind: ElementKind, active: bool) -> Self {
        Self { kind, active }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let tile_size = egui::vec2(ui.available_width().min(88.0), 64.0);
        let (rect, response) = ui.allocate_exact_size(tile_size, egui::Sense::click_and_drag());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.active {
                egui::Color32::from_rgb(219, 234, 254)
            } else if response.hovered() {
                egui::Color32::from_gray(243)
            } else {
                egui::Color32::from_gray(250)
            };
            let border = if self.active || response.hovered() {
                egui::Color32::from_rgb(59, 130, 246)
            } else {
                egui::Color32::from_gray(220)
            };

            ui.painter().rect_filled(rect, 6.0, bg_color);
            ui.painter().rect_stroke(rect, 6.0, egui::Stroke::new(1.0, border));

            ui.painter().text(
                rect.center() - egui::vec2(0.0, 10.0),
                egui::Align2::CENTER_CENTER,
                self.kind.preview(),
                egui::FontId::proportional(18.0),
                egui::Color32::from_gray(60),
            );
            ui.painter().text(
                rect.center() + egui::vec2(0.0, 14.0),
                egui::Align2::CENTER_CENTER,
                self.kind.label(),
                egui::FontId::proportional(12.0),
                egui::Color32::from_gray(90),
            );
        }

        response
            .on_hover_text(format!("Drag or click to add a {}", self.kind.label().to_lowercase()))
            .on_hover_cursor(egui::CursorIcon::Grab)
    }
}
