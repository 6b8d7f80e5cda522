use eframe::egui;

use crate::EditorApp;
use crate::event::{EditorEvent, ElementEvent, HistoryEvent};

pub fn status_bar(app: &EditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let store = app.store();
            let history = store.history();
            ui.label(format!("{} elements", store.elements().len()));
            ui.separator();
            ui.label(format!("History {}/{}", history.cursor() + 1, history.len()));
            ui.separator();
            ui.label(app.context.current_state().name());

            if let Some(element) = store.selected_element() {
                ui.separator();
                ui.label(format!(
                    "{} {} at ({}, {}) {}×{}",
                    element.kind.label(),
                    element.id,
                    element.x,
                    element.y,
                    element.width,
                    element.height
                ));
            }

            let last_change = app.event_log.events().iter().rev().find_map(describe);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(status) = &app.status {
                    ui.label(egui::RichText::new(status).weak());
                }
                if let Some(change) = last_change {
                    ui.label(change);
                    ui.separator();
                }
            });
        });
    });
}

fn describe(event: &EditorEvent) -> Option<String> {
    let text = match event {
        EditorEvent::ElementChanged(ElementEvent::Added { id, kind }) => format!("Added {} {}", kind, id),
        EditorEvent::ElementChanged(ElementEvent::Removed { id }) => format!("Deleted {}", id),
        EditorEvent::ElementChanged(ElementEvent::Moved { id, x, y }) => format!("Moved {} to ({}, {})", id, x, y),
        EditorEvent::ElementChanged(ElementEvent::Resized { id, width, height }) => {
            format!("Resized {} to {}×{}", id, width, height)
        }
        EditorEvent::ElementChanged(ElementEvent::Updated { id }) => format!("Edited {}", id),
        EditorEvent::PageSettingsChanged => "Page settings changed".to_owned(),
        EditorEvent::HistoryChanged(HistoryEvent::Undone { .. }) => "Undo".to_owned(),
        EditorEvent::HistoryChanged(HistoryEvent::Redone { .. }) => "Redo".to_owned(),
        _ => return None,
    };
    Some(text)
}
