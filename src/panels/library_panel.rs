use eframe::egui;

use crate::EditorApp;
use crate::components::ComponentTile;
use crate::element::KindCategory;

/// Where a clicked (rather than dragged) component lands on the page
const CLICK_INSERT_POSITION: (i32, i32) = (100, 100);

pub fn library_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("component_library")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Components");
            ui.label(egui::RichText::new("Drag onto the page or click to add").small().weak());
            ui.separator();

            ui.horizontal_wrapped(|ui| {
                for category in KindCategory::ALL {
                    let selected = app.library_category == category;
                    if ui.selectable_label(selected, category.label()).clicked() {
                        app.library_category = category;
                    }
                }
            });
            ui.separator();

            let dropping = match app.context.current_state() {
                crate::state::EditorState::Dropping { kind } => Some(*kind),
                _ => None,
            };

            ui.horizontal_wrapped(|ui| {
                for &kind in app.library_category.kinds() {
                    let response = ComponentTile::new(kind, dropping == Some(kind)).show(ui);

                    if response.drag_started() {
                        if let Err(err) = app.context.begin_drop(kind) {
                            log::warn!("Could not start dragging {}: {}", kind, err);
                        }
                    }

                    if response.drag_stopped() {
                        let anchor = app
                            .store()
                            .dragged()
                            .map(|candidate| egui::vec2(candidate.width as f32, candidate.height as f32) / 2.0)
                            .unwrap_or_default();
                        let position = ctx
                            .pointer_latest_pos()
                            .and_then(|pointer| app.page_position(pointer, anchor));

                        match app.context.finish_drop(position) {
                            Ok(Some(id)) => app.set_status(format!("Added {} {}", kind.label().to_lowercase(), id)),
                            Ok(None) => log::debug!("{} dropped outside the page", kind),
                            Err(err) => log::warn!("Drop failed: {}", err),
                        }
                    } else if response.clicked() {
                        let (x, y) = CLICK_INSERT_POSITION;
                        app.insert_element(kind, x, y);
                    }
                }
            });

            ui.separator();
            ui.collapsing("Layers", |ui| {
                let selected = app.store().selected();
                let entries: Vec<_> = app
                    .store()
                    .elements()
                    .iter()
                    .rev()
                    .map(|element| (element.id, element.kind))
                    .collect();
                for (id, kind) in entries {
                    let label = format!("{} {}", kind.label(), id);
                    if ui.selectable_label(selected == Some(id), label).clicked() {
                        app.context.store_mut().select_element(Some(id));
                    }
                }
            });
        });
}
