use eframe::egui;

use crate::EditorApp;

pub fn toolbar(app: &mut EditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Storefront Editor");
            ui.separator();

            let can_undo = app.store().can_undo();
            let can_redo = app.store().can_redo();
            if ui
                .add_enabled(can_undo, egui::Button::new("Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                app.undo();
            }
            if ui
                .add_enabled(can_redo, egui::Button::new("Redo"))
                .on_hover_text("Ctrl+Shift+Z")
                .clicked()
            {
                app.redo();
            }

            ui.separator();

            let view = *app.store().view();
            if ui.selectable_label(view.grid_enabled, "Grid").clicked() {
                app.context.store_mut().toggle_grid();
            }
            if ui
                .selectable_label(view.snap_to_grid, "Snap")
                .on_hover_text(format!("Snap to a {} px grid", app.store().config().grid_size))
                .clicked()
            {
                app.context.store_mut().toggle_snap();
            }

            ui.separator();

            let config = app.store().config();
            let (min_zoom, max_zoom) = (config.min_zoom, config.max_zoom);
            if ui.add_enabled(view.zoom > min_zoom, egui::Button::new("−")).clicked() {
                app.context.store_mut().zoom_out();
            }
            ui.label(format!("{:.0}%", view.zoom * 100.0));
            if ui.add_enabled(view.zoom < max_zoom, egui::Button::new("+")).clicked() {
                app.context.store_mut().zoom_in();
            }

            ui.separator();

            if ui.button("Save").clicked() {
                app.save_session();
            }
            if ui.button("Load").clicked() {
                app.load_session();
            }
            if ui.button("Export").on_hover_text("Export the page as JSON").clicked() {
                app.export(ctx);
            }

            if app.is_dirty() {
                ui.label(egui::RichText::new("● unsaved changes").small().weak());
            }
        });
    });
}
