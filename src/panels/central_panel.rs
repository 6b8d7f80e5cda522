use eframe::egui;

use crate::EditorApp;
use crate::element::ElementPatch;
use crate::renderer::element_screen_rect;
use crate::widgets::ResizeHandle;

/// Gray border around the page inside the scroll area
const CANVAS_MARGIN: f32 = 32.0;
const HANDLE_SIZE: f32 = 10.0;

pub fn central_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(236)))
        .show(ctx, |ui| {
            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                canvas(app, ui);
            });
        });
}

fn canvas(app: &mut EditorApp, ui: &mut egui::Ui) {
    let view = *app.store().view();
    let grid_size = app.store().config().grid_size;
    let zoom = view.zoom;

    let page_size = egui::vec2(view.canvas_width as f32, view.canvas_height as f32) * zoom;
    let (canvas_rect, canvas_response) =
        ui.allocate_exact_size(page_size + egui::Vec2::splat(CANVAS_MARGIN * 2.0), egui::Sense::click());
    let page_rect = egui::Rect::from_min_size(canvas_rect.min + egui::Vec2::splat(CANVAS_MARGIN), page_size);
    app.page_rect = Some(page_rect);

    let painter = ui.painter_at(canvas_rect);
    app.renderer
        .draw_page(&painter, page_rect, app.context.store().page_settings(), &view, grid_size);

    // Clicking empty canvas clears the selection
    if canvas_response.clicked() {
        app.context.store_mut().select_element(None);
        app.text_edit = None;
    }

    let elements = app.store().elements().to_vec();
    let selected = app.store().selected();
    let editing = app.text_edit.as_ref().map(|session| session.id);

    for element in &elements {
        let rect = element_screen_rect(page_rect.min, zoom, element);
        app.renderer
            .draw_element(&painter, element, rect, zoom, selected == Some(element.id));

        if editing == Some(element.id) {
            continue;
        }

        let response = ui
            .interact(rect, egui::Id::new(("canvas_element", element.id.0)), egui::Sense::click_and_drag())
            .on_hover_cursor(egui::CursorIcon::Move);

        if response.drag_started() {
            app.gesture_drag = egui::Vec2::ZERO;
            if let Err(err) = app.context.begin_move(element.id) {
                log::warn!("Could not start moving {}: {}", element.id, err);
            }
        }
        if response.dragged() && app.context.current_state().target() == Some(element.id) {
            app.gesture_drag += response.drag_delta();
            let (dx, dy) = page_delta(app.gesture_drag, zoom);
            app.context.update_live(dx, dy);
        }
        if response.drag_stopped() && app.context.current_state().is_moving() {
            if let Err(err) = app.context.finish() {
                log::warn!("Could not finish moving {}: {}", element.id, err);
            }
        }

        if response.double_clicked() {
            app.begin_text_edit(element.id);
        } else if response.clicked() {
            app.context.store_mut().select_element(Some(element.id));
        }
    }

    resize_handle(app, ui, page_rect.min, zoom);
    inline_text_editor(app, ui, page_rect.min, zoom);
}

/// Corner handle on the selected element
fn resize_handle(app: &mut EditorApp, ui: &mut egui::Ui, page_min: egui::Pos2, zoom: f32) {
    let Some(element) = app.store().selected_element().cloned() else {
        return;
    };
    if app.text_edit.is_some() {
        return;
    }

    let rect = element_screen_rect(page_min, zoom, &element);
    let response = ResizeHandle::new(element.id, rect.right_bottom(), HANDLE_SIZE).show(ui);

    if response.drag_started() {
        app.gesture_drag = egui::Vec2::ZERO;
        if let Err(err) = app.context.begin_resize(element.id) {
            log::warn!("Could not start resizing {}: {}", element.id, err);
        }
    }
    if response.dragged() && app.context.current_state().is_resizing() {
        app.gesture_drag += response.drag_delta();
        let (dx, dy) = page_delta(app.gesture_drag, zoom);
        app.context.update_live(dx, dy);
    }
    if response.drag_stopped() && app.context.current_state().is_resizing() {
        if let Err(err) = app.context.finish() {
            log::warn!("Could not finish resizing {}: {}", element.id, err);
        }
    }
}

/// Text editor laid over an element after a double click
fn inline_text_editor(app: &mut EditorApp, ui: &mut egui::Ui, page_min: egui::Pos2, zoom: f32) {
    let Some(mut session) = app.text_edit.take() else {
        return;
    };
    let Some(element) = app.store().element(session.id).cloned() else {
        return;
    };

    let rect = element_screen_rect(page_min, zoom, &element);
    let response = ui.put(
        rect,
        egui::TextEdit::multiline(&mut session.buffer)
            .id(egui::Id::new(("inline_text", element.id.0)))
            .desired_width(rect.width()),
    );

    if !session.focus_requested {
        response.request_focus();
        session.focus_requested = true;
    }

    if response.changed() {
        app.context
            .store_mut()
            .update_element(element.id, ElementPatch::content(session.buffer.clone()));
    }

    if response.lost_focus() {
        app.context.store_mut().commit_if_changed();
    } else {
        app.text_edit = Some(session);
    }
}

fn page_delta(drag: egui::Vec2, zoom: f32) -> (i32, i32) {
    let delta = drag / zoom;
    (delta.x.round() as i32, delta.y.round() as i32)
}
