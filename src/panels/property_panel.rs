use eframe::egui;

use crate::EditorApp;
use crate::element::{Element, ElementId, ElementKind, ElementPatch, MIN_ELEMENT_HEIGHT, MIN_ELEMENT_WIDTH};
use crate::page::PageSettingsPatch;
use crate::renderer::{color_to_hex, parse_color, parse_opacity, parse_px};

const FONT_FAMILIES: [(&str, &str); 9] = [
    ("Inter, sans-serif", "Inter"),
    ("Roboto, sans-serif", "Roboto"),
    ("Open Sans, sans-serif", "Open Sans"),
    ("Lato, sans-serif", "Lato"),
    ("Montserrat, sans-serif", "Montserrat"),
    ("Poppins, sans-serif", "Poppins"),
    ("Playfair Display, serif", "Playfair Display"),
    ("Georgia, serif", "Georgia"),
    ("Times New Roman, serif", "Times New Roman"),
];

const FONT_WEIGHTS: [(&str, &str); 6] = [
    ("300", "Light"),
    ("normal", "Normal"),
    ("500", "Medium"),
    ("600", "Semi Bold"),
    ("bold", "Bold"),
    ("800", "Extra Bold"),
];

const TEXT_ALIGNS: [(&str, &str); 4] = [
    ("left", "Left"),
    ("center", "Center"),
    ("right", "Right"),
    ("justify", "Justify"),
];

const COLOR_PRESETS: [&str; 23] = [
    "#000000", "#ffffff", "#f3f4f6", "#1f2937", "#374151", "#6b7280", "#ef4444", "#f97316",
    "#f59e0b", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6", "#06b6d4", "#0ea5e9",
    "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899", "#f43f5e",
];

/// Page backgrounds only offer the first row of presets
const PAGE_PRESET_COUNT: usize = 12;

pub fn property_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::right("property_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match app.store().selected_element().cloned() {
                    Some(element) => element_properties(app, ui, &element),
                    None => page_properties(app, ui),
                }
            });
        });

    // Color pickers report no focus loss; settle once the pointer is released
    let settled = app.context.current_state().is_idle()
        && app.text_edit.is_none()
        && !ctx.is_using_pointer()
        && !ctx.wants_keyboard_input();
    if settled {
        app.context.store_mut().commit_if_changed();
    }
}

/// Apply a patch to the element; `settled` closes the edit as one undo step
fn edit(app: &mut EditorApp, id: ElementId, patch: Option<ElementPatch>, settled: bool) {
    let store = app.context.store_mut();
    if let Some(patch) = patch {
        store.update_element(id, patch);
    }
    if settled {
        store.commit_if_changed();
    }
}

fn settled(response: &egui::Response) -> bool {
    response.drag_stopped() || response.lost_focus()
}

fn element_properties(app: &mut EditorApp, ui: &mut egui::Ui, element: &Element) {
    let id = element.id;

    ui.horizontal(|ui| {
        ui.heading(format!("{} Properties", element.kind.label()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🗑").on_hover_text("Delete element").clicked() {
                app.delete_selected();
            }
        });
    });
    ui.separator();

    if element.kind.accepts_text() {
        ui.label(egui::RichText::new("Content").strong());
        let mut content = element.content.clone().unwrap_or_default();
        let response = if element.kind == ElementKind::Paragraph {
            ui.add(egui::TextEdit::multiline(&mut content).desired_rows(4))
        } else {
            ui.text_edit_singleline(&mut content)
        };
        let patch = response.changed().then(|| ElementPatch::content(content));
        edit(app, id, patch, settled(&response));
        ui.add_space(8.0);
    }

    if element.kind.accepts_source() {
        ui.label(egui::RichText::new("Image").strong());
        ui.label("Image URL");
        let mut src = element.src.clone().unwrap_or_default();
        let response = ui.text_edit_singleline(&mut src);
        let patch = response.changed().then(|| ElementPatch::source(src));
        edit(app, id, patch, settled(&response));

        ui.label("Alt Text");
        let mut alt = element.alt.clone().unwrap_or_default();
        let response = ui.text_edit_singleline(&mut alt);
        let patch = response.changed().then(|| ElementPatch::default().with_alt(alt));
        edit(app, id, patch, settled(&response));
        ui.add_space(8.0);
    }

    layout_section(app, ui, element);

    if element.kind.accepts_text() {
        typography_section(app, ui, element);
    }

    colors_section(app, ui, element);
    appearance_section(app, ui, element);
}

fn layout_section(app: &mut EditorApp, ui: &mut egui::Ui, element: &Element) {
    let id = element.id;
    ui.label(egui::RichText::new("Layout").strong());

    let (mut x, mut y) = (element.x, element.y);
    let (mut width, mut height) = (element.width, element.height);

    egui::Grid::new("element_geometry").num_columns(4).spacing([8.0, 4.0]).show(ui, |ui| {
        ui.label("X");
        let x_response = ui.add(egui::DragValue::new(&mut x).range(0..=10_000).suffix("px"));
        ui.label("Y");
        let y_response = ui.add(egui::DragValue::new(&mut y).range(0..=10_000).suffix("px"));
        ui.end_row();

        let moved = x_response.changed() || y_response.changed();
        let patch = moved.then(|| ElementPatch::default().with_position(x, y));
        edit(app, id, patch, settled(&x_response) || settled(&y_response));

        ui.label("W");
        let w_response = ui.add(
            egui::DragValue::new(&mut width)
                .range(MIN_ELEMENT_WIDTH..=10_000)
                .suffix("px"),
        );
        ui.label("H");
        let h_response = ui.add(
            egui::DragValue::new(&mut height)
                .range(MIN_ELEMENT_HEIGHT..=10_000)
                .suffix("px"),
        );
        ui.end_row();

        let resized = w_response.changed() || h_response.changed();
        let patch = resized.then(|| ElementPatch::default().with_size(width, height));
        edit(app, id, patch, settled(&w_response) || settled(&h_response));
    });
    ui.add_space(8.0);
}

fn typography_section(app: &mut EditorApp, ui: &mut egui::Ui, element: &Element) {
    let id = element.id;
    let styles = &element.styles;
    ui.label(egui::RichText::new("Typography").strong());

    let current_font = styles.get("fontFamily").unwrap_or(FONT_FAMILIES[0].0);
    if let Some(font) = choose(ui, "element_font_family", "Font", current_font, &FONT_FAMILIES) {
        edit(app, id, Some(ElementPatch::style("fontFamily", font)), true);
    }

    let current_weight = styles.get("fontWeight").unwrap_or("normal");
    if let Some(weight) = choose(ui, "element_font_weight", "Weight", current_weight, &FONT_WEIGHTS) {
        edit(app, id, Some(ElementPatch::style("fontWeight", weight)), true);
    }

    ui.horizontal(|ui| {
        ui.label("Size");
        let mut size = styles.get("fontSize").and_then(parse_px).unwrap_or(16.0);
        let response = ui.add(egui::DragValue::new(&mut size).range(8.0..=160.0).suffix("px"));
        let patch = response
            .changed()
            .then(|| ElementPatch::style("fontSize", format!("{}px", size.round())));
        edit(app, id, patch, settled(&response));
    });

    ui.horizontal(|ui| {
        ui.label("Line height");
        let mut line_height = styles
            .get("lineHeight")
            .and_then(|value| value.parse::<f32>().ok())
            .unwrap_or(1.5);
        let response = ui.add(egui::DragValue::new(&mut line_height).range(0.8..=3.0).speed(0.05));
        let patch = response
            .changed()
            .then(|| ElementPatch::style("lineHeight", format!("{:.2}", line_height)));
        edit(app, id, patch, settled(&response));
    });

    ui.horizontal(|ui| {
        let current = styles.get("textAlign").unwrap_or("left");
        for (value, label) in TEXT_ALIGNS {
            if ui.selectable_label(current == value, label).clicked() {
                edit(app, id, Some(ElementPatch::style("textAlign", value)), true);
            }
        }
    });
    ui.add_space(8.0);
}

fn colors_section(app: &mut EditorApp, ui: &mut egui::Ui, element: &Element) {
    let id = element.id;
    ui.label(egui::RichText::new("Colors").strong());

    let keys: &[(&str, &str, &str)] = if element.kind.accepts_text() {
        &[("color", "Text", "#000000"), ("backgroundColor", "Background", "#ffffff")]
    } else {
        &[("backgroundColor", "Background", "#ffffff")]
    };

    for &(key, label, fallback) in keys {
        let current = element.styles.get(key).unwrap_or(fallback);
        ui.horizontal(|ui| {
            ui.label(label);
            let mut color = parse_color(current).unwrap_or(egui::Color32::BLACK);
            let response = ui.color_edit_button_srgba(&mut color);
            if response.changed() {
                edit(app, id, Some(ElementPatch::style(key, color_to_hex(color))), false);
            }
            ui.label(egui::RichText::new(current).monospace().small());
        });

        if let Some(preset) = color_presets(ui, key, &COLOR_PRESETS) {
            edit(app, id, Some(ElementPatch::style(key, preset)), true);
        }
    }
    ui.add_space(8.0);
}

fn appearance_section(app: &mut EditorApp, ui: &mut egui::Ui, element: &Element) {
    let id = element.id;
    let styles = &element.styles;
    ui.label(egui::RichText::new("Appearance").strong());

    ui.horizontal(|ui| {
        ui.label("Corner radius");
        let mut radius = styles.get("borderRadius").and_then(parse_px).unwrap_or(0.0);
        let response = ui.add(egui::DragValue::new(&mut radius).range(0.0..=200.0).suffix("px"));
        let patch = response
            .changed()
            .then(|| ElementPatch::style("borderRadius", format!("{}px", radius.round())));
        edit(app, id, patch, settled(&response));
    });

    ui.horizontal(|ui| {
        ui.label("Opacity");
        let mut opacity = styles.get("opacity").and_then(parse_opacity).unwrap_or(1.0);
        let response = ui.add(egui::Slider::new(&mut opacity, 0.0..=1.0));
        let patch = response
            .changed()
            .then(|| ElementPatch::style("opacity", format!("{:.2}", opacity)));
        edit(app, id, patch, settled(&response));
    });
}

fn page_properties(app: &mut EditorApp, ui: &mut egui::Ui) {
    ui.heading("Page Settings");
    ui.separator();

    let settings = app.store().page_settings().clone();

    ui.label(egui::RichText::new("Background").strong());
    ui.horizontal(|ui| {
        let mut color = parse_color(&settings.background_color).unwrap_or(egui::Color32::WHITE);
        if ui.color_edit_button_srgba(&mut color).changed() {
            app.context
                .store_mut()
                .update_page_settings(PageSettingsPatch::background_color(color_to_hex(color)));
        }
        ui.label(egui::RichText::new(&settings.background_color).monospace().small());
    });
    if let Some(preset) = color_presets(ui, "page_background", &COLOR_PRESETS[..PAGE_PRESET_COUNT]) {
        app.context
            .store_mut()
            .update_page_settings(PageSettingsPatch::background_color(preset));
    }
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Typography").strong());
    if let Some(font) = choose(ui, "page_font_family", "Font", &settings.font_family, &FONT_FAMILIES) {
        app.context.store_mut().update_page_settings(PageSettingsPatch::font_family(font));
    }
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Layout").strong());
    egui::Grid::new("page_layout").num_columns(2).show(ui, |ui| {
        ui.label("Max width");
        let mut max_width = settings.max_width.clone();
        if ui.text_edit_singleline(&mut max_width).changed() {
            app.context.store_mut().update_page_settings(PageSettingsPatch {
                max_width: Some(max_width),
                ..Default::default()
            });
        }
        ui.end_row();

        ui.label("Padding");
        let mut padding = settings.padding.clone();
        if ui.text_edit_singleline(&mut padding).changed() {
            app.context.store_mut().update_page_settings(PageSettingsPatch {
                padding: Some(padding),
                ..Default::default()
            });
        }
        ui.end_row();
    });
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Canvas").strong());
    let view = *app.store().view();
    let mut grid_enabled = view.grid_enabled;
    if ui.checkbox(&mut grid_enabled, "Show grid").changed() {
        app.context.store_mut().toggle_grid();
    }
    let mut snap_to_grid = view.snap_to_grid;
    if ui.checkbox(&mut snap_to_grid, "Snap to grid").changed() {
        app.context.store_mut().toggle_snap();
    }
    ui.label(
        egui::RichText::new(format!("{} × {} px", view.canvas_width, view.canvas_height))
            .small()
            .weak(),
    );
}

/// A labelled combo box; returns the newly chosen value
fn choose(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    current: &str,
    options: &[(&'static str, &'static str)],
) -> Option<&'static str> {
    let selected_text = options
        .iter()
        .find(|(value, _)| *value == current)
        .map_or(current, |(_, label)| *label);

    let mut chosen = None;
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for &(value, option_label) in options {
                    if ui.selectable_label(value == current, option_label).clicked() && value != current {
                        chosen = Some(value);
                    }
                }
            });
    });
    chosen
}

/// A wrapped row of color swatches; returns the clicked preset
fn color_presets(ui: &mut egui::Ui, id_salt: &str, presets: &[&'static str]) -> Option<&'static str> {
    let mut clicked = None;
    ui.push_id(id_salt, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);
            for &preset in presets {
                let fill = parse_color(preset).unwrap_or(egui::Color32::BLACK);
                let swatch = egui::Button::new("")
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(200)))
                    .min_size(egui::vec2(18.0, 18.0));
                if ui.add(swatch).on_hover_text(preset).clicked() {
                    clicked = Some(preset);
                }
            }
        });
    });
    clicked
}
