use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::element::{Element, ElementKind, StyleMap};
use crate::page::PageSettings;
use crate::state::ViewSettings;

const SELECTION_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
const GRID_DOT_COLOR: Color32 = Color32::from_rgba_premultiplied(59, 130, 246, 60);
const PLACEHOLDER_COLOR: Color32 = Color32::from_rgb(229, 231, 235);
const DEFAULT_TEXT_COLOR: Color32 = Color32::from_rgb(31, 41, 55);

/// Paints the page, the grid overlay and elements onto the canvas
#[derive(Debug, Clone)]
pub struct Renderer {
    selection_color: Color32,
    grid_color: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            selection_color: SELECTION_COLOR,
            grid_color: GRID_DOT_COLOR,
        }
    }

    /// Page background plus, when enabled, the dotted grid
    pub fn draw_page(&self, painter: &Painter, page_rect: Rect, settings: &PageSettings, view: &ViewSettings, grid_size: u32) {
        let background = parse_color(&settings.background_color).unwrap_or(Color32::WHITE);
        painter.rect_filled(page_rect, 0.0, background);

        if view.grid_enabled && grid_size > 0 {
            let step = grid_size as f32 * view.zoom;
            if step >= 4.0 {
                let mut y = page_rect.top();
                while y <= page_rect.bottom() {
                    let mut x = page_rect.left();
                    while x <= page_rect.right() {
                        painter.circle_filled(Pos2::new(x, y), 1.0, self.grid_color);
                        x += step;
                    }
                    y += step;
                }
            }
        }

        painter.rect_stroke(page_rect, 0.0, Stroke::new(1.0, Color32::from_gray(200)));
    }

    /// Draw one element into its on-screen rectangle
    pub fn draw_element(&self, painter: &Painter, element: &Element, rect: Rect, zoom: f32, selected: bool) {
        let styles = &element.styles;
        let opacity = styles.get("opacity").and_then(parse_opacity).unwrap_or(1.0);
        let rounding = styles.get("borderRadius").and_then(parse_px).unwrap_or(0.0) * zoom;

        if let Some(fill) = styles.get("backgroundColor").and_then(parse_color) {
            painter.rect_filled(rect, rounding, fill.gamma_multiply(opacity));
        }

        let border_width = styles.get("borderWidth").and_then(parse_px).unwrap_or(0.0);
        if border_width > 0.0 {
            let color = styles.get("borderColor").and_then(parse_color).unwrap_or(Color32::GRAY);
            painter.rect_stroke(rect, rounding, Stroke::new(border_width * zoom, color.gamma_multiply(opacity)));
        }

        let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
        match element.kind {
            ElementKind::Image => self.draw_image_placeholder(&clipped, element, rect, rounding, zoom, opacity),
            kind if kind.accepts_text() => self.draw_text(&clipped, element, rect, zoom, opacity),
            _ => {}
        }

        if selected {
            painter.rect_stroke(rect.expand(1.0), rounding, Stroke::new(2.0, self.selection_color));
        }
    }

    fn draw_text(&self, painter: &Painter, element: &Element, rect: Rect, zoom: f32, opacity: f32) {
        let Some(content) = element.content.as_deref().filter(|text| !text.is_empty()) else {
            return;
        };
        let styles = &element.styles;
        let font_size = styles.get("fontSize").and_then(parse_px).unwrap_or(16.0) * zoom;
        let color = styles
            .get("color")
            .and_then(parse_color)
            .unwrap_or(DEFAULT_TEXT_COLOR)
            .gamma_multiply(opacity);

        let inner = rect.shrink(4.0 * zoom);
        let galley = painter.layout(
            content.to_owned(),
            FontId::proportional(font_size.max(1.0)),
            color,
            inner.width().max(1.0),
        );

        let align = text_align(styles);
        let x = match align {
            Align2::CENTER_TOP => inner.center().x - galley.size().x / 2.0,
            Align2::RIGHT_TOP => inner.right() - galley.size().x,
            _ => inner.left(),
        };
        let y = if element.kind == ElementKind::Button {
            inner.center().y - galley.size().y / 2.0
        } else {
            inner.top()
        };
        painter.galley(Pos2::new(x, y), galley, color);
    }

    fn draw_image_placeholder(&self, painter: &Painter, element: &Element, rect: Rect, rounding: f32, zoom: f32, opacity: f32) {
        painter.rect_filled(rect, rounding, PLACEHOLDER_COLOR.gamma_multiply(opacity));

        let source = element.src.as_deref().unwrap_or_default();
        let label = if source.is_empty() {
            "Click to add an image".to_owned()
        } else {
            element.alt.clone().unwrap_or_else(|| "Image".to_owned())
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(14.0 * zoom),
            Color32::from_gray(107),
        );
        if !source.is_empty() {
            painter.text(
                rect.center() + Vec2::new(0.0, 18.0 * zoom),
                Align2::CENTER_CENTER,
                truncate(source, 48),
                FontId::monospace(10.0 * zoom),
                Color32::from_gray(140),
            );
        }
    }

    /// Outline of a candidate element following the pointer during a drop
    pub fn draw_candidate(&self, painter: &Painter, rect: Rect, kind: ElementKind) {
        painter.rect_filled(rect, 4.0, self.selection_color.gamma_multiply(0.15));
        painter.rect_stroke(rect, 4.0, Stroke::new(1.5, self.selection_color));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            kind.label(),
            FontId::proportional(14.0),
            self.selection_color,
        );
    }
}

/// Screen rectangle of an element on a page drawn at `page_min` with `zoom`
pub fn element_screen_rect(page_min: Pos2, zoom: f32, element: &Element) -> Rect {
    Rect::from_min_size(
        page_min + Vec2::new(element.x as f32, element.y as f32) * zoom,
        Vec2::new(element.width as f32, element.height as f32) * zoom,
    )
}

fn text_align(styles: &StyleMap) -> Align2 {
    match styles.get("textAlign") {
        Some("center") => Align2::CENTER_TOP,
        Some("right") => Align2::RIGHT_TOP,
        _ => Align2::LEFT_TOP,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

/// Parse a CSS color: `#rgb`, `#rrggbb`, `#rrggbbaa` or a few keywords
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "white" => return Some(Color32::WHITE),
        "black" => return Some(Color32::BLACK),
        "transparent" => return Some(Color32::TRANSPARENT),
        _ => {}
    }

    let hex = value.strip_prefix('#')?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    match hex.len() {
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Some(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        6 => Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

/// Format a color as `#rrggbb`, ignoring alpha
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse a pixel length such as `16px` or `16`
pub fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value);
    number.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Parse an opacity in `0..=1`
pub fn parse_opacity(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|v| v.is_finite()).map(|v| v.clamp(0.0, 1.0))
}
