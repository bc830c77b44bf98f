//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

/// Width shared by the single-column forms
pub const FIELD_WIDTH: f32 = 320.0;

/// Render a labelled text input field
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint)
            .font(egui::FontId::proportional(14.0)),
    )
}

/// Render a read-only field in the same layout as [`render_text_input`]
pub fn render_read_only(ui: &mut egui::Ui, label: &str, value: &str, size: [f32; 2], theme: &Theme) {
    ui.label(egui::RichText::new(label).size(14.0));
    let mut shown = value.to_string();
    ui.add_sized(
        size,
        egui::TextEdit::singleline(&mut shown)
            .interactive(false)
            .text_color(theme.dim),
    );
}

/// Render a styled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    theme: &Theme,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{} {}", icon, text),
        None => text.to_string(),
    };

    let mut rich = egui::RichText::new(button_text).size(15.0);
    if fill_color == Some(theme.selected) {
        rich = rich.color(theme.palette.background).strong();
    }
    let mut button = egui::Button::new(rich);

    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Primary button that is greyed out while `enabled` is false
pub fn render_primary_button(
    ui: &mut egui::Ui,
    text: &str,
    enabled: bool,
    theme: &Theme,
    width: f32,
) -> bool {
    ui.add_enabled_ui(enabled, |ui| {
        let fill = if enabled { Some(theme.selected) } else { None };
        render_button(ui, text, None, theme, fill, Some(egui::vec2(width, 36.0))).clicked()
    })
    .inner
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).size(24.0).strong().color(theme.selected));
    ui.add_space(16.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}

/// Horizontal row of toggle buttons; returns the clicked option
pub fn render_segmented<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    options: &[T],
    selected: T,
    label: impl Fn(T) -> String,
) -> Option<T> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for &option in options {
            if ui.selectable_label(option == selected, label(option)).clicked() && option != selected {
                clicked = Some(option);
            }
        }
    });
    clicked
}

/// Key-value line used in summaries: label on the left, value on the right
pub fn render_summary_row(ui: &mut egui::Ui, label: &str, value: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(value);
        });
    });
}

/// Pressing Enter while `response` had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
