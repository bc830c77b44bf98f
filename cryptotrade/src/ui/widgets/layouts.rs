//! # Layout Components
//!
//! Reusable layout patterns for consistent screen organization

use crate::ui::theme::Theme;

/// Render a two-column split layout
pub fn render_split_layout<F1, F2>(ui: &mut egui::Ui, left_content: F1, right_content: F2)
where
    F1: FnOnce(&mut egui::Ui),
    F2: FnOnce(&mut egui::Ui),
{
    ui.columns(2, |columns| {
        left_content(&mut columns[0]);
        right_content(&mut columns[1]);
    });
}

/// Render horizontally centered content with a top margin
pub fn render_centered<F>(ui: &mut egui::Ui, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        content(ui);
    });
}

/// Render a grouped panel with optional heading
pub fn render_panel<F>(ui: &mut egui::Ui, heading: Option<&str>, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        if let Some(heading_text) = heading {
            ui.heading(heading_text);
            ui.add_space(10.0);
        }
        content(ui);
    });
}

/// Filled card with a small dim title, used for dashboard stats
pub fn render_card<F>(ui: &mut egui::Ui, title: &str, theme: &Theme, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Frame::new()
        .fill(theme.card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(theme.dim, title);
            ui.add_space(6.0);
            content(ui);
        });
}
