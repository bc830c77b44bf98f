//! # Theme
//!
//! CryptoTrade colour palette and the egui visuals built from it.

use egui::{Color32, Context, Stroke, Theme as EguiTheme, Visuals};
use shared::TransactionStatus;

/// Raw palette
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub text: Color32,
    /// Brand accent
    pub accent: Color32,
    pub accent_dark: Color32,
    pub border: Color32,
    pub green: Color32,
    pub red: Color32,
    pub amber: Color32,
    pub blue: Color32,
    pub gray: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(15, 17, 23),     // #0F1117
            panel: Color32::from_rgb(22, 25, 34),          // #161922
            card: Color32::from_rgb(30, 34, 45),           // #1E222D
            text: Color32::from_rgb(234, 236, 239),        // #EAECEF
            accent: Color32::from_rgb(240, 185, 11),       // #F0B90B
            accent_dark: Color32::from_rgb(120, 92, 6),    // #785C06
            border: Color32::from_rgb(43, 49, 57),         // #2B3139
            green: Color32::from_rgb(14, 203, 129),        // #0ECB81
            red: Color32::from_rgb(246, 70, 93),           // #F6465D
            amber: Color32::from_rgb(255, 170, 0),         // #FFAA00
            blue: Color32::from_rgb(100, 150, 255),        // #6496FF
            gray: Color32::from_rgb(132, 142, 156),        // #848E9C
        }
    }
}

/// Application theme
pub struct Theme {
    pub palette: Palette,
    pub text: Color32,
    /// Headings, active tabs, primary buttons
    pub selected: Color32,
    pub border: Color32,
    /// Secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub card: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let palette = Palette::default();
        Theme {
            text: palette.text,
            selected: palette.accent,
            border: palette.border,
            dim: palette.gray,
            success: palette.green,
            error: palette.red,
            warning: palette.amber,
            info: palette.blue,
            card: palette.card,
            palette,
        }
    }
}

impl Theme {
    /// Completed is green, failed red, pending amber
    pub fn status_color(&self, status: TransactionStatus) -> Color32 {
        match status {
            TransactionStatus::Completed => self.success,
            TransactionStatus::Failed => self.error,
            TransactionStatus::Pending => self.warning,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let p = &self.palette;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(p.text);
        visuals.faint_bg_color = p.panel;
        visuals.extreme_bg_color = p.background;
        visuals.panel_fill = p.background;
        visuals.window_fill = p.panel;
        visuals.window_stroke = Stroke::new(1.0, p.border);

        visuals.widgets.noninteractive.bg_fill = p.panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, p.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, p.text);

        visuals.widgets.inactive.bg_fill = p.card;
        visuals.widgets.inactive.weak_bg_fill = p.card;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, p.border);

        visuals.widgets.hovered.bg_fill = p.accent_dark;
        visuals.widgets.hovered.weak_bg_fill = p.accent_dark;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, p.accent);

        visuals.widgets.active.bg_fill = p.accent_dark;
        visuals.widgets.active.weak_bg_fill = p.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, p.accent);

        visuals.widgets.open.bg_fill = p.card;
        visuals.widgets.open.bg_stroke = Stroke::new(1.5, p.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(240, 185, 11, 60);
        visuals.selection.stroke = Stroke::new(1.5, p.accent);
        visuals.hyperlink_color = p.blue;

        visuals
    }

    /// Install the visuals and spacing for both egui themes
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::vec2(8.0, 6.0);
                style.spacing.button_padding = egui::vec2(12.0, 6.0);
                style.spacing.interact_size = egui::vec2(32.0, 28.0);
            });
        }
        tracing::debug!("Applied theme visuals");
    }
}
