//! # Navigation Bar
//!
//! Brand on the left, route links on the right. Signed-in users get the
//! protected routes and Sign Out; everyone else only sees Sign In.

use crate::app::{AppLike, AppState, Route};
use crate::ui::theme::Theme;

/// Routes linked from the bar while signed in
const SIGNED_IN_LINKS: &[Route] = &[Route::Dashboard, Route::Trade, Route::Wallet, Route::Settings];

fn link_label(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "Dashboard",
        Route::Trade => "Trade",
        Route::Wallet => "Wallet",
        Route::Settings => "Settings",
        Route::Auth => "Sign In",
        Route::Verification => "Verification",
    }
}

pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let current = state.current_route();

    ui.horizontal(|ui| {
        ui.set_height(40.0);

        let brand = ui.add(
            egui::Label::new(
                egui::RichText::new("CryptoTrade")
                    .size(20.0)
                    .strong()
                    .color(theme.selected),
            )
            .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            app.handle_route_change(Route::Dashboard);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.is_authenticated() {
                let sign_out = ui.add_enabled(!state.signing_out, egui::Button::new("Sign Out"));
                if sign_out.clicked() {
                    app.handle_sign_out_click();
                }
                ui.add_space(8.0);

                // right_to_left lays out in reverse
                for &route in SIGNED_IN_LINKS.iter().rev() {
                    if ui.selectable_label(current == route, link_label(route)).clicked() {
                        app.handle_route_change(route);
                    }
                }
            } else if ui
                .selectable_label(current == Route::Auth, link_label(Route::Auth))
                .clicked()
            {
                app.handle_route_change(Route::Auth);
            }
        });
    });
}
