//! # GUI Rendering
//!
//! Frame orchestration for the egui client: the navigation bar on top,
//! the screen of the current route below it and toasts on top of both.
//!
//! [`ClientWindow`] is the `eframe::App` that ties the [`App`] orchestrator
//! to the window. Every frame it
//!
//! 1. runs [`App::on_tick`] to apply finished tasks and start due refreshes,
//! 2. turns queued notifications into toasts,
//! 3. renders from a cloned state snapshot,
//! 4. asks for another frame within a second so refresh timers and the
//!    "Copied!" feedback expire without user input.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::{App, AppLike, Route};
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Upper bound between two frames
const IDLE_REPAINT: Duration = Duration::from_secs(1);

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App) {
    let state = {
        match app.state.try_read() {
            Some(guard) => guard.clone(),
            // Lock held by a handler; draw next frame
            None => return,
        }
    };

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if state.session.snapshot().is_loading {
            ui.centered_and_justified(|ui| {
                ui.colored_label(Theme::default().dim, "Loading...");
            });
            return;
        }

        let route = state.current_route();
        if route != state.route {
            // Protected route without a session
            app.handle_route_change(route);
        }

        match route {
            Route::Dashboard => screens::dashboard::render(ui, &state, app),
            Route::Trade => screens::trade::render(ui, &state, app),
            Route::Wallet => screens::wallet::render(ui, &state, app),
            Route::Auth => screens::auth::render(ui, &state, app),
            Route::Verification => screens::verification::render(ui, &state, app),
            Route::Settings => screens::settings::render(ui, &state, app),
        }
    });
}

/// The eframe window
pub struct ClientWindow {
    app: App,
    notifications: NotificationManager,
    /// Route the window title was last set for
    titled_route: Option<Route>,
}

impl ClientWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::default().apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
            titled_route: None,
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let route = self.app.state.read().current_route();
        if self.titled_route != Some(route) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
                "CryptoTrade - {}",
                route.title()
            )));
            self.titled_route = Some(route);
        }
    }
}

impl eframe::App for ClientWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        let pending = std::mem::take(&mut self.app.state.write().pending_notifications);
        self.notifications.drain(pending);

        render(ctx, &mut self.app);
        self.update_title(ctx);
        self.notifications.show(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
