pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // First frame kicks off the initial load.
        if matches!(self.state, AppState::Loading) && !self.is_load_pending() {
            self.start_load();
        }
        self.poll_load();
        if self.is_load_pending() {
            ctx.request_repaint();
        }

        // RESET siempre visible durante la partida
        if matches!(self.state, AppState::Quiz) {
            layout::top_panel(self, ctx);
        }

        // Dispatch por estado a las funciones de views
        match self.state {
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
            AppState::LoadFailed => views::error::ui_load_failed(self, ctx),
        }
    }
}
