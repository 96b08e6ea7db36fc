use egui::{CentralPanel, Context};

use crate::app::{QuizApp, QuizCommand};

/// A failed load replaces the whole display; reloading is manual.
pub fn ui_load_failed(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.heading("⚠ Something went wrong");
            ui.add_space(10.0);
            ui.label(&app.message);
            ui.add_space(20.0);
            if ui.button("Reload").clicked() {
                app.handle(QuizCommand::Restart);
            }
        });
    });
}
