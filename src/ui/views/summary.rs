use egui::{CentralPanel, Context};

use crate::app::{QuizApp, QuizCommand};

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.heading("Quiz Completed!");
            ui.add_space(10.0);
            if let Some(session) = &app.session {
                ui.label(format!("Your score: {}/{}", session.score(), session.len()));
            }
            ui.add_space(20.0);
            if ui.button("Restart Quiz").clicked() {
                app.handle(QuizCommand::Restart);
            }
        });
    });
}
