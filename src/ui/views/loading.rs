use egui::{CentralPanel, Context};

use crate::app::QuizApp;

pub fn ui_loading(_app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.label("Loading questions...");
        });
    });
}
