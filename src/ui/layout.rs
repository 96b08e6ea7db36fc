use egui::{Context, TopBottomPanel};

use crate::app::{QuizApp, QuizCommand};

/// Top bar with the mid-quiz reset affordance.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("🔄 Reset").clicked() {
                app.handle(QuizCommand::Restart);
            }
        });
    });
}
