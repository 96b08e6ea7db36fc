use egui::{Button, CentralPanel, Context, ScrollArea};

use crate::app::{QuizApp, QuizCommand};
use crate::validate::SelectionMode;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        // Materializar la vista (primer render = shuffle) y copiar lo que
        // necesita este frame, para soltar el borrow de la sesión.
        let materialized = {
            let Some(session) = app.session.as_mut() else {
                return;
            };
            let prompt = session.current_prompt().unwrap_or_default();
            let is_last = session.is_last_question();
            session
                .current_view()
                .map(|view| (prompt, view.clone(), is_last))
                .map_err(|err| err.to_string())
        };

        let (prompt, view, is_last) = match materialized {
            Ok(data) => data,
            Err(message) => {
                // Malformed record: don't render it, the session stalls here.
                app.message = message;
                ui.label(&app.message);
                return;
            }
        };

        app.sync_selections(view.options.len());
        let mode = view.mode();

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.heading(&prompt);
            ui.add_space(10.0);

            ScrollArea::vertical().show(ui, |ui| {
                for (i, option) in view.options.iter().enumerate() {
                    match mode {
                        SelectionMode::Single => {
                            // Radio buttons: one selectable at a time.
                            if ui.radio(app.selections[i], option).clicked() {
                                app.selections.fill(false);
                                app.selections[i] = true;
                            }
                        }
                        SelectionMode::Multi => {
                            ui.checkbox(&mut app.selections[i], option);
                        }
                    }
                }
            });

            ui.add_space(10.0);

            let ticked = app.selections.iter().filter(|s| **s).count();
            let gate = mode.check_selection_count(ticked);

            ui.horizontal(|ui| {
                if ui.button("Check").clicked() {
                    app.handle(QuizCommand::Check);
                }
                // Next/Finish habilitados solo cuando pasa la puerta de selección
                if is_last {
                    if ui.add_enabled(gate.is_ok(), Button::new("Finish")).clicked() {
                        app.handle(QuizCommand::Finish);
                    }
                } else if ui.add_enabled(gate.is_ok(), Button::new("Next")).clicked() {
                    app.handle(QuizCommand::Advance);
                }
            });

            ui.add_space(6.0);
            if !app.message.is_empty() {
                ui.label(&app.message);
            } else if let Err(gate) = gate {
                // Hint while the selection is still under the minimum.
                if ticked > 0 {
                    ui.label(gate.to_string());
                }
            }
        });
    });
}
