use super::*;

/// What the UI can ask of the session. Keeps the transition logic decoupled
/// from whatever toolkit issues the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    Check,
    Advance,
    Finish,
    Restart,
}

impl QuizApp {
    pub fn handle(&mut self, command: QuizCommand) {
        match command {
            QuizCommand::Check => self.check_answer(),
            QuizCommand::Advance => self.advance_question(),
            QuizCommand::Finish => self.finish_quiz(),
            QuizCommand::Restart => self.restart_quiz(),
        }
    }

    /// Re-evaluates the current question without advancing. Score-idempotent:
    /// only the first grading of a question can move the score.
    pub fn check_answer(&mut self) {
        let selected = self.selected_values();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.grade_current(&selected) {
            Ok(verdict) => self.message = verdict.message,
            Err(err) => self.message = err.to_string(),
        }
    }

    /// Grades the current question, then moves on. The verdict is cleared
    /// with the new question; gate failures leave everything in place.
    pub fn advance_question(&mut self) {
        let selected = self.selected_values();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance(&selected) {
            Ok(_) => {
                self.selections.clear();
                self.message.clear();
            }
            Err(err) => self.message = err.to_string(),
        }
    }

    /// Grades the final question and freezes the session on the summary.
    pub fn finish_quiz(&mut self) {
        let selected = self.selected_values();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.finish(&selected) {
            Ok(_) => {
                self.selections.clear();
                self.message.clear();
                self.state = AppState::Summary;
            }
            Err(err) => self.message = err.to_string(),
        }
    }

    /// Discards the session and re-invokes the loader for a fresh sample.
    pub fn restart_quiz(&mut self) {
        log::info!("Restarting quiz");
        self.session = None;
        self.selections.clear();
        self.message.clear();
        self.start_load();
    }
}
