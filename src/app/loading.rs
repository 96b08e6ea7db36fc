use std::sync::mpsc::{self, Receiver};
use std::thread;

use super::*;
use crate::data::{self, LoadError};
use crate::model::QuestionRecord;

type LoadResult = Result<Vec<QuestionRecord>, LoadError>;

/// An in-flight bank fetch. Each carries the epoch it was started under;
/// a restart bumps the epoch, so a result arriving for an older epoch is
/// recognized as superseded and dropped.
pub struct PendingLoad {
    epoch: u64,
    rx: Receiver<(u64, LoadResult)>,
}

impl QuizApp {
    /// Fetch and sample the bank on a worker thread; the egui loop polls
    /// for the result. While pending, no grading controls exist.
    pub fn start_load(&mut self) {
        self.load_epoch += 1;
        let epoch = self.load_epoch;
        let url = self.config.bank_url.clone();
        let max = self.config.questions_per_quiz;
        let (tx, rx) = mpsc::channel();

        self.pending_load = Some(PendingLoad { epoch, rx });
        self.state = AppState::Loading;
        log::info!("Loading questions...");

        thread::spawn(move || {
            let result = data::fetch_bank(&url)
                .map(|bank| data::sample_bank(bank, max, &mut rand::thread_rng()));
            let _ = tx.send((epoch, result));
        });
    }

    pub fn poll_load(&mut self) {
        let received = match &self.pending_load {
            Some(pending) => pending.rx.try_recv().ok(),
            None => return,
        };
        if let Some((epoch, result)) = received {
            self.pending_load = None;
            self.apply_load_result(epoch, result);
        }
    }

    pub fn is_load_pending(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Installs a load result, unless a newer load has superseded it.
    pub fn apply_load_result(&mut self, epoch: u64, result: LoadResult) {
        if epoch != self.load_epoch {
            log::debug!(
                "Discarding stale load result (epoch {epoch}, current {})",
                self.load_epoch
            );
            return;
        }
        match result {
            Ok(records) => {
                log::info!("Loaded {} questions", records.len());
                self.session = Some(QuizSession::new(records));
                self.selections.clear();
                self.message.clear();
                self.state = AppState::Quiz;
            }
            Err(err) => {
                log::error!("Error loading questions: {err}");
                self.message = format!("Error loading questions: {err}");
                self.session = None;
                self.state = AppState::LoadFailed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizConfig;

    fn one_question() -> Vec<QuestionRecord> {
        vec![QuestionRecord {
            question: "Q?".into(),
            options: vec!["A".into(), "B".into()],
            correct: vec!["A".into()],
        }]
    }

    #[test]
    fn a_matching_epoch_installs_the_session() {
        let mut app = QuizApp::new(QuizConfig::default());
        app.apply_load_result(0, Ok(one_question()));
        assert!(matches!(app.state, AppState::Quiz));
        assert_eq!(app.session.as_ref().map(|s| s.len()), Some(1));
    }

    #[test]
    fn a_stale_epoch_is_discarded() {
        let mut app = QuizApp::new(QuizConfig::default());
        app.load_epoch = 2;
        app.apply_load_result(1, Ok(one_question()));
        assert!(app.session.is_none());
        assert!(matches!(app.state, AppState::Loading));
    }

    #[test]
    fn a_failed_load_replaces_the_display() {
        let mut app = QuizApp::new(QuizConfig::default());
        app.apply_load_result(0, Err(LoadError::Status(404)));
        assert!(matches!(app.state, AppState::LoadFailed));
        assert_eq!(app.message, "Error loading questions: HTTP error! Status: 404");
        assert!(app.session.is_none());
    }

    #[test]
    fn an_empty_bank_is_a_failed_load() {
        let mut app = QuizApp::new(QuizConfig::default());
        app.apply_load_result(0, Err(LoadError::EmptyBank));
        assert!(matches!(app.state, AppState::LoadFailed));
        assert!(app.message.contains("invalid or empty questions data"));
    }
}
