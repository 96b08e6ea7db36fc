use crate::model::{AppState, QuizConfig};
use crate::session::QuizSession;

// Submodules
pub mod actions;
pub mod loading;

pub use actions::QuizCommand;
pub use loading::PendingLoad;

/// The one session instance plus the UI-facing bits around it. Owned by the
/// presentation layer and passed to every handler; replaced wholesale on
/// restart.
pub struct QuizApp {
    pub config: QuizConfig,
    pub session: Option<QuizSession>,
    /// Selection flags aligned with the current question's shuffled options.
    pub selections: Vec<bool>,
    pub message: String,
    pub state: AppState,
    pub(crate) load_epoch: u64,
    pub(crate) pending_load: Option<PendingLoad>,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            session: None,
            selections: Vec::new(),
            message: String::new(),
            state: AppState::Loading,
            load_epoch: 0,
            pending_load: None,
        }
    }

    /// Option values currently ticked, in display order.
    pub fn selected_values(&mut self) -> Vec<String> {
        let selections = self.selections.clone();
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match session.current_view() {
            Ok(view) => view
                .options
                .iter()
                .zip(selections)
                .filter(|(_, ticked)| *ticked)
                .map(|(option, _)| option.clone())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Resizes the selection flags when a new question comes on screen.
    pub fn sync_selections(&mut self, option_count: usize) {
        if self.selections.len() != option_count {
            self.selections = vec![false; option_count];
        }
    }
}
