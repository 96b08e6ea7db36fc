// src/session.rs
//
// The quiz state machine: an ordered active set of questions, a cursor, a
// score, and a per-question scored flag. Option order is shuffled lazily,
// once per question, the first time the question is shown.

use rand::Rng;
use thiserror::Error;

use crate::model::{DataIntegrityError, QuestionRecord};
use crate::shuffle::fisher_yates;
use crate::validate::{self, GateError, SelectionMode};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
    #[error("No more questions available.")]
    OutOfBounds,
}

/// Display view of one question: options in shuffled order, and the correct
/// set recomputed by filtering the shuffled options against the record's
/// correct set. Always derived, never stored independently of the shuffle.
#[derive(Debug, Clone)]
pub struct QuestionView {
    pub options: Vec<String>,
    pub correct: Vec<String>,
}

impl QuestionView {
    pub fn mode(&self) -> SelectionMode {
        SelectionMode::for_correct_count(self.correct.len())
    }
}

#[derive(Debug, Clone)]
struct SessionQuestion {
    record: QuestionRecord,
    view: Option<QuestionView>,
    scored: bool,
}

/// Outcome of grading one question against the user's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<SessionQuestion>,
    current: usize,
    score: usize,
    completed: bool,
}

impl QuizSession {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        let questions = records
            .into_iter()
            .map(|record| SessionQuestion {
                record,
                view: None,
                scored: false,
            })
            .collect();
        Self {
            questions,
            current: 0,
            score: 0,
            completed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Materializes the current question's view if this is its first
    /// display, then returns it. Malformed records surface as
    /// [`DataIntegrityError`] and are never rendered.
    pub fn current_view_with(&mut self, rng: &mut impl Rng) -> Result<&QuestionView, SessionError> {
        if self.current >= self.questions.len() {
            return Err(SessionError::OutOfBounds);
        }
        let index = self.current;
        self.ensure_view(index, rng)?;
        match &self.questions[index].view {
            Some(view) => Ok(view),
            None => Err(DataIntegrityError { index }.into()),
        }
    }

    pub fn current_view(&mut self) -> Result<&QuestionView, SessionError> {
        self.current_view_with(&mut rand::thread_rng())
    }

    /// Grades the current question. Re-grading is allowed and re-evaluates
    /// the verdict, but the score moves only on the first grading of each
    /// question.
    pub fn grade_current_with(
        &mut self,
        selected: &[String],
        rng: &mut impl Rng,
    ) -> Result<Verdict, SessionError> {
        if self.completed || self.current >= self.questions.len() {
            return Err(SessionError::OutOfBounds);
        }
        let index = self.current;
        self.ensure_view(index, rng)?;

        let (correct, message) = {
            let view = match &self.questions[index].view {
                Some(view) => view,
                None => return Err(DataIntegrityError { index }.into()),
            };
            view.mode().check_selection_count(selected.len())?;
            let correct = validate::answer_matches(selected, &view.correct);
            let message = if correct {
                "Correct!".to_string()
            } else {
                format!("Incorrect. Correct answer(s): {}", view.correct.join(", "))
            };
            (correct, message)
        };

        let question = &mut self.questions[index];
        if !question.scored {
            question.scored = true;
            if correct {
                self.score += 1;
            }
        }
        log::debug!(
            "Graded question {} of {}: {}",
            index + 1,
            self.questions.len(),
            if correct { "correct" } else { "incorrect" }
        );
        Ok(Verdict { correct, message })
    }

    pub fn grade_current(&mut self, selected: &[String]) -> Result<Verdict, SessionError> {
        self.grade_current_with(selected, &mut rand::thread_rng())
    }

    /// Grades the current question and moves to the next one. Rejected on
    /// the last question (use [`finish_with`](Self::finish_with)) and after
    /// completion; a gate failure leaves the cursor where it was.
    pub fn advance_with(
        &mut self,
        selected: &[String],
        rng: &mut impl Rng,
    ) -> Result<Verdict, SessionError> {
        if self.completed || self.current + 1 >= self.questions.len() {
            return Err(SessionError::OutOfBounds);
        }
        let verdict = self.grade_current_with(selected, rng)?;
        self.current += 1;
        Ok(verdict)
    }

    pub fn advance(&mut self, selected: &[String]) -> Result<Verdict, SessionError> {
        self.advance_with(selected, &mut rand::thread_rng())
    }

    /// Grades the final question and freezes the session. Only valid on the
    /// last question.
    pub fn finish_with(
        &mut self,
        selected: &[String],
        rng: &mut impl Rng,
    ) -> Result<Verdict, SessionError> {
        if self.completed || !self.is_last_question() {
            return Err(SessionError::OutOfBounds);
        }
        let verdict = self.grade_current_with(selected, rng)?;
        self.completed = true;
        log::info!("Quiz completed: {}/{}", self.score, self.questions.len());
        Ok(verdict)
    }

    pub fn finish(&mut self, selected: &[String]) -> Result<Verdict, SessionError> {
        self.finish_with(selected, &mut rand::thread_rng())
    }

    fn ensure_view(&mut self, index: usize, rng: &mut impl Rng) -> Result<(), SessionError> {
        let question = &mut self.questions[index];
        if question.view.is_some() {
            return Ok(());
        }
        let record = &question.record;
        if record.question.trim().is_empty() || record.options.is_empty() {
            return Err(DataIntegrityError { index }.into());
        }

        let mut options = record.options.clone();
        fisher_yates(&mut options, rng);
        let correct: Vec<String> = options
            .iter()
            .filter(|option| record.correct.contains(option))
            .cloned()
            .collect();
        if correct.is_empty() {
            return Err(DataIntegrityError { index }.into());
        }

        question.view = Some(QuestionView { options, correct });
        Ok(())
    }

    /// 1-based ordinal plus question text, as shown in the header.
    pub fn current_prompt(&self) -> Option<String> {
        self.questions
            .get(self.current)
            .map(|q| format!("{}. {}", self.current + 1, q.record.question))
    }
}
