// src/validate.rs
//
// Set-equality grading plus the pre-submission selection gate.

use thiserror::Error;

/// Selection rejected before grading: the user has not picked enough
/// options for this question's arity. Nothing is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Please select at least one option.")]
    Empty,
    #[error("Please select at least two options.")]
    NeedTwo,
}

/// Input mechanism for a question, derived from its correct-answer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exactly one correct answer: radio buttons, one selectable at a time.
    Single,
    /// More than one correct answer: checkboxes, independently toggleable.
    Multi,
}

impl SelectionMode {
    pub fn for_correct_count(count: usize) -> Self {
        if count > 1 {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }

    pub fn min_selections(self) -> usize {
        match self {
            SelectionMode::Single => 1,
            // Deliberate UX gate: at least two boxes ticked before grading,
            // even though set equality alone would catch an undersized pick.
            SelectionMode::Multi => 2,
        }
    }

    /// Gate check run before any grading. Not part of the equality check.
    pub fn check_selection_count(self, selected: usize) -> Result<(), GateError> {
        if selected == 0 {
            return Err(GateError::Empty);
        }
        if selected < self.min_selections() {
            return Err(GateError::NeedTwo);
        }
        Ok(())
    }
}

/// Exact set equality: same cardinality and mutual containment. Symmetric,
/// order-independent, and safe against duplicate selections as long as the
/// input controls guarantee uniqueness.
pub fn answer_matches(selected: &[String], correct: &[String]) -> bool {
    selected.len() == correct.len()
        && selected.iter().all(|s| correct.contains(s))
        && correct.iter().all(|c| selected.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn equal_sets_match() {
        assert!(answer_matches(&set(&["A", "B"]), &set(&["A", "B"])));
        // Order must not matter.
        assert!(answer_matches(&set(&["B", "A"]), &set(&["A", "B"])));
    }

    #[test]
    fn subsets_and_supersets_do_not_match() {
        assert!(!answer_matches(&set(&["A"]), &set(&["A", "B"])));
        assert!(!answer_matches(&set(&["A", "B", "C"]), &set(&["A", "B"])));
        assert!(!answer_matches(&set(&["A", "C"]), &set(&["A", "B"])));
    }

    #[test]
    fn mode_follows_correct_count() {
        assert_eq!(SelectionMode::for_correct_count(1), SelectionMode::Single);
        assert_eq!(SelectionMode::for_correct_count(2), SelectionMode::Multi);
        assert_eq!(SelectionMode::for_correct_count(5), SelectionMode::Multi);
    }

    #[test]
    fn single_mode_rejects_empty_selection() {
        assert_eq!(
            SelectionMode::Single.check_selection_count(0),
            Err(GateError::Empty)
        );
        assert_eq!(SelectionMode::Single.check_selection_count(1), Ok(()));
    }

    #[test]
    fn multi_mode_requires_at_least_two() {
        assert_eq!(
            SelectionMode::Multi.check_selection_count(0),
            Err(GateError::Empty)
        );
        assert_eq!(
            SelectionMode::Multi.check_selection_count(1),
            Err(GateError::NeedTwo)
        );
        assert_eq!(SelectionMode::Multi.check_selection_count(2), Ok(()));
        assert_eq!(SelectionMode::Multi.check_selection_count(3), Ok(()));
    }

    #[test]
    fn gate_messages_match_the_ui_strings() {
        assert_eq!(
            GateError::Empty.to_string(),
            "Please select at least one option."
        );
        assert_eq!(
            GateError::NeedTwo.to_string(),
            "Please select at least two options."
        );
    }
}
