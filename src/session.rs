//! Per-session quiz state.
//!
//! A `SessionState` is owned by exactly one session and passed explicitly
//! to every engine operation. Nothing here is process-wide.

use std::collections::{BTreeMap, BTreeSet};

use uuid::Uuid;

use crate::models::{AnswerRecord, Letter, Mode, QuestionId};

/// Result of a graded submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The question had already been answered correctly; nothing was graded.
    AlreadyCorrect,
    Correct,
    Incorrect,
}

/// Message shown between questions when feedback display is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub n: QuestionId,
    pub outcome: Outcome,
    pub correct_letter: Letter,
    pub correct_text: String,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Session identifier, recorded in log fields.
    pub id: Uuid,
    pub mode: Mode,
    /// 0-based position within the active mode's question list.
    pub current_index: usize,
    pub show_correct_between: bool,
    pub answers: BTreeMap<QuestionId, AnswerRecord>,
    /// Questions that failed once and accept no further attempts.
    pub locked: BTreeSet<QuestionId>,
    pub last_feedback: Option<Feedback>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_preferences(Mode::Full, false)
    }

    pub fn with_preferences(mode: Mode, show_correct_between: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            current_index: 0,
            show_correct_between,
            answers: BTreeMap::new(),
            locked: BTreeSet::new(),
            last_feedback: None,
        }
    }

    pub fn answer(&self, n: QuestionId) -> Option<&AnswerRecord> {
        self.answers.get(&n)
    }

    pub fn is_correct(&self, n: QuestionId) -> bool {
        self.answers.get(&n).is_some_and(|record| record.correct)
    }

    /// Clears results but keeps the mode and feedback preference.
    pub fn clear_results(&mut self) {
        self.answers.clear();
        self.locked.clear();
        self.current_index = 0;
        self.last_feedback = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SessionState::new();
        assert_eq!(state.mode, Mode::Full);
        assert_eq!(state.current_index, 0);
        assert!(!state.show_correct_between);
        assert!(state.answers.is_empty());
        assert!(state.locked.is_empty());
        assert!(state.last_feedback.is_none());
    }

    #[test]
    fn test_clear_results_keeps_preferences() {
        let mut state = SessionState::with_preferences(Mode::Batch2, true);
        state.answers.insert(5, AnswerRecord::new(2));
        state.locked.insert(5);
        state.current_index = 3;

        state.clear_results();

        assert_eq!(state.mode, Mode::Batch2);
        assert!(state.show_correct_between);
        assert!(state.answers.is_empty());
        assert!(state.locked.is_empty());
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(SessionState::new().id, SessionState::new().id);
    }
}
