//! Quiz engine.
//!
//! Every user action maps to one method on [`Engine`]. The engine owns the
//! session's [`SessionState`] and borrows the read-only [`QuestionBank`].

pub mod grading;
pub mod resolver;
pub mod stats;

use thiserror::Error;

use crate::data::QuestionBank;
use crate::models::{AnswerRecord, BatchId, Letter, Mode, Question, QuestionId};
use crate::session::{Feedback, Outcome, SessionState};

pub use stats::{ModeSummary, Totals};

/// Reasons a submission is rejected. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Question {0} is locked after a failed attempt")]
    Locked(QuestionId),
    #[error("Question {0} is not in the bank")]
    UnknownQuestion(QuestionId),
}

/// Result of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub outcome: Outcome,
    pub correct_letter: Letter,
}

/// The question to display, after clamping the session index.
#[derive(Debug, Clone, Copy)]
pub struct CurrentQuestion<'b> {
    /// 0-based position within the mode's list.
    pub position: usize,
    /// Number of questions in the mode.
    pub total: usize,
    pub question: &'b Question,
}

pub struct Engine<'b> {
    bank: &'b QuestionBank,
    state: SessionState,
}

impl<'b> Engine<'b> {
    pub fn new(bank: &'b QuestionBank, state: SessionState) -> Self {
        Self { bank, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn questions_for_mode(&self, mode: Mode) -> Vec<&'b Question> {
        resolver::questions_for_mode(self.bank, &self.state, mode)
    }

    pub fn correct_letter(&self, question: &Question) -> Letter {
        grading::correct_letter(question)
    }

    pub fn is_locked(&self, n: QuestionId) -> bool {
        self.state.locked.contains(&n)
    }

    /// Whether a submission for `n` would be accepted.
    pub fn can_submit(&self, n: QuestionId) -> bool {
        !self.is_locked(n) || self.state.is_correct(n)
    }

    pub fn is_batch_completed(&self, batch_id: BatchId) -> bool {
        stats::is_batch_completed(self.bank, &self.state, batch_id)
    }

    pub fn totals(&self) -> Totals {
        stats::totals(self.bank, &self.state)
    }

    pub fn mode_summary(&self, mode: Mode) -> ModeSummary {
        stats::mode_summary(self.bank, &self.state, mode)
    }

    /// Grades `selected` for question `n` and advances to the next question.
    ///
    /// A question answered correctly before only records the new selection.
    /// A wrong answer locks the question until [`Engine::reset`].
    pub fn submit_answer(
        &mut self,
        n: QuestionId,
        selected: Letter,
    ) -> Result<Submission, SubmitError> {
        let bank = self.bank;
        let question = bank.get(n).ok_or(SubmitError::UnknownQuestion(n))?;
        if !self.can_submit(n) {
            tracing::debug!(
                session = %self.state.id,
                n,
                "submission rejected, question locked"
            );
            return Err(SubmitError::Locked(n));
        }

        let correct_letter = grading::correct_letter(question);
        let record = self
            .state
            .answers
            .entry(n)
            .or_insert_with(|| AnswerRecord::new(question.batch_id));

        record.selected = Some(selected);
        let outcome = if record.correct {
            Outcome::AlreadyCorrect
        } else {
            record.attempts += 1;
            if selected == correct_letter {
                record.correct = true;
                Outcome::Correct
            } else {
                Outcome::Incorrect
            }
        };
        let attempts = record.attempts;

        if outcome == Outcome::Incorrect {
            self.state.locked.insert(n);
        }

        tracing::debug!(
            session = %self.state.id,
            n,
            %selected,
            %correct_letter,
            ?outcome,
            attempts,
            "answer submitted"
        );

        self.next();
        if self.state.show_correct_between {
            self.state.last_feedback = Some(Feedback {
                n,
                outcome,
                correct_letter,
                correct_text: question.option(correct_letter).to_string(),
            });
        }

        Ok(Submission {
            outcome,
            correct_letter,
        })
    }

    /// Clamps the session index into the active mode and returns its question.
    ///
    /// Returns `None` when the mode has no questions.
    pub fn current_question(&mut self) -> Option<CurrentQuestion<'b>> {
        let questions = self.questions_for_mode(self.state.mode);
        let last = questions.len().checked_sub(1)?;
        let position = self.state.current_index.min(last);
        self.state.current_index = position;

        Some(CurrentQuestion {
            position,
            total: questions.len(),
            question: questions[position],
        })
    }

    pub fn next(&mut self) {
        self.state.current_index += 1;
        self.state.last_feedback = None;
    }

    pub fn previous(&mut self) {
        self.state.current_index = self.state.current_index.saturating_sub(1);
        self.state.last_feedback = None;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.state.mode {
            tracing::info!(
                session = %self.state.id,
                from = %self.state.mode,
                to = %mode,
                "mode changed"
            );
        }
        self.state.mode = mode;
        self.state.current_index = 0;
        self.state.last_feedback = None;
    }

    pub fn set_show_correct_between(&mut self, show: bool) {
        self.state.show_correct_between = show;
    }

    /// Clears all results. Mode and feedback preference are kept.
    pub fn reset(&mut self) {
        tracing::info!(
            session = %self.state.id,
            answers = self.state.answers.len(),
            locked = self.state.locked.len(),
            "results reset"
        );
        self.state.clear_results();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_bank_from_str;

    fn bank() -> QuestionBank {
        load_bank_from_str(
            r#"{"lotes": [
                {"lote_id": 1, "preguntas": [
                    {"n": 1, "pregunta": "One?", "respuesta_a": "uno", "respuesta_b": "dos", "respuesta_c": "tres", "correcta": "A"},
                    {"n": 2, "pregunta": "Two?", "respuesta_a": "uno", "respuesta_b": "dos", "respuesta_c": "tres", "correcta": "dos"}
                ]},
                {"lote_id": 2, "preguntas": [
                    {"n": 3, "pregunta": "Three?", "respuesta_a": "uno", "respuesta_b": "dos", "respuesta_c": "tres", "correcta": "c"}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_correct_submission() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());

        let submission = engine.submit_answer(2, Letter::B).unwrap();
        assert_eq!(submission.outcome, Outcome::Correct);
        assert_eq!(submission.correct_letter, Letter::B);

        let record = engine.state().answer(2).unwrap();
        assert_eq!(record.attempts, 1);
        assert!(record.correct);
        assert_eq!(record.selected, Some(Letter::B));
        assert_eq!(record.batch_id, 1);
        assert!(!engine.is_locked(2));
        assert_eq!(engine.state().current_index, 1);
    }

    #[test]
    fn test_incorrect_submission_locks() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());

        let submission = engine.submit_answer(3, Letter::A).unwrap();
        assert_eq!(submission.outcome, Outcome::Incorrect);
        assert_eq!(submission.correct_letter, Letter::C);
        assert!(engine.is_locked(3));
        assert!(!engine.can_submit(3));

        let before = engine.state().clone();
        assert_eq!(
            engine.submit_answer(3, Letter::C),
            Err(SubmitError::Locked(3)),
        );
        assert_eq!(engine.state().answers, before.answers);
        assert_eq!(engine.state().current_index, before.current_index);
    }

    #[test]
    fn test_resubmitting_correct_answer_is_free() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());
        engine.submit_answer(1, Letter::A).unwrap();

        let again = engine.submit_answer(1, Letter::A).unwrap();
        assert_eq!(again.outcome, Outcome::AlreadyCorrect);

        let different = engine.submit_answer(1, Letter::C).unwrap();
        assert_eq!(different.outcome, Outcome::AlreadyCorrect);

        let record = engine.state().answer(1).unwrap();
        assert_eq!(record.attempts, 1);
        assert!(record.correct);
        assert_eq!(record.selected, Some(Letter::C));
        assert!(!engine.is_locked(1));
        assert_eq!(engine.state().current_index, 3);
    }

    #[test]
    fn test_unknown_question() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());
        assert_eq!(
            engine.submit_answer(99, Letter::A),
            Err(SubmitError::UnknownQuestion(99))
        );
        assert!(engine.state().answers.is_empty());
    }

    #[test]
    fn test_feedback_only_when_enabled() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());
        engine.submit_answer(1, Letter::B).unwrap();
        assert!(engine.state().last_feedback.is_none());

        engine.set_show_correct_between(true);
        engine.submit_answer(2, Letter::A).unwrap();
        let feedback = engine.state().last_feedback.clone().unwrap();
        assert_eq!(feedback.n, 2);
        assert_eq!(feedback.outcome, Outcome::Incorrect);
        assert_eq!(feedback.correct_letter, Letter::B);
        assert_eq!(feedback.correct_text, "dos");

        engine.next();
        assert!(engine.state().last_feedback.is_none());
    }

    #[test]
    fn test_navigation_and_clamping() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());

        engine.previous();
        assert_eq!(engine.state().current_index, 0);

        for _ in 0..5 {
            engine.next();
        }
        assert_eq!(engine.state().current_index, 5);

        let current = engine.current_question().unwrap();
        assert_eq!((current.position, current.total), (2, 3));
        assert_eq!(current.question.n, 3);
        assert_eq!(engine.state().current_index, 2);

        engine.previous();
        assert_eq!(engine.current_question().unwrap().question.n, 2);
    }

    #[test]
    fn test_set_mode_resets_position() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());
        engine.set_show_correct_between(true);
        engine.submit_answer(1, Letter::B).unwrap();
        assert!(engine.state().last_feedback.is_some());

        engine.set_mode(Mode::Review);
        assert_eq!(engine.state().mode, Mode::Review);
        assert_eq!(engine.state().current_index, 0);
        assert!(engine.state().last_feedback.is_none());
        assert_eq!(engine.current_question().unwrap().question.n, 1);
    }

    #[test]
    fn test_empty_mode_has_no_current_question() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::new());
        engine.set_mode(Mode::Batch3);
        assert!(engine.current_question().is_none());
        engine.next();
        assert!(engine.current_question().is_none());

        engine.set_mode(Mode::Review);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn test_reset_clears_results() {
        let bank = bank();
        let mut engine = Engine::new(&bank, SessionState::with_preferences(Mode::Batch1, true));
        engine.submit_answer(1, Letter::A).unwrap();
        engine.submit_answer(2, Letter::C).unwrap();
        assert!(!engine.is_batch_completed(1));

        engine.reset();

        let totals = engine.totals();
        assert_eq!((totals.attempted, totals.correct, totals.wrong), (0, 0, 0));
        assert!(!engine.is_locked(2));
        assert_eq!(engine.state().current_index, 0);
        assert!(engine.state().last_feedback.is_none());
        assert_eq!(engine.state().mode, Mode::Batch1);
        assert!(engine.state().show_correct_between);

        assert_eq!(
            engine.submit_answer(2, Letter::B).unwrap().outcome,
            Outcome::Correct,
        );
    }
}
