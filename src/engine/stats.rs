//! Aggregate statistics over a session's answers.

use crate::data::QuestionBank;
use crate::models::{BatchId, Mode, QuestionId, TRACKED_BATCHES};
use crate::session::SessionState;

use super::resolver::questions_for_mode;

/// Bank-wide counters for the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub attempted: usize,
    pub correct: usize,
    pub wrong: usize,
    pub total: usize,
    /// Share of the bank answered correctly, in `0.0..=1.0`.
    pub progress: f64,
    pub completed_batches: usize,
}

impl Totals {
    pub fn percentage(&self) -> u32 {
        (self.progress * 100.0) as u32
    }
}

/// Counters restricted to one mode's question set.
///
/// `correct_ids` and `wrong_ids` follow the mode's load order, not the order
/// in which the questions were answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeSummary {
    pub attempted: usize,
    pub correct: usize,
    pub wrong: usize,
    pub correct_ids: Vec<QuestionId>,
    pub wrong_ids: Vec<QuestionId>,
}

/// A batch is complete when it is non-empty and every question in it is correct.
pub fn is_batch_completed(bank: &QuestionBank, state: &SessionState, batch_id: BatchId) -> bool {
    let mut questions = bank.batch(batch_id).peekable();
    questions.peek().is_some() && questions.all(|question| state.is_correct(question.n))
}

pub fn totals(bank: &QuestionBank, state: &SessionState) -> Totals {
    let attempted = state
        .answers
        .values()
        .filter(|record| record.is_attempted())
        .count();
    let correct = state.answers.values().filter(|record| record.correct).count();
    let total = bank.len();
    let progress = if total > 0 {
        correct as f64 / total as f64
    } else {
        0.0
    };
    let completed_batches = TRACKED_BATCHES
        .iter()
        .filter(|&&batch_id| is_batch_completed(bank, state, batch_id))
        .count();

    Totals {
        attempted,
        correct,
        wrong: attempted - correct,
        total,
        progress,
        completed_batches,
    }
}

/// Ids are listed in the mode's load order.
pub fn mode_summary(bank: &QuestionBank, state: &SessionState, mode: Mode) -> ModeSummary {
    let mut summary = ModeSummary::default();

    for question in questions_for_mode(bank, state, mode) {
        let Some(record) = state.answer(question.n) else {
            continue;
        };
        if record.is_attempted() {
            summary.attempted += 1;
        }
        if record.correct {
            summary.correct_ids.push(question.n);
        } else if record.is_attempted() {
            summary.wrong_ids.push(question.n);
        }
    }

    summary.correct = summary.correct_ids.len();
    summary.wrong = summary.wrong_ids.len();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_bank_from_str;
    use crate::models::AnswerRecord;

    fn bank() -> QuestionBank {
        load_bank_from_str(
            r#"{"lotes": [
                {"lote_id": 1, "preguntas": [
                    {"n": 1, "pregunta": "?", "respuesta_a": "a", "respuesta_b": "b", "respuesta_c": "c", "correcta": "A"},
                    {"n": 2, "pregunta": "?", "respuesta_a": "a", "respuesta_b": "b", "respuesta_c": "c", "correcta": "B"}
                ]},
                {"lote_id": 2, "preguntas": [
                    {"n": 3, "pregunta": "?", "respuesta_a": "a", "respuesta_b": "b", "respuesta_c": "c", "correcta": "C"},
                    {"n": 4, "pregunta": "?", "respuesta_a": "a", "respuesta_b": "b", "respuesta_c": "c", "correcta": "C"}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    fn record(state: &mut SessionState, n: QuestionId, batch_id: BatchId, correct: bool) {
        let mut record = AnswerRecord::new(batch_id);
        record.attempts = 1;
        record.correct = correct;
        state.answers.insert(n, record);
    }

    #[test]
    fn test_empty_session() {
        let totals = totals(&bank(), &SessionState::new());
        assert_eq!(totals.attempted, 0);
        assert_eq!(totals.correct, 0);
        assert_eq!(totals.wrong, 0);
        assert_eq!(totals.total, 4);
        assert_eq!(totals.progress, 0.0);
        assert_eq!(totals.completed_batches, 0);
    }

    #[test]
    fn test_empty_bank_progress() {
        let bank = load_bank_from_str(r#"{"lotes": []}"#).unwrap();
        let totals = totals(&bank, &SessionState::new());
        assert_eq!(totals.progress, 0.0);
        assert_eq!(totals.total, 0);
    }

    #[test]
    fn test_totals_and_completion() {
        let bank = bank();
        let mut state = SessionState::new();
        record(&mut state, 1, 1, true);
        record(&mut state, 2, 1, true);
        record(&mut state, 3, 2, false);

        let totals = totals(&bank, &state);
        assert_eq!((totals.attempted, totals.correct, totals.wrong), (3, 2, 1));
        assert_eq!(totals.progress, 0.5);
        assert_eq!(totals.percentage(), 50);
        assert_eq!(totals.completed_batches, 1);

        assert!(is_batch_completed(&bank, &state, 1));
        assert!(!is_batch_completed(&bank, &state, 2));
        assert!(!is_batch_completed(&bank, &state, 3));
    }

    #[test]
    fn test_mode_summary_is_scoped() {
        let bank = bank();
        let mut state = SessionState::new();
        record(&mut state, 1, 1, true);
        record(&mut state, 4, 2, false);
        record(&mut state, 3, 2, true);

        let batch2 = mode_summary(&bank, &state, Mode::Batch2);
        assert_eq!((batch2.attempted, batch2.correct, batch2.wrong), (2, 1, 1));
        assert_eq!(batch2.correct_ids, vec![3]);
        assert_eq!(batch2.wrong_ids, vec![4]);

        let full = mode_summary(&bank, &state, Mode::Full);
        assert_eq!(full.correct_ids, vec![1, 3]);

        let review = mode_summary(&bank, &state, Mode::Review);
        assert_eq!(review.wrong_ids, vec![4]);
        assert!(review.correct_ids.is_empty());
    }

    #[test]
    fn test_mode_summary_lists_ids_in_load_order() {
        let bank = load_bank_from_str(
            r#"{"lotes": [{"lote_id": 1, "preguntas": [
                {"n": 9, "pregunta": "?", "respuesta_a": "a", "respuesta_b": "b", "respuesta_c": "c", "correcta": "A"},
                {"n": 2, "pregunta": "?", "respuesta_a": "a", "respuesta_b": "b", "respuesta_c": "c", "correcta": "A"},
                {"n": 5, "pregunta": "?", "respuesta_a": "a", "respuesta_b": "b", "respuesta_c": "c", "correcta": "A"}
            ]}]}"#,
        )
        .unwrap();
        let mut state = SessionState::new();
        record(&mut state, 5, 1, true);
        record(&mut state, 2, 1, true);
        record(&mut state, 9, 1, true);

        let summary = mode_summary(&bank, &state, Mode::Batch1);
        assert_eq!(summary.correct_ids, vec![9, 2, 5]);
    }
}
