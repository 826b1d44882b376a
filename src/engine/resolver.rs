//! Mode to question-set resolution.

use crate::data::QuestionBank;
use crate::models::{Mode, Question};
use crate::session::SessionState;

/// Questions practiced under `mode`, always in bank load order.
///
/// Review mode draws on the session's answers; an empty result is valid.
pub fn questions_for_mode<'b>(
    bank: &'b QuestionBank,
    state: &SessionState,
    mode: Mode,
) -> Vec<&'b Question> {
    if let Some(batch_id) = mode.batch_id() {
        return bank.batch(batch_id).collect();
    }

    match mode {
        Mode::Review => bank
            .questions()
            .iter()
            .filter(|question| {
                state
                    .answer(question.n)
                    .is_some_and(|record| record.is_failed())
            })
            .collect(),
        _ => bank.questions().iter().collect(),
    }
}
