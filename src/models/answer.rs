use super::question::{BatchId, Letter};

/// Per-question attempt record kept by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub attempts: u32,
    /// True once the question has ever been answered correctly.
    pub correct: bool,
    /// Last chosen letter.
    pub selected: Option<Letter>,
    pub batch_id: BatchId,
}

impl AnswerRecord {
    pub fn new(batch_id: BatchId) -> Self {
        Self {
            attempts: 0,
            correct: false,
            selected: None,
            batch_id,
        }
    }

    pub fn is_attempted(&self) -> bool {
        self.attempts >= 1
    }

    /// Attempted and never answered correctly.
    pub fn is_failed(&self) -> bool {
        self.is_attempted() && !self.correct
    }
}
