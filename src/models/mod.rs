mod answer;
mod mode;
mod question;

pub use answer::AnswerRecord;
pub use mode::{InvalidModeError, Mode, TRACKED_BATCHES};
pub use question::{BatchId, Letter, Question, QuestionId};

/// Which screen the terminal UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    ModeMenu,
    Summary,
}
