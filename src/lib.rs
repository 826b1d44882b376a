//! # batch-quiz
//!
//! A terminal multiple-choice quiz runner over a bank of questions grouped
//! into batches. One failed attempt locks a question until results are reset.
//!
//! The quiz logic lives in [`Engine`], which can be driven without a terminal:
//!
//! ```rust
//! use batch_quiz::{Engine, Letter, SessionState, load_bank_from_str};
//!
//! let bank = load_bank_from_str(r#"{"lotes": [{"lote_id": 1, "preguntas": [
//!     {"n": 1, "pregunta": "2 + 2?", "respuesta_a": "4", "respuesta_b": "5",
//!      "respuesta_c": "22", "correcta": "A"}
//! ]}]}"#)?;
//!
//! let mut engine = Engine::new(&bank, SessionState::new());
//! engine.submit_answer(1, Letter::A)?;
//! assert_eq!(engine.totals().correct, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use batch_quiz::{Quiz, QuizError, SessionState};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json", SessionState::new())?;
//!     quiz.run()
//! }
//! ```

mod app;
mod data;
pub mod engine;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{
    DEFAULT_QUESTIONS_PATH, LoadError, QuestionBank, bank, load_bank_from_path,
    load_bank_from_str,
};
pub use engine::{CurrentQuestion, Engine, ModeSummary, SubmitError, Submission, Totals};
pub use models::{
    AnswerRecord, AppState, BatchId, InvalidModeError, Letter, Mode, Question, QuestionId,
    TRACKED_BATCHES,
};
pub use session::{Feedback, Outcome, SessionState};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App<'static>,
}

impl Quiz {
    pub fn new(bank: &'static QuestionBank, session: SessionState) -> Self {
        Self {
            app: App::new(bank, session),
        }
    }

    /// Loads the process-wide bank from `path` and starts a session on it.
    pub fn from_json<P: AsRef<Path>>(path: P, session: SessionState) -> Result<Self, QuizError> {
        let bank = data::bank(path)?;
        Ok(Self::new(bank, session))
    }

    /// Takes over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let session = self.app.engine().state().id;
        tracing::info!(%session, "quiz session started");

        let mut terminal = terminal::TerminalSession::enter()?;
        run_event_loop(terminal.terminal(), &mut self.app)?;

        let totals = self.app.engine().totals();
        tracing::info!(
            %session,
            attempted = totals.attempted,
            correct = totals.correct,
            wrong = totals.wrong,
            "quiz session ended"
        );
        Ok(())
    }

    pub fn app(&self) -> &App<'static> {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App<'static> {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::ModeMenu => handle_menu_input(app, key),
        AppState::Summary => handle_summary_input(app, key),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ ('a' | 'b' | 'c' | 'A' | 'B' | 'C')) => {
            if let Some(letter) = Letter::parse(&c.to_string()) {
                app.select_option(letter);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Char('m') => app.open_mode_menu(),
        KeyCode::Char('s') => app.toggle_summary(),
        KeyCode::Char('f') => app.toggle_feedback(),
        KeyCode::Char('R') => app.reset_results(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_menu_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
        KeyCode::Enter => app.confirm_mode(),
        KeyCode::Esc | KeyCode::Char('m') => app.close_overlay(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_summary_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc | KeyCode::Char('s') => app.close_overlay(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
