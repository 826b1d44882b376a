use crate::data::QuestionBank;
use crate::engine::{CurrentQuestion, Engine};
use crate::models::{AppState, Letter, Mode};
use crate::session::SessionState;

/// Terminal front end state wrapped around one engine session.
pub struct App<'b> {
    pub state: AppState,
    engine: Engine<'b>,
    current: Option<CurrentQuestion<'b>>,
    selected_option: Letter,
    menu_cursor: usize,
    notice: Option<String>,
}

impl<'b> App<'b> {
    pub fn new(bank: &'b QuestionBank, session: SessionState) -> Self {
        let menu_cursor = Mode::ALL
            .iter()
            .position(|&mode| mode == session.mode)
            .unwrap_or(0);
        let mut app = Self {
            state: AppState::Quiz,
            engine: Engine::new(bank, session),
            current: None,
            selected_option: Letter::A,
            menu_cursor,
            notice: None,
        };
        app.refresh();
        app
    }

    pub fn engine(&self) -> &Engine<'b> {
        &self.engine
    }

    pub fn current(&self) -> Option<&CurrentQuestion<'b>> {
        self.current.as_ref()
    }

    pub fn selected_option(&self) -> Letter {
        self.selected_option
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// One-line status such as a rejected submission.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the current question is locked against further attempts.
    pub fn is_current_locked(&self) -> bool {
        self.current
            .is_some_and(|current| !self.engine.can_submit(current.question.n))
    }

    pub fn select_next_option(&mut self) {
        if !self.is_current_locked() {
            self.selected_option = self.selected_option.next();
        }
    }

    pub fn select_previous_option(&mut self) {
        if !self.is_current_locked() {
            self.selected_option = self.selected_option.previous();
        }
    }

    pub fn select_option(&mut self, letter: Letter) {
        if !self.is_current_locked() {
            self.selected_option = letter;
        }
    }

    pub fn submit_answer(&mut self) {
        let Some(current) = self.current else {
            return;
        };

        match self
            .engine
            .submit_answer(current.question.n, self.selected_option)
        {
            Ok(_) => self.notice = None,
            Err(err) => self.notice = Some(err.to_string()),
        }
        self.refresh();
    }

    pub fn next_question(&mut self) {
        self.engine.next();
        self.notice = None;
        self.refresh();
    }

    pub fn previous_question(&mut self) {
        self.engine.previous();
        self.notice = None;
        self.refresh();
    }

    pub fn toggle_feedback(&mut self) {
        let show = !self.engine.state().show_correct_between;
        self.engine.set_show_correct_between(show);
    }

    pub fn reset_results(&mut self) {
        self.engine.reset();
        self.notice = None;
        self.refresh();
    }

    pub fn open_mode_menu(&mut self) {
        self.state = AppState::ModeMenu;
    }

    pub fn menu_down(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % Mode::ALL.len();
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = (self.menu_cursor + Mode::ALL.len() - 1) % Mode::ALL.len();
    }

    pub fn confirm_mode(&mut self) {
        let mode = Mode::ALL[self.menu_cursor];
        if mode != self.engine.state().mode {
            self.engine.set_mode(mode);
        }
        self.state = AppState::Quiz;
        self.notice = None;
        self.refresh();
    }

    pub fn toggle_summary(&mut self) {
        self.state = match self.state {
            AppState::Summary => AppState::Quiz,
            _ => AppState::Summary,
        };
    }

    pub fn close_overlay(&mut self) {
        self.state = AppState::Quiz;
    }

    /// Re-clamps the index and preselects the last recorded choice.
    fn refresh(&mut self) {
        self.current = self.engine.current_question();
        self.selected_option = self
            .current
            .and_then(|current| self.engine.state().answer(current.question.n))
            .and_then(|record| record.selected)
            .unwrap_or(Letter::A);
    }
}
