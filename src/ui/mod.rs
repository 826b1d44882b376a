mod header;
mod menu;
mod quiz;
mod summary;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Length(5), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    header::render(frame, chunks[0], app);

    match app.state {
        AppState::Quiz => quiz::render(frame, chunks[1], app),
        AppState::ModeMenu => {
            quiz::render(frame, chunks[1], app);
            menu::render(frame, chunks[1], app);
        }
        AppState::Summary => summary::render(frame, chunks[1], app),
    }
}
