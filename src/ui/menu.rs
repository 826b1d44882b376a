use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Mode;

const MENU_WIDTH: u16 = 34;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let height = Mode::ALL.len() as u16 + 4;
    let popup = centered(area, MENU_WIDTH, height);

    let active = app.engine().state().mode;
    let lines: Vec<Line> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(index, &mode)| {
            let is_cursor = index == app.menu_cursor();
            let style = if is_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_cursor { ">" } else { " " };
            let current = if mode == active { " (current)" } else { "" };

            Line::from(vec![
                Span::styled(format!("{} ", marker), style),
                Span::styled(mode.label(), style),
                Span::styled(current, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Mode ")
            .title_bottom(Line::from(" enter select · esc back ").fg(Color::DarkGray))
            .borders(Borders::ALL)
            .border_style(Color::Cyan)
            .padding(Padding::uniform(1)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
