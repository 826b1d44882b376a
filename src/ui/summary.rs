use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuestionId;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mode = app.engine().state().mode;
    let summary = app.engine().mode_summary(mode);

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let counters = vec![
        Line::from(Span::styled(
            format!("SUMMARY · {}", mode.label()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("Answered {}", summary.attempted),
                Style::default().fg(Color::White),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Correct {}", summary.correct),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Wrong {}", summary.wrong),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];
    let widget = Paragraph::new(counters).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[0]);

    let ids = vec![
        Line::from(vec![
            Span::styled("Wrong (ids): ", Style::default().fg(Color::Red)),
            Span::styled(
                format_ids(&summary.wrong_ids),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Correct (ids): ", Style::default().fg(Color::Green)),
            Span::styled(
                format_ids(&summary.correct_ids),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];
    let widget = Paragraph::new(ids)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("s back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn format_ids(ids: &[QuestionId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
