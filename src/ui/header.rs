use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::models::TRACKED_BATCHES;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .split(area);

    render_counters(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);
    render_badges(frame, chunks[2], app);
    frame.render_widget(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
        chunks[3],
    );
}

fn render_counters(frame: &mut Frame, area: Rect, app: &App) {
    let totals = app.engine().totals();

    let line = Line::from(vec![
        Span::styled("Answered ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/{}", totals.attempted, totals.total),
            Style::default().fg(Color::White).bold(),
        ),
        Span::raw("   "),
        Span::styled(
            format!("+ {}", totals.correct),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("- {}", totals.wrong),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
        Span::styled("Batches done ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            trophy_strip(totals.completed_batches),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn trophy_strip(completed: usize) -> String {
    if completed == 0 {
        "-".to_string()
    } else {
        "*".repeat(completed)
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let totals = app.engine().totals();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(totals.progress.clamp(0.0, 1.0))
        .label(format!("Global progress: {}%", totals.percentage()));
    frame.render_widget(gauge, area);
}

fn render_badges(frame: &mut Frame, area: Rect, app: &App) {
    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for (cell, batch_id) in cells.iter().zip(TRACKED_BATCHES) {
        let done = app.engine().is_batch_completed(batch_id);
        let (label, style) = if done {
            (
                format!("Batch {} done", batch_id),
                Style::default().fg(Color::Black).bg(Color::Green).bold(),
            )
        } else {
            (
                format!("Batch {} pending", batch_id),
                Style::default().fg(Color::Gray),
            )
        };
        let widget = Paragraph::new(label).alignment(Alignment::Center).style(style);
        frame.render_widget(widget, *cell);
    }
}
