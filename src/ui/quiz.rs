use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::CurrentQuestion;
use crate::models::{Letter, Mode, Question};
use crate::session::{Feedback, Outcome};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(current) = app.current() else {
        render_empty_mode(frame, area, app.engine().state().mode);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let locked = app.is_current_locked();

    render_position(frame, chunks[0], app, current);
    render_question_text(frame, chunks[2], &current.question.prompt);
    render_options(
        frame,
        chunks[3],
        current.question,
        app.selected_option(),
        locked,
    );
    render_status(frame, chunks[4], app, locked);
    render_controls(frame, chunks[5], locked);
}

fn render_empty_mode(frame: &mut Frame, area: Rect, mode: Mode) {
    let hint = if mode == Mode::Review {
        "No failed questions to review. Nicely done!"
    } else {
        "There are no questions in this mode."
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            mode.label(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(hint.fg(Color::Gray)),
        Line::from(""),
        Line::from("m change mode  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_position(frame: &mut Frame, area: Rect, app: &App, current: &CurrentQuestion) {
    let line = Line::from(vec![
        Span::styled(
            app.engine().state().mode.label(),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(
                "   Question {} of {}  (No. {} · Batch {})",
                current.position + 1,
                current.total,
                current.question.n,
                current.question.batch_id
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: Letter,
    locked: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(Letter::ALL.len() * 2);

    for letter in Letter::ALL {
        let is_selected = letter == selected;
        let style = match (is_selected, locked) {
            (true, false) => Style::default().fg(Color::Cyan).bold(),
            (true, true) => Style::default().fg(Color::Red).bold(),
            (false, _) if locked => Style::default().fg(Color::DarkGray),
            (false, _) => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}) ", letter), style),
            Span::styled(question.option(letter), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, locked: bool) {
    let line = if let Some(notice) = app.notice() {
        Line::from(Span::styled(notice, Style::default().fg(Color::Yellow)))
    } else if let Some(feedback) = &app.engine().state().last_feedback {
        feedback_line(feedback)
    } else if locked {
        Line::from(Span::styled(
            "Locked after a failed attempt. Reset results to try again.",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn feedback_line(feedback: &Feedback) -> Line<'_> {
    let answer = format!("{}) {}", feedback.correct_letter, feedback.correct_text);
    let (text, color) = match feedback.outcome {
        Outcome::AlreadyCorrect => (format!("Already correct. Answer: {}", answer), Color::Green),
        Outcome::Correct => (format!("Correct. {}", answer), Color::Green),
        Outcome::Incorrect => (format!("Incorrect. Correct answer: {}", answer), Color::Red),
    };
    Line::from(vec![
        Span::styled(
            format!("Question {}: ", feedback.n),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(text, Style::default().fg(color).bold()),
    ])
}

fn render_controls(frame: &mut Frame, area: Rect, locked: bool) {
    let text = if locked {
        "h/l move · m mode · s summary · f feedback · R reset · q quit"
    } else {
        "j/k choose · enter answer · h/l move · m mode · s summary · f feedback · R reset · q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
