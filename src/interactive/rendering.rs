//! TUI rendering with ratatui
//!
//! Board, deductions and messages for the Mastermind interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Color as PegColor, ColorSet, Feedback, Mark};
use crate::solver::Slot;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Green => Color::Green,
        PegColor::Blue => Color::Blue,
        PegColor::Red => Color::Red,
        PegColor::Yellow => Color::Yellow,
        PegColor::Purple => Color::Magenta,
        PegColor::Cyan => Color::Cyan,
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.colors()
        .iter()
        .map(|&c| {
            Span::styled(
                format!(" ● {} ", c.code()),
                Style::default()
                    .fg(peg_color(c))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn feedback_spans(feedback: &Feedback) -> Vec<Span<'static>> {
    feedback
        .marks()
        .iter()
        .map(|mark| {
            let color = match mark {
                Mark::Exact => Color::Green,
                Mark::Present => Color::Yellow,
                Mark::Absent => Color::DarkGray,
            };
            Span::styled(format!(" {}", mark.symbol()), Style::default().fg(color))
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.history();
    let mut lines: Vec<Line> = Vec::with_capacity(app.board.turn_limit() + 2);

    for turn in 0..app.board.turn_limit() {
        let mut spans = vec![Span::styled(
            format!("{:2} │", turn + 1),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some((guess, feedback)) = history.get(turn) {
            spans.extend(code_spans(guess));
            spans.push(Span::raw("  │"));
            spans.extend(feedback_spans(feedback));
        } else {
            spans.push(Span::styled(
                "  ·    ·    ·    ·   │",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    if app.input_mode == InputMode::GameOver {
        let mut spans = vec![Span::raw("Secret:")];
        spans.extend(code_spans(app.board.secret()));
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Turns gauge
            Constraint::Length(8), // Deductions
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_turns(f, app, chunks[0]);
    render_deductions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_turns(f: &mut Frame, app: &App, area: Rect) {
    let used = app.board.turns_elapsed();
    let limit = app.board.turn_limit().max(1);
    let percent = ((used * 100) / limit).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{limit} used | {} left", app.board.turns_left()));

    f.render_widget(gauge, area);
}

fn pool_spans(pool: ColorSet) -> Vec<Span<'static>> {
    pool.iter()
        .map(|c| Span::styled(format!("{} ", c.code()), Style::default().fg(peg_color(c))))
        .collect()
}

/// What the solver has deduced from the feedback so far
fn render_deductions(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .strategist
        .tracker()
        .slots()
        .iter()
        .enumerate()
        .map(|(position, slot)| {
            let mut spans = vec![Span::raw(format!("{}: ", position + 1))];
            match *slot {
                Slot::Resolved(color) => spans.push(Span::styled(
                    format!("{} ✓", color.name()),
                    Style::default()
                        .fg(peg_color(color))
                        .add_modifier(Modifier::BOLD),
                )),
                Slot::Unresolved(pool) => spans.extend(pool_spans(pool)),
            }
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(format!("{} codes possible", app.possible_codes())));
    if let Some(hint) = app.hint {
        let mut spans = vec![Span::raw("Hint:")];
        spans.extend(code_spans(&hint));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Deductions ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess (G B R Y P C) | Enter: submit | Esc: clear | Tab: hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Guessing",
        InputMode::GameOver => "Mode: Game over",
    };
    f.render_widget(Paragraph::new(mode_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let strategy_text = format!("Hints: {}", app.config.strategy.name());
    f.render_widget(
        Paragraph::new(strategy_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
