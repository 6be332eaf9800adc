//! TUI rendering with ratatui
//!
//! Every widget is styled from `app.theme`.

use super::app::{App, MessageStyle, View};
use super::theme::Theme;
use crate::core::{Position, ROWS};
use crate::morph::MorphAnalyzer;
use crate::output::formatters::{RULES, WORD_WRAP, format_elapsed, wrap_chunks};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

// Two lines per row plus borders
const GRID_HEIGHT: u16 = (ROWS * 2 + 2) as u16;

/// Main UI rendering function
pub fn ui<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>) {
    let theme = &app.theme;
    f.render_widget(Block::default().style(theme.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, theme, chunks[0]);

    match app.view {
        View::Game => render_game(f, app, chunks[1]),
        View::Dictionary => render_dictionary(f, app, chunks[1]),
        View::Rules => render_rules(f, theme, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(theme.base())
        .border_style(Style::default().fg(theme.muted))
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new("🔤 WORD GRID")
        .style(theme.title())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.highlight).bg(theme.bg)),
        );
    f.render_widget(header, area);
}

fn render_game<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and grid
            Constraint::Percentage(40), // Score, words, messages
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),           // Current word
            Constraint::Length(GRID_HEIGHT), // Grid
            Constraint::Min(0),
        ])
        .split(columns[0]);

    render_current_word(f, app, left[0]);
    render_grid(f, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Score and time
            Constraint::Percentage(50), // Accepted words
            Constraint::Min(5),         // Messages
        ])
        .split(columns[1]);

    render_score(f, app, right[0]);
    render_accepted(f, app, right[1]);
    render_messages(f, app, right[2]);
}

fn render_current_word<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let theme = &app.theme;
    let spaced = app.session.selection().spaced();

    let lines: Vec<Line> = if spaced.is_empty() {
        vec![Line::from(Span::styled(
            "Pick letters to build a word",
            Style::default().fg(theme.muted),
        ))]
    } else {
        wrap_chunks(&spaced, WORD_WRAP)
            .into_iter()
            .map(|chunk| {
                Line::from(Span::styled(
                    chunk,
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(panel(" Current Word ", theme));
    f.render_widget(paragraph, area);
}

fn render_grid<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let theme = &app.theme;
    let grid = app.session.grid();
    let selection = app.session.selection();

    let mut lines = Vec::with_capacity(ROWS * 2);
    for row in 0..ROWS {
        let mut spans = Vec::new();
        for (col, letter) in grid.row(row).iter().enumerate() {
            let pos = Position::new(row, col);
            let style = match (pos == app.cursor, selection.contains_position(pos)) {
                (true, true) => theme.selected_cell().add_modifier(Modifier::UNDERLINED),
                (true, false) => theme.cursor_cell(),
                (false, true) => theme.selected_cell(),
                (false, false) => theme.cell(),
            };
            spans.push(Span::styled(format!("  {letter}  "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(" Letters ", theme));
    f.render_widget(paragraph, area);
}

fn render_score<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let theme = &app.theme;
    let session = &app.session;

    let time = if session.is_running() {
        Span::styled(
            format_elapsed(session.elapsed_seconds()),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("press 's' to start", Style::default().fg(theme.muted))
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![Span::raw("Time:  "), time]),
        Line::from(format!("Words: {}", session.accepted_words().len())),
    ];

    let paragraph = Paragraph::new(content).block(panel(" Score ", theme));
    f.render_widget(paragraph, area);
}

fn render_accepted<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let theme = &app.theme;
    let words = app.session.accepted_words();

    let items: Vec<ListItem> = words
        .iter()
        .rev()
        .map(|word| {
            ListItem::new(format!("{} (+{})", word.to_uppercase(), word.chars().count()))
                .style(Style::default().fg(theme.fg))
        })
        .collect();

    let list = List::new(items).block(panel(" Found Words ", theme));
    f.render_widget(list, area);
}

fn render_messages<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let theme = &app.theme;
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let color = match msg.style {
                MessageStyle::Info => theme.fg,
                MessageStyle::Success => theme.success,
                MessageStyle::Error => theme.error,
            };
            ListItem::new(msg.text.clone()).style(Style::default().fg(color))
        })
        .collect();

    let list = List::new(messages).block(panel(" Messages ", theme));
    f.render_widget(list, area);
}

fn render_dictionary<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let theme = &app.theme;
    let title = format!(" Dictionary ({} words) ", app.dictionary.len());

    let items: Vec<ListItem> = if app.dictionary.is_empty() {
        vec![ListItem::new("Dictionary is empty").style(Style::default().fg(theme.muted))]
    } else {
        app.dictionary
            .iter()
            .skip(app.dictionary_scroll)
            .map(|word| ListItem::new(word.as_str()).style(Style::default().fg(theme.fg)))
            .collect()
    };

    let list = List::new(items).block(panel(&title, theme));
    f.render_widget(list, area);
}

fn render_rules(f: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines = vec![Line::from("")];
    lines.extend(RULES.iter().map(|rule| Line::from(format!("  {rule}"))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc to return to the game",
        Style::default().fg(theme.muted),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" Rules ", theme));
    f.render_widget(paragraph, area);
}

fn render_status<A: MorphAnalyzer>(f: &mut Frame, app: &App<A>, area: Rect) {
    let theme = &app.theme;
    let help_text = match app.view {
        View::Game => {
            "q: Quit | s: Start | ←↑→↓/Space: Pick | Bksp: Undo | Enter: Check | d: Dictionary | h: Rules | t: Theme"
        }
        View::Dictionary => "↑↓: Scroll | Esc: Back | t: Theme",
        View::Rules => "Esc: Back | t: Theme",
    };

    let help = Paragraph::new(format!("{help_text} | Theme: {}", theme.name.label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted).bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(theme.base()),
        );
    f.render_widget(help, area);
}
