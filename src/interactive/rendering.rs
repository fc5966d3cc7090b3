//! TUI rendering with ratatui
//!
//! The word card, round progress, and message log.

use super::app::{App, MessageStyle};
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
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Word card
            Constraint::Percentage(35), // Progress and messages
        ])
        .split(chunks[1]);

    render_card(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📚 RANDOM SAT WORD")
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

fn render_card(f: &mut Frame, app: &App, area: Rect) {
    let record = app.current_record();

    let mut headline = vec![Span::styled(
        record.word().to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(tag) = record.part_of_speech() {
        headline.push(Span::raw("  "));
        headline.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
    }

    let mut content = vec![Line::from(headline), Line::from("")];

    if app.show_definition {
        if let Some(definition) = record.definition() {
            content.push(Line::from(definition.to_string()));
        }
        if let Some(example) = record.example() {
            content.push(Line::from(""));
            content.push(Line::from(Span::styled(
                format!("e.g., {example}"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    } else {
        content.push(Line::from(Span::styled(
            "Definition hidden (press d to show)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let card = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(card, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Round progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_round_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let drawn = app.sequencer.drawn_in_cycle();
    let total = app.sequencer.size();
    let ratio = (drawn as f64 / total as f64).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Round {} ", app.round()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{drawn}/{total} words"));

    f.render_widget(gauge, area);
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
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let seen = Paragraph::new(format!("Words seen: {}", app.words_seen))
        .alignment(Alignment::Center);
    f.render_widget(seen, chunks[0]);

    let toggle = if app.show_definition {
        "d: Hide definition"
    } else {
        "d: Show definition"
    };
    let help = Paragraph::new(format!("n/Space: New word | {toggle} | c: Copy | r: Reshuffle | q: Quit"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
