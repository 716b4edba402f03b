//! Drawing for the hut-picker game.

use crate::hutgame::{HutGame, Occupant, RoundOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, game: &HutGame) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Hut row
            Constraint::Length(3), // Controls
        ])
        .split(size);

    let title = Paragraph::new("Attack of the Orcs - Pick a hut for Sir Foo to rest")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_hut_row(frame, chunks[1], game);

    let controls = Paragraph::new("←/→ select   Enter open   r restart   q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, chunks[2]);

    if let Some(text) = game.result_text() {
        draw_result_popup(frame, size, game, &text);
    }
}

fn draw_hut_row(frame: &mut Frame, area: Rect, game: &HutGame) {
    let constraints: Vec<Constraint> = (0..game.hut_count())
        .map(|_| Constraint::Ratio(1, game.hut_count() as u32))
        .collect();
    let hut_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, hut_area) in hut_areas.iter().enumerate() {
        let selected = index == game.selected();
        let border_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let occupant_line = match game.revealed_occupant(index) {
            None => Line::from(Span::styled("?", Style::default().fg(Color::DarkGray))),
            Some(occupant) => Line::from(Span::styled(
                occupant.label(),
                Style::default().fg(occupant_color(occupant)),
            )),
        };

        let hut = Paragraph::new(vec![
            Line::from(""),
            Line::from("  /\\  "),
            Line::from(" /  \\ "),
            Line::from(" |__| "),
            Line::from(""),
            occupant_line,
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Hut {}", index + 1)),
        );
        frame.render_widget(hut, *hut_area);
    }
}

fn occupant_color(occupant: Occupant) -> Color {
    match occupant {
        Occupant::Enemy => Color::Red,
        Occupant::Friend => Color::Green,
        Occupant::Unoccupied => Color::Gray,
    }
}

fn draw_result_popup(frame: &mut Frame, size: Rect, game: &HutGame, text: &str) {
    let area = centered_rect(50, 9, size);
    let outcome_color = match game.result().map(|r| r.outcome) {
        Some(RoundOutcome::Win) => Color::Green,
        _ => Color::Red,
    };

    frame.render_widget(Clear, area);
    let popup = Paragraph::new(format!("{}\n\nPress r to play again, q to quit", text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(outcome_color))
                .title("Result"),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
