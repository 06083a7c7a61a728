//! TUI Views
//!
//! Renders the header, the tool cards, the footer, and the notification
//! dialog when one is open.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::colors;
use super::state::{AppState, Notification};
use crate::tools::ToolDescriptor;

const CARD_HEIGHT: u16 = 5;

/// Render the whole screen
pub fn render(state: &AppState, frame: &mut Frame) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_cards(frame, body, state);
    render_footer(frame, footer, state);

    if let Some(notification) = state.notification() {
        render_notification(frame, notification);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Hexon's Toolbox",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Quick access to your MapleStory dev tools.",
            Style::default().fg(colors::SUBTITLE),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.tools.is_empty() {
        let empty = Paragraph::new("No tools configured")
            .style(Style::default().fg(colors::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let mut constraints: Vec<Constraint> = state.tools.iter().map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    for (i, tool) in state.tools.iter().enumerate() {
        render_card(frame, rows[i], tool, state.selected == i);
    }
}

fn render_card(frame: &mut Frame, area: Rect, tool: &ToolDescriptor, selected: bool) {
    let border = if selected {
        colors::SELECTED_BORDER
    } else {
        colors::CARD_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::CARD_BG))
        .title(Span::styled(
            format!(" {} ", tool.title),
            Style::default().fg(colors::TITLE).add_modifier(Modifier::BOLD),
        ));

    let button_style = if selected {
        Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(colors::DIM)
    };

    let lines = vec![
        Line::from(Span::styled(tool.description, Style::default().fg(colors::DESCRIPTION))),
        Line::from(Span::styled("[ Open ]", button_style)).alignment(Alignment::Right),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(card, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = match &state.status_message {
        Some(message) => Line::from(Span::styled(message.as_str(), Style::default().fg(colors::STATUS))),
        None => Line::from(""),
    };
    let keys = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(colors::KEYBIND)),
        Span::styled(" select  ", Style::default().fg(colors::DIM)),
        Span::styled("enter", Style::default().fg(colors::KEYBIND)),
        Span::styled(" open  ", Style::default().fg(colors::DIM)),
        Span::styled("q", Style::default().fg(colors::KEYBIND)),
        Span::styled(" quit", Style::default().fg(colors::DIM)),
    ]);
    frame.render_widget(Paragraph::new(vec![status, keys]), area);
}

fn render_notification(frame: &mut Frame, notification: &Notification) {
    let area = centered_rect(60, 12, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(colors::ERROR))
        .title(Span::styled(
            format!(" {} ", notification.title),
            Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" enter/esc to dismiss ").alignment(Alignment::Right));

    let body = Paragraph::new(notification.body.as_str())
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

/// A rectangle `percent_x` wide and `height` tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
