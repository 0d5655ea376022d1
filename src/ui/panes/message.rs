//! Progress message and step progress gauge

use crate::sequencer::Cursor;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

/// Data needed to render the message pane
pub struct MessageRenderData<'a> {
    pub message: &'a str,
    pub phase: Option<&'a str>,
    pub cursor: Cursor,
}

pub fn render_message_pane(frame: &mut Frame, area: Rect, data: MessageRenderData) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let indicator_style = if data.cursor.playing {
        Style::default().fg(DEFAULT_THEME.secondary)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    };

    let mut spans = vec![Span::styled(" ● ", indicator_style)];
    if let Some(phase) = data.phase {
        spans.push(Span::styled(
            format!("[{}] ", phase),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        data.message.to_string(),
        Style::default().fg(DEFAULT_THEME.fg),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(DEFAULT_THEME.primary))
        .unfilled_style(Style::default().fg(DEFAULT_THEME.comment))
        .label(format!(
            " Step {} / {} ",
            data.cursor.index + 1,
            data.cursor.len
        ))
        .ratio(data.cursor.progress().clamp(0.0, 1.0));
    frame.render_widget(gauge, rows[1]);
}
