//! Linked list canvas: head marker, nodes joined by pointers, null terminator

use crate::ui::theme::DEFAULT_THEME;
use crate::viz::list::{ListKind, ListState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const NODE_WIDTH: usize = 6;

fn node_style(state: &ListState, index: usize) -> Style {
    let base = Style::default().fg(DEFAULT_THEME.fg).bg(DEFAULT_THEME.cell_bg);
    if state.deleting == Some(index) {
        base.bg(DEFAULT_THEME.error)
            .fg(Color::Black)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if state.selected == Some(index) {
        base.bg(DEFAULT_THEME.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if state.highlighted == Some(index) {
        base.bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if state.scanned.contains(&index) {
        base.fg(DEFAULT_THEME.scanned).add_modifier(Modifier::DIM)
    } else {
        base
    }
}

fn connector(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Singly => " ──▶ ",
        ListKind::Doubly => " ◀─▶ ",
    }
}

/// Render the linked list
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ListState,
    kind: ListKind,
    is_playing: bool,
) {
    let border_style = if is_playing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" ⇢ {} ", kind.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let link = connector(kind);
    let link_width = link.chars().count();

    let mut nodes = vec![Span::styled("head", label_style), Span::raw(link)];
    // Pad the position row so labels sit under their nodes
    let mut positions = vec![Span::raw(" ".repeat(4 + link_width))];

    if kind == ListKind::Doubly {
        nodes.insert(0, Span::styled("null ◀─ ", label_style));
        positions.insert(0, Span::raw(" ".repeat(8)));
    }

    for (i, node) in state.nodes.iter().enumerate() {
        let mut label = node.value.to_string();
        if state.selected == Some(i) && state.is_complete() {
            label.push('✓');
        }
        nodes.push(Span::styled(
            format!("[{:^width$}]", label, width = NODE_WIDTH - 2),
            node_style(state, i),
        ));
        nodes.push(Span::raw(link));

        positions.push(Span::styled(
            format!("{:^width$}", i, width = NODE_WIDTH),
            label_style,
        ));
        positions.push(Span::raw(" ".repeat(link_width)));
    }
    nodes.push(Span::styled("null", label_style));

    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = vec![Line::from(""); inner_height.saturating_sub(4) / 2];
    lines.push(Line::from(nodes));
    lines.push(Line::from(positions));
    lines.push(Line::from(""));

    match state.pending {
        Some(value) => lines.push(Line::from(vec![
            Span::styled("new node ", label_style),
            Span::styled(
                format!("[{:^width$}]", value, width = NODE_WIDTH - 2),
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(link),
            Span::styled("?", label_style),
        ])),
        None => lines.push(Line::from("")),
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
