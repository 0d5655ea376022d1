//! Array canvas: index row, value cells and address row

use crate::ui::theme::DEFAULT_THEME;
use crate::viz::array::{ArrayState, CellMarks};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Characters per cell, including the gap to the next one
const CELL_WIDTH: usize = 8;

fn cell_style(marks: CellMarks) -> Style {
    let base = Style::default().fg(DEFAULT_THEME.fg).bg(DEFAULT_THEME.cell_bg);
    if marks.selected {
        base.bg(DEFAULT_THEME.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if marks.highlighted {
        base.bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if marks.shifting {
        base.bg(DEFAULT_THEME.secondary).fg(Color::Black)
    } else if marks.scanned {
        base.fg(DEFAULT_THEME.scanned).add_modifier(Modifier::DIM)
    } else {
        base
    }
}

fn cell_text(value: i64, marks: CellMarks) -> String {
    let label = if marks.done {
        format!("{}✓", value)
    } else {
        value.to_string()
    };
    format!("{:^width$}", label, width = CELL_WIDTH - 2)
}

/// Render the array memory block
pub fn render_array_pane(frame: &mut Frame, area: Rect, state: &ArrayState, is_playing: bool) {
    let border_style = if is_playing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" ◈ Memory Block ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if state.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let gap = " ".repeat(2);

    let mut indices = Vec::with_capacity(state.values.len() * 2);
    let mut cells = Vec::with_capacity(state.values.len() * 2);
    let mut addresses = Vec::with_capacity(state.values.len() * 2);

    for (i, &value) in state.values.iter().enumerate() {
        let marks = state.marks(i);
        indices.push(Span::styled(
            format!("{:^width$}", i, width = CELL_WIDTH - 2),
            label_style,
        ));
        cells.push(Span::styled(cell_text(value, marks), cell_style(marks)));
        addresses.push(Span::styled(
            format!("{:^width$}", format!("0x{:x}", ArrayState::address(i)), width = CELL_WIDTH - 2),
            label_style,
        ));

        indices.push(Span::raw(gap.clone()));
        cells.push(Span::raw(gap.clone()));
        addresses.push(Span::raw(gap.clone()));
    }

    // Vertically center the three rows
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = vec![Line::from(""); inner_height.saturating_sub(3) / 2];
    lines.push(Line::from(indices));
    lines.push(Line::from(cells));
    lines.push(Line::from(addresses));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
