//! Status bar rendering with keybindings and state indicators

use crate::sequencer::Cursor;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub cursor: Cursor,
}

/// Format a speed multiplier the way the speed buttons show it (`0.5x`, `2x`)
pub fn format_speed(speed: f64) -> String {
    format!("{}x", speed)
}

/// Key hints as (key, description, priority); lower priority numbers are
/// kept first when the bar is too narrow for all of them
const KEY_HINTS: [(&str, &str, u8); 9] = [
    (" ←/→ ", " step ", 1),
    (" home/end ", " jump ", 7),
    (" ⎵ ", " play ", 2),
    (" r ", " reset ", 3),
    (" tab/1-9 ", " op ", 4),
    (" s ", " speed ", 5),
    (" t ", " topic ", 6),
    (" k ", " kind ", 8),
    (" q ", " quit ", 0),
];

/// The hints that fit in `width` cells, in display order
fn fitting_hints(width: usize) -> Vec<(&'static str, &'static str)> {
    let cost = |(key, desc, _): &(&str, &str, u8)| {
        Span::raw(*key).width() + Span::raw(*desc).width() + 1
    };

    let mut by_priority: Vec<usize> = (0..KEY_HINTS.len()).collect();
    by_priority.sort_by_key(|&i| KEY_HINTS[i].2);

    let mut keep = vec![false; KEY_HINTS.len()];
    let mut used = 0;
    for i in by_priority {
        let needed = cost(&KEY_HINTS[i]);
        if used + needed > width {
            break;
        }
        used += needed;
        keep[i] = true;
    }

    KEY_HINTS
        .iter()
        .zip(keep)
        .filter(|(_, kept)| *kept)
        .map(|(&(key, desc, _), _)| (key, desc))
        .collect()
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let cursor = data.cursor;

    // Left side: step counter, speed, playback badge and status message
    let mut left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", cursor.index + 1, cursor.len),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", format_speed(cursor.speed)),
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black),
        ),
    ];

    let badge = if cursor.playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if cursor.is_last() {
        Some((" END ", DEFAULT_THEME.error))
    } else if cursor.is_first() {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((text, color)) = badge {
        left_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    left_spans.push(Span::styled(
        format!(" {} ", data.message),
        Style::default()
            .bg(DEFAULT_THEME.panel_bg)
            .fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: as many keybinds as fit, most important first
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.panel_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.panel_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in fitting_hints(layout[1].width as usize)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
