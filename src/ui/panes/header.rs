//! Topic title and operation tabs

use crate::catalog::Topic;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Data needed to render the header
pub struct HeaderRenderData<'a> {
    pub topic: Topic,
    pub operation_names: Vec<&'a str>,
    pub selected: usize,
}

pub fn render_header(frame: &mut Frame, area: Rect, data: HeaderRenderData) {
    let (time, space) = data.topic.complexity();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", data.topic.name()),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "· {} · {} · {} / {} space ",
                data.topic.category(),
                data.topic.description(),
                time,
                space
            ),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    let titles: Vec<Line> = data
        .operation_names
        .iter()
        .enumerate()
        .map(|(i, name)| Line::from(format!("{} {}", i + 1, name)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .select(data.selected)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(DEFAULT_THEME.comment)));

    frame.render_widget(tabs, area);
}
