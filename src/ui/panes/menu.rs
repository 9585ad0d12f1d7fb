//! Algorithm selection screen

use crate::algorithms::{Algorithm, Category};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the category headings and algorithm entries, highlighting `selected`
pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let block = Block::default()
        .title(" Select Algorithm ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(2, 2, 1, 1));

    let mut lines = Vec::new();
    let mut last_category: Option<Category> = None;

    for (idx, algorithm) in Algorithm::ALL.iter().enumerate() {
        let category = algorithm.category();
        if last_category != Some(category) {
            if last_category.is_some() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!("✦ {}", category.title()),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            )));
            last_category = Some(category);
        }

        let is_selected = idx == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let name_style = if is_selected {
            Style::default()
                .fg(DEFAULT_THEME.function)
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(DEFAULT_THEME.function)),
            Span::styled(format!("{:<16}", algorithm.name()), name_style),
            Span::styled(
                algorithm.description(),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
