//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    /// Replay cursor
    pub current_step: usize,
    /// `None` before a trace exists
    pub total_steps: Option<usize>,
    pub is_playing: bool,
    pub is_editing: bool,
    pub on_menu: bool,
}

fn keybinds(data: &StatusRenderData<'_>) -> Vec<(&'static str, &'static str)> {
    if data.on_menu {
        vec![("↑/↓", "select"), ("↵", "open"), ("q", "quit")]
    } else if data.is_editing {
        vec![("↵", "apply"), ("esc", "cancel")]
    } else {
        vec![
            ("←/→", "step"),
            ("⎵", "play"),
            ("r", "reset"),
            ("↵", "end"),
            ("c", "code"),
            ("b/tab", "back"),
            ("q", "quit"),
        ]
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: Step info and status
    let step_text = match data.total_steps {
        Some(total) => format!(" Step {}/{} ", data.current_step, total),
        None => format!(" Step {}/- ", data.current_step),
    };

    let step_bg = if data.is_error {
        DEFAULT_THEME.error
    } else if data.is_editing {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.primary
    };

    let mut left_spans = Vec::new();
    if !data.on_menu {
        left_spans.push(Span::styled(
            step_text,
            Style::default()
                .bg(step_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
        left_spans.push(Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ));
    }
    left_spans.push(Span::styled(
        format!(" {} ", data.message),
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(if data.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in keybinds(data).into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let badge = |text: &'static str, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    if !data.on_menu {
        let is_at_start = data.current_step == 0;
        let is_at_end = data
            .total_steps
            .is_some_and(|total| data.current_step >= total);

        let indicator = if data.is_editing {
            Some(badge(" ⌨ INPUT ", DEFAULT_THEME.secondary))
        } else if data.is_playing {
            Some(badge(" ▶ PLAYING ", DEFAULT_THEME.secondary))
        } else if is_at_end {
            Some(badge(" END ", DEFAULT_THEME.error))
        } else if is_at_start {
            Some(badge(" START ", DEFAULT_THEME.success))
        } else {
            None
        };

        if let Some(indicator) = indicator {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(indicator);
        }
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
