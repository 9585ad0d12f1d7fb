//! Parameters and controls panel

use crate::replay::Replay;
use crate::trace::StepKind;
use crate::ui::app::InputField;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the panel
pub struct ParamsRenderData<'a> {
    pub replay: &'a Replay,
    /// Field being edited, with its in-progress text
    pub editing: Option<(InputField, &'a str)>,
}

fn field_lines<'a>(
    label: &'a str,
    value: &'a str,
    key: &'a str,
    is_editing: bool,
) -> Vec<Line<'a>> {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = if is_editing {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .bg(DEFAULT_THEME.current_line_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let mut value_spans = vec![Span::styled(value, value_style)];
    if is_editing {
        value_spans.push(Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.border_focused),
        ));
    }

    vec![
        Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(format!(" [{}]", key), Style::default().fg(DEFAULT_THEME.primary)),
        ]),
        Line::from(value_spans),
        Line::default(),
    ]
}

fn stat_line(label: &'static str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, value_style),
    ])
}

pub fn render_params_pane(frame: &mut Frame, area: Rect, data: &ParamsRenderData<'_>) {
    let replay = data.replay;
    let algorithm = replay.algorithm();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    // Parameters
    let border_style = if data.editing.is_some() {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = Block::default()
        .title(" Parameters ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let (array_text, array_editing) = match data.editing {
        Some((InputField::Array, text)) => (text, true),
        _ => (replay.array_input(), false),
    };
    let mut lines = field_lines("Array (CSV)", array_text, "e", array_editing);

    if algorithm.needs_target() {
        let (target_text, target_editing) = match data.editing {
            Some((InputField::Target, text)) => (text, true),
            _ => (replay.target_input(), false),
        };
        lines.extend(field_lines("Target Value", target_text, "t", target_editing));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    // Controls
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let (status, status_style) = if replay.is_running() {
        let verb = if algorithm.needs_target() {
            "SEARCHING"
        } else {
            "SORTING"
        };
        (
            verb,
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )
    } else if replay.is_finished() {
        ("DONE", Style::default().fg(DEFAULT_THEME.primary))
    } else {
        ("IDLE", Style::default().fg(DEFAULT_THEME.secondary))
    };

    let steps = match replay.total_steps() {
        Some(total) => format!("{} / {}", replay.cursor(), total),
        None => format!("{} / -", replay.cursor()),
    };

    let counts = replay.revealed_counts();
    let count_of = |kind: StepKind| counts.get(&kind).copied().unwrap_or(0).to_string();
    let plain = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        stat_line("STATUS:", status.to_string(), status_style),
        stat_line("STEPS:", steps, plain),
        stat_line("COMPARES:", count_of(StepKind::Compare), plain),
    ];
    if !algorithm.needs_target() {
        lines.push(stat_line("SWAPS:", count_of(StepKind::Swap), plain));
    }
    lines.push(stat_line(
        "INTERVAL:",
        format!("{} ms", replay.interval().as_millis()),
        plain,
    ));

    frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}
