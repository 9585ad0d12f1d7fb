//! Array bar display
//!
//! Draws the current array as a bar chart. Bars named by the latest step's
//! highlights take the color of that step's kind; every other bar is drawn in
//! the neutral bar color. Negative values are drawn as empty bars but keep
//! their numeric label.

use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 9;

/// Bar width that fits `count` bars into `inner_width` columns
pub fn bar_width(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return MAX_BAR_WIDTH;
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    (inner_width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Color of the bar at `index` given the most recent step
fn bar_color(index: usize, step: Option<&Step>) -> Color {
    match step {
        Some(step) if step.highlights.contains(&index) => DEFAULT_THEME.highlight_for(step.kind),
        _ => DEFAULT_THEME.bar,
    }
}

pub fn render_array_pane(frame: &mut Frame, area: Rect, array: &[i64], step: Option<&Step>) {
    let block = Block::default()
        .title(" Array View ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar> = array
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let color = bar_color(idx, step);
            Bar::default()
                .value(u64::try_from(value).unwrap_or(0))
                .text_value(value.to_string())
                .label(Line::from(idx.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max = array.iter().copied().max().unwrap_or(1).max(1);
    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width(area.width.saturating_sub(2), array.len()))
        .bar_gap(BAR_GAP)
        .max(u64::try_from(max).unwrap_or(1))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
