//! Step log pane rendering

use crate::trace::{Step, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Padding, Paragraph},
    Frame,
};

/// One console line: `[007] > CMP: Comparing ...`
fn log_line(index: usize, step: &Step) -> Line<'static> {
    let mut style = Style::default().fg(DEFAULT_THEME.log_color(step.kind));
    if matches!(step.kind, StepKind::Swap | StepKind::Done | StepKind::Found) {
        style = style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(
            format!("[{:03}] ", index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(step.to_string(), style),
    ])
}

/// Render the revealed steps.
///
/// `scroll_offset` is clamped to the content; pass `usize::MAX` to stick to the bottom.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    steps: &[Step],
    is_running: bool,
    scroll_offset: &mut usize,
) {
    if steps.is_empty() && !is_running {
        let paragraph = Paragraph::new("(press → to step or space to run)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let mut all_items: Vec<ListItem> = steps
        .iter()
        .enumerate()
        .map(|(idx, step)| ListItem::new(log_line(idx, step)))
        .collect();

    // Pending-output cursor while auto-play is active
    if is_running {
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("[{:03}] ", steps.len()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                "_",
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ])));
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_format() {
        let step = Step::new(StepKind::Compare, "Checking index 4: Is 22 == 22?");
        let line = log_line(4, &step);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[004] > CMP: Checking index 4: Is 22 == 22?");
    }
}
