//! Field rendering utilities for forms

use crate::state::{FeedbackSlot, FormField, Tone};
use crate::ui::widgets::{tone_color, wrap_words};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the bordered input itself
pub const INPUT_HEIGHT: u16 = 3;

/// Wrapped rows of a feedback slot rendered `width` columns wide
fn feedback_rows(slot: &FeedbackSlot, width: u16) -> Vec<String> {
    // One column goes to the leading indent
    wrap_words(&slot.message, usize::from(width.saturating_sub(1)))
}

/// Rows needed by a field and its visible feedback slot
pub fn field_height(feedback: Option<&FeedbackSlot>, width: u16) -> u16 {
    let slot_rows = feedback.map_or(0, |slot| feedback_rows(slot, width).len());
    INPUT_HEIGHT + slot_rows as u16
}

/// Draw a form field with its feedback slot on the rows below it.
///
/// `area` should be [`field_height`] rows tall.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    feedback: Option<&FeedbackSlot>,
    is_active: bool,
) {
    let input_area = Rect {
        height: INPUT_HEIGHT.min(area.height),
        ..area
    };
    let feedback_area = Rect {
        y: area.y + input_area.height,
        height: area.height - input_area.height,
        ..area
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    // A visible error also tints the border so it is noticeable when unfocused
    let border_color = match feedback {
        Some(slot) if !is_active && slot.tone == Tone::Error => Color::Red,
        _ if is_active => Color::Cyan,
        _ => Color::DarkGray,
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.block(block), input_area);

    if let Some(slot) = feedback {
        let style = Style::default().fg(tone_color(slot.tone));
        let lines: Vec<Line> = feedback_rows(slot, area.width)
            .into_iter()
            .map(|row| Line::from(Span::styled(format!(" {row}"), style)))
            .collect();
        frame.render_widget(Paragraph::new(lines), feedback_area);
    }
}
