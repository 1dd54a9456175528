//! Registration form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::platform::{CLEAR_FIELD_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AggregateFeedback, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::widgets::{tone_color, wrap_words};
use crate::validation::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HELP_HEIGHT: u16 = 2;

/// Draw the registration form with action sidebar
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Split off the top `height` rows of `remaining`, clipped to what is left
fn take_rows(remaining: &mut Rect, height: u16) -> Rect {
    let height = height.min(remaining.height);
    let taken = Rect {
        height,
        ..*remaining
    };
    remaining.y += height;
    remaining.height -= height;
    taken
}

/// Every aggregate line wrapped to the area inside its border
fn aggregate_rows(aggregate: &AggregateFeedback, width: u16) -> Vec<String> {
    let inner_width = usize::from(width.saturating_sub(2));
    aggregate
        .lines
        .iter()
        .flat_map(|line| wrap_words(line, inner_width))
        .collect()
}

/// Draw the three inputs, the aggregate feedback area and help text.
///
/// Rows are stacked top to bottom at their wrapped heights; the help text is
/// the first thing dropped when space runs out.
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.validator.form();
    let feedback = app.validator.feedback();
    let aggregate = feedback.aggregate();

    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form.is_action_panel_active() {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut remaining = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    for field in FieldId::ALL {
        let slot = feedback.visible_slot(field);
        let height = field_height(slot, remaining.width);
        let field_area = take_rows(&mut remaining, height);
        if field_area.height > 0 {
            draw_field(
                frame,
                field_area,
                form.field(field),
                slot,
                form.active_field_id() == Some(field),
            );
        }
    }

    if aggregate.visible {
        let rows = aggregate_rows(aggregate, remaining.width);
        let aggregate_area = take_rows(&mut remaining, rows.len() as u16 + 2);
        if aggregate_area.height > 0 {
            draw_aggregate(frame, aggregate_area, aggregate, rows);
        }
    }

    if remaining.height >= HELP_HEIGHT {
        let help = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Tab to move between fields, {SUBMIT_SHORTCUT} to register."),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("{CLEAR_FIELD_SHORTCUT} clears the current field, Esc quits."),
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(help, take_rows(&mut remaining, HELP_HEIGHT));
    }
}

fn draw_aggregate(frame: &mut Frame, area: Rect, aggregate: &AggregateFeedback, rows: Vec<String>) {
    let color = tone_color(aggregate.tone);
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(color))))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.validator.form();
    let is_focused = form.is_action_panel_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Register (primary)
            Constraint::Length(BUTTON_HEIGHT), // Cancel
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (idx, button) in FormButton::ALL.into_iter().enumerate() {
        let accent = match button {
            FormButton::Register => Color::Green,
            FormButton::Cancel => Color::Gray,
        };
        render_action_button(
            frame,
            button_chunks[idx],
            button.label(),
            is_focused && form.selected_button == button,
            accent,
        );
    }
}
