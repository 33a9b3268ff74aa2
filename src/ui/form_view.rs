//! Form panel: one bordered row per input field.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::console_state::{FormField, FormState};

use super::styles;

/// Border + text + border.
const FIELD_HEIGHT: u16 = 3;

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::InstanceId => "1101000001",
        FormField::Token => "API token of the instance",
        FormField::DemoMode => "",
        FormField::PhoneNumber => "79001234567",
        FormField::MessageText => "Hello from the console",
        FormField::FileUrl => "https://my-site.com/img/horse.png",
        FormField::FileName => "horse.png",
    }
}

pub fn render_form(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); FormField::ORDER.len()];
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, row) in FormField::ORDER.into_iter().zip(rows.iter()) {
        render_field(frame, *row, form, field);
    }
}

fn render_field(frame: &mut Frame<'_>, area: Rect, form: &FormState, field: FormField) {
    let is_focused = form.focused() == field;
    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let block = Block::default()
        .title(field.label())
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(state) = form.field(field) else {
        frame.render_widget(Paragraph::new(toggle_line(form.demo_mode())).block(block), area);
        return;
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let display = state.display_text(field.is_masked());

    if state.is_empty() && !is_focused {
        let line = Line::from(Span::styled(placeholder(field), styles::placeholder_style()));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let (visible, cursor_x) = visible_window(&display, state.cursor(), inner_width);
    let line = Line::from(Span::styled(visible, styles::field_text_style()));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if is_focused {
        frame.set_cursor_position((
            area.x.saturating_add(1).saturating_add(cursor_x),
            area.y.saturating_add(1),
        ));
    }
}

fn toggle_line(enabled: bool) -> Line<'static> {
    if enabled {
        Line::from(Span::styled(
            "[x] simulated responses, no network",
            styles::toggle_on_style(),
        ))
    } else {
        Line::from(Span::styled(
            "[ ] live requests",
            styles::toggle_off_style(),
        ))
    }
}

/// Slice of `text` that fits `width` columns with the cursor kept visible.
///
/// Returns the visible text and the cursor column within it.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, u16) {
    let widths: Vec<usize> = text
        .chars()
        .map(|ch| ch.width().unwrap_or(0))
        .collect();
    let cursor = cursor.min(widths.len());
    // One column stays free for the cursor itself.
    let budget = width.saturating_sub(1);

    let mut start = 0;
    while start < cursor && widths[start..cursor].iter().sum::<usize>() > budget {
        start += 1;
    }

    let mut used = 0;
    let visible: String = text
        .chars()
        .zip(widths.iter())
        .skip(start)
        .take_while(|(_, w)| {
            used += **w;
            used <= width
        })
        .map(|(ch, _)| ch)
        .collect();

    let cursor_x = widths[start..cursor].iter().sum::<usize>();
    (visible, u16::try_from(cursor_x).unwrap_or(u16::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_shown_whole() {
        let (visible, cursor_x) = visible_window("1101", 4, 20);

        assert_eq!(visible, "1101");
        assert_eq!(cursor_x, 4);
    }

    #[test]
    fn long_text_scrolls_to_keep_cursor_visible() {
        let (visible, cursor_x) = visible_window("abcdefghij", 10, 5);

        assert_eq!(visible, "ghij");
        assert_eq!(cursor_x, 4);
    }

    #[test]
    fn cursor_at_start_shows_head_of_text() {
        let (visible, cursor_x) = visible_window("abcdefghij", 0, 5);

        assert_eq!(visible, "abcde");
        assert_eq!(cursor_x, 0);
    }

    #[test]
    fn wide_characters_count_two_columns() {
        let (visible, cursor_x) = visible_window("日本語", 3, 10);

        assert_eq!(visible, "日本語");
        assert_eq!(cursor_x, 6);
    }

    #[test]
    fn toggle_line_reflects_state() {
        let on: String = toggle_line(true)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        let off: String = toggle_line(false)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert!(on.starts_with("[x]"));
        assert!(off.starts_with("[ ]"));
    }

    #[test]
    fn every_text_field_has_a_placeholder() {
        for field in FormField::ORDER {
            assert_eq!(placeholder(field).is_empty(), field.is_toggle());
        }
    }
}
