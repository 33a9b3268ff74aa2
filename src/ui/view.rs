use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{action::ApiAction, console_state::ConsoleState};

use super::{form_view::render_form, styles};

const OUTPUT_PLACEHOLDER: &str = "Press F1-F4 to run an action.";

pub fn render(frame: &mut Frame<'_>, state: &mut ConsoleState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [form_area, output_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .areas(content_area);

    render_form(frame, form_area, state.form());
    render_output(frame, output_area, state);
    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

fn render_output(frame: &mut Frame<'_>, area: Rect, state: &mut ConsoleState) {
    state
        .output_mut()
        .set_wrap_width(area.width.saturating_sub(2));
    let output = state.output();
    let border_style = if output.is_error() {
        styles::error_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let block = Block::default()
        .title(output_title(state))
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = if output.text().is_empty() {
        Paragraph::new(Line::from(Span::styled(
            OUTPUT_PLACEHOLDER,
            styles::placeholder_style(),
        )))
    } else {
        let rows: Vec<Line<'_>> = output.wrapped_lines().into_iter().map(Line::from).collect();
        Paragraph::new(Text::from(rows)).scroll((output.scroll(), 0))
    };

    frame.render_widget(paragraph.block(block), area);
}

fn output_title(state: &ConsoleState) -> String {
    match state.last_completion() {
        Some(last) => format!("Response: {}", last.action.method_name()),
        None => "Response".to_owned(),
    }
}

fn status_line(state: &ConsoleState) -> Line<'static> {
    let mut spans = Vec::new();

    for action in ApiAction::ALL {
        spans.push(Span::styled(
            format!(" {} ", action.trigger_key().to_ascii_uppercase()),
            styles::key_hint_style(),
        ));
        spans.push(Span::styled(
            format!(" {} ", action.method_name()),
            styles::status_text_style(),
        ));
    }

    if state.form().demo_mode() {
        spans.push(Span::styled(" DEMO ", styles::demo_badge_style()));
        spans.push(Span::raw(" "));
    }

    spans.push(progress_span(state));
    spans.push(Span::styled(
        " | Tab: next field | Ctrl-D: demo | Esc: quit",
        styles::status_text_style(),
    ));

    Line::from(spans)
}

fn progress_span(state: &ConsoleState) -> Span<'static> {
    if state.pending() > 0 {
        return Span::styled(
            format!("running: {}", state.pending()),
            styles::status_text_style(),
        );
    }

    match state.last_completion() {
        Some(last) if last.is_error => Span::styled(
            format!("{} failed at {}", last.action, last.at),
            styles::status_error_style(),
        ),
        Some(last) => Span::styled(
            format!("{} done at {}", last.action, last.at),
            styles::status_text_style(),
        ),
        None => Span::styled("idle", styles::status_text_style()),
    }
}
