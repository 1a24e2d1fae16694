// ABOUTME: Contact form widget — text fields, opt-in checkboxes, submit button, outcome.
// ABOUTME: Draws an inline cursor in the focused field and the error or confirmation below.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::content::EventInfo;
use crate::outreach::FormState;
use crate::tui::state::{ContactFormInput, FormField, TextInput};
use crate::tui::widgets::ACCENT;

/// Minimum display width of a single-line text field.
const FIELD_WIDTH: usize = 36;

pub const SUBMIT_LABEL: &str = "Submit & Connect";

/// Rendered form lines plus the index of the line holding the focused field.
pub struct RenderedForm {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

/// Render the contact form. `focused` is true when the content pane has focus.
pub fn form_lines(input: &ContactFormInput, event: &EventInfo, focused: bool) -> RenderedForm {
    let mut lines = vec![Line::from("Please provide your details below."), Line::from("")];
    let mut focus_line = None;
    let active = |field: FormField| focused && input.field == field;

    for (field, label, text) in [
        (FormField::Name, "Your Name *", &input.name),
        (FormField::Email, "Your Email *", &input.email),
    ] {
        lines.push(label_line(label, active(field)));
        if active(field) {
            focus_line = Some(lines.len());
        }
        lines.push(single_line_field(text, active(field)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    )));

    for (field, label, checked) in [
        (FormField::FollowUp, event.follow_up_label(), input.follow_up),
        (FormField::OptIn, event.opt_in_label(), input.opt_in),
    ] {
        if active(field) {
            focus_line = Some(lines.len());
        }
        lines.push(checkbox_line(&label, checked, active(field)));
    }
    lines.push(Line::from(""));

    lines.push(label_line(
        "Your Question or Project Idea (Optional)",
        active(FormField::Question),
    ));
    if active(FormField::Question) {
        focus_line = Some(lines.len());
    }
    lines.extend(multi_line_field(&input.question, active(FormField::Question)));
    lines.push(Line::from(""));

    if active(FormField::Submit) {
        focus_line = Some(lines.len());
    }
    lines.push(submit_line(active(FormField::Submit)));

    match input.form.state() {
        FormState::Unsubmitted { error: Some(err) } => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("✖ {}", err),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        FormState::Submitted(confirmation) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("✔ {}", confirmation.message()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("ℹ {}", confirmation.details()),
                Style::default().fg(ACCENT),
            )));
        }
        FormState::Unsubmitted { error: None } => {}
    }

    RenderedForm { lines, focus_line }
}

fn label_line(label: &str, active: bool) -> Line<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(label.to_string(), style))
}

fn single_line_field(input: &TextInput, active: bool) -> Line<'static> {
    let field_style = Style::default().add_modifier(Modifier::UNDERLINED);
    let prefix = if active { "› " } else { "  " };
    let mut spans = vec![Span::styled(prefix, Style::default().fg(Color::Yellow))];
    let cursor = active.then_some(input.cursor);
    spans.extend(
        text_rows(&input.value, cursor, field_style)
            .into_iter()
            .next()
            .unwrap_or_default(),
    );

    let mut width = UnicodeWidthStr::width(input.value.as_str());
    if active && input.cursor >= input.char_len() {
        width += 1;
    }
    let pad = FIELD_WIDTH.saturating_sub(width);
    spans.push(Span::styled(" ".repeat(pad), field_style));
    Line::from(spans)
}

fn multi_line_field(input: &TextInput, active: bool) -> Vec<Line<'static>> {
    let border = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = active.then_some(input.cursor);
    text_rows(&input.value, cursor, Style::default())
        .into_iter()
        .map(|row| {
            let mut spans = vec![Span::styled("  │ ", border)];
            spans.extend(row);
            Line::from(spans)
        })
        .collect()
}

/// Split `value` into rows at newlines, drawing a reversed cell at `cursor` (a char index).
fn text_rows(value: &str, cursor: Option<usize>, style: Style) -> Vec<Vec<Span<'static>>> {
    let cursor_style = style.add_modifier(Modifier::REVERSED);
    let mut rows = Vec::new();
    let mut offset = 0;

    for row in value.split('\n') {
        let len = row.chars().count();
        let spans = match cursor {
            Some(c) if c >= offset && c <= offset + len => {
                let col = c - offset;
                let before: String = row.chars().take(col).collect();
                let at = row
                    .chars()
                    .nth(col)
                    .map(String::from)
                    .unwrap_or_else(|| " ".to_string());
                let after: String = row.chars().skip(col + 1).collect();
                vec![
                    Span::styled(before, style),
                    Span::styled(at, cursor_style),
                    Span::styled(after, style),
                ]
            }
            _ => vec![Span::styled(row.to_string(), style)],
        };
        rows.push(spans);
        offset += len + 1;
    }
    rows
}

fn checkbox_line(label: &str, checked: bool, active: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{} ", mark), style),
        Span::styled(label.to_string(), style),
    ])
}

fn submit_line(active: bool) -> Line<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(format!("[ {} ]", SUBMIT_LABEL), style),
        Span::styled(
            "  (Enter or Ctrl+S)",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outreach::ContactRecord;
    use crate::tui::widgets::line_text;

    fn all_text(form: &RenderedForm) -> String {
        form.lines.iter().map(line_text).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn default_checkbox_states() {
        let event = EventInfo::default();
        let form = form_lines(&ContactFormInput::default(), &event, false);
        let text = all_text(&form);
        assert!(text.contains(&format!("[ ] {}", event.follow_up_label())));
        assert!(text.contains(&format!("[x] {}", event.opt_in_label())));
        assert!(text.contains("regarding my PyTorch project"));
        assert!(form.focus_line.is_none());
    }

    #[test]
    fn focus_line_points_at_focused_field() {
        let mut input = ContactFormInput::default();
        input.field = FormField::Submit;
        let form = form_lines(&input, &EventInfo::default(), true);
        let line = line_text(&form.lines[form.focus_line.unwrap()]);
        assert!(line.contains(SUBMIT_LABEL));

        input.field = FormField::Email;
        let form = form_lines(&input, &EventInfo::default(), true);
        let idx = form.focus_line.unwrap();
        assert!(line_text(&form.lines[idx - 1]).contains("Your Email *"));
    }

    #[test]
    fn shows_error_after_rejected_submit() {
        let mut input = ContactFormInput::default();
        let mut sink: Vec<ContactRecord> = Vec::new();
        let _ = input.form.submit(input.submission(), &mut sink);
        let text = all_text(&form_lines(&input, &EventInfo::default(), false));
        assert!(text.contains("Please provide your Name and Email"));
    }

    #[test]
    fn shows_confirmation_after_accepted_submit() {
        let mut input = ContactFormInput::default();
        let mut sink: Vec<ContactRecord> = Vec::new();
        input.name.insert_str("Jo");
        input.email.insert_str("a@b.com");
        input.form.submit(input.submission(), &mut sink).unwrap();
        let text = all_text(&form_lines(&input, &EventInfo::default(), false));
        assert!(text.contains("Thank you, Jo!"));
        assert!(text.contains("Follow-up requested: No. Opt-in for updates: Yes."));
    }

    #[test]
    fn cursor_cell_is_reversed() {
        let rows = text_rows("ab", Some(1), Style::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1].content, "b");
        assert!(rows[0][1].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn cursor_after_newline_lands_on_next_row() {
        let rows = text_rows("ab\ncd", Some(3), Style::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1, "first row has no cursor");
        assert_eq!(rows[1][1].content, "c");
    }

    #[test]
    fn cursor_at_end_draws_blank_cell() {
        let rows = text_rows("ab", Some(2), Style::default());
        assert_eq!(rows[0][1].content, " ");
    }
}
