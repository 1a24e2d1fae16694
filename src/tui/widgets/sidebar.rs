// ABOUTME: Sidebar widget — team title, event link, the five section entries, booth hours.
// ABOUTME: The selected entry is highlighted; brighter when the sidebar has focus.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::EventInfo;
use crate::router::MenuItem;
use crate::tui::widgets::ACCENT;

/// Render the sidebar as Lines.
pub fn sidebar_lines(event: &EventInfo, selected: MenuItem, focused: bool) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("❄️ {}", event.team_name),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Event: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(event.event_name.clone()),
        ]),
        Line::from(Span::styled(
            event.event_url.clone(),
            dim.add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled("─".repeat(24), dim)),
        Line::from(Span::styled("Go to Section", dim)),
    ];

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let is_selected = *item == selected;
        let marker = if is_selected { "▶" } else { " " };
        let style = match (is_selected, focused) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} {} ", marker, i + 1), dim),
            Span::styled(format!("{} {}", item.icon(), item.label()), style),
        ]));
    }

    lines.push(Line::from(Span::styled("─".repeat(24), dim)));
    lines.push(Line::from(Span::styled(
        "Booth Hours",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::raw(event.booth_hours.clone())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::line_text;

    #[test]
    fn lists_all_sections_in_order() {
        let lines = sidebar_lines(&EventInfo::default(), MenuItem::Overview, true);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        let positions: Vec<usize> = MenuItem::ALL
            .iter()
            .map(|item| {
                text.iter()
                    .position(|l| l.contains(item.label()))
                    .expect("every label should be listed")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn marks_selected_entry() {
        let lines = sidebar_lines(&EventInfo::default(), MenuItem::Team, false);
        let selected = lines
            .iter()
            .map(line_text)
            .find(|l| l.starts_with("▶"))
            .unwrap();
        assert!(selected.contains("Our Team"));
    }

    #[test]
    fn shows_team_and_event() {
        let lines = sidebar_lines(&EventInfo::default(), MenuItem::Overview, true);
        assert!(line_text(&lines[0]).contains("Snowflake Developer Relations"));
        assert!(line_text(&lines[1]).contains("PyTorch Conference 2025"));
    }
}
