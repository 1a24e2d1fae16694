// ABOUTME: View widget — turns a router View into styled Lines for the content pane.
// ABOUTME: Project cards and the contact form pull their interactive state from KioskState.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::router::{Block, ProjectCard};
use crate::tui::state::{Focus, KioskState};
use crate::tui::widgets::ACCENT;
use crate::tui::widgets::form::form_lines;

/// Rendered content plus the index of the line holding the focused element.
pub struct RenderedView {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

/// Render the current view of `state`.
pub fn view_lines(state: &KioskState) -> RenderedView {
    let content_focused = state.focus == Focus::Content;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focus_line = None;
    let dim = Style::default().fg(Color::DarkGray);

    for block in &state.view.blocks {
        match block {
            Block::Title(s) => {
                lines.push(Line::from(Span::styled(
                    s.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
            }
            Block::Header(s) => {
                lines.push(Line::from(Span::styled(
                    s.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )));
                lines.push(Line::from(""));
            }
            Block::Subheader(s) => lines.push(Line::from(Span::styled(
                s.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            Block::Text(s) => {
                lines.push(Line::from(s.clone()));
                lines.push(Line::from(""));
            }
            Block::Strong(s) => lines.push(Line::from(Span::styled(
                s.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            Block::Emphasis(s) => lines.push(Line::from(Span::styled(
                s.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            ))),
            Block::Caption(s) => lines.push(Line::from(Span::styled(s.clone(), dim))),
            Block::Callout(s) => lines.push(Line::from(vec![
                Span::styled("ℹ ", Style::default().fg(ACCENT)),
                Span::styled(s.clone(), Style::default().fg(ACCENT)),
            ])),
            Block::Bullet(s) => lines.push(Line::from(format!("  • {}", s))),
            Block::Link { label, url } => lines.push(Line::from(vec![
                Span::raw(format!("🔗 {}: ", label)),
                Span::styled(
                    url.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
                ),
            ])),
            Block::Avatar(name) => lines.push(Line::from(Span::styled(
                format!("  {}  ", name),
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))),
            Block::Divider => lines.push(Line::from(Span::styled("─".repeat(40), dim))),
            Block::Project(card) => {
                let selected = card.index == state.project_cursor;
                if selected && content_focused {
                    focus_line = Some(lines.len());
                }
                let ack = state
                    .last_demo
                    .as_ref()
                    .filter(|(i, _)| *i == card.index)
                    .map(|(_, text)| text.as_str());
                lines.extend(project_card_lines(
                    card,
                    selected && content_focused,
                    state.is_expanded(card.index),
                    ack,
                ));
            }
            Block::ContactForm => {
                let form = form_lines(&state.contact, &state.content.event, content_focused);
                if let Some(idx) = form.focus_line {
                    focus_line = Some(lines.len() + idx);
                }
                lines.extend(form.lines);
            }
        }
    }

    RenderedView { lines, focus_line }
}

/// Render one project card; details and the demo button only when expanded.
pub fn project_card_lines(
    card: &ProjectCard,
    selected: bool,
    expanded: bool,
    ack: Option<&str>,
) -> Vec<Line<'static>> {
    let edge = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let bar = || Span::styled("│ ", edge);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(if selected { "╭▶ " } else { "╭ " }, edge),
            Span::styled(
                card.heading.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            bar(),
            Span::styled("Summary: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(card.summary.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            bar(),
            Span::styled(
                if expanded { "▾ Hide Details" } else { "▸ Show Details" },
                Style::default().fg(ACCENT),
            ),
        ]),
    ];

    if expanded {
        lines.push(Line::from(vec![
            bar(),
            Span::styled(
                "Project Goal: ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(card.details.clone()),
        ]));
        lines.push(Line::from(vec![
            bar(),
            Span::styled("Core Stack: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(card.stack.clone(), Style::default().fg(Color::Magenta)),
        ]));
        lines.push(Line::from(vec![
            bar(),
            Span::styled(
                format!("[ {} ]", card.demo_label),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (press d)", Style::default().fg(Color::DarkGray)),
        ]));
        if let Some(ack) = ack {
            lines.push(Line::from(vec![
                bar(),
                Span::styled(format!("✔ {}", ack), Style::default().fg(Color::Green)),
            ]));
        }
    }

    lines.push(Line::from(Span::styled("╰─", edge)));
    lines.push(Line::from(""));
    lines
}
