// ABOUTME: Status bar widget — key hints or the current flash message, uptime, and footer.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use std::time::Duration;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::router::MenuItem;
use crate::tui::state::{Flash, FlashKind, Focus};

/// Inputs for the status bar.
pub struct StatusBarParams<'a> {
    pub flash: Option<&'a Flash>,
    pub focus: Focus,
    pub menu: MenuItem,
    pub uptime: Duration,
    pub footer: &'a str,
}

/// Render the status bar line.
pub fn status_line(params: &StatusBarParams<'_>) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();

    match params.flash {
        Some(flash) => {
            let color = match flash.kind {
                FlashKind::Info => Color::Cyan,
                FlashKind::Success => Color::Green,
                FlashKind::Error => Color::Red,
            };
            spans.push(Span::styled(
                format!(" {} ", flash.text),
                Style::default().fg(color),
            ));
        }
        None => spans.push(Span::styled(
            format!(" {} ", key_hints(params.focus, params.menu)),
            Style::default().fg(Color::White),
        )),
    }

    spans.push(Span::styled("| ", dim));
    spans.push(Span::styled(
        format!("up {} ", format_elapsed(params.uptime)),
        Style::default().fg(Color::Cyan),
    ));
    spans.push(Span::styled("| ", dim));
    spans.push(Span::styled(params.footer.to_string(), dim));

    Line::from(spans)
}

/// Key hints for the focused pane.
pub fn key_hints(focus: Focus, menu: MenuItem) -> &'static str {
    match (focus, menu) {
        (Focus::Sidebar, _) => "↑↓ section · 1-5 jump · Enter open · Ctrl+Q quit",
        (Focus::Content, MenuItem::Projects) => "↑↓ project · Enter details · d demo · Esc back",
        (Focus::Content, MenuItem::Contact) => "Tab next field · Space toggle · Ctrl+S submit · Esc back",
        (Focus::Content, _) => "↑↓ scroll · PgUp/PgDn page · Esc back",
    }
}

/// Format a duration as "Xm YYs", or "Xh YYm" past an hour.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs >= 3600 {
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
