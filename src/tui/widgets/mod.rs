// ABOUTME: TUI widget sub-modules for the sidebar, view body, contact form, and status bar.
// ABOUTME: Each widget is a pure rendering function from state to styled Lines.

use ratatui::style::Color;

pub mod form;
pub mod sidebar;
pub mod status;
pub mod view;

/// Booth brand accent.
pub const ACCENT: Color = Color::Rgb(0x2c, 0x97, 0xe8);

/// Concatenate the text of a line's spans.
pub fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
