// ABOUTME: Main TUI rendering function — assembles header, sidebar, content pane, and status bar.
// ABOUTME: Splits the terminal frame into layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::state::{Focus, KioskState};
use crate::tui::widgets::ACCENT;
use crate::tui::widgets::sidebar::sidebar_lines;
use crate::tui::widgets::status::{StatusBarParams, status_line};
use crate::tui::widgets::view::view_lines;

const SIDEBAR_WIDTH: u16 = 34;

/// Rows kept visible above the focused element when scrolling it into view.
const FOCUS_CONTEXT: u16 = 2;

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut KioskState) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let event = &state.content.event;
    let header = Line::from(vec![
        Span::styled(
            " booth-kiosk ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} @ {}", event.team_name, event.event_name),
            Style::default().fg(ACCENT),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    let sidebar_width = SIDEBAR_WIDTH.min(rows[1].width / 2);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(10)])
        .split(rows[1]);

    let sidebar_border = if state.focus == Focus::Sidebar {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let sidebar = Paragraph::new(sidebar_lines(
        event,
        state.menu,
        state.focus == Focus::Sidebar,
    ))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(sidebar_border),
    );
    frame.render_widget(sidebar, body[0]);

    render_content(frame, state, body[1].inner(Margin::new(1, 0)));

    let footer = format!(
        "Powered by booth-kiosk | {} @ {}",
        state.content.event.team_name, state.content.event.event_name
    );
    let status = status_line(&StatusBarParams {
        flash: state.flash.as_ref(),
        focus: state.focus,
        menu: state.menu,
        uptime: state.session_start.elapsed(),
        footer: &footer,
    });
    frame.render_widget(Paragraph::new(status), rows[2]);
}

fn render_content(frame: &mut Frame, state: &mut KioskState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rendered = view_lines(state);
    let paragraph = Paragraph::new(rendered.lines.clone()).wrap(Wrap { trim: false });

    // Use ratatui's own line_count() so scroll bounds match the wrapped output.
    let total_lines = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(area.height);

    if state.follow_focus {
        if let Some(idx) = rendered.focus_line {
            let rows_above = Paragraph::new(rendered.lines[..idx].to_vec())
                .wrap(Wrap { trim: false })
                .line_count(area.width);
            let focus_row = u16::try_from(rows_above).unwrap_or(u16::MAX);
            let top = focus_row.saturating_sub(FOCUS_CONTEXT);
            if top < state.scroll_offset {
                state.scroll_offset = top;
            } else if focus_row.saturating_add(FOCUS_CONTEXT)
                >= state.scroll_offset.saturating_add(area.height)
            {
                state.scroll_offset = focus_row
                    .saturating_add(FOCUS_CONTEXT + 1)
                    .saturating_sub(area.height);
            }
        }
    }

    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    frame.render_widget(paragraph.scroll((state.scroll_offset, 0)), area);
}
