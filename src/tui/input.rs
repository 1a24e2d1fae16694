// ABOUTME: Keyboard and mouse handling for the TUI — translates events into state changes.
// ABOUTME: Handles sidebar navigation, project cards, and contact form editing.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::router::MenuItem;
use crate::tui::state::{Focus, FormField, KioskState};

const PAGE_STEP: u16 = 10;
const MOUSE_SCROLL_STEP: u16 = 3;
const DOUBLE_CTRL_C_MS: u128 = 500;

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No further action needed.
    None,
    /// Submit the contact form.
    Submit,
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current state and return the resulting action.
pub fn handle_key(state: &mut KioskState, key: KeyEvent) -> InputResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('q') {
        return InputResult::Quit;
    }

    // Double Ctrl+C quits; a single press clears the focused text field.
    if ctrl && key.code == KeyCode::Char('c') {
        let now = Instant::now();
        if let Some(prev) = state.last_ctrl_c {
            if now.duration_since(prev).as_millis() < DOUBLE_CTRL_C_MS {
                return InputResult::Quit;
            }
        }
        state.last_ctrl_c = Some(now);
        if state.is_editing_text() {
            state.contact.edit_focused(|input| input.clear());
        }
        return InputResult::None;
    }

    if ctrl && key.code == KeyCode::Char('s') {
        if state.menu == MenuItem::Contact {
            return InputResult::Submit;
        }
        return InputResult::None;
    }

    match key.code {
        KeyCode::PageUp => {
            state.scroll_up(PAGE_STEP);
            return InputResult::None;
        }
        KeyCode::PageDown => {
            state.scroll_down(PAGE_STEP);
            return InputResult::None;
        }
        _ => {}
    }

    match state.focus {
        Focus::Sidebar => handle_sidebar_key(state, key),
        Focus::Content => handle_content_key(state, key),
    }
}

fn handle_sidebar_key(state: &mut KioskState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Enter => state.focus_content(),
        KeyCode::Char(c) => {
            jump_to_section(state, c);
        }
        _ => {}
    }
    InputResult::None
}

/// Digits 1-5 select a section. Returns true if the key was a section digit.
fn jump_to_section(state: &mut KioskState, c: char) -> bool {
    let Some(item) = c
        .to_digit(10)
        .and_then(|d| (d as usize).checked_sub(1))
        .and_then(MenuItem::from_index)
    else {
        return false;
    };
    state.select(item);
    state.focus_sidebar();
    true
}

fn handle_content_key(state: &mut KioskState, key: KeyEvent) -> InputResult {
    if key.code == KeyCode::Esc {
        state.focus_sidebar();
        return InputResult::None;
    }

    match state.menu {
        MenuItem::Projects => handle_projects_key(state, key),
        MenuItem::Contact => handle_form_key(state, key),
        _ => {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => state.scroll_up(1),
                KeyCode::Down | KeyCode::Char('j') => state.scroll_down(1),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Left => state.focus_sidebar(),
                KeyCode::Char(c) => {
                    jump_to_section(state, c);
                }
                _ => {}
            }
            InputResult::None
        }
    }
}

fn handle_projects_key(state: &mut KioskState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_project_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_project_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => state.toggle_project_details(),
        KeyCode::Char('d') => {
            state.request_demo();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left => state.focus_sidebar(),
        KeyCode::Char(c) => {
            jump_to_section(state, c);
        }
        _ => {}
    }
    InputResult::None
}

fn handle_form_key(state: &mut KioskState, key: KeyEvent) -> InputResult {
    let field = state.contact.field;
    state.follow_focus = true;

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.contact.field = field.next();
            return InputResult::None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.contact.field = field.prev();
            return InputResult::None;
        }
        _ => {}
    }

    match field {
        FormField::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => InputResult::Submit,
            KeyCode::Char(c) => {
                jump_to_section(state, c);
                InputResult::None
            }
            _ => InputResult::None,
        },
        FormField::FollowUp | FormField::OptIn => {
            match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    state.contact.toggle_focused();
                }
                KeyCode::Char(c) => {
                    jump_to_section(state, c);
                }
                _ => {}
            }
            InputResult::None
        }
        FormField::Name | FormField::Email | FormField::Question => {
            handle_text_key(state, key);
            InputResult::None
        }
    }
}

fn handle_text_key(state: &mut KioskState, key: KeyEvent) {
    let field = state.contact.field;
    match key.code {
        KeyCode::Enter if field == FormField::Question => {
            state.contact.edit_focused(|input| input.insert_char('\n'));
        }
        KeyCode::Enter => state.contact.field = field.next(),
        // Chords like Ctrl+A or Alt+x are not text.
        KeyCode::Char(_)
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        KeyCode::Char(c) => {
            state.contact.edit_focused(|input| input.insert_char(c));
        }
        KeyCode::Backspace => {
            state.contact.edit_focused(|input| input.backspace());
        }
        KeyCode::Delete => {
            state.contact.edit_focused(|input| input.delete());
        }
        KeyCode::Left => {
            if let Some(input) = state.contact.focused_text_mut() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = state.contact.focused_text_mut() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = state.contact.focused_text_mut() {
                input.move_home();
            }
        }
        KeyCode::End => {
            if let Some(input) = state.contact.focused_text_mut() {
                input.move_end();
            }
        }
        _ => {}
    }
}

/// Scroll the content pane with the mouse wheel.
pub fn handle_mouse(state: &mut KioskState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_up(MOUSE_SCROLL_STEP),
        MouseEventKind::ScrollDown => state.scroll_down(MOUSE_SCROLL_STEP),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::content::BoothContent;

    fn state() -> KioskState {
        KioskState::new(
            BoothContent::default(),
            MenuItem::Overview,
            Duration::from_secs(3),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut KioskState, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn ctrl_q_quits() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, ctrl('q')), InputResult::Quit);
    }

    #[test]
    fn plain_q_and_esc_do_not_quit() {
        let mut state = state();
        state.select(MenuItem::Team);
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), InputResult::None);
        assert_eq!(state.focus, Focus::Sidebar);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), InputResult::None);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), InputResult::None);
        assert_eq!(state.menu, MenuItem::Team);
    }

    #[test]
    fn double_ctrl_c_quits() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, ctrl('c')), InputResult::None);
        assert_eq!(handle_key(&mut state, ctrl('c')), InputResult::Quit);
    }

    #[test]
    fn sidebar_arrows_change_view() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.menu, MenuItem::Schedule);
        handle_key(&mut state, key(KeyCode::Up));
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.menu, MenuItem::Contact);
    }

    #[test]
    fn digits_jump_to_sections() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('4')));
        assert_eq!(state.menu, MenuItem::Team);
        handle_key(&mut state, key(KeyCode::Char('9')));
        assert_eq!(state.menu, MenuItem::Team);
    }

    #[test]
    fn digits_are_typed_into_text_fields() {
        let mut state = state();
        state.select(MenuItem::Contact);
        handle_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "Jo2");
        assert_eq!(state.menu, MenuItem::Contact);
        assert_eq!(state.contact.name.value, "Jo2");
    }

    #[test]
    fn project_keys_toggle_and_request_demo() {
        let mut state = state();
        state.select(MenuItem::Projects);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, Focus::Content);

        handle_key(&mut state, key(KeyCode::Char('d')));
        assert!(state.last_demo.is_none(), "demo needs open details");

        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.is_expanded(2));

        handle_key(&mut state, key(KeyCode::Char('d')));
        let (index, ack) = state.last_demo.clone().unwrap();
        assert_eq!(index, 2);
        assert!(ack.contains("LLM Fine-Tuning Sandbox"));
    }

    #[test]
    fn full_form_flow_reaches_submit() {
        let mut state = state();
        state.select(MenuItem::Contact);
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.contact.field, FormField::Name);

        type_text(&mut state, "Jo");
        handle_key(&mut state, key(KeyCode::Tab));
        type_text(&mut state, "a@b.com");
        handle_key(&mut state, key(KeyCode::Tab));
        handle_key(&mut state, key(KeyCode::Char(' ')));
        handle_key(&mut state, key(KeyCode::Tab));
        handle_key(&mut state, key(KeyCode::Char(' ')));
        handle_key(&mut state, key(KeyCode::Tab));
        type_text(&mut state, "hi");
        handle_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "there");
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.contact.field, FormField::Submit);

        let submission = state.contact.submission();
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "a@b.com");
        assert!(submission.follow_up_requested);
        assert!(!submission.updates_opt_in);
        assert_eq!(submission.question.as_deref(), Some("hi\nthere"));

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), InputResult::Submit);
    }

    #[test]
    fn ctrl_s_submits_only_on_contact_view() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, ctrl('s')), InputResult::None);
        state.select(MenuItem::Contact);
        assert_eq!(handle_key(&mut state, ctrl('s')), InputResult::Submit);
    }

    #[test]
    fn single_ctrl_c_clears_focused_field() {
        let mut state = state();
        state.select(MenuItem::Contact);
        handle_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "Jo");
        handle_key(&mut state, ctrl('c'));
        assert_eq!(state.contact.name.value, "");
    }

    #[test]
    fn modifier_chords_are_not_typed() {
        let mut state = state();
        state.select(MenuItem::Contact);
        handle_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "Jo");
        handle_key(&mut state, ctrl('a'));
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT),
        );
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT),
        );
        assert_eq!(state.contact.name.value, "JoE");
    }

    #[test]
    fn esc_returns_to_sidebar() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.focus, Focus::Content);
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.focus, Focus::Sidebar);
    }

    #[test]
    fn page_keys_scroll() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, PAGE_STEP);
        handle_key(&mut state, key(KeyCode::PageUp));
        assert_eq!(state.scroll_offset, 0);
    }
}
