// ABOUTME: TUI state types — menu selection, focus, project cards, contact form input, flash.
// ABOUTME: Drives the TUI rendering and bridges key handling to the booth logic.

use std::time::{Duration, Instant};

use crate::content::BoothContent;
use crate::demo::DemoRequest;
use crate::outreach::{Confirmation, ContactForm, ContactSink, ContactSubmission, SubmitError};
use crate::router::{MenuItem, View, render_view};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// Fields of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    FollowUp,
    OptIn,
    Question,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::FollowUp,
        FormField::OptIn,
        FormField::Question,
        FormField::Submit,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Question)
    }
}

/// A single-field UTF-8 text editor with a character cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Clamp the cursor to the valid character range.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.char_len());
    }

    /// Cursor position as a byte index into `value`.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.value, self.cursor)
    }

    pub fn insert_char(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.value.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        self.clamp_cursor();
        if self.cursor == 0 {
            return;
        }
        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.value, self.cursor - 1);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        self.clamp_cursor();
        if self.cursor >= self.char_len() {
            return;
        }
        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.clamp_cursor();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.clamp_cursor();
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Longest a flash stays up when the configured duration overflows the clock.
const FLASH_CEILING: Duration = Duration::from_secs(365 * 24 * 60 * 60);

fn flash_deadline(now: Instant, duration: Duration) -> Instant {
    now.checked_add(duration)
        .or_else(|| now.checked_add(FLASH_CEILING))
        .unwrap_or(now)
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}

/// Everything typed into the contact form plus its submission state.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormInput {
    pub name: TextInput,
    pub email: TextInput,
    pub follow_up: bool,
    pub opt_in: bool,
    pub question: TextInput,
    pub field: FormField,
    pub form: ContactForm,
}

impl Default for ContactFormInput {
    fn default() -> Self {
        Self {
            name: TextInput::default(),
            email: TextInput::default(),
            follow_up: false,
            opt_in: true,
            question: TextInput::default(),
            field: FormField::Name,
            form: ContactForm::new(),
        }
    }
}

impl ContactFormInput {
    /// Snapshot the current inputs as a submission.
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission::new(self.name.value.clone(), self.email.value.clone())
            .with_follow_up(self.follow_up)
            .with_opt_in(self.opt_in)
            .with_question(self.question.value.clone())
    }

    /// The focused text field, if the focus is on one.
    pub fn focused_text_mut(&mut self) -> Option<&mut TextInput> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Question => Some(&mut self.question),
            _ => None,
        }
    }

    /// Toggle the focused checkbox. Returns false when the focus is not on one.
    pub fn toggle_focused(&mut self) -> bool {
        let toggled = match self.field {
            FormField::FollowUp => {
                self.follow_up = !self.follow_up;
                true
            }
            FormField::OptIn => {
                self.opt_in = !self.opt_in;
                true
            }
            _ => false,
        };
        if toggled {
            self.form.edited();
        }
        toggled
    }

    /// Apply an edit to the focused text field and reset the form outcome.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) -> bool {
        let Some(input) = self.focused_text_mut() else {
            return false;
        };
        edit(input);
        self.form.edited();
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Success,
    Error,
}

/// A transient status-bar message.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
    pub expires_at: Instant,
}

/// Full TUI application state.
pub struct KioskState {
    pub content: BoothContent,
    pub menu: MenuItem,
    pub view: View,
    pub focus: Focus,
    /// Lines scrolled down from the top of the content pane.
    pub scroll_offset: u16,
    /// Scroll the focused element into view on the next render.
    pub follow_focus: bool,
    pub project_cursor: usize,
    pub expanded: Vec<bool>,
    /// Acknowledgement shown inside the card of the last requested demo.
    pub last_demo: Option<(usize, String)>,
    pub contact: ContactFormInput,
    pub flash: Option<Flash>,
    pub flash_duration: Duration,
    pub contacts_accepted: usize,
    pub session_start: Instant,
    /// Timestamp of the last Ctrl+C press for double-tap quit detection.
    pub last_ctrl_c: Option<Instant>,
}

impl KioskState {
    pub fn new(content: BoothContent, start: MenuItem, flash_duration: Duration) -> Self {
        let view = render_view(start, &content);
        let expanded = vec![false; content.projects.len()];
        Self {
            content,
            menu: start,
            view,
            focus: Focus::Sidebar,
            scroll_offset: 0,
            follow_focus: false,
            project_cursor: 0,
            expanded,
            last_demo: None,
            contact: ContactFormInput::default(),
            flash: None,
            flash_duration,
            contacts_accepted: 0,
            session_start: Instant::now(),
            last_ctrl_c: None,
        }
    }

    /// Switch to `menu` and rebuild the view from the content tables.
    pub fn select(&mut self, menu: MenuItem) {
        if menu != self.menu {
            tracing::debug!(view = menu.label(), "view selected");
        }
        self.menu = menu;
        self.view = render_view(menu, &self.content);
        self.scroll_offset = 0;
        self.project_cursor = 0;
        self.last_demo = None;
    }

    pub fn select_next(&mut self) {
        self.select(self.menu.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.menu.prev());
    }

    pub fn focus_content(&mut self) {
        self.focus = Focus::Content;
        self.follow_focus = true;
        if self.menu == MenuItem::Contact {
            self.contact.field = FormField::Name;
        }
    }

    pub fn focus_sidebar(&mut self) {
        self.focus = Focus::Sidebar;
    }

    /// True while keystrokes go into a contact form text field.
    pub fn is_editing_text(&self) -> bool {
        self.focus == Focus::Content
            && self.menu == MenuItem::Contact
            && self.contact.field.is_text()
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow_focus = false;
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.follow_focus = false;
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn move_project_cursor(&mut self, delta: isize) {
        let count = self.content.projects.len();
        if count == 0 {
            return;
        }
        let next = self.project_cursor as isize + delta;
        self.project_cursor = next.clamp(0, count as isize - 1) as usize;
        self.follow_focus = true;
    }

    /// Open or close the "Show Details" expander of the selected project.
    pub fn toggle_project_details(&mut self) {
        if let Some(open) = self.expanded.get_mut(self.project_cursor) {
            *open = !*open;
            self.follow_focus = true;
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Request a demo of the selected project. Only possible with its details open.
    pub fn request_demo(&mut self) -> Option<String> {
        if !self.is_expanded(self.project_cursor) {
            return None;
        }
        let project = self.content.projects.get(self.project_cursor)?;
        let ack = DemoRequest::for_project(self.project_cursor, project).acknowledge();
        self.last_demo = Some((self.project_cursor, ack.clone()));
        self.set_flash(FlashKind::Success, ack.clone());
        Some(ack)
    }

    /// Submit the contact form to `sink` and flash the outcome.
    pub fn submit_contact(
        &mut self,
        sink: &mut dyn ContactSink,
    ) -> Result<Confirmation, SubmitError> {
        let submission = self.contact.submission();
        let result = self.contact.form.submit(submission, sink);
        match &result {
            Ok(confirmation) => {
                self.contacts_accepted += 1;
                self.set_flash(FlashKind::Success, confirmation.message());
            }
            Err(err) => self.set_flash(FlashKind::Error, err.to_string()),
        }
        self.follow_focus = true;
        result
    }

    /// Paste text into the focused contact field; ignored elsewhere.
    pub fn paste(&mut self, text: &str) {
        if !self.is_editing_text() {
            return;
        }
        let text = if self.contact.field == FormField::Question {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        self.contact.edit_focused(|input| input.insert_str(&text));
    }

    pub fn set_flash(&mut self, kind: FlashKind, text: String) {
        self.flash = Some(Flash {
            kind,
            text,
            expires_at: flash_deadline(Instant::now(), self.flash_duration),
        });
    }

    /// Drop the flash message once it has expired.
    pub fn expire_flash(&mut self, now: Instant) {
        if self.flash.as_ref().is_some_and(|f| now >= f.expires_at) {
            self.flash = None;
        }
    }
}
