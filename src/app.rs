// ABOUTME: App orchestrator — wires together content, contact log, terminal, and event loop.
// ABOUTME: Sets up subsystems, runs the kiosk loop, restores the terminal, prints a farewell.

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use futures::StreamExt;
use ratatui::DefaultTerminal;

use crate::config::Config;
use crate::content::BoothContent;
use crate::outreach::{ContactLogger, ContactSink};
use crate::router::MenuItem;
use crate::tui::model::{Flow, update};
use crate::tui::state::KioskState;
use crate::tui::subscriptions::kiosk_events;
use crate::tui::ui;
use crate::tui::widgets::status::format_elapsed;

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
    content: BoothContent,
    start_view: MenuItem,
}

impl App {
    pub fn new(config: Config, content: BoothContent, start_view: MenuItem) -> Self {
        Self {
            config,
            content,
            start_view,
        }
    }

    /// Run the kiosk until the visitor or operator quits.
    pub async fn run(self) -> anyhow::Result<()> {
        let contacts_path = self.config.contacts_file();
        let mut sink = ContactLogger::new(contacts_path.as_deref())?;
        if let Some(ref path) = contacts_path {
            tracing::info!(path = %path.display(), "contact log enabled");
        }

        let mut state = KioskState::new(
            self.content,
            self.start_view,
            Duration::from_secs(self.config.ui.flash_seconds),
        );
        let tick = Duration::from_millis(self.config.ui.tick_ms.max(10));

        tracing::info!(view = self.start_view.label(), "kiosk started");

        let mut terminal = ratatui::init();
        let result = match execute!(stdout(), EnableMouseCapture) {
            Ok(()) => run_loop(&mut terminal, &mut state, &mut sink, tick).await,
            Err(e) => Err(e.into()),
        };
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        tracing::info!(
            contacts = state.contacts_accepted,
            "kiosk stopped after {}",
            format_elapsed(state.session_start.elapsed())
        );

        if result.is_ok() {
            print_exit_screen(&state);
        }
        result
    }
}

/// Draw, wait for the next message, update; until a quit.
async fn run_loop(
    terminal: &mut DefaultTerminal,
    state: &mut KioskState,
    sink: &mut dyn ContactSink,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut events = kiosk_events(tick);

    loop {
        terminal.draw(|frame| ui::render(frame, state))?;

        let Some(msg) = events.next().await else {
            return Ok(());
        };
        if update(state, msg?, sink) == Flow::Quit {
            return Ok(());
        }
    }
}

/// Print a farewell screen after the TUI exits.
fn print_exit_screen(state: &KioskState) {
    let elapsed = format_elapsed(state.session_start.elapsed());
    let contacts = state.contacts_accepted;
    let event = &state.content.event;

    println!();
    println!("  \u{2744}\u{fe0f} \x1b[1m{} @ {}\x1b[0m", event.team_name, event.event_name);
    println!();
    println!("  \u{1f550} Kiosk ran for {elapsed} and collected {contacts} contact request(s).");
    println!("  \u{1f4cd} {}", event.booth_location);
    println!();
}
