// ABOUTME: TUI module — ratatui full-screen interface for the booth kiosk.
// ABOUTME: Sidebar navigation, content views, contact form, and status bar.

pub mod input;
pub mod model;
pub mod state;
pub mod subscriptions;
pub mod ui;
pub mod widgets;

pub use state::*;
