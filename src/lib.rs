// ABOUTME: Library root for booth-kiosk — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod config;
pub mod content;
pub mod demo;
pub mod logging;
pub mod outreach;
pub mod router;
pub mod tui;
