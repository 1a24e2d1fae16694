// ABOUTME: Event sources for the kiosk loop — terminal events merged with a tick stream.
// ABOUTME: Both are exposed as one stream of Msg so the app drives a single loop.

use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;

use crate::tui::model::Msg;

/// Periodic ticks used to expire flash messages.
pub fn tick_stream(period: Duration) -> BoxStream<'static, anyhow::Result<Msg>> {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    IntervalStream::new(interval)
        .map(|instant| Ok(Msg::Tick(instant.into_std())))
        .boxed()
}

/// Terminal input events. Events with no Msg counterpart are skipped.
pub fn terminal_stream() -> BoxStream<'static, anyhow::Result<Msg>> {
    EventStream::new()
        .filter_map(|event| async move {
            match event {
                Ok(event) => Msg::from_event(event).map(Ok),
                Err(e) => Some(Err(e.into())),
            }
        })
        .boxed()
}

/// All kiosk messages in arrival order.
pub fn kiosk_events(tick: Duration) -> BoxStream<'static, anyhow::Result<Msg>> {
    stream::select(terminal_stream(), tick_stream(tick)).boxed()
}
