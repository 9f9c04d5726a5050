use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::KeyBindings;
use crate::game::Action;

/// Somewhere player actions come from.
///
/// Sources never block: `drain` returns whatever is queued, oldest first.
pub trait InputSource {
    fn drain(&mut self) -> Result<Vec<Action>>;
}

fn translate(bindings: &KeyBindings, event: Event) -> Option<Action> {
    match event {
        // Only process key press events, not release
        Event::Key(key @ KeyEvent { kind: KeyEventKind::Press, .. }) => bindings.resolve(key),
        _ => None,
    }
}

/// Reads the terminal directly with a zero-timeout poll
pub struct PollingInput {
    bindings: KeyBindings,
}

impl PollingInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }
}

impl InputSource for PollingInput {
    fn drain(&mut self) -> Result<Vec<Action>> {
        let mut actions = Vec::new();
        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            actions.extend(translate(&self.bindings, event));
        }
        Ok(actions)
    }
}

/// Receives actions from a background task reading crossterm's event stream
pub struct ChannelInput {
    rx: UnboundedReceiver<Action>,
    closed: bool,
}

impl ChannelInput {
    pub fn new(rx: UnboundedReceiver<Action>) -> Self {
        Self { rx, closed: false }
    }
}

impl InputSource for ChannelInput {
    fn drain(&mut self) -> Result<Vec<Action>> {
        let mut actions = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(action) => actions.push(action),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // A dead reader leaves no way to steer, so end the session
                    if !self.closed {
                        warn!("input stream closed");
                        self.closed = true;
                    }
                    actions.push(Action::Quit);
                    break;
                }
            }
        }
        Ok(actions)
    }
}

/// Spawn a task forwarding bound key presses into a [`ChannelInput`]
pub fn spawn_key_reader(bindings: KeyBindings) -> (ChannelInput, JoinHandle<()>) {
    let (tx, rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(event) = events.next().await {
            match event {
                Ok(event) => {
                    let Some(action) = translate(&bindings, event) else {
                        continue;
                    };
                    debug!(%action, "key");
                    if tx.send(action).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "terminal event stream failed");
                    break;
                }
            }
        }
    });

    (ChannelInput::new(rx), handle)
}
