//! Terminal rendering.
//!
//! Renderers only ever see a shared borrow of the settled game state.

pub mod console;
pub mod renderer;
pub mod skin;

pub use console::ConsolePainter;
pub use renderer::ArcadePainter;
pub use skin::Skin;

use anyhow::{Context, Result};
use ratatui::{Frame, Terminal, backend::Backend};

use crate::game::GameState;
use crate::metrics::GameMetrics;

/// Anything that can present a frame of the game
pub trait Renderable {
    fn render(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;
}

/// Lays out one frame on a ratatui [`Frame`]
pub trait Painter {
    fn paint(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics);
}

/// A ratatui terminal paired with the painter that fills it
pub struct TerminalSurface<B: Backend, P: Painter> {
    terminal: Terminal<B>,
    painter: P,
}

impl<B: Backend, P: Painter> TerminalSurface<B, P> {
    pub fn new(terminal: Terminal<B>, painter: P) -> Self {
        Self { terminal, painter }
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend, P: Painter> Renderable for TerminalSurface<B, P> {
    fn render(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        let painter = &self.painter;
        self.terminal
            .draw(|frame| painter.paint(frame, state, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
