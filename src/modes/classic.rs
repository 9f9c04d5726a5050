use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::info;

use super::session::Session;
use super::terminal::{finish, restore_terminal, setup_terminal};
use crate::audio::SilentAudio;
use crate::game::GameConfig;
use crate::input::{KeyBindings, PollingInput};
use crate::render::{ConsolePainter, TerminalSurface};

/// The minimal variant: plain characters, no sound, one tick per loop
/// iteration followed by a fixed sleep
pub struct ClassicMode {
    config: GameConfig,
    bindings: KeyBindings,
}

impl ClassicMode {
    pub fn new(config: GameConfig, bindings: KeyBindings) -> Self {
        Self { config, bindings }
    }

    pub async fn run(self) -> Result<()> {
        let terminal = setup_terminal()?;

        let tick = Duration::from_millis(self.config.tick_interval_ms);
        let surface = TerminalSurface::new(terminal, ConsolePainter::new());
        let input = PollingInput::new(self.bindings);
        let mut session = Session::new(self.config, surface, SilentAudio, input).auto_start();

        info!(?tick, "classic mode running");

        let result = async {
            while session.is_running() {
                session.step()?;

                tokio::select! {
                    _ = sleep(tick) => {}
                    _ = tokio::signal::ctrl_c() => session.stop(),
                }
            }
            anyhow::Ok(())
        }
        .await;

        finish(result, restore_terminal())
    }
}
