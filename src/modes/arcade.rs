use std::io::{Stderr, Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::backend::CrosstermBackend;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use super::session::Session;
use super::terminal::{finish, restore_terminal, setup_terminal};
use crate::audio::TerminalBell;
use crate::game::GameConfig;
use crate::input::{ChannelInput, KeyBindings, spawn_key_reader};
use crate::render::{ArcadePainter, Skin, TerminalSurface};

type ArcadeSession = Session<
    TerminalSurface<CrosstermBackend<Stderr>, ArcadePainter>,
    TerminalBell<Stdout>,
    ChannelInput,
>;

/// The richer variant: start screen, pause, skins and bell cues, with the
/// simulation ticking at a fixed rate under a faster render loop
pub struct ArcadeMode {
    config: GameConfig,
    skin: Skin,
    bindings: KeyBindings,
    muted: bool,
}

impl ArcadeMode {
    pub fn new(config: GameConfig, skin: Skin, bindings: KeyBindings) -> Self {
        Self {
            config,
            skin,
            bindings,
            muted: false,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub async fn run(self) -> Result<()> {
        let terminal = setup_terminal()?;

        let (need_width, need_height) =
            ArcadePainter::required_size(self.config.grid_width, self.config.grid_height);
        if let Ok(size) = terminal.size() {
            if size.width < need_width || size.height < need_height {
                warn!(
                    need_width,
                    need_height,
                    width = size.width,
                    height = size.height,
                    "terminal too small for the board"
                );
            }
        }

        let (input, reader) = spawn_key_reader(self.bindings);
        let audio = if self.muted {
            TerminalBell::muted(stdout())
        } else {
            TerminalBell::new(stdout())
        };
        let frame_period = Duration::from_millis(self.config.render_interval_ms);
        let surface = TerminalSurface::new(terminal, ArcadePainter::new(self.skin));
        let mut session = Session::new(self.config, surface, audio, input);

        info!(?frame_period, "arcade mode running");

        // Run game loop with cleanup
        let result = run_game_loop(&mut session, frame_period).await;

        reader.abort();
        finish(result, restore_terminal())
    }
}

async fn run_game_loop(session: &mut ArcadeSession, frame_period: Duration) -> Result<()> {
    let mut frame_timer = interval(frame_period);
    frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_frame = Instant::now();

    while session.is_running() {
        tokio::select! {
            _ = frame_timer.tick() => {
                let now = Instant::now();
                session.frame(now - last_frame)?;
                last_frame = now;
            }

            // Handle Ctrl+C
            _ = tokio::signal::ctrl_c() => {
                session.stop();
            }
        }
    }

    Ok(())
}
