//! The orchestrator shared by both variants.
//!
//! A [`Session`] owns the simulation and its three collaborators. Input is
//! drained into a single "latest direction" slot that the next tick consumes;
//! the renderer only ever sees the state between ticks.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::audio::{AudioSink, SoundCue};
use crate::game::{
    Action, Direction, GameConfig, GameEngine, GameState, Phase, StepResult, TickClock,
};
use crate::input::InputSource;
use crate::metrics::GameMetrics;
use crate::render::Renderable;

pub struct Session<R, A, I> {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    clock: TickClock,
    renderer: R,
    audio: A,
    input: I,
    pending_direction: Option<Direction>,
    running: bool,
    auto_start: bool,
}

impl<R: Renderable, A: AudioSink, I: InputSource> Session<R, A, I> {
    pub fn new(config: GameConfig, renderer: R, audio: A, input: I) -> Self {
        let clock = TickClock::from_millis(config.tick_interval_ms);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            clock,
            renderer,
            audio,
            input,
            pending_direction: None,
            running: true,
            auto_start: false,
        }
    }

    /// Skip the start screen, both now and after every restart
    pub fn auto_start(mut self) -> Self {
        self.auto_start = true;
        if self.state.phase == Phase::Ready {
            self.begin_round();
        }
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("quit requested");
        }
        self.running = false;
    }

    /// Drain the input source and apply every action in order
    pub fn poll_input(&mut self) -> Result<()> {
        for action in self.input.drain()? {
            self.dispatch(action);
        }
        Ok(())
    }

    /// Apply one player action
    pub fn dispatch(&mut self, action: Action) {
        match (action, self.state.phase) {
            (Action::Turn(direction), Phase::Playing) => {
                self.pending_direction = Some(direction);
            }
            (Action::Turn(_), _) => {}
            (Action::Start, Phase::Ready) => self.begin_round(),
            (Action::Start, phase) if phase.is_finished() => self.restart(),
            (Action::Start, _) => {}
            (Action::Restart, _) => self.restart(),
            (Action::Pause, Phase::Playing) => {
                self.state.phase = Phase::Paused;
                info!(score = self.state.score, "paused");
            }
            (Action::Pause, Phase::Paused) => {
                self.state.phase = Phase::Playing;
                self.clock.reset();
                info!("resumed");
            }
            (Action::Pause, _) => {}
            (Action::ToggleSound, _) => {
                let enabled = self.audio.toggle();
                info!(enabled, "sound toggled");
            }
            (Action::Quit, _) => self.stop(),
        }
    }

    /// Run one simulation tick if a round is live
    pub fn tick(&mut self) -> Option<StepResult> {
        if !self.state.is_playing() {
            return None;
        }

        let turn = self.pending_direction.take();
        let result = self.engine.step(&mut self.state, turn);
        self.metrics.update();

        if result.info.ate_food {
            self.metrics.on_food();
            self.audio.play(SoundCue::Eat);
        }
        if result.info.collision_type.is_some() {
            self.audio.play(SoundCue::Crash);
        }
        if result.terminated {
            self.metrics.on_round_over(self.state.score);
            self.audio.play(SoundCue::GameOver);
        }

        Some(result)
    }

    pub fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.state, &self.metrics)
    }

    /// One frame of the decoupled loop: poll, run whatever ticks `elapsed`
    /// has made due, then draw
    pub fn frame(&mut self, elapsed: Duration) -> Result<()> {
        self.poll_input()?;

        if self.state.is_playing() {
            for _ in 0..self.clock.advance(elapsed) {
                if self.tick().is_some_and(|result| result.terminated) {
                    break;
                }
            }
        }

        self.render()
    }

    /// One iteration of the lockstep loop: poll, tick once, draw
    pub fn step(&mut self) -> Result<()> {
        self.poll_input()?;
        self.tick();
        self.render()
    }

    fn begin_round(&mut self) {
        self.state.phase = Phase::Playing;
        self.pending_direction = None;
        self.clock.reset();
        self.metrics.on_round_start();
        self.audio.play(SoundCue::Start);
        info!(
            width = self.state.grid_width,
            height = self.state.grid_height,
            "round started"
        );
    }

    fn restart(&mut self) {
        self.engine.restart(&mut self.state);
        self.pending_direction = None;
        self.clock.reset();
        if self.auto_start {
            self.begin_round();
        }
    }
}
