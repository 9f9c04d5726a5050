//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Both the classic console variant and the arcade variant drive it.

pub mod action;
pub mod clock;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use clock::TickClock;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::{Food, Placement};
pub use state::{CollisionType, GameState, Phase, Position, Snake};
