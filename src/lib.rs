//! Grid Snake - the classic Snake game in two flavours
//!
//! This library provides:
//! - Core simulation: snake movement, growth, collisions and food placement (game module)
//! - Keyboard mapping and input sources (input module)
//! - Terminal renderers and glyph skins (render module)
//! - Audio cues (audio module)
//! - The session orchestrator and the classic/arcade loops (modes module)

pub mod audio;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
