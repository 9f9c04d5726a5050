//! Audio cues.
//!
//! The session fires cues and forgets them. A sink that fails must swallow the
//! failure; nothing it does can change the round.

pub mod bell;

pub use bell::TerminalBell;

/// A discrete game event worth a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Start,
    Eat,
    Crash,
    GameOver,
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);

    /// Flip sound on or off, returning whether it is now on
    fn toggle(&mut self) -> bool {
        false
    }
}

/// Discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}
