use std::io::Write;

use tracing::{trace, warn};

use super::{AudioSink, SoundCue};

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell for each cue.
///
/// Write errors are logged once and the sink goes quiet.
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
    failed: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            enabled: true,
            failed: false,
        }
    }

    /// A bell that starts out muted
    pub fn muted(out: W) -> Self {
        Self {
            enabled: false,
            ..Self::new(out)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Number of rings for a cue; crashes are the loudest
    fn rings(cue: SoundCue) -> usize {
        match cue {
            SoundCue::Start | SoundCue::Eat | SoundCue::GameOver => 1,
            SoundCue::Crash => 2,
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    fn play(&mut self, cue: SoundCue) {
        if !self.enabled || self.failed {
            return;
        }

        trace!(?cue, "bell");
        let result = (0..Self::rings(cue))
            .try_for_each(|_| self.out.write_all(BEL))
            .and_then(|()| self.out.flush());

        if let Err(err) = result {
            warn!(error = %err, ?cue, "audio output failed, muting");
            self.failed = true;
        }
    }
}
