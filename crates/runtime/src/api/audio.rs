//! Audio boundary.
//!
//! The runtime forwards every [`SoundCue`] the engine records to an
//! [`AudioSink`]. Playback is fire-and-forget.

use chase_core::SoundCue;

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Drops every cue. Used when no sink is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

impl<F> AudioSink for F
where
    F: FnMut(SoundCue),
{
    fn play(&mut self, cue: SoundCue) {
        self(cue)
    }
}
