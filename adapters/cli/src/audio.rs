//! Audio sink that reports every sound through `tracing` instead of a mixer.

use arena_core::{AudioSink, SoundId, SoundPlacement};

/// Logs sounds at debug level and counts them.
#[derive(Debug, Default)]
pub(crate) struct TracingAudio {
    played: u64,
}

impl TracingAudio {
    /// Number of sounds played so far.
    pub(crate) const fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for TracingAudio {
    fn play(&mut self, sound: SoundId, placement: SoundPlacement) {
        self.played += 1;
        tracing::debug!(
            sound = sound.get(),
            angle = placement.angle(),
            distance = placement.distance(),
            "play sound"
        );
    }
}
