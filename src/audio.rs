//! Sound cues the core triggers.  Playback belongs to the host; a sink must
//! return immediately and swallow its own failures.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Flap,
    Point,
    Death,
    MusicStart,
    MusicStop,
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Silent sink, for headless runs or when no audio device is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Keeps every cue it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    pub cues: Vec<Cue>,
}

impl RecordingAudio {
    pub fn count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
