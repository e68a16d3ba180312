/// A timed event in a single MIDI track.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TimedEvent {
    /// Ticks elapsed since the previous event in the same track.
    pub delta: u32,
    /// The kind of the event.
    pub kind: ScaleEventKind,
}

impl TimedEvent {
    pub const fn new_note_on(delta: u32, key: u8, velocity: u8) -> Self {
        let kind = ScaleEventKind::note_on(key, velocity);
        Self { delta, kind }
    }

    pub const fn new_note_off(delta: u32, key: u8) -> Self {
        let kind = ScaleEventKind::note_off(key);
        Self { delta, kind }
    }

    pub const fn new_tempo(delta: u32, micros_per_beat: u32) -> Self {
        let kind = ScaleEventKind::tempo(micros_per_beat);
        Self { delta, kind }
    }

    pub const fn new_end_of_track(delta: u32) -> Self {
        Self {
            delta,
            kind: ScaleEventKind::EndOfTrack,
        }
    }

    pub const fn is_note_event(&self) -> bool {
        matches!(
            self.kind,
            ScaleEventKind::NoteOn { .. } | ScaleEventKind::NoteOff { .. }
        )
    }

    pub const fn is_meta_event(&self) -> bool {
        !self.is_note_event()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScaleEventKind {
    /// Start of a sounding pitch.
    NoteOn { key: u8, velocity: u8 },
    /// End of a sounding pitch. Note-off velocity is always emitted as 0.
    NoteOff { key: u8, velocity: u8 },
    /// Tempo in microseconds per quarter note.
    Tempo(u32),
    /// Terminal marker, always the last event of a track.
    EndOfTrack,
}

impl ScaleEventKind {
    const fn note_on(key: u8, velocity: u8) -> Self {
        Self::NoteOn { key, velocity }
    }

    const fn note_off(key: u8) -> Self {
        Self::NoteOff { key, velocity: 0 }
    }

    const fn tempo(micros_per_beat: u32) -> Self {
        Self::Tempo(micros_per_beat)
    }
}
