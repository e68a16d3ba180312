use crate::config::ScaleConfig;
use crate::midi::scale_event::TimedEvent;

/// Builds the event sequence for a single-track scale file.
///
/// The produced track is always: one tempo event, then a note-on/note-off
/// pair per pitch, then the end-of-track marker. Every note-on carries a
/// delta of zero because each note starts as soon as the previous one ends.
pub struct ScaleBuilder {
    events: Vec<TimedEvent>, // events accumulated during build
}

impl ScaleBuilder {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record all events for the configured scale.
    pub fn build_for_scale(mut self, config: &ScaleConfig) -> Vec<TimedEvent> {
        self.add_tempo(config.micros_per_beat);
        for &pitch in &config.pitches {
            self.add_note(pitch, config.velocity, config.duration_ticks);
        }
        self.add_end_of_track();
        log::debug!("built {} events for scale", self.events.len());
        self.events
    }

    fn add_tempo(&mut self, micros_per_beat: u32) {
        self.events.push(TimedEvent::new_tempo(0, micros_per_beat));
    }

    fn add_note(&mut self, pitch: u8, velocity: u8, duration_ticks: u32) {
        self.events.push(TimedEvent::new_note_on(0, pitch, velocity));
        self.events
            .push(TimedEvent::new_note_off(duration_ticks, pitch));
    }

    fn add_end_of_track(&mut self) {
        self.events.push(TimedEvent::new_end_of_track(0));
    }
}

impl Default for ScaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
