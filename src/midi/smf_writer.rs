//! Serialization boundary: hands the built event sequence to `midly`,
//! which owns the binary encoding (chunk headers, variable-length deltas).

use std::path::Path;

use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

use crate::error::ScaleError;
use crate::midi::scale_event::{ScaleEventKind, TimedEvent};
use crate::midi::DEFAULT_CHANNEL;

/// Assembles a single-track SMF from the event sequence.
fn build_smf(events: &[TimedEvent], ticks_per_beat: u16) -> Smf<'static> {
    let header = Header::new(Format::SingleTrack, Timing::Metrical(ticks_per_beat.into()));
    let mut smf = Smf::new(header);
    let track = events.iter().map(as_track_event).collect();
    smf.tracks.push(track);
    smf
}

fn as_track_event(event: &TimedEvent) -> TrackEvent<'static> {
    let kind = match event.kind {
        ScaleEventKind::NoteOn { key, velocity } => TrackEventKind::Midi {
            channel: DEFAULT_CHANNEL.into(),
            message: MidiMessage::NoteOn {
                key: key.into(),
                vel: velocity.into(),
            },
        },
        ScaleEventKind::NoteOff { key, velocity } => TrackEventKind::Midi {
            channel: DEFAULT_CHANNEL.into(),
            message: MidiMessage::NoteOff {
                key: key.into(),
                vel: velocity.into(),
            },
        },
        ScaleEventKind::Tempo(micros_per_beat) => {
            TrackEventKind::Meta(MetaMessage::Tempo(micros_per_beat.into()))
        }
        ScaleEventKind::EndOfTrack => TrackEventKind::Meta(MetaMessage::EndOfTrack),
    };
    TrackEvent {
        delta: event.delta.into(),
        kind,
    }
}

/// Serializes the event sequence to a `.mid` file at `path`.
pub fn write_file(events: &[TimedEvent], ticks_per_beat: u16, path: &Path) -> Result<(), ScaleError> {
    let smf = build_smf(events, ticks_per_beat);
    smf.save(path)
        .map_err(|err| ScaleError::IoError(format!("Could not write {path:?}: {err}")))?;
    log::info!("wrote {} events to {path:?}", events.len());
    Ok(())
}

/// Serializes the event sequence to an in-memory buffer.
pub fn write_bytes(events: &[TimedEvent], ticks_per_beat: u16) -> Result<Vec<u8>, ScaleError> {
    let smf = build_smf(events, ticks_per_beat);
    let mut buffer = Vec::new();
    smf.write_std(&mut buffer)
        .map_err(|err| ScaleError::MidiError(err.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaleConfig;
    use midly::num::u28;
    use crate::midi::scale_builder::ScaleBuilder;

    #[test]
    fn test_smf_has_single_track_and_metrical_timing() {
        let config = ScaleConfig::default();
        let events = ScaleBuilder::new().build_for_scale(&config);
        let smf = build_smf(&events, config.ticks_per_beat);

        assert_eq!(smf.header.format, Format::SingleTrack);
        assert_eq!(smf.header.timing, Timing::Metrical(480.into()));
        assert_eq!(smf.tracks.len(), 1);
        assert_eq!(smf.tracks[0].len(), events.len());
    }

    #[test]
    fn test_track_events_carry_deltas_and_channel() {
        let config = ScaleConfig::default();
        let events = ScaleBuilder::new().build_for_scale(&config);
        let smf = build_smf(&events, config.ticks_per_beat);
        let track = &smf.tracks[0];

        assert_eq!(
            track[0].kind,
            TrackEventKind::Meta(MetaMessage::Tempo(500_000.into()))
        );
        assert_eq!(track[0].delta, u28::from(0));

        // first note pair
        assert_eq!(
            track[1].kind,
            TrackEventKind::Midi {
                channel: 0.into(),
                message: MidiMessage::NoteOn {
                    key: 60.into(),
                    vel: 100.into(),
                },
            }
        );
        assert_eq!(track[1].delta, u28::from(0));
        assert_eq!(
            track[2].kind,
            TrackEventKind::Midi {
                channel: 0.into(),
                message: MidiMessage::NoteOff {
                    key: 60.into(),
                    vel: 0.into(),
                },
            }
        );
        assert_eq!(track[2].delta, u28::from(480));

        assert_eq!(
            track.last().unwrap().kind,
            TrackEventKind::Meta(MetaMessage::EndOfTrack)
        );
    }

    #[test]
    fn test_serialized_bytes_are_idempotent() {
        let config = ScaleConfig::default();
        let first_events = ScaleBuilder::new().build_for_scale(&config);
        let second_events = ScaleBuilder::new().build_for_scale(&config);

        let first = write_bytes(&first_events, config.ticks_per_beat).unwrap();
        let second = write_bytes(&second_events, config.ticks_per_beat).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_serialized_bytes_round_trip_through_midly() {
        let config = ScaleConfig::default();
        let events = ScaleBuilder::new().build_for_scale(&config);
        let bytes = write_bytes(&events, config.ticks_per_beat).unwrap();

        let parsed = Smf::parse(&bytes).expect("Failed to parse written SMF");
        assert_eq!(parsed.tracks.len(), 1);
        assert_eq!(parsed.tracks[0].len(), 18);
    }
}
