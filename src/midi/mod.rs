pub mod scale_builder;
pub mod scale_event;
pub mod smf_writer;

/// MIDI channel all note events are emitted on.
pub const DEFAULT_CHANNEL: u8 = 0;
