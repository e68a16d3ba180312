//! Scalegen - builds a MIDI file containing an ascending C major scale
//!
//! This library provides:
//! - Construction of a fixed single-track MIDI event sequence
//! - Serialization of that sequence to a Standard MIDI File via `midly`
//! - A serde-backed configuration of the scale parameters
//!
//! # Example
//!
//! ```no_run
//! use scalegen::{ScaleBuilder, ScaleConfig};
//! use std::path::Path;
//!
//! let config = ScaleConfig::default();
//! let events = ScaleBuilder::new().build_for_scale(&config);
//! scalegen::write_file(&events, config.ticks_per_beat, Path::new("test_song.mid")).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod midi;

// Re-export main types for convenience
pub use config::ScaleConfig;
pub use error::ScaleError;
pub use midi::{
    scale_builder::ScaleBuilder,
    scale_event::{ScaleEventKind, TimedEvent},
    smf_writer::{write_bytes, write_file},
    DEFAULT_CHANNEL,
};
