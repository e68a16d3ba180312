use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::ScaleError;

/// Highest value representable in a MIDI data byte (pitch, velocity).
pub const MAX_DATA_VALUE: u8 = 127;

// Tempo fits in a 3-byte meta payload, resolution in a 15-bit header field,
// delta-times in a 28-bit variable-length quantity.
const MAX_MICROS_PER_BEAT: u32 = 0x00FF_FFFF;
const MAX_TICKS_PER_BEAT: u16 = 0x7FFF;
const MAX_DURATION_TICKS: u32 = 0x0FFF_FFFF;

/// Parameters of the scale to build.
///
/// The default value reproduces the fixed C major scale: quarter notes at
/// 120 BPM, resolution 480 ticks per quarter note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// MIDI note numbers, played in order.
    pub pitches: Vec<u8>,
    /// Note-on velocity shared by all notes.
    pub velocity: u8,
    /// Length of each note in ticks.
    pub duration_ticks: u32,
    /// File resolution in ticks per quarter note.
    pub ticks_per_beat: u16,
    /// Tempo in microseconds per quarter note.
    pub micros_per_beat: u32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            // C4 to C5
            pitches: vec![60, 62, 64, 65, 67, 69, 71, 72],
            velocity: 100,
            duration_ticks: 480,
            ticks_per_beat: 480,
            micros_per_beat: 500_000, // 120 BPM
        }
    }
}

impl ScaleConfig {
    /// Reads a config overriding the defaults, field by field.
    pub fn read_config(config_path: &Path) -> Result<Self, ScaleError> {
        if !config_path.exists() {
            return Err(ScaleError::ConfigError(format!(
                "Config file not found {config_path:?}"
            )));
        }
        let file = File::open(config_path)?;
        let reader = BufReader::new(file);
        let config: ScaleConfig = serde_json::from_reader(reader)
            .map_err(|err| ScaleError::ConfigError(format!("Could not read configuration {err:}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScaleError> {
        if self.pitches.is_empty() {
            return Err(ScaleError::ConfigError(
                "pitch list must not be empty".to_string(),
            ));
        }
        if let Some(pitch) = self.pitches.iter().find(|&&p| p > MAX_DATA_VALUE) {
            return Err(ScaleError::ConfigError(format!(
                "pitch {pitch} out of range 0-{MAX_DATA_VALUE}"
            )));
        }
        if self.velocity > MAX_DATA_VALUE {
            return Err(ScaleError::ConfigError(format!(
                "velocity {} out of range 0-{MAX_DATA_VALUE}",
                self.velocity
            )));
        }
        if self.duration_ticks == 0 || self.duration_ticks > MAX_DURATION_TICKS {
            return Err(ScaleError::ConfigError(format!(
                "duration_ticks {} out of range 1-{MAX_DURATION_TICKS}",
                self.duration_ticks
            )));
        }
        if self.ticks_per_beat == 0 || self.ticks_per_beat > MAX_TICKS_PER_BEAT {
            return Err(ScaleError::ConfigError(format!(
                "ticks_per_beat {} out of range 1-{MAX_TICKS_PER_BEAT}",
                self.ticks_per_beat
            )));
        }
        if self.micros_per_beat == 0 || self.micros_per_beat > MAX_MICROS_PER_BEAT {
            return Err(ScaleError::ConfigError(format!(
                "micros_per_beat {} out of range 1-{MAX_MICROS_PER_BEAT}",
                self.micros_per_beat
            )));
        }
        Ok(())
    }
}
