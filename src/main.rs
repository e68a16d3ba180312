use clap::Parser;
use scalegen::{ScaleBuilder, ScaleConfig, ScaleError};
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "test_song.mid";

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), ScaleError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("scalegen=info"))
        .init();

    // args
    let mut args = CliArgs::parse();
    let config_path = args.config_file.take().map(PathBuf::from);
    let output_path = args
        .output_file
        .take()
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    // read config overrides if provided, validated on load
    let config = match &config_path {
        Some(config_path) => {
            log::info!("Starting with custom config file {config_path:?}");
            ScaleConfig::read_config(config_path)?
        }
        None => ScaleConfig::default(),
    };

    // build the event sequence and write it out
    let events = ScaleBuilder::new().build_for_scale(&config);
    scalegen::write_file(&events, config.ticks_per_beat, &output_path)?;

    println!("{} created successfully.", output_path.display());
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Optional path to a JSON config file overriding the default scale.
    #[arg(long)]
    config_file: Option<String>,
    /// Optional output path for the MIDI file.
    #[arg(long)]
    output_file: Option<String>,
}
