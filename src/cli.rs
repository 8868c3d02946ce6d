//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::WavetableError;
use crate::params::{witness_constants, DegeneratePolicy, WavetableConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sonic-cannon")]
#[command(about = "Turn zero-knowledge witness dumps into synth wavetables", long_about = None)]
pub struct Args {
    /// Witness artifact names (default: the standard Lagrange-basis set)
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Directory holding the witness artifacts
    #[arg(long, value_name = "DIR", default_value = "artifacts")]
    pub input_dir: PathBuf,

    /// Directory to write <name>_wavetable.wav files into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Process every file in the input directory instead of a name list
    #[arg(long, conflicts_with = "names")]
    pub all: bool,

    /// Nominal sample rate written to the WAV header (Hz)
    #[arg(long, value_name = "HZ", default_value = "44100")]
    pub sample_rate: u32,

    /// Clamp normalized samples to the 16-bit range
    #[arg(long)]
    pub clamp: bool,

    /// Drop a trailing partial hex chunk instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Fail a file whose reconstructed signal is constant instead of writing silence
    #[arg(long)]
    pub fail_on_constant: bool,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Names to process, in order
    pub fn resolve_names(&self) -> Result<Vec<String>, WavetableError> {
        if self.all {
            let names = WavetableConfig::names_from_dir(&self.input_dir)?;
            println!(
                "Found {} artifacts in {}",
                names.len(),
                self.input_dir.display()
            );
            Ok(names)
        } else if self.names.is_empty() {
            Ok(witness_constants::DEFAULT_WITNESS_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect())
        } else {
            Ok(self.names.clone())
        }
    }

    /// Build the wavetable configuration from command-line arguments
    pub fn create_config(&self) -> Result<WavetableConfig, WavetableError> {
        let degenerate_policy = if self.fail_on_constant {
            DegeneratePolicy::Fail
        } else {
            DegeneratePolicy::Silence
        };

        let config = WavetableConfig {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            names: self.resolve_names()?,
            sample_rate_hz: self.sample_rate,
            clamp: self.clamp,
            strict_length: !self.lenient,
            degenerate_policy,
            ..WavetableConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}
