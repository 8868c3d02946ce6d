//! Wavetable rendering configuration and constants.

use std::path::{Path, PathBuf};

use crate::error::WavetableError;

/// What the normalizer does when the reconstructed signal is constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Emit silence (every sample 0) and log a warning
    #[default]
    Silence,

    /// Report `WavetableError::DegenerateRange` for the file
    Fail,
}

/// Wavetable rendering configuration
#[derive(Debug, Clone)]
pub struct WavetableConfig {
    /// Directory holding the witness artifacts
    pub input_dir: PathBuf,

    /// Directory the `<name>_wavetable.wav` files are written to
    pub output_dir: PathBuf,

    /// Artifact names, processed in this order
    pub names: Vec<String>,

    /// Nominal output sample rate (Hz)
    /// Not meaningful for the synthesized content, synths resample anyway
    pub sample_rate_hz: u32,

    /// Number of waveforms in the wavetable
    pub num_waves: usize,

    /// Samples per single-cycle waveform
    pub samples_per_wave: usize,

    /// Clamp normalized samples to the i16 range before truncation
    /// Off by default: the affine map already lands in range
    pub clamp: bool,

    /// Reject hex input whose length is not a multiple of 64
    /// When false the trailing partial chunk is dropped
    pub strict_length: bool,

    /// Constant-signal handling in the normalizer
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for WavetableConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("artifacts"),
            output_dir: PathBuf::from("."),
            names: witness_constants::DEFAULT_WITNESS_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            sample_rate_hz: 44100,
            num_waves: 32,          // Serum/Vital friendly frame count
            samples_per_wave: 1024, // Single-cycle length
            clamp: false,
            strict_length: true,
            degenerate_policy: DegeneratePolicy::Silence,
        }
    }
}

impl WavetableConfig {
    /// Total number of frames written per wavetable
    pub fn frame_count(&self) -> usize {
        self.num_waves * self.samples_per_wave
    }

    /// Path of the witness artifact for `name`
    pub fn input_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    /// Path of the rendered wavetable for `name`
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}_wavetable.wav", name))
    }

    /// Replace the name list with every regular file found in `dir`, sorted
    pub fn names_from_dir(dir: &Path) -> Result<Vec<String>, WavetableError> {
        let entries = std::fs::read_dir(dir).map_err(|source| WavetableError::ReadInput {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| WavetableError::ReadInput {
                path: dir.to_path_buf(),
                source,
            })?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Validate configuration (non-empty grid, sample rate > 0, etc.)
    pub fn validate(&self) -> Result<(), WavetableError> {
        if self.num_waves == 0 || self.samples_per_wave == 0 {
            return Err(WavetableError::InvalidConfig(format!(
                "wavetable grid must be non-empty, got {} waves x {} samples",
                self.num_waves, self.samples_per_wave
            )));
        }
        let frames = self
            .num_waves
            .checked_mul(self.samples_per_wave)
            .ok_or_else(|| WavetableError::InvalidConfig("frame count overflows".to_string()))?;
        if u32::try_from(frames).is_err() {
            return Err(WavetableError::InvalidConfig(format!(
                "frame count {} does not fit a WAV file",
                frames
            )));
        }
        if self.sample_rate_hz == 0 {
            return Err(WavetableError::InvalidConfig(
                "sample rate must be > 0".to_string(),
            ));
        }
        if self.names.is_empty() {
            return Err(WavetableError::InvalidConfig(
                "no witness artifacts to process".to_string(),
            ));
        }
        Ok(())
    }
}

/// Witness format constants (fixed by the proof system's dump format)
pub mod witness_constants {
    /// Hex characters per field element (256 bits)
    pub const HEX_CHUNK_LEN: usize = 64;

    /// Raw values are reduced modulo 2^14 before the log mapping
    pub const COMPRESSION_MODULUS: u32 = 1 << 14;

    /// Relative tolerance under which max == min for normalization
    /// An FFT round trip leaves ~1e-15 noise on a constant signal
    pub const DEGENERATE_RANGE_EPSILON: f64 = 1e-9;

    /// Lower bound of 16-bit PCM
    pub const PCM_MIN: f64 = -32768.0;

    /// Upper bound of 16-bit PCM
    pub const PCM_MAX: f64 = 32767.0;

    /// Lagrange-basis witness polynomials dumped by the prover
    pub const DEFAULT_WITNESS_NAMES: &[&str] = &[
        "w_1_lagrange",
        "w_2_lagrange",
        "w_3_lagrange",
        "w_4_lagrange",
        "q_1_lagrange",
        "q_2_lagrange",
        "q_3_lagrange",
        "q_4_lagrange",
        "q_c_lagrange",
        "q_aux_lagrange",
        "q_arith_lagrange",
        "q_sort_lagrange",
        "q_elliptic_lagrange",
    ];
}
