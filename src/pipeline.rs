//! Witness → wavetable numeric pipeline.
//!
//! Five linear stages: decode, compress, spectral round trip, normalize,
//! tile. Nothing is carried between files except cached FFT plans.

mod compress;
mod decode;
mod normalize;
mod spectral;
mod tiler;

use log::debug;
use num_bigint::BigUint;

use crate::error::Result;
use crate::params::WavetableConfig;

pub use compress::{compress, compress_value, residue};
pub use decode::decode_witness;
pub use normalize::{is_degenerate, min_max, normalize, NormalizeOptions};
pub use spectral::SpectralTransformer;
pub use tiler::tile;

/// Rendered wavetable plus a summary of the intermediate stages
#[derive(Debug, Clone)]
pub struct Wavetable {
    /// Flat wave-major samples, `num_waves * samples_per_wave` long
    pub samples: Vec<i16>,

    /// Number of 64-digit witness records decoded
    pub records: usize,

    /// Length of the reconstructed signal (records / 2)
    pub reconstructed_len: usize,

    /// Range of the reconstructed signal before normalization
    pub signal_range: Option<(f64, f64)>,
}

/// Runs the pipeline, reusing FFT plans between invocations
pub struct WavetablePipeline {
    config: WavetableConfig,
    transformer: SpectralTransformer,
}

impl WavetablePipeline {
    pub fn new(config: WavetableConfig) -> Self {
        Self {
            config,
            transformer: SpectralTransformer::new(),
        }
    }

    pub fn config(&self) -> &WavetableConfig {
        &self.config
    }

    /// Render a wavetable from witness hex text
    pub fn render_hex(&mut self, text: &str) -> Result<Wavetable> {
        let values = decode_witness(text, self.config.strict_length)?;
        self.render_values(&values)
    }

    /// Render a wavetable from already decoded witness values
    pub fn render_values(&mut self, values: &[BigUint]) -> Result<Wavetable> {
        let signal = compress(values);
        let reconstructed = self.transformer.reconstruct(&signal);
        let signal_range = min_max(&reconstructed);

        debug!(
            "records={} reconstructed={} range={:?}",
            values.len(),
            reconstructed.len(),
            signal_range
        );

        let options = NormalizeOptions {
            clamp: self.config.clamp,
            degenerate_policy: self.config.degenerate_policy,
        };
        let normalized = normalize(&reconstructed, options)?;
        let samples = tile(
            &normalized,
            self.config.num_waves,
            self.config.samples_per_wave,
        );

        Ok(Wavetable {
            samples,
            records: values.len(),
            reconstructed_len: reconstructed.len(),
            signal_range,
        })
    }
}
