//! File-level driver: read witness artifacts, render, write WAV files.
//!
//! Each file is independent. A failure is reported with the file name and
//! the batch moves on.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::error::{Result, WavetableError};
use crate::params::WavetableConfig;
use crate::pipeline::{Wavetable, WavetablePipeline};

/// Result of processing one named artifact
#[derive(Debug)]
pub struct FileOutcome {
    pub name: String,
    pub result: Result<RenderedFile>,
}

/// A wavetable successfully written to disk
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub output_path: PathBuf,
    pub records: usize,
    pub frames: usize,
}

impl FileOutcome {
    /// One-line user-facing status
    pub fn status_line(&self) -> String {
        match &self.result {
            Ok(file) => format!(
                "ok      {} -> {} ({} records, {} frames)",
                self.name,
                file.output_path.display(),
                file.records,
                file.frames
            ),
            Err(e) => format!("FAILED  {}: {}", self.name, e),
        }
    }
}

/// Read a witness artifact as text
pub fn read_witness(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => WavetableError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => WavetableError::ReadInput {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write samples as mono 16-bit integer PCM
pub fn write_wavetable(path: &Path, samples: &[i16], sample_rate_hz: u32) -> Result<()> {
    let to_write_error = |source| WavetableError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(to_write_error)?;

    for &sample in samples {
        writer.write_sample(sample).map_err(to_write_error)?;
    }

    writer.finalize().map_err(to_write_error)
}

/// Batch runner owning the pipeline (and its FFT plan cache)
pub struct BatchRunner {
    pipeline: WavetablePipeline,
}

impl BatchRunner {
    pub fn new(config: WavetableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pipeline: WavetablePipeline::new(config),
        })
    }

    pub fn config(&self) -> &WavetableConfig {
        self.pipeline.config()
    }

    /// Read, render and write a single named artifact
    pub fn process(&mut self, name: &str) -> Result<RenderedFile> {
        let input_path = self.config().input_path(name);
        let output_path = self.config().output_path(name);
        let sample_rate_hz = self.config().sample_rate_hz;

        info!("Creating wavetable for {}", name);
        let text = read_witness(&input_path)?;
        let Wavetable {
            samples, records, ..
        } = self.pipeline.render_hex(&text)?;

        write_wavetable(&output_path, &samples, sample_rate_hz)?;
        info!("Wrote {}", output_path.display());

        Ok(RenderedFile {
            output_path,
            records,
            frames: samples.len(),
        })
    }

    /// Process every configured name in order, never stopping on failure
    pub fn run(&mut self) -> Vec<FileOutcome> {
        self.run_with(|_| {})
    }

    /// Like `run`, calling `report` as soon as each file finishes
    pub fn run_with(&mut self, mut report: impl FnMut(&FileOutcome)) -> Vec<FileOutcome> {
        let names = self.config().names.clone();
        names
            .into_iter()
            .map(|name| {
                let result = self.process(&name);
                if let Err(e) = &result {
                    error!("{}: {}", name, e);
                }
                let outcome = FileOutcome { name, result };
                report(&outcome);
                outcome
            })
            .collect()
    }
}
