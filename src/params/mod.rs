//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers from the original witness script are extracted here with:
//! - Units (Hz, frames, samples per waveform)
//! - Documented ranges and meanings
//! - Type safety where possible

mod wavetable;

// Re-export all types
pub use wavetable::{witness_constants, DegeneratePolicy, WavetableConfig};
