//! Sonic cannon library - witness dumps to synthesizer wavetables

pub mod batch;
pub mod cli;
pub mod error;
pub mod params;
pub mod pipeline;
