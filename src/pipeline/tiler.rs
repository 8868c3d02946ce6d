//! Normalized signal → fixed waves × samples grid.

/// Tile `normalized` into `num_waves * samples_per_wave` samples.
///
/// Sample `s` of wave `w` reads `normalized[(w * samples_per_wave + s) % M]`:
/// the signal wraps around when shorter than the grid and is cut off when
/// longer. Values are truncated toward zero (`as` saturates at the i16
/// bounds). An empty signal yields an all-zero grid.
pub fn tile(normalized: &[f64], num_waves: usize, samples_per_wave: usize) -> Vec<i16> {
    let total = num_waves * samples_per_wave;
    let len = normalized.len();
    if len == 0 {
        return vec![0; total];
    }

    let mut data = Vec::with_capacity(total);

    // Loop through waveforms in wavetable
    for wave_index in 0..num_waves {
        // Loop through samples in waveform
        for sample_index in 0..samples_per_wave {
            let idx = (wave_index * samples_per_wave + sample_index) % len;
            data.push(normalized[idx] as i16);
        }
    }

    data
}
