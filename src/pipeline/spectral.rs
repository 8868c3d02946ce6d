//! FFT round trip through the positive-frequency half of the spectrum.

use rustfft::{num_complex::Complex, FftPlanner};

/// Forward FFT → keep bins `0..N/2` → inverse FFT of that half.
///
/// Holds the planner so plans are reused across files of the same length.
pub struct SpectralTransformer {
    planner: FftPlanner<f64>,
}

impl Default for SpectralTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralTransformer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Returns the real part of the reconstructed signal, length `floor(N/2)`.
    ///
    /// The inverse is scaled by `1/M`. The imaginary part is dropped.
    pub fn reconstruct(&mut self, signal: &[f64]) -> Vec<f64> {
        let half = signal.len() / 2;
        if half == 0 {
            return Vec::new();
        }

        let mut spectrum: Vec<Complex<f64>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();

        // Perform FFT
        let forward = self.planner.plan_fft_forward(spectrum.len());
        forward.process(&mut spectrum);

        // Positive frequencies only, no zero padding back to N
        spectrum.truncate(half);

        let inverse = self.planner.plan_fft_inverse(half);
        inverse.process(&mut spectrum);

        let scale = 1.0 / half as f64;
        spectrum.iter().map(|c| c.re * scale).collect()
    }
}
