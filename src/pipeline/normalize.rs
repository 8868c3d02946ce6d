//! Affine rescale of the reconstructed signal into the 16-bit PCM range.

use log::warn;

use crate::error::{Result, WavetableError};
use crate::params::witness_constants::{DEGENERATE_RANGE_EPSILON, PCM_MAX, PCM_MIN};
use crate::params::DegeneratePolicy;

/// Normalizer settings taken from `WavetableConfig`
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub clamp: bool,
    pub degenerate_policy: DegeneratePolicy,
}

/// Minimum and maximum of a non-empty sequence
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

/// True when `max - min` is round-off relative to the signal's magnitude
pub fn is_degenerate(min_val: f64, max_val: f64) -> bool {
    let magnitude = 1.0f64.max(min_val.abs()).max(max_val.abs());
    max_val - min_val <= DEGENERATE_RANGE_EPSILON * magnitude
}

/// Map `x` to `65535 * (x - min) / (max - min) - 32768`.
///
/// The minimum lands on exactly -32768 and the maximum on exactly 32767.
/// A constant signal is handled per `degenerate_policy`.
pub fn normalize(values: &[f64], options: NormalizeOptions) -> Result<Vec<f64>> {
    let Some((min_val, max_val)) = min_max(values) else {
        return Ok(Vec::new());
    };

    if is_degenerate(min_val, max_val) {
        return match options.degenerate_policy {
            DegeneratePolicy::Silence => {
                warn!(
                    "Constant reconstructed signal ({}), emitting silence",
                    min_val
                );
                Ok(vec![0.0; values.len()])
            }
            DegeneratePolicy::Fail => Err(WavetableError::DegenerateRange { value: min_val }),
        };
    }

    let range = max_val - min_val;
    let span = PCM_MAX - PCM_MIN; // 65535

    Ok(values
        .iter()
        .map(|&x| {
            // Divide first so (max - min) / range is exactly 1
            let scaled = span * ((x - min_val) / range) + PCM_MIN;
            if options.clamp {
                scaled.clamp(PCM_MIN, PCM_MAX)
            } else {
                scaled
            }
        })
        .collect())
}
