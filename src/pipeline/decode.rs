//! Witness text → raw field-element values.

use log::warn;
use num_bigint::BigUint;

use crate::error::ParseError;
use crate::params::witness_constants::HEX_CHUNK_LEN;

/// Decode a hex dump into one value per 64-character chunk, in input order.
///
/// Surrounding whitespace is ignored. Any other non-hex character is an
/// error. A trailing partial chunk is an error when `strict` is set and is
/// dropped otherwise.
pub fn decode_witness(text: &str, strict: bool) -> Result<Vec<BigUint>, ParseError> {
    let hex = text.trim();

    if let Some((offset, found)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        // Offset into the original text, not the trimmed slice
        let leading = text.len() - text.trim_start().len();
        return Err(ParseError::InvalidHexDigit {
            offset: leading + offset,
            found,
        });
    }

    let remainder = hex.len() % HEX_CHUNK_LEN;
    if remainder != 0 {
        if strict {
            return Err(ParseError::TrailingPartialChunk {
                len: hex.len(),
                remainder,
            });
        }
        warn!("Dropping {} trailing hex digits", remainder);
    }

    // All ASCII from here, so byte chunks are whole characters
    let values = hex
        .as_bytes()
        .chunks_exact(HEX_CHUNK_LEN)
        .map(|chunk| BigUint::parse_bytes(chunk, 16).unwrap_or_default())
        .collect();

    Ok(values)
}
