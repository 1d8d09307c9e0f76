// src/encode/decode.rs

//! Inverse of the transcoder: parses a string of eight-digit groups back
//! into the bytes that produced it.

use super::table::DIGITS_PER_BYTE;
use crate::utils::error::{Result, SprawlError};
use bitvec::prelude::*;

/// Decodes MSB-first binary digit groups into bytes.
///
/// The input must contain only `'0'` and `'1'` and its length must be a
/// multiple of eight. Whitespace is not skipped.
pub fn decode_bits(input: &[u8]) -> Result<Vec<u8>> {
    if let Some(offset) = input.iter().position(|&c| c != b'0' && c != b'1') {
        return Err(SprawlError::InvalidDigit {
            offset,
            byte: input[offset],
        });
    }

    let groups = input.chunks_exact(DIGITS_PER_BYTE);
    if !groups.remainder().is_empty() {
        return Err(SprawlError::TruncatedGroup {
            len: groups.remainder().len(),
        });
    }

    let mut out = Vec::with_capacity(input.len() / DIGITS_PER_BYTE);
    for group in groups {
        let mut byte = 0u8;
        let bits = byte.view_bits_mut::<Msb0>();
        for (i, &digit) in group.iter().enumerate() {
            bits.set(i, digit == b'1');
        }
        out.push(byte);
    }

    Ok(out)
}
