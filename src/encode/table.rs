// src/encode/table.rs

//! The byte-to-bitstring lookup table.
//!
//! Every byte value maps to a fixed eight-byte entry of ASCII `'0'`/`'1'`
//! digits, most significant bit first. The table is built once, never
//! mutated, and handed out by reference to whatever needs to expand bytes.

use bitvec::prelude::*;

/// Number of output digits produced for each input byte.
pub const DIGITS_PER_BYTE: usize = 8;

/// One table entry: the binary digits of a single byte.
pub type Entry = [u8; DIGITS_PER_BYTE];

/// Immutable mapping from every byte value to its binary-digit expansion.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: [Entry; 256],
}

impl LookupTable {
    /// Builds the table. Pure: every call yields the same mapping.
    pub fn new() -> Self {
        let mut entries = [[b'0'; DIGITS_PER_BYTE]; 256];

        for (value, entry) in entries.iter_mut().enumerate() {
            let value = value as u8;
            // Msb0 walks bit 7 down to bit 0
            for (digit, bit) in entry.iter_mut().zip(value.view_bits::<Msb0>().iter().by_vals()) {
                *digit = if bit { b'1' } else { b'0' };
            }
        }

        Self { entries }
    }

    /// Returns the eight digits for `byte`.
    #[inline(always)]
    pub fn entry(&self, byte: u8) -> &Entry {
        &self.entries[byte as usize]
    }

    /// All 256 entries, indexed by byte value.
    #[inline]
    pub fn entries(&self) -> &[Entry; 256] {
        &self.entries
    }

    /// The whole table as one contiguous 2048-byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.entries.as_slice())
    }

    /// Appends the expansion of every byte in `data` to `out`, in order.
    pub fn expand_into(&self, data: &[u8], out: &mut Vec<u8>) {
        out.reserve(data.len() * DIGITS_PER_BYTE);
        for &b in data {
            out.extend_from_slice(self.entry(b));
        }
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}
