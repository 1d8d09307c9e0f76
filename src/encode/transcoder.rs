// src/encode/transcoder.rs

//! Streaming byte-to-bitstring transcoder.
//!
//! Reads input in bounded blocks, expands every byte through a
//! [`LookupTable`] and writes the digits out before asking for more input.
//! The block size and the write strategy only change throughput; the output
//! is byte-identical for every combination.

use super::table::{DIGITS_PER_BYTE, Entry, LookupTable};
use crate::utils::error::{Result, SprawlError};
use log::{debug, trace, warn};
use std::io::{self, Read, Write};

/// Input block size used when nothing else is asked for.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Largest block size whose expanded output still fits in one allocation.
pub const MAX_BLOCK_SIZE: usize = isize::MAX as usize / DIGITS_PER_BYTE;

/// How expanded output is handed to the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStrategy {
    /// One `write_all` per input byte.
    PerByte,
    /// Expand the whole input block into one buffer, then a single `write_all`.
    #[default]
    Block,
}

/// Tuning knobs for a transcode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeParams {
    /// Maximum number of bytes requested per read. Must be non-zero.
    pub block_size: usize,
    pub strategy: WriteStrategy,
}

impl Default for TranscodeParams {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            strategy: WriteStrategy::default(),
        }
    }
}

impl TranscodeParams {
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(SprawlError::InvalidArg(
                "block size must be non-zero".to_string(),
            ));
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(SprawlError::InvalidArg(format!(
                "block size {} exceeds maximum {}",
                self.block_size, MAX_BLOCK_SIZE
            )));
        }
        Ok(())
    }
}

/// Reserves exactly `len` elements, reporting failure instead of aborting.
fn alloc_buffer<T>(len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|err| {
        SprawlError::InvalidArg(format!("cannot allocate buffer for block size {len}: {err}"))
    })?;
    Ok(buf)
}

/// Counters from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranscodeStats {
    /// Bytes consumed from the input.
    pub bytes_in: u64,
    /// Digits written to the output; always `8 * bytes_in`.
    pub bytes_out: u64,
    /// Number of reads that returned data.
    pub reads: u64,
}

/// Owns a lookup table and the parameters used to drive it over streams.
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    table: LookupTable,
    params: TranscodeParams,
}

impl Transcoder {
    /// Creates a transcoder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transcoder with explicit parameters, rejecting a zero block size.
    pub fn with_params(params: TranscodeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            table: LookupTable::new(),
            params,
        })
    }

    #[inline]
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    #[inline]
    pub fn params(&self) -> &TranscodeParams {
        &self.params
    }

    /// Consumes `input` to end of stream, writing the expansion of every byte
    /// to `output`. See [`transcode`].
    pub fn transcode<R: Read, W: Write>(&self, input: R, output: W) -> Result<TranscodeStats> {
        transcode(&self.table, &self.params, input, output)
    }

    /// Expands an in-memory slice.
    pub fn encode_to_vec(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len() * DIGITS_PER_BYTE);
        self.table.expand_into(data, &mut out);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Reading,
    Done,
}

/// Transcodes `input` into `output` using `table`.
///
/// Runs until a read returns zero bytes, then flushes `output`. Any read or
/// write fault stops the run at once and is returned; output written before
/// the fault stays written. Interrupted reads are retried.
pub fn transcode<R: Read, W: Write>(
    table: &LookupTable,
    params: &TranscodeParams,
    mut input: R,
    mut output: W,
) -> Result<TranscodeStats> {
    params.validate()?;

    let mut inbuffer: Vec<u8> = alloc_buffer(params.block_size)?;
    inbuffer.resize(params.block_size, 0);
    let mut outbuffer: Vec<Entry> = match params.strategy {
        WriteStrategy::Block => alloc_buffer(params.block_size)?,
        WriteStrategy::PerByte => Vec::new(),
    };
    let mut stats = TranscodeStats::default();

    debug!(
        "transcode: block_size={}, strategy={:?}",
        params.block_size, params.strategy
    );

    let mut state = State::Reading;
    while state == State::Reading {
        state = match step(
            table,
            params.strategy,
            &mut input,
            &mut output,
            &mut inbuffer,
            &mut outbuffer,
            &mut stats,
        ) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    "transcode failed after {} input bytes: {}",
                    stats.bytes_in, err
                );
                return Err(err.into());
            }
        };
    }

    output.flush()?;
    debug!(
        "transcode: done, {} bytes in, {} bytes out, {} reads",
        stats.bytes_in, stats.bytes_out, stats.reads
    );
    Ok(stats)
}

/// One read-expand-write iteration.
fn step<R: Read, W: Write>(
    table: &LookupTable,
    strategy: WriteStrategy,
    input: &mut R,
    output: &mut W,
    inbuffer: &mut [u8],
    outbuffer: &mut Vec<Entry>,
    stats: &mut TranscodeStats,
) -> io::Result<State> {
    let n = read_block(input, inbuffer)?;
    if n == 0 {
        return Ok(State::Done);
    }
    trace!("read {} bytes", n);

    let chunk = &inbuffer[..n];
    match strategy {
        WriteStrategy::PerByte => {
            for &b in chunk {
                output.write_all(table.entry(b))?;
            }
        }
        WriteStrategy::Block => {
            outbuffer.clear();
            outbuffer.extend(chunk.iter().map(|&b| *table.entry(b)));
            output.write_all(bytemuck::cast_slice(outbuffer.as_slice()))?;
        }
    }

    stats.reads += 1;
    stats.bytes_in += n as u64;
    stats.bytes_out += (n * DIGITS_PER_BYTE) as u64;
    Ok(State::Reading)
}

fn read_block<R: Read>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match input.read(buf) {
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            res => return res,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(params: TranscodeParams, data: &[u8]) -> (Vec<u8>, TranscodeStats) {
        let transcoder = Transcoder::with_params(params).unwrap();
        let mut out = Vec::new();
        let stats = transcoder.transcode(Cursor::new(data), &mut out).unwrap();
        (out, stats)
    }

    #[test]
    fn test_default_params() {
        let params = TranscodeParams::default();
        assert_eq!(params.block_size, 4096);
        assert_eq!(params.strategy, WriteStrategy::Block);
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let params = TranscodeParams {
            block_size: 0,
            strategy: WriteStrategy::PerByte,
        };
        assert!(matches!(
            Transcoder::with_params(params),
            Err(SprawlError::InvalidArg(_))
        ));

        let table = LookupTable::new();
        let result = transcode(&table, &params, Cursor::new(b"a"), Vec::new());
        assert!(matches!(result, Err(SprawlError::InvalidArg(_))));
    }

    #[test]
    fn test_oversized_block_rejected() {
        for block_size in [usize::MAX / 4, MAX_BLOCK_SIZE + 1] {
            let params = TranscodeParams {
                block_size,
                strategy: WriteStrategy::Block,
            };
            assert!(
                matches!(Transcoder::with_params(params), Err(SprawlError::InvalidArg(_))),
                "block_size {block_size}"
            );
        }
    }

    #[test]
    fn test_unallocatable_block_is_an_error() {
        // within bounds, but far beyond any address space
        let params = TranscodeParams {
            block_size: MAX_BLOCK_SIZE,
            strategy: WriteStrategy::Block,
        };
        let transcoder = Transcoder::with_params(params).unwrap();
        let mut out = Vec::new();
        let result = transcoder.transcode(Cursor::new(b"abc"), &mut out);
        assert!(matches!(result, Err(SprawlError::InvalidArg(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let (out, stats) = run(TranscodeParams::default(), b"");
        assert!(out.is_empty());
        assert_eq!(stats, TranscodeStats::default());
    }

    #[test]
    fn test_ordering_without_separators() {
        let (out, _) = run(TranscodeParams::default(), &[0x00, 0xFF]);
        assert_eq!(out, b"0000000011111111");
    }

    #[test]
    fn test_strategies_agree() {
        let data: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();
        for block_size in [1, 3, 64, DEFAULT_BLOCK_SIZE] {
            let (per_byte, a) = run(
                TranscodeParams {
                    block_size,
                    strategy: WriteStrategy::PerByte,
                },
                &data,
            );
            let (block, b) = run(
                TranscodeParams {
                    block_size,
                    strategy: WriteStrategy::Block,
                },
                &data,
            );
            assert_eq!(per_byte, block, "block_size {block_size}");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_stats_counts_reads() {
        let params = TranscodeParams {
            block_size: 4,
            strategy: WriteStrategy::Block,
        };
        let (out, stats) = run(params, b"0123456789");
        assert_eq!(stats.bytes_in, 10);
        assert_eq!(stats.bytes_out, 80);
        assert_eq!(stats.reads, 3);
        assert_eq!(out.len(), 80);
    }

    #[test]
    fn test_encode_to_vec_matches_stream() {
        let transcoder = Transcoder::new();
        let (streamed, _) = run(TranscodeParams::default(), b"hello");
        assert_eq!(transcoder.encode_to_vec(b"hello"), streamed);
    }
}
