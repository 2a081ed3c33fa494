//! The adaptive driver: the synchronised model-update schedule that keeps encoder and
//! decoder bit-identical without ever transmitting a table.
//!
//! Both sides start from the same uniform frequency table, apply the identical
//! rebuild/reset schedule after every symbol, and emit or consume a single reserved EOF
//! symbol to terminate the stream. There is no header and no framing: the output is the
//! raw concatenation of codewords, byte-packed MSB-first, zero-padded to a byte
//! boundary.

use std::io::{Cursor,Read,Write};
use crate::Error;
use crate::bit_io::{BitInputStream,BitOutputStream};
use crate::codec::{HuffmanDecoder,HuffmanEncoder};
use crate::freq::FrequencyTable;

/// Number of symbols: the 256 possible byte values plus the reserved EOF symbol.
pub const SYMBOL_LIMIT: usize = 257;
/// The reserved symbol that terminates the stream. Never written to the output file.
pub const EOF_SYMBOL: usize = 256;
/// Epoch length in symbols (2^18). Frequencies are reset every `EPOCH` symbols, and a
/// rebuild always happens at the boundary using the pre-reset counts.
pub const EPOCH: usize = 262144;

fn is_power_of_two(x: usize) -> bool {
    x > 0 && x & (x - 1) == 0
}

/// If a rebuild fires at this `count`, returns the new tree (and resets `freqs` in
/// place if this count also lands on an epoch boundary).
///
/// The reset, when it happens, always comes *after* the rebuild: the tree at the
/// boundary reflects the frequencies accumulated over the epoch that just ended, not
/// the fresh uniform table. Implementations that reset first and rebuild from the
/// fresh table will desynchronise from a conforming peer.
fn maybe_rebuild(freqs: &mut FrequencyTable, count: usize) -> Result<Option<crate::tree::CodeTree>,Error> {
    let due_for_rebuild = (count < EPOCH && is_power_of_two(count)) || (count % EPOCH == 0);
    if !due_for_rebuild {
        return Ok(None);
    }
    let tree = freqs.build_code_tree()?;
    if count % EPOCH == 0 {
        log::debug!("rebuilding and resetting frequency table at count={}",count);
        *freqs = FrequencyTable::with_uniform(SYMBOL_LIMIT);
    } else {
        log::debug!("rebuilding code tree at count={}",count);
    }
    Ok(Some(tree))
}

/// Compresses `input` to `output`, emitting the EOF symbol once the input is exhausted.
/// Returns the byte sink, fully flushed, for callers that want it back.
pub fn compress<R: Read, W: Write>(mut input: R, output: W) -> Result<W,Error> {
    log::debug!("starting adaptive huffman compression, symbol_limit={}, epoch={}",SYMBOL_LIMIT,EPOCH);
    let mut freqs = FrequencyTable::with_uniform(SYMBOL_LIMIT);
    let mut encoder = HuffmanEncoder::new(BitOutputStream::new(output));
    encoder.set_code_tree(freqs.build_code_tree()?);

    let mut count: usize = 0;
    let mut byte = [0u8;1];
    loop {
        let n = input.read(&mut byte)?;
        if n == 0 {
            encoder.write(EOF_SYMBOL)?;
            break;
        }
        let symbol = byte[0] as usize;
        log::trace!("encode symbol {}",symbol);
        encoder.write(symbol)?;
        count += 1;
        freqs.increment(symbol)?;
        if let Some(tree) = maybe_rebuild(&mut freqs,count)? {
            encoder.set_code_tree(tree);
        }
    }
    encoder.close()
}

/// Decompresses `input` to `output`, stopping at the EOF symbol without consuming the
/// padding bits beyond it.
pub fn decompress<R: Read, W: Write>(input: R, mut output: W) -> Result<W,Error> {
    log::debug!("starting adaptive huffman decompression, symbol_limit={}, epoch={}",SYMBOL_LIMIT,EPOCH);
    let mut freqs = FrequencyTable::with_uniform(SYMBOL_LIMIT);
    let mut decoder = HuffmanDecoder::new(BitInputStream::new(input));
    decoder.set_code_tree(freqs.build_code_tree()?);

    let mut count: usize = 0;
    loop {
        let symbol = decoder.read()?;
        if symbol == EOF_SYMBOL {
            break;
        }
        log::trace!("decode symbol {}",symbol);
        output.write_all(&[symbol as u8])?;
        count += 1;
        freqs.increment(symbol)?;
        if let Some(tree) = maybe_rebuild(&mut freqs,count)? {
            decoder.set_code_tree(tree);
        }
    }
    Ok(output)
}

/// Convenience wrapper: compresses an in-memory buffer to a freshly allocated `Vec<u8>`.
pub fn compress_slice(data: &[u8]) -> Result<Vec<u8>,Error> {
    compress(Cursor::new(data),Vec::new())
}

/// Convenience wrapper: expands an in-memory compressed buffer to a freshly allocated
/// `Vec<u8>`.
pub fn expand_slice(data: &[u8]) -> Result<Vec<u8>,Error> {
    decompress(Cursor::new(data),Vec::new())
}
