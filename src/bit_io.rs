//! MSB-first bit packing over a byte sink/source.
//!
//! This is the only serialisation contract of the codec: a symbol written as bits
//! `b0 b1 ... bk-1` then read back from the same byte stream yields the same bit
//! sequence in the same order. Neither stream is seekable or resumable; the codec has
//! no framing beyond this bit order.

use std::io::{Read,Write};
use crate::Error;

/// Accumulates bits most-significant-first into a one-byte buffer over a byte sink.
pub struct BitOutputStream<W: Write> {
    output: W,
    current_byte: u8,
    num_bits_filled: u8
}

impl<W: Write> BitOutputStream<W> {
    pub fn new(output: W) -> Self {
        Self { output, current_byte: 0, num_bits_filled: 0 }
    }
    /// Appends `bit` as the next-less-significant bit of the current byte; flushes
    /// when 8 bits have been buffered.
    pub fn write(&mut self, bit: u8) -> Result<(),Error> {
        if bit > 1 {
            return Err(Error::InvalidBit(bit));
        }
        self.current_byte = (self.current_byte << 1) | bit;
        self.num_bits_filled += 1;
        if self.num_bits_filled == 8 {
            self.output.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.num_bits_filled = 0;
        }
        Ok(())
    }
    /// Pads the residual partial byte with zero bits, flushes it, and hands back the
    /// underlying sink so the caller can release it.
    pub fn close(mut self) -> Result<W,Error> {
        while self.num_bits_filled != 0 {
            self.write(0)?;
        }
        self.output.flush()?;
        Ok(self.output)
    }
}

/// Delivers one bit per call, most-significant-first, from a byte source.
pub struct BitInputStream<R: Read> {
    input: R,
    current_byte: u8,
    num_bits_remaining: u8,
    eof: bool
}

impl<R: Read> BitInputStream<R> {
    pub fn new(input: R) -> Self {
        Self { input, current_byte: 0, num_bits_remaining: 0, eof: false }
    }
    /// Returns the next bit, or `Ok(None)` at end of stream. Sticky: once end of
    /// stream is observed, every subsequent call keeps returning `Ok(None)` without
    /// touching the underlying source again.
    pub fn read(&mut self) -> Result<Option<u8>,Error> {
        if self.eof {
            return Ok(None);
        }
        if self.num_bits_remaining == 0 {
            let mut buf = [0u8;1];
            let n = self.input.read(&mut buf)?;
            if n == 0 {
                self.eof = true;
                return Ok(None);
            }
            self.current_byte = buf[0];
            self.num_bits_remaining = 8;
        }
        self.num_bits_remaining -= 1;
        Ok(Some((self.current_byte >> self.num_bits_remaining) & 1))
    }
    /// Returns the next bit, or fails with [`Error::EndOfStream`] instead of a sentinel.
    pub fn read_no_eof(&mut self) -> Result<u8,Error> {
        self.read()?.ok_or(Error::EndOfStream)
    }
    /// Releases this stream, handing back the underlying source.
    pub fn close(self) -> R {
        self.input
    }
}
