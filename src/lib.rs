//! # Adaptive Huffman Library
//!
//! Lossless compression with an adaptive Huffman model. Both the compressor and the
//! expander maintain an identical, evolving symbol-frequency table derived only from
//! bytes already processed; no pre-scan, side-channel table, or header is transmitted.
//!
//! * `bit_io` is the MSB-first bit stream layer that the codec packs codewords into.
//! * `tree` builds an optimal prefix code from a frequency table (the code-tree model).
//! * `canonical` is the length-vector representation of a code, with Kraft validation.
//! * `freq` is the mutable per-symbol frequency table.
//! * `codec` translates symbols to and from bits given a current code tree.
//! * `adaptive` drives the rebuild/reset schedule that keeps both ends synchronised.
//!
//! ## Buffer Example
//!
//! ```rs
//! use adaptive_huffman::adaptive;
//! let test_data = b"This is the chaunt of the priests.  The chaunt of the priests of Mung.";
//! let compressed = adaptive::compress_slice(test_data).expect("compression failed");
//! let expanded = adaptive::expand_slice(&compressed).expect("expansion failed");
//! assert_eq!(expanded,test_data);
//! ```

pub mod bit_io;
pub mod tree;
pub mod freq;
pub mod canonical;
pub mod codec;
pub mod adaptive;

type DYNERR = Box<dyn std::error::Error>;

/// Library errors.
///
/// Some failure modes that a looser representation would need to guard against don't
/// appear here at all: `Node` is a two-case enum so there is no third shape to mistake
/// for a leaf, and `FrequencyTable` stores counts as `usize` so there is no negative
/// value to reject. What remains are the failures that can actually happen with this
/// type system.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("end of stream reached before a complete codeword could be read")]
    EndOfStream,
    #[error("bit value must be 0 or 1, got {0}")]
    InvalidBit(u8),
    #[error("symbol {symbol} is out of range for a limit of {limit}")]
    SymbolOutOfRange { symbol: usize, limit: usize },
    #[error("symbol {0} has no assigned code")]
    NoCodeForSymbol(usize),
    #[error("symbol {0} was assigned more than one code")]
    DuplicateSymbol(usize),
    #[error("at least 2 symbols are needed")]
    TooFewSymbols,
    #[error("no current code tree has been installed")]
    NoCurrentTree,
    #[error("under-full Huffman code tree")]
    UnderfullCode,
    #[error("over-full Huffman code tree")]
    OverfullCode,
}
