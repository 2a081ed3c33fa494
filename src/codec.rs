//! Translates symbols to and from bits given a current code tree.
//!
//! Neither the encoder nor the decoder mutates the installed tree; the adaptive driver
//! (`adaptive`) replaces it whole whenever a rebuild fires.

use std::io::{Read,Write};
use crate::Error;
use crate::bit_io::{BitInputStream,BitOutputStream};
use crate::tree::{CodeTree,Node};

/// Writes Huffman-coded symbols to a bit output stream given a current code tree.
pub struct HuffmanEncoder<W: Write> {
    pub output: BitOutputStream<W>,
    tree: Option<CodeTree>
}

impl<W: Write> HuffmanEncoder<W> {
    pub fn new(output: BitOutputStream<W>) -> Self {
        Self { output, tree: None }
    }
    /// Installs a new code tree, replacing whatever was current.
    pub fn set_code_tree(&mut self, tree: CodeTree) {
        self.tree = Some(tree);
    }
    /// Looks up the codeword for `symbol` and writes each bit in order.
    pub fn write(&mut self, symbol: usize) -> Result<(),Error> {
        let tree = self.tree.as_ref().ok_or(Error::NoCurrentTree)?;
        let code = tree.get_code(symbol)?;
        for bit in code.iter() {
            self.output.write(bit as u8)?;
        }
        Ok(())
    }
    /// Pads and flushes the underlying bit stream, handing back the byte sink.
    pub fn close(self) -> Result<W,Error> {
        self.output.close()
    }
}

/// Reads Huffman-coded symbols from a bit input stream given a current code tree.
pub struct HuffmanDecoder<R: Read> {
    pub input: BitInputStream<R>,
    tree: Option<CodeTree>
}

impl<R: Read> HuffmanDecoder<R> {
    pub fn new(input: BitInputStream<R>) -> Self {
        Self { input, tree: None }
    }
    /// Installs a new code tree, replacing whatever was current.
    pub fn set_code_tree(&mut self, tree: CodeTree) {
        self.tree = Some(tree);
    }
    /// Walks from the root, consuming one bit per step (left on 0, right on 1) until a
    /// leaf is reached, then returns its symbol. A truncated stream surfaces as
    /// [`Error::EndOfStream`] from the underlying `read_no_eof`.
    pub fn read(&mut self) -> Result<usize,Error> {
        let tree = self.tree.as_ref().ok_or(Error::NoCurrentTree)?;
        let mut node = &tree.root;
        loop {
            match node {
                Node::Leaf { symbol } => return Ok(*symbol),
                Node::Internal { left, right } => {
                    let bit = self.input.read_no_eof()?;
                    node = if bit == 0 { left } else { right };
                }
            }
        }
    }
    /// Releases the underlying bit stream, handing back the byte source.
    pub fn close(self) -> R {
        self.input.close()
    }
}
