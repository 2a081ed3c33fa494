//! Code-tree node model and codeword extraction.
//!
//! A [`Node`] is a tagged two-case variant (no shared inheritance, no runtime type
//! tests): either an [`Node::Internal`] owning two children, or a [`Node::Leaf`]
//! carrying a symbol. A [`CodeTree`] pairs a root `Node` with the dense codeword table
//! derived from it by depth-first traversal.

use bit_vec::BitVec;
use crate::Error;

/// A node in a code tree: exactly two variants, owned hierarchically.
#[derive(Clone,Debug)]
pub enum Node {
    /// An internal node with exactly two children.
    Internal { left: Box<Node>, right: Box<Node> },
    /// A leaf carrying a symbol in `[0, symbol_limit)`.
    Leaf { symbol: usize }
}

/// A root [`Node`] plus the dense `codes[0..symbol_limit]` table it implies.
#[derive(Clone,Debug)]
pub struct CodeTree {
    pub root: Node,
    codes: Vec<Option<BitVec>>
}

impl CodeTree {
    /// Builds the codeword table for `root` by depth-first traversal, appending `0`
    /// when descending left and `1` when descending right.
    pub fn new(root: Node, symbol_limit: usize) -> Result<Self,Error> {
        if symbol_limit < 2 {
            return Err(Error::TooFewSymbols);
        }
        let mut codes: Vec<Option<BitVec>> = vec![None;symbol_limit];
        build_code_list(&root,&mut BitVec::new(),&mut codes)?;
        Ok(Self { root, codes })
    }
    /// Returns the number of symbol slots in this tree.
    pub fn symbol_limit(&self) -> usize {
        self.codes.len()
    }
    /// Returns the Huffman code for the given symbol, a sequence of 0s and 1s.
    ///
    /// A symbol with zero frequency may legitimately have no code; requesting it here
    /// is the caller's mistake, not a recoverable condition, so it is an error.
    pub fn get_code(&self, symbol: usize) -> Result<&BitVec,Error> {
        if symbol >= self.codes.len() {
            return Err(Error::SymbolOutOfRange { symbol, limit: self.codes.len() });
        }
        self.codes[symbol].as_ref().ok_or(Error::NoCodeForSymbol(symbol))
    }
}

fn build_code_list(node: &Node, prefix: &mut BitVec, codes: &mut Vec<Option<BitVec>>) -> Result<(),Error> {
    match node {
        Node::Internal { left, right } => {
            prefix.push(false);
            build_code_list(left,prefix,codes)?;
            prefix.pop();
            prefix.push(true);
            build_code_list(right,prefix,codes)?;
            prefix.pop();
            Ok(())
        }
        Node::Leaf { symbol } => {
            if *symbol >= codes.len() {
                return Err(Error::SymbolOutOfRange { symbol: *symbol, limit: codes.len() });
            }
            if codes[*symbol].is_some() {
                return Err(Error::DuplicateSymbol(*symbol));
            }
            codes[*symbol] = Some(prefix.clone());
            Ok(())
        }
    }
}
