//! Mutable per-symbol frequency table and optimal code-tree construction.
//!
//! This is the only component that builds a [`crate::tree::CodeTree`]: the adaptive
//! driver never constructs trees directly, it always goes through
//! [`FrequencyTable::build_code_tree`].

use std::cmp::{Ordering,Reverse};
use std::collections::BinaryHeap;
use crate::Error;
use crate::tree::{CodeTree,Node};

/// A mapping from symbol to non-negative count, with a fixed symbol cardinality.
#[derive(Clone,Debug)]
pub struct FrequencyTable {
    frequencies: Vec<usize>
}

/// One entry in the tree-construction priority queue.
///
/// Ordering is `(freq, key)`, never `freq` alone: two tables with identical counts must
/// always merge nodes in the same order, or an adaptive codec desynchronises after the
/// first symbol whose frequency ties with another.
struct Entry {
    freq: usize,
    key: usize,
    node: Node
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        (self.freq,self.key) == (other.freq,other.key)
    }
}
impl Eq for Entry {}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.freq,self.key).cmp(&(other.freq,other.key))
    }
}

impl FrequencyTable {
    /// Constructs a frequency table from the given sequence of counts.
    pub fn new(frequencies: Vec<usize>) -> Result<Self,Error> {
        if frequencies.len() < 2 {
            return Err(Error::TooFewSymbols);
        }
        Ok(Self { frequencies })
    }
    /// Constructs the all-ones table used at stream start and after every epoch reset.
    pub fn with_uniform(symbol_limit: usize) -> Self {
        Self { frequencies: vec![1;symbol_limit] }
    }
    /// Returns the number of symbols in this frequency table. Always at least 2.
    pub fn symbol_limit(&self) -> usize {
        self.frequencies.len()
    }
    /// Returns the frequency of the given symbol.
    pub fn get(&self, symbol: usize) -> Result<usize,Error> {
        self.check_symbol(symbol)?;
        Ok(self.frequencies[symbol])
    }
    /// Sets the frequency of the given symbol.
    pub fn set(&mut self, symbol: usize, freq: usize) -> Result<(),Error> {
        self.check_symbol(symbol)?;
        self.frequencies[symbol] = freq;
        Ok(())
    }
    /// Increments the frequency of the given symbol by one.
    pub fn increment(&mut self, symbol: usize) -> Result<(),Error> {
        self.check_symbol(symbol)?;
        self.frequencies[symbol] += 1;
        Ok(())
    }
    fn check_symbol(&self, symbol: usize) -> Result<(),Error> {
        if symbol < self.frequencies.len() {
            Ok(())
        } else {
            Err(Error::SymbolOutOfRange { symbol, limit: self.frequencies.len() })
        }
    }
    /// Builds an optimal prefix code tree for the current counts.
    ///
    /// Symbols with zero frequency are padded in ascending order until the queue holds
    /// at least two entries, so a table with only one symbol ever observed still yields
    /// a well-formed two-leaf tree.
    pub fn build_code_tree(&self) -> Result<CodeTree,Error> {
        let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::new();
        for (symbol,&freq) in self.frequencies.iter().enumerate() {
            if freq > 0 {
                heap.push(Reverse(Entry { freq, key: symbol, node: Node::Leaf { symbol } }));
            }
        }
        for (symbol,&freq) in self.frequencies.iter().enumerate() {
            if heap.len() >= 2 {
                break;
            }
            if freq == 0 {
                heap.push(Reverse(Entry { freq, key: symbol, node: Node::Leaf { symbol } }));
            }
        }
        while heap.len() > 1 {
            let Reverse(x) = heap.pop().expect("heap has at least 2 entries");
            let Reverse(y) = heap.pop().expect("heap has at least 2 entries");
            let freq = x.freq + y.freq;
            let key = x.key.min(y.key);
            let node = Node::Internal { left: Box::new(x.node), right: Box::new(y.node) };
            heap.push(Reverse(Entry { freq, key, node }));
        }
        let Reverse(root) = heap.pop().ok_or(Error::TooFewSymbols)?;
        CodeTree::new(root.node, self.symbol_limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_single_symbol() {
        assert!(FrequencyTable::new(vec![1]).is_err());
    }

    #[test]
    fn increment_and_get() {
        let mut freqs = FrequencyTable::with_uniform(257);
        freqs.increment(65).unwrap();
        assert_eq!(freqs.get(65).unwrap(),2);
        assert_eq!(freqs.get(64).unwrap(),1);
    }

    #[test]
    fn out_of_range_symbol_is_rejected() {
        let mut freqs = FrequencyTable::with_uniform(257);
        assert!(matches!(freqs.increment(257),Err(Error::SymbolOutOfRange{symbol:257,limit:257})));
    }

    #[test]
    fn build_tree_from_single_observed_symbol() {
        // Only symbol 0 has been seen; the tree must still have a code for every symbol
        // because the uniform prior gives every symbol frequency 1 at start.
        let freqs = FrequencyTable::with_uniform(2);
        let tree = freqs.build_code_tree().unwrap();
        assert!(tree.get_code(0).is_ok());
        assert!(tree.get_code(1).is_ok());
    }

    #[test]
    fn dominant_symbol_gets_shortest_code() {
        let mut freqs = FrequencyTable::with_uniform(257);
        for _ in 0..1000 {
            freqs.increment(0).unwrap();
        }
        let tree = freqs.build_code_tree().unwrap();
        let dominant_len = tree.get_code(0).unwrap().len();
        let rare_len = tree.get_code(1).unwrap().len();
        assert!(dominant_len < rare_len);
        assert_eq!(dominant_len,1);
    }

    #[test]
    fn identical_tables_build_identical_trees() {
        // Exercises the (freq,key) tie-break: two tables with the same counts must
        // produce bit-identical codes for every symbol regardless of queue history.
        let mut a = FrequencyTable::with_uniform(257);
        let mut b = FrequencyTable::with_uniform(257);
        for s in [10,200,10,5,200,10] {
            a.increment(s).unwrap();
        }
        for s in [200,10,5,10,10,200] {
            b.increment(s).unwrap();
        }
        let tree_a = a.build_code_tree().unwrap();
        let tree_b = b.build_code_tree().unwrap();
        for symbol in 0..257 {
            assert_eq!(tree_a.get_code(symbol).unwrap(),tree_b.get_code(symbol).unwrap());
        }
    }
}
