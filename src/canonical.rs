//! Canonical Huffman codes: a length-vector representation independent of any
//! particular tree shape, with Kraft-completeness validation.
//!
//! Not exercised by the adaptive driver — this is the verification path for anyone who
//! wants to audit or serialise a code shape without committing to a tree layout.

use crate::Error;
use crate::tree::{CodeTree,Node};

/// A length vector `codelengths[0..symbol_limit]`, `0` meaning "symbol absent".
#[derive(Clone,Debug)]
pub struct CanonicalCode {
    codelengths: Vec<usize>
}

impl CanonicalCode {
    /// Validates a length vector for Kraft completeness and wraps it.
    ///
    /// Simulates level-by-level node counts from the deepest level upward: moving one
    /// level shallower requires an even count (pairs combine into parents); a final
    /// count of exactly 1 at level 0 is success, 0 is under-full, and more than 1 is
    /// over-full.
    pub fn from_lengths(codelengths: Vec<usize>) -> Result<Self,Error> {
        if codelengths.len() < 2 {
            return Err(Error::TooFewSymbols);
        }
        let mut sorted = codelengths.clone();
        sorted.sort_unstable_by(|a,b| b.cmp(a));
        let mut current_level = sorted[0];
        let mut nodes_at_level: usize = 0;
        for &len in &sorted {
            if len == 0 {
                break;
            }
            while len < current_level {
                if nodes_at_level % 2 != 0 {
                    return Err(Error::UnderfullCode);
                }
                nodes_at_level /= 2;
                current_level -= 1;
            }
            nodes_at_level += 1;
        }
        while current_level > 0 {
            if nodes_at_level % 2 != 0 {
                return Err(Error::UnderfullCode);
            }
            nodes_at_level /= 2;
            current_level -= 1;
        }
        if nodes_at_level < 1 {
            return Err(Error::UnderfullCode);
        }
        if nodes_at_level > 1 {
            return Err(Error::OverfullCode);
        }
        Ok(Self { codelengths })
    }
    /// Derives a length vector from an existing tree, recording each leaf's depth.
    pub fn from_tree(tree: &CodeTree, symbol_limit: usize) -> Result<Self,Error> {
        if symbol_limit < 2 {
            return Err(Error::TooFewSymbols);
        }
        let mut codelengths = vec![0usize;symbol_limit];
        record_depths(&tree.root,0,&mut codelengths)?;
        Ok(Self { codelengths })
    }
    /// Returns the symbol limit for this canonical code.
    pub fn symbol_limit(&self) -> usize {
        self.codelengths.len()
    }
    /// Returns the code length of the given symbol, or `0` if it is absent.
    pub fn code_length(&self, symbol: usize) -> Result<usize,Error> {
        self.codelengths.get(symbol).copied().ok_or(Error::SymbolOutOfRange { symbol, limit: self.codelengths.len() })
    }
    /// Materialises the canonical tree for this length vector: for depths from the
    /// maximum down to 1, fresh leaves for symbols at that depth are appended, and the
    /// previous (deeper) layer's nodes are paired into internal parents.
    pub fn to_code_tree(&self) -> Result<CodeTree,Error> {
        let max_len = *self.codelengths.iter().max().unwrap_or(&0);
        let mut nodes: Vec<Node> = Vec::new();
        for depth in (0..=max_len).rev() {
            let mut newnodes: Vec<Node> = Vec::new();
            if depth > 0 {
                for (symbol,&len) in self.codelengths.iter().enumerate() {
                    if len == depth {
                        newnodes.push(Node::Leaf { symbol });
                    }
                }
            }
            let mut pairs = nodes.into_iter();
            while let (Some(left),Some(right)) = (pairs.next(),pairs.next()) {
                newnodes.push(Node::Internal { left: Box::new(left), right: Box::new(right) });
            }
            nodes = newnodes;
        }
        if nodes.len() != 1 {
            // from_lengths already rejected any vector that isn't Kraft-complete, and
            // from_tree can only ever produce a complete one, so this would mean a
            // CanonicalCode was constructed by means other than these two.
            return Err(Error::UnderfullCode);
        }
        CodeTree::new(nodes.into_iter().next().expect("checked len == 1"),self.codelengths.len())
    }
}

fn record_depths(node: &Node, depth: usize, codelengths: &mut Vec<usize>) -> Result<(),Error> {
    match node {
        Node::Internal { left, right } => {
            record_depths(left,depth + 1,codelengths)?;
            record_depths(right,depth + 1,codelengths)
        }
        Node::Leaf { symbol } => {
            if *symbol >= codelengths.len() {
                return Err(Error::SymbolOutOfRange { symbol: *symbol, limit: codelengths.len() });
            }
            if codelengths[*symbol] != 0 {
                return Err(Error::DuplicateSymbol(*symbol));
            }
            codelengths[*symbol] = depth;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    #[test]
    fn rejects_underfull_vector() {
        // Two symbols both at depth 2 can only be half of a complete tree.
        assert!(matches!(CanonicalCode::from_lengths(vec![2,2]),Err(Error::UnderfullCode)));
    }

    #[test]
    fn rejects_overfull_vector() {
        // Eight symbols all at depth 2 sum to a Kraft total of 2, twice complete.
        assert!(matches!(CanonicalCode::from_lengths(vec![2;8]),Err(Error::OverfullCode)));
    }

    #[test]
    fn odd_sibling_count_reports_underfull_even_when_oversubscribed() {
        // A tie-together count that goes odd partway up the tree is reported as
        // under-full here even though three codewords of length 1 are, in total,
        // over-subscribed (Kraft sum 1.5): the "over-full" error is only reachable if
        // every level-to-level reduction stays even all the way to the root.
        assert!(matches!(CanonicalCode::from_lengths(vec![1,1,1]),Err(Error::UnderfullCode)));
    }

    #[test]
    fn accepts_complete_vector() {
        // A 3-symbol code: one at depth 1, two at depth 2.
        assert!(CanonicalCode::from_lengths(vec![1,2,2]).is_ok());
    }

    #[test]
    fn round_trips_through_a_tree() {
        let freqs = FrequencyTable::new(vec![5,1,1,1]).unwrap();
        let tree = freqs.build_code_tree().unwrap();
        let canon = CanonicalCode::from_tree(&tree,4).unwrap();
        let rebuilt = canon.to_code_tree().unwrap();
        for symbol in 0..4 {
            assert_eq!(tree.get_code(symbol).unwrap().len(),canon.code_length(symbol).unwrap());
            assert_eq!(rebuilt.get_code(symbol).unwrap().len(),canon.code_length(symbol).unwrap());
        }
    }

    #[test]
    fn single_symbol_vector_is_underfull() {
        // One symbol cannot have a positive length and still be Kraft-complete on its own;
        // a length-1 code at the root would leave the sibling branch unaccounted for.
        assert!(matches!(CanonicalCode::from_lengths(vec![1,0]),Err(Error::UnderfullCode)));
    }
}
