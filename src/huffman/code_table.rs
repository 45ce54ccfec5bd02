use log::trace;
use std::fmt::{self, Display, Formatter};

use super::tree::{CodeTree, Node, NodeData};

/// One prefix code: up to 128 bits, most significant bit first, in the low
/// bits of `bits`. 128 bits always suffices: a leaf at depth d requires a
/// combined weight of at least the (d+2)th Fibonacci number, and depth 129
/// would need a larger total than any u64 frequency sum can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u128,
    pub len: u8,
}

impl Display for Code {
    /// Render the code as a 0/1 string, most significant bit first.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> i) & 1)?;
        }
        Ok(())
    }
}

/// Maps each symbol to its prefix code, and carries the exact number of bits
/// needed to encode the distribution the tree was built from. Derived from a
/// code tree in a single traversal; immutable afterward.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
    total_bits: u64,
}

impl CodeTable {
    /// Walk the tree once, appending a 0 bit for each left step and a 1 bit
    /// for each right step. A leaf's accumulated path is its code.
    pub fn derive(tree: &CodeTree) -> CodeTable {
        let mut table = CodeTable {
            codes: [None; 256],
            total_bits: 0,
        };
        match tree {
            CodeTree::Empty => {}
            CodeTree::Single { symbol, weight } => {
                // A lone symbol still takes one bit per occurrence. A zero
                // length code could not say how many times it occurred.
                table.codes[*symbol as usize] = Some(Code { bits: 0, len: 1 });
                table.total_bits = *weight;
                trace!("sym {:>3} '{}' weight {:>8} code 0", symbol, printable(*symbol), weight);
            }
            CodeTree::Root(root) => table.assign(root, 0, 0),
        }
        table
    }

    /// Recursively assign codes below `node`, whose path so far is the `len`
    /// low bits of `bits`.
    fn assign(&mut self, node: &Node, bits: u128, len: u8) {
        match &node.node_data {
            NodeData::Kids(left, right) => {
                self.assign(left, bits << 1, len + 1);
                self.assign(right, (bits << 1) | 1, len + 1);
            }
            NodeData::Leaf(symbol) => {
                let code = Code { bits, len };
                trace!(
                    "sym {:>3} '{}' weight {:>8} code {}",
                    symbol,
                    printable(*symbol),
                    node.weight,
                    code
                );
                self.codes[*symbol as usize] = Some(code);
                self.total_bits += node.weight * len as u64;
            }
        }
    }

    /// The code for `symbol`, or None if the symbol never occurred in the
    /// source distribution.
    pub fn code(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Exact encoded payload size in bits: the sum over all symbols of
    /// frequency times code length. The packed buffer alone cannot recover
    /// this, so it travels with the codec.
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Iterate over the (symbol, code) entries present in the table.
    pub fn entries(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|code| (i as u8, code)))
    }
}

/// Printable rendition of a symbol for the trace dump.
fn printable(b: u8) -> char {
    if (32..127).contains(&b) {
        b as char
    } else {
        '.'
    }
}

#[cfg(test)]
mod test {
    use super::{Code, CodeTable};
    use crate::huffman::tree::CodeTree;
    use crate::tools::freq_count::freqs;

    fn table_for(data: &[u8]) -> CodeTable {
        CodeTable::derive(&CodeTree::build(&freqs(data)))
    }

    /// True if `a` is a bit-prefix of `b` (a is the shorter or equal code).
    fn is_prefix(a: Code, b: Code) -> bool {
        a.len <= b.len && (b.bits >> (b.len - a.len)) == a.bits
    }

    #[test]
    fn empty_table_test() {
        let table = table_for(&[]);
        assert_eq!(table.total_bits(), 0);
        assert_eq!(table.entries().count(), 0);
    }

    #[test]
    fn single_symbol_table_test() {
        let table = table_for(&[65, 65, 65]);
        assert_eq!(table.code(65), Some(Code { bits: 0, len: 1 }));
        assert_eq!(table.total_bits(), 3);
        assert_eq!(table.code(66), None);
    }

    #[test]
    fn skewed_frequencies_test() {
        let data = "AAAAAAAAAAAAABBBBBBCCCDDEEF".as_bytes();
        let table = table_for(data);
        // The most frequent symbol gets the shortest code.
        let a = table.code(b'A').unwrap();
        for (sym, code) in table.entries() {
            if sym != b'A' {
                assert!(a.len <= code.len);
            }
        }
        // Exact total for this distribution with deterministic tie-breaks:
        // A:1 bit, B:2 bits, C/D/E/F: 4 bits each.
        assert_eq!(table.total_bits(), 57);
    }

    #[test]
    fn total_bits_accounting_test() {
        let data = "the quick brown fox jumps over the lazy dog".as_bytes();
        let table = table_for(data);
        let f = freqs(data);
        let expected: u64 = f
            .iter()
            .map(|(&sym, &count)| count * table.code(sym).unwrap().len as u64)
            .sum();
        assert_eq!(table.total_bits(), expected);
    }

    #[test]
    fn prefix_free_test() {
        let data = "the quick brown fox jumps over the lazy dog".as_bytes();
        let table = table_for(data);
        let entries = table.entries().collect::<Vec<_>>();
        for &(a_sym, a) in &entries {
            for &(b_sym, b) in &entries {
                if a_sym != b_sym {
                    assert!(!is_prefix(a, b), "code for {} prefixes {}", a_sym, b_sym);
                }
            }
        }
    }

    #[test]
    fn deterministic_table_test() {
        let data = (0..64).cycle().take(500).collect::<Vec<u8>>();
        let a = table_for(&data);
        let b = table_for(&data);
        assert!(a.entries().eq(b.entries()));
        assert_eq!(a.total_bits(), b.total_bits());
    }

    #[test]
    fn code_display_test() {
        let code = Code {
            bits: 0b1011,
            len: 6,
        };
        assert_eq!(code.to_string(), "001011");
    }
}
