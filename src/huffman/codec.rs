use log::debug;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::tools::freq_count::freqs;

use super::code_table::CodeTable;
use super::tree::{CodeTree, NodeData};

/// Failures surfaced by encode and decode. Building a codec cannot fail;
/// empty input just produces an empty codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Encode was handed a byte the code table does not cover.
    UnknownSymbol(u8),
    /// Decode ran out of bits while partway between the root and a leaf, or
    /// the packed buffer is too short to supply the expected bit count.
    MalformedEncodedData,
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnknownSymbol(byte) => {
                write!(f, "byte {:#04x} has no entry in the code table", byte)
            }
            CodecError::MalformedEncodedData => {
                write!(f, "encoded data ended in the middle of a code")
            }
        }
    }
}

impl Error for CodecError {}

/// A prefix-code codec built from one source buffer. The tree and table are
/// constructed once and never mutated, so encode and decode may run
/// concurrently against a shared reference. The packed buffer is not a
/// self-describing format: decoding requires the codec that produced it.
#[derive(Debug, Clone)]
pub struct Codec {
    tree: CodeTree,
    table: CodeTable,
}

impl Codec {
    /// Count symbol frequencies in `data`, build the code tree, and derive
    /// the code table.
    pub fn build(data: &[u8]) -> Codec {
        let frequencies = freqs(data);
        let tree = CodeTree::build(&frequencies);
        let table = CodeTable::derive(&tree);
        debug!(
            "built codec over {} distinct symbols, payload {} bits",
            frequencies.len(),
            table.total_bits()
        );
        Codec { tree, table }
    }

    /// Exact encoded length in bits for the data the codec was built from.
    pub fn total_bits(&self) -> u64 {
        self.table.total_bits()
    }

    /// The derived code table.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Pack `data` into an MSB-first bitstream using this codec's table.
    /// Fails on the first byte with no table entry; no partial buffer is
    /// returned.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let mut packer = BitPacker::new((self.total_bits() as usize + 7) / 8);
        for &byte in data {
            let code = self
                .table
                .code(byte)
                .ok_or(CodecError::UnknownSymbol(byte))?;
            packer.out_code(code);
        }
        packer.flush();
        Ok(packer.output)
    }

    /// Walk the tree against `packed` for exactly `total_bits()` bits,
    /// going left on 0 and right on 1, emitting a symbol at each leaf and
    /// restarting at the root. Bits past the count are padding and are never
    /// read. After the last bit the walk must be back at the root, between
    /// codes; anything else is malformed input.
    pub fn decode(&self, packed: &[u8]) -> Result<Vec<u8>, CodecError> {
        let total_bits = self.total_bits();
        if total_bits == 0 {
            return Ok(Vec::new());
        }
        if (packed.len() as u64) < (total_bits + 7) / 8 {
            return Err(CodecError::MalformedEncodedData);
        }

        let mut reader = BitReader::new(packed);
        match &self.tree {
            // total_bits is 0 for an empty tree, handled above.
            CodeTree::Empty => Ok(Vec::new()),
            CodeTree::Single { symbol, .. } => {
                // One occurrence per bit; the walk never leaves the root.
                let mut out = Vec::with_capacity(total_bits as usize);
                for _ in 0..total_bits {
                    reader.bit().ok_or(CodecError::MalformedEncodedData)?;
                    out.push(*symbol);
                }
                Ok(out)
            }
            CodeTree::Root(root) => {
                let mut out = Vec::new();
                let mut node = root;
                for _ in 0..total_bits {
                    let bit = reader.bool_bit().ok_or(CodecError::MalformedEncodedData)?;
                    let next = match &node.node_data {
                        NodeData::Kids(left, right) => {
                            if bit {
                                right.as_ref()
                            } else {
                                left.as_ref()
                            }
                        }
                        // The walk restarts at the root after each leaf, and
                        // the root of a full tree is internal.
                        NodeData::Leaf(_) => return Err(CodecError::MalformedEncodedData),
                    };
                    match next.node_data {
                        NodeData::Leaf(symbol) => {
                            out.push(symbol);
                            node = root;
                        }
                        NodeData::Kids(..) => node = next,
                    }
                }
                // All bits consumed: the walk must be between codes.
                if !std::ptr::eq(node, root) {
                    return Err(CodecError::MalformedEncodedData);
                }
                Ok(out)
            }
        }
    }
}
