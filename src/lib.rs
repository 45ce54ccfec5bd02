//! Canonical Huffman prefix-code codec with exact bit-level packing.
//!
//! Builds an optimal variable-length binary code from the symbol frequencies
//! of a source buffer, then encodes and decodes byte data against that code.
//! The packed payload travels with an exact bit count; the buffer alone is
//! not a self-describing format, and no on-disk or wire format is defined
//! here. A system embedding this codec must define its own header carrying
//! the symbol-to-code mapping and the bit count.
//!
//! Basic usage:
//!
//! ```
//! use huffzip::Codec;
//!
//! let data = b"AAAAAAAAAAAAABBBBBBCCCDDEEF";
//! let codec = Codec::build(data);
//! let packed = codec.encode(data).unwrap();
//! assert_eq!(codec.decode(&packed).unwrap(), data);
//! assert!(codec.total_bits() < data.len() as u64 * 8);
//! ```

pub mod bitstream;
pub mod huffman;
pub mod tools;

pub use huffman::codec::{Codec, CodecError};
