//! The bitstream module is the bit-level I/O layer for the codec.
//!
//! Prefix codes rarely land on byte boundaries, so the packer keeps a bit
//! queue and drains whole bytes into the output buffer, MSB first. The
//! reader walks a packed slice one bit at a time in the same order. Neither
//! side knows anything about codes or trees; the codec owns the bit budget
//! and the padding rules.

pub mod bitpacker;
pub mod bitreader;
