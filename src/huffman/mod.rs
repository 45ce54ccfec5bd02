//! The huffman module builds prefix codes and drives encoding and decoding.
//!
//! A codec is built once from a source buffer: a frequency count feeds the
//! greedy tree construction, and a single traversal of the tree yields the
//! code table plus the exact payload size in bits. The tree and table are
//! immutable afterward and exist only for that encode/decode session.
//!
//! Ties between equal-weight nodes are broken by a fixed secondary key
//! (symbol value for leaves, creation order for internal nodes), so the same
//! frequency distribution always produces the same codes. This matters for
//! testing: suites can assert exact code tables, not just round trips.

pub mod code_table;
pub mod codec;
pub mod tree;
