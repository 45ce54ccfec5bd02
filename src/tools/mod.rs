//! The tools module provides the helpers around the codec core.
//!
//! The tools are:
//! - cli: Command line interface for the analyzer binary.
//! - freq_count: Frequency count over a byte buffer.

pub mod cli;
pub mod freq_count;
