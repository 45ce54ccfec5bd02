use clap::Parser;
use log::LevelFilter;

/// Command line options for the analyzer binary. The tool measures how well
/// a per-file Huffman code would compress each input and verifies the
/// round trip in memory; it never writes encoded output.
#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "Huffman compressibility analyzer",
    long_about = "Builds a Huffman prefix code per input file, encodes and \
decodes the data in memory, verifies the round trip, and reports the exact \
encoded size in bits. No compressed output is written; the code table only \
exists for the lifetime of each analysis."
)]
pub struct HzOpts {
    /// Files to analyze
    #[clap()]
    pub files: Vec<String>,

    /// Analyze the built-in sample text (default when no files are given)
    #[clap(long)]
    pub sample: bool,

    /// Suppress reporting, show errors only
    #[clap(short, long)]
    pub quiet: bool,

    /// More diagnostics (-v debug, -vv trace with a full code table dump)
    #[clap(short, parse(from_occurrences))]
    pub verbose: u64,
}

impl HzOpts {
    /// Map the quiet/verbose flags onto a log level. Results report at info.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
