//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use simplelog::{Config, TermLogger, TerminalMode};

use huffzip::tools::cli::HzOpts;
use huffzip::Codec;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// The classic skewed-frequency demo input.
const SAMPLE: &[u8] = b"AAAAAAAAAAAAABBBBBBCCCDDEEF";

fn main() -> ExitCode {
    let opts = HzOpts::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        opts.log_level(),
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let mut ok = true;

    if opts.sample || opts.files.is_empty() {
        ok &= analyze("built-in sample", SAMPLE);
    }

    for name in &opts.files {
        match fs::read(name) {
            Ok(data) => ok &= analyze(name, &data),
            Err(e) => {
                error!("Can't read {}: {}", name, e);
                ok = false;
            }
        }
    }

    if ok {
        info!("Done.\n");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Build a codec over `data`, encode, decode, verify the round trip, and
/// report the bit accounting. Returns false on any failure.
fn analyze(name: &str, data: &[u8]) -> bool {
    let codec = Codec::build(data);

    let encoded = match codec.encode(data) {
        Ok(encoded) => encoded,
        Err(e) => {
            error!("Encoding {} failed: {}", name, e);
            return false;
        }
    };

    let decoded = match codec.decode(&encoded) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!("Decoding {} failed: {}", name, e);
            return false;
        }
    };

    if decoded != data {
        error!("Round trip mismatch for {}.", name);
        return false;
    }

    let original_bits = data.len() as u64 * 8;
    info!(
        "{}: {} bytes in, {} bits ({} packed bytes) out. Round trip verified.",
        name,
        data.len(),
        codec.total_bits(),
        encoded.len()
    );
    if codec.total_bits() > 0 {
        info!(
            "  compression ratio: {:.3}",
            original_bits as f64 / codec.total_bits() as f64
        );
        if codec.total_bits() >= original_bits {
            warn!("No size reduction for {}.", name);
        }
    }
    true
}
